use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::net::UdpSocket;
use tokio::sync::Notify;

use crate::endpoint::DatagramEndpoint;
use crate::error::RelayError;

/// [`DatagramEndpoint`] over a bound [`UdpSocket`].
///
/// UDP sockets have no wire-level close; `close` here latches the endpoint
/// and wakes any task blocked in `recv_from`. The socket itself is released
/// when the last handle drops.
pub struct UdpSocketEndpoint {
    socket: UdpSocket,
    closed: AtomicBool,
    close_notify: Notify,
}

impl UdpSocketEndpoint {
    pub fn new(socket: UdpSocket) -> Self {
        Self {
            socket,
            closed: AtomicBool::new(false),
            close_notify: Notify::new(),
        }
    }
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

#[async_trait]
impl DatagramEndpoint for UdpSocketEndpoint {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        let closed = self.close_notify.notified();
        if self.is_closed() {
            return Err(RelayError::Closed.into());
        }
        tokio::select! {
            rs = self.socket.recv_from(buf) => rs,
            _ = closed => Err(RelayError::Closed.into()),
        }
    }

    async fn send_to(&self, buf: &[u8], addr: SocketAddr) -> io::Result<usize> {
        if self.is_closed() {
            return Err(RelayError::Closed.into());
        }
        self.socket.send_to(buf, addr).await
    }

    async fn close(&self) -> io::Result<()> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.close_notify.notify_waiters();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    async fn bound() -> UdpSocketEndpoint {
        UdpSocketEndpoint::new(UdpSocket::bind("127.0.0.1:0").await.unwrap())
    }

    #[tokio::test]
    async fn datagrams_flow_between_endpoints() {
        let a = bound().await;
        let b = bound().await;
        let b_addr = b.local_addr().unwrap();
        a.send_to(b"probe", b_addr).await.unwrap();
        let mut buf = [0; 16];
        let (n, from) = b.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"probe");
        assert_eq!(from, a.local_addr().unwrap());
    }

    #[tokio::test]
    async fn close_unblocks_pending_recv() {
        let endpoint = Arc::new(bound().await);
        let receiver = endpoint.clone();
        let pending = tokio::spawn(async move {
            let mut buf = [0; 16];
            receiver.recv_from(&mut buf).await
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        endpoint.close().await.unwrap();
        let rs = tokio::time::timeout(Duration::from_secs(1), pending)
            .await
            .expect("recv should unblock on close")
            .unwrap();
        assert!(rs.is_err());
        assert!(endpoint
            .send_to(b"late", endpoint.local_addr().unwrap())
            .await
            .is_err());
    }
}
