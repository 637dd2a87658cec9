use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::{Mutex, Notify};

use crate::endpoint::StreamEndpoint;
use crate::error::RelayError;

/// [`StreamEndpoint`] over a connected [`TcpStream`].
///
/// `close` latches, wakes any task blocked in `read`, and shuts down the
/// write half so the remote peer sees end-of-stream. Later reads and writes
/// fail with [`RelayError::Closed`].
pub struct TcpStreamEndpoint {
    read_half: Mutex<OwnedReadHalf>,
    write_half: Mutex<Option<OwnedWriteHalf>>,
    closed: AtomicBool,
    close_notify: Notify,
}

impl TcpStreamEndpoint {
    pub fn new(stream: TcpStream) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            read_half: Mutex::new(read_half),
            write_half: Mutex::new(Some(write_half)),
            closed: AtomicBool::new(false),
            close_notify: Notify::new(),
        }
    }
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

#[async_trait]
impl StreamEndpoint for TcpStreamEndpoint {
    async fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        // Register for the close wakeup before checking the flag, so a close
        // landing in between cannot be missed.
        let closed = self.close_notify.notified();
        if self.is_closed() {
            return Err(RelayError::Closed.into());
        }
        tokio::select! {
            rs = async { self.read_half.lock().await.read(buf).await } => rs,
            _ = closed => Err(RelayError::Closed.into()),
        }
    }

    async fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        match self.write_half.lock().await.as_mut() {
            Some(write_half) => write_half.write_all(buf).await,
            None => Err(RelayError::Closed.into()),
        }
    }

    async fn close(&self) -> io::Result<()> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.close_notify.notify_waiters();
            if let Some(mut write_half) = self.write_half.lock().await.take() {
                let _ = write_half.shutdown().await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::io::AsyncWriteExt;
    use tokio::net::{TcpListener, TcpStream};

    use super::*;

    async fn endpoint_pair() -> (TcpStreamEndpoint, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connect = tokio::spawn(async move { TcpStream::connect(addr).await.unwrap() });
        let (accepted, _) = listener.accept().await.unwrap();
        (TcpStreamEndpoint::new(accepted), connect.await.unwrap())
    }

    #[tokio::test]
    async fn read_sees_peer_data_then_eof() {
        let (endpoint, mut peer) = endpoint_pair().await;
        peer.write_all(b"ping").await.unwrap();
        peer.shutdown().await.unwrap();
        let mut buf = [0; 16];
        let n = endpoint.read(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"ping");
        assert_eq!(endpoint.read(&mut buf).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn close_is_idempotent_and_concurrent_safe() {
        let (endpoint, _peer) = endpoint_pair().await;
        let endpoint = Arc::new(endpoint);
        let other = endpoint.clone();
        let handle = tokio::spawn(async move { other.close().await });
        endpoint.close().await.unwrap();
        handle.await.unwrap().unwrap();
        endpoint.close().await.unwrap();
        assert!(endpoint.is_closed());
    }

    #[tokio::test]
    async fn close_unblocks_pending_read() {
        let (endpoint, _peer) = endpoint_pair().await;
        let endpoint = Arc::new(endpoint);
        let reader = endpoint.clone();
        let pending = tokio::spawn(async move {
            let mut buf = [0; 16];
            reader.read(&mut buf).await
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        endpoint.close().await.unwrap();
        let rs = tokio::time::timeout(Duration::from_secs(1), pending)
            .await
            .expect("read should unblock on close")
            .unwrap();
        assert!(rs.is_err());
    }

    #[tokio::test]
    async fn write_after_close_fails() {
        let (endpoint, _peer) = endpoint_pair().await;
        endpoint.close().await.unwrap();
        assert!(endpoint.write_all(b"late").await.is_err());
        let mut buf = [0; 4];
        assert!(endpoint.read(&mut buf).await.is_err());
    }
}
