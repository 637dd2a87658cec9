use std::net::SocketAddr;

use bytes::BytesMut;

use crate::endpoint::DatagramEndpoint;
use crate::error::is_fd_limit;
use crate::registry::{AddressHeaderBuilder, RequestRegistry};
use crate::relay::Relayer;

impl Relayer {
    /// Forwards datagrams arriving on `read_close` verbatim to `write_addr`
    /// on `write` until a terminal condition, then closes `read_close`.
    ///
    /// Sends are best-effort; a failed send is neither retried nor fatal.
    /// File-descriptor exhaustion on receive is logged at warn since it
    /// signals systemic capacity pressure, not a single-session fault.
    pub async fn relay_datagrams_echo(
        &self,
        write: &dyn DatagramEndpoint,
        write_addr: SocketAddr,
        read_close: &dyn DatagramEndpoint,
    ) {
        let mut buf = vec![0; self.pool.buf_size()];
        loop {
            match tokio::time::timeout(self.datagram_idle_time, read_close.recv_from(&mut buf))
                .await
            {
                Ok(Ok((n, _))) => {
                    let _ = write.send_to(&buf[..n], write_addr).await;
                }
                Ok(Err(e)) => {
                    if is_fd_limit(&e) {
                        log::warn!("datagram relay recv, fd limit reached: {e:?}");
                    }
                    break;
                }
                Err(_) => break,
            }
        }
        log::debug!("datagram relay {write_addr} closed");
        let _ = read_close.close().await;
    }

    /// Like [`relay_datagrams_echo`](Relayer::relay_datagrams_echo), but
    /// prepends per-peer addressing context to every forwarded datagram.
    ///
    /// The relayed protocol does not repeat address metadata on every packet,
    /// so the receiver of the forwarded stream needs it restored: a registry
    /// hit replays the header observed earlier for that peer, a miss falls
    /// back to synthesizing one from the peer address.
    pub async fn relay_datagrams_with_header(
        &self,
        write: &dyn DatagramEndpoint,
        write_addr: SocketAddr,
        read_close: &dyn DatagramEndpoint,
        registry: &dyn RequestRegistry,
        header_builder: &dyn AddressHeaderBuilder,
    ) {
        let mut buf = self.pool.alloc();
        loop {
            let (n, peer) =
                match tokio::time::timeout(self.datagram_idle_time, read_close.recv_from(&mut buf))
                    .await
                {
                    Ok(Ok(rs)) => rs,
                    Ok(Err(e)) => {
                        if is_fd_limit(&e) {
                            log::warn!("datagram relay recv, fd limit reached: {e:?}");
                        }
                        break;
                    }
                    Err(_) => break,
                };
            let header = match registry.lookup(peer) {
                Some(record) => record,
                None => header_builder.build(peer),
            };
            let mut packet = BytesMut::with_capacity(header.len() + n);
            packet.extend_from_slice(&header);
            packet.extend_from_slice(&buf[..n]);
            let _ = write.send_to(&packet, write_addr).await;
        }
        log::debug!("datagram relay {write_addr} closed");
        let _ = read_close.close().await;
    }
}
