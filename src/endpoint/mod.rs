use std::io;
use std::net::SocketAddr;

use async_trait::async_trait;

mod tcp;
mod udp;

pub use tcp::TcpStreamEndpoint;
pub use udp::UdpSocketEndpoint;

/// An ordered, reliable byte channel as seen by one relay direction.
///
/// A duplex session is realized by two relay tasks sharing one pair of
/// endpoints, so every method takes `&self` and `close` must be idempotent
/// and safe to call while the paired task is blocked in `read` — closing is
/// the only cancellation signal the relay model has.
///
/// `read` returning `Ok(0)` means end-of-stream. Decrypting or
/// authenticating wrappers should surface their terminal diagnostics as
/// `io::Error`s wrapping [`RelayError`](crate::error::RelayError) so relays
/// can log them distinctly.
#[async_trait]
pub trait StreamEndpoint: Send + Sync {
    async fn read(&self, buf: &mut [u8]) -> io::Result<usize>;
    async fn write_all(&self, buf: &[u8]) -> io::Result<()>;
    async fn close(&self) -> io::Result<()>;
}

/// A connectionless, addressed channel as seen by one relay direction.
#[async_trait]
pub trait DatagramEndpoint: Send + Sync {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;
    async fn send_to(&self, buf: &[u8], addr: SocketAddr) -> io::Result<usize>;
    async fn close(&self) -> io::Result<()>;
}
