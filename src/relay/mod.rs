mod datagram;
mod stream;

use std::io;
use std::time::Duration;

use crate::buffer::BufferPool;
use crate::config::RelayConfig;

/// Shuttles bytes or datagrams between already-established endpoints.
///
/// A `Relayer` owns the shared [`BufferPool`] and the configured idle
/// deadlines; the relay loops themselves live in [`relay_stream`],
/// [`relay_datagrams_echo`] and [`relay_datagrams_with_header`]. Each loop is
/// meant to run on its own task; a full-duplex stream session is two
/// `relay_stream` tasks sharing one endpoint pair, with either task's close
/// of the shared endpoint unblocking the other.
///
/// [`relay_stream`]: Relayer::relay_stream
/// [`relay_datagrams_echo`]: Relayer::relay_datagrams_echo
/// [`relay_datagrams_with_header`]: Relayer::relay_datagrams_with_header
#[derive(Clone)]
pub struct Relayer {
    pool: BufferPool,
    stream_idle_time: Duration,
    datagram_idle_time: Duration,
}

impl Relayer {
    pub fn new(config: RelayConfig) -> io::Result<Relayer> {
        config.check()?;
        Ok(Relayer {
            pool: BufferPool::new(config.pool_capacity, config.buf_size),
            stream_idle_time: config.stream_idle_time,
            datagram_idle_time: config.datagram_idle_time,
        })
    }
    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }
    pub fn stream_idle_time(&self) -> Duration {
        self.stream_idle_time
    }
    pub fn datagram_idle_time(&self) -> Duration {
        self.datagram_idle_time
    }
}
