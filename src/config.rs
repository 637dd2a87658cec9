use std::io;
use std::time::Duration;

pub(crate) const DEFAULT_BUF_SIZE: usize = 4096;
pub(crate) const DEFAULT_POOL_CAPACITY: usize = 2048;
pub(crate) const STREAM_IDLE_TIME: Duration = Duration::from_secs(300);
pub(crate) const DATAGRAM_IDLE_TIME: Duration = Duration::from_secs(120);

/// Configuration for a [`Relayer`](crate::relay::Relayer).
///
/// Idle times are per-iteration read deadlines, not session lifetimes: a
/// relay stays open as long as some data arrives within each window.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub buf_size: usize,
    pub pool_capacity: usize,
    pub stream_idle_time: Duration,
    pub datagram_idle_time: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            buf_size: DEFAULT_BUF_SIZE,
            pool_capacity: DEFAULT_POOL_CAPACITY,
            stream_idle_time: STREAM_IDLE_TIME,
            datagram_idle_time: DATAGRAM_IDLE_TIME,
        }
    }
}

impl RelayConfig {
    pub fn check(&self) -> io::Result<()> {
        if self.buf_size == 0 {
            return Err(io::Error::other("buf_size cannot be 0"));
        }
        if self.pool_capacity == 0 {
            return Err(io::Error::other("pool_capacity cannot be 0"));
        }
        if self.stream_idle_time.is_zero() || self.datagram_idle_time.is_zero() {
            return Err(io::Error::other("idle time cannot be 0"));
        }
        Ok(())
    }
    pub fn set_buf_size(mut self, buf_size: usize) -> Self {
        self.buf_size = buf_size;
        self
    }
    pub fn set_pool_capacity(mut self, pool_capacity: usize) -> Self {
        self.pool_capacity = pool_capacity;
        self
    }
    pub fn set_stream_idle_time(mut self, stream_idle_time: Duration) -> Self {
        self.stream_idle_time = stream_idle_time;
        self
    }
    pub fn set_datagram_idle_time(mut self, datagram_idle_time: Duration) -> Self {
        self.datagram_idle_time = datagram_idle_time;
        self
    }
}
