use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crossbeam_queue::ArrayQueue;

/// Bounded free-list of fixed-size relay buffers.
///
/// `alloc` never blocks: a miss falls back to a fresh allocation, and
/// dropping a [`PooledBuf`] while the queue is full simply discards it. The
/// pool is a best-effort cache against allocation churn, not a limiter.
///
/// Cloning yields another handle to the same pool.
#[derive(Clone)]
pub struct BufferPool {
    queue: Arc<ArrayQueue<Vec<u8>>>,
    buf_size: usize,
}

impl BufferPool {
    pub fn new(capacity: usize, buf_size: usize) -> Self {
        Self {
            queue: Arc::new(ArrayQueue::new(capacity)),
            buf_size,
        }
    }
    /// Reused buffers are not zeroed; callers must only trust the first `n`
    /// bytes reported by their most recent read.
    pub fn alloc(&self) -> PooledBuf {
        let data = match self.queue.pop() {
            Some(data) => data,
            None => vec![0; self.buf_size],
        };
        PooledBuf {
            queue: self.queue.clone(),
            data: std::mem::ManuallyDrop::new(data),
        }
    }
    pub fn buf_size(&self) -> usize {
        self.buf_size
    }
    /// Number of idle buffers currently cached.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// A buffer on loan from a [`BufferPool`]; returned on drop.
pub struct PooledBuf {
    queue: Arc<ArrayQueue<Vec<u8>>>,
    data: std::mem::ManuallyDrop<Vec<u8>>,
}

impl Drop for PooledBuf {
    fn drop(&mut self) {
        let data = unsafe { std::mem::ManuallyDrop::take(&mut self.data) };
        let _ = self.queue.push(data);
    }
}

impl Deref for PooledBuf {
    type Target = [u8];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for PooledBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
