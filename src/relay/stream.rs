use crate::endpoint::StreamEndpoint;
use crate::error::RelayError;
use crate::relay::Relayer;

impl Relayer {
    /// Copies bytes from `src` to `dst` until a terminal condition, then
    /// closes `dst` exactly once.
    ///
    /// The read deadline is re-armed every iteration, so bursty but
    /// long-lived connections stay open while truly idle ones are reclaimed
    /// within one idle window. There are no retries: a relay half is
    /// disposable, and closing `dst` is what unblocks the task relaying the
    /// opposite direction over the same endpoint pair.
    pub async fn relay_stream(&self, src: &dyn StreamEndpoint, dst: &dyn StreamEndpoint) {
        let mut buf = self.pool.alloc();
        loop {
            let n = match tokio::time::timeout(self.stream_idle_time, src.read(&mut buf)).await {
                Ok(Ok(0)) => break,
                Ok(Ok(n)) => n,
                Ok(Err(e)) => {
                    match RelayError::from_io(&e) {
                        Some(RelayError::PayloadTooLarge) | Some(RelayError::IntegrityFailure) => {
                            log::debug!("stream relay read: {e:?}")
                        }
                        // peer-closed or concurrent close, expected shutdown
                        _ => {}
                    }
                    break;
                }
                Err(_) => {
                    log::debug!("stream relay idle for {:?}, closing", self.stream_idle_time);
                    break;
                }
            };
            if let Err(e) = dst.write_all(&buf[..n]).await {
                log::debug!("stream relay write: {e:?}");
                break;
            }
        }
        let _ = dst.close().await;
    }
}
