use std::io;

use thiserror::Error;

/// Terminal conditions a relay distinguishes beyond plain I/O failure.
///
/// Endpoints and the decrypting/authenticating wrappers around them surface
/// these through `io::Error` payloads; [`RelayError::from_io`] recovers them
/// so the relay loops can log them distinctly while terminating identically.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("endpoint closed")]
    Closed,
    #[error("payload exceeds relay buffer")]
    PayloadTooLarge,
    #[error("payload integrity check failed")]
    IntegrityFailure,
}

impl From<RelayError> for io::Error {
    fn from(e: RelayError) -> io::Error {
        let kind = match e {
            RelayError::Closed => io::ErrorKind::ConnectionAborted,
            RelayError::PayloadTooLarge => io::ErrorKind::InvalidData,
            RelayError::IntegrityFailure => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}

impl RelayError {
    pub fn from_io(e: &io::Error) -> Option<&RelayError> {
        e.get_ref().and_then(|inner| inner.downcast_ref())
    }
}

/// Whether `e` reports process-wide (EMFILE) or system-wide (ENFILE) file
/// descriptor exhaustion. Such errors still terminate the relay, but they are
/// an operational signal rather than a per-connection fault.
#[cfg(unix)]
pub fn is_fd_limit(e: &io::Error) -> bool {
    matches!(e.raw_os_error(), Some(libc::EMFILE) | Some(libc::ENFILE))
}

#[cfg(not(unix))]
pub fn is_fd_limit(_e: &io::Error) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_survives_io_wrapping() {
        let io_err: io::Error = RelayError::IntegrityFailure.into();
        assert!(matches!(
            RelayError::from_io(&io_err),
            Some(RelayError::IntegrityFailure)
        ));
        let plain = io::Error::from(io::ErrorKind::ConnectionReset);
        assert!(RelayError::from_io(&plain).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn fd_limit_classification() {
        assert!(is_fd_limit(&io::Error::from_raw_os_error(libc::EMFILE)));
        assert!(is_fd_limit(&io::Error::from_raw_os_error(libc::ENFILE)));
        assert!(!is_fd_limit(&io::Error::from_raw_os_error(libc::ECONNRESET)));
    }
}
