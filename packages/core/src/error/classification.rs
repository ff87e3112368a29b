use super::types::{Error, ErrorKind};

impl Error {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ProtocolViolation { .. } | Error::UnexpectedToken { .. } => ErrorKind::Protocol,
            Error::EndOfInput | Error::Truncated { .. } => ErrorKind::Truncated,
            Error::UnsupportedInputType { .. } => ErrorKind::UnsupportedInput,
            Error::NotImplemented { .. } => ErrorKind::NotImplemented,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Io(_) | Error::Json(_) | Error::Backend(_) => ErrorKind::Backend,
        }
    }

    /// Returns true if the sequence was exhausted before an object started.
    ///
    /// Callers reading successive objects use this to tell a clean end of
    /// input apart from a real failure.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Error::EndOfInput)
    }

    /// Returns true for structural violations of the token stream.
    #[must_use]
    pub fn is_protocol_violation(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }

    /// Returns true if input ended with an object still open.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::Truncated { .. })
    }
}
