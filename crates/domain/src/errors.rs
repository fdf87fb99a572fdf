use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Truncated packet: needed {needed} bytes, only {available} available")]
    TruncatedPacket { needed: usize, available: usize },

    #[error("Malformed name: {0}")]
    MalformedName(String),

    #[error("Unsupported opcode: {0}")]
    UnsupportedOpcode(u8),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),
}

impl DomainError {
    /// True for every parse failure that means "this datagram cannot be
    /// answered". Malformed names fall under the same drop policy as short
    /// buffers.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DomainError::TruncatedPacket { .. } | DomainError::MalformedName(_)
        )
    }
}
