//! RP1210 Lookup Error Types

use thiserror::Error;

/// Errors from the typed conversions in this crate.
///
/// `describe` never produces one of these; an unknown error code is a normal
/// result there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rp1210Error {
    /// No command is assigned to this value
    #[error("Unknown RP1210 command code 0x{0:04X}")]
    UnknownCommand(u16),

    /// No command has this symbolic name
    #[error("Unknown RP1210 command name: {0}")]
    UnknownCommandName(String),

    /// Text is not a decimal or 0x-prefixed hex u16
    #[error("Invalid code: {0}")]
    InvalidCode(String),
}
