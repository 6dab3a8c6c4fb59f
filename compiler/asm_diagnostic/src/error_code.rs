use std::fmt;

/// Error codes for analysis diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Line structure (labels)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Label candidate without a terminating colon
    E1001,
    /// Tokens following a label declaration on the same line
    E1002,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
        }
    }

    /// One-line description, used as the diagnostic message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "missing colon for label",
            ErrorCode::E1002 => "unexpected content after label",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
