//! Error codes for every diagnostic the engine can report.
//!
//! Each code has two spellings: the searchable `E####` form and the
//! kebab-case slug hosts use when matching diagnostics (`duplicate-key`).

use std::fmt;

/// Error codes for resource key diagnostics.
///
/// Format: E#### where first digit indicates the area:
/// - E1xxx: Decorator usage errors
/// - E2xxx: Resource hierarchy errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Decorator usage (E1xxx)
    /// Decorator applied to the wrong kind of entity
    E1001,
    /// Decorator argument has the wrong shape
    E1002,

    // Resource hierarchy (E2xxx)
    /// More than one `@key` property on a resource type
    E2001,
    /// Key parameter target is not a single-model instantiation
    E2002,
    /// Parent resource chain loops back on itself
    E2003,

    // Internal (E9xxx)
    /// Internal invariant violation surfaced by a host
    E9001,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E9001,
    ];

    /// The `E####` spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// The kebab-case spelling.
    pub fn slug(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "invalid-target",
            ErrorCode::E1002 => "invalid-argument",
            ErrorCode::E2001 => "duplicate-key",
            ErrorCode::E2002 => "not-key-type",
            ErrorCode::E2003 => "cyclic-parent-resource",
            ErrorCode::E9001 => "internal",
        }
    }

    /// Check if this is a decorator usage error (E1xxx range).
    pub fn is_decorator_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    /// Check if this is a resource hierarchy error (E2xxx range).
    pub fn is_resource_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse either spelling: `"E2001"` (case-insensitive) or `"duplicate-key"`.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s) || code.slug() == s)
            .copied()
            .ok_or(())
    }
}
