//! Diagnostic system for the resource key engine.
//!
//! Every user-facing problem (a second `@key` on a resource, a malformed
//! `@copyResourceKeyParameters` target, a parent chain that loops) becomes a
//! [`Diagnostic`] pushed into a [`DiagnosticQueue`]. Reporting never aborts
//! the compilation pass.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] can only be obtained from the queue, so a function
//! returning it proves an error was actually reported:
//!
//! ```text
//! queue.push(diagnostic);
//! let guarantee = queue.has_errors();
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{
    cyclic_parent_resource, duplicate_key, internal_error, invalid_argument, invalid_target,
    not_key_type, Diagnostic, InvalidTargetConfig, Label,
};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
