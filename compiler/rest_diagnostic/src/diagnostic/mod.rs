use std::fmt;

use rest_ir::{Span, Target};

use crate::ErrorCode;

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic about one entity of the type graph.
///
/// `target` names the entity (the offending property, the decorated model);
/// `data` carries the structured values a renderer substitutes into its own
/// message templates, in insertion order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Entity the diagnostic is reported on.
    pub target: Option<Target>,
    /// Labeled spans showing where the error occurred.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Structured message arguments.
    pub data: Vec<(&'static str, String)>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            target: None,
            labels: Vec::new(),
            notes: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the entity this diagnostic is reported on.
    pub fn with_target(mut self, target: impl Into<Target>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Add a primary label at the error location.
    ///
    /// Synthesized entities have no source location; a dummy span adds nothing.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        if !span.is_dummy() {
            self.labels.push(Label::primary(span, message));
        }
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        if !span.is_dummy() {
            self.labels.push(Label::secondary(span, message));
        }
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a structured message argument.
    pub fn with_data(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.data.push((key, value.into()));
        self
    }

    /// Look up a structured message argument by key.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the primary span (first primary label's span).
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error [{}] {}: {}",
            self.code,
            self.code.slug(),
            self.message
        )?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {:?}: {}", marker, label.span, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

/// Configuration for an invalid decorator target diagnostic.
///
/// Used by `invalid_target`; the config struct keeps the five arguments named.
#[derive(Clone, Debug)]
pub struct InvalidTargetConfig<'a> {
    /// The entity the decorator was applied to.
    pub target: Target,
    /// Declaration location of the entity.
    pub span: Span,
    /// Decorator name including the `@`.
    pub decorator: &'a str,
    /// Expected entity kind (e.g., "Model").
    pub expected: &'a str,
    /// Actual entity kind.
    pub found: &'a str,
}

impl<'a> InvalidTargetConfig<'a> {
    /// Create a new invalid target configuration.
    pub fn new(
        target: impl Into<Target>,
        span: Span,
        decorator: &'a str,
        expected: &'a str,
        found: &'a str,
    ) -> Self {
        InvalidTargetConfig {
            target: target.into(),
            span,
            decorator,
            expected,
            found,
        }
    }

    /// Convert this configuration into a diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E1001)
            .with_message(format!(
                "cannot apply {} to {}: expected {}",
                self.decorator, self.found, self.expected
            ))
            .with_target(self.target)
            .with_label(self.span, format!("expected {}", self.expected))
            .with_data("decorator", self.decorator)
            .with_data("expected", self.expected)
            .with_data("found", self.found)
    }
}

/// Create an "invalid decorator target" diagnostic.
///
/// For more explicit parameter naming, use `InvalidTargetConfig::new(...).into_diagnostic()`.
pub fn invalid_target(
    target: impl Into<Target>,
    span: Span,
    decorator: &str,
    expected: &str,
    found: &str,
) -> Diagnostic {
    InvalidTargetConfig::new(target, span, decorator, expected, found).into_diagnostic()
}

/// Create an "invalid decorator argument" diagnostic.
pub fn invalid_argument(
    target: impl Into<Target>,
    span: Span,
    decorator: &str,
    detail: &str,
) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("invalid arguments for {decorator}: {detail}"))
        .with_target(target)
        .with_label(span, detail.to_owned())
        .with_data("decorator", decorator)
        .with_data("detail", detail)
}

/// Create a "duplicate key" diagnostic, reported on the second and later keys.
///
/// `first_span` is the declaration of the key that stays bound.
pub fn duplicate_key(
    property: rest_ir::PropertyId,
    span: Span,
    resource_name: &str,
    first_key: &str,
    first_span: Span,
) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!(
            "more than one key found on model type `{resource_name}`"
        ))
        .with_target(property)
        .with_label(span, "duplicate key property")
        .with_secondary_label(first_span, format!("`{first_key}` is the key"))
        .with_note(format!("`{first_key}` is already the key of `{resource_name}`"))
        .with_data("resourceName", resource_name)
}

/// Create a "not key type" diagnostic for a malformed key parameter model.
pub fn not_key_type(entity: rest_ir::TypeId, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message("cannot copy keys from a non-key type (KeysOf<T> or ParentKeysOf<T> only)")
        .with_target(entity)
        .with_label(span, "expected an instantiation over exactly one model")
}

/// Create a "cyclic parent resource" diagnostic.
///
/// `cycle` lists resource names from the revisited type back to itself.
pub fn cyclic_parent_resource(
    resource: rest_ir::TypeId,
    span: Span,
    resource_name: &str,
    cycle: &[&str],
) -> Diagnostic {
    let path = cycle.join(" -> ");
    Diagnostic::error(ErrorCode::E2003)
        .with_message(format!(
            "parent resource chain of `{resource_name}` loops back on itself"
        ))
        .with_target(resource)
        .with_label(span, "resource reached twice while collecting parent keys")
        .with_note(format!("cycle: {path}"))
        .with_data("resourceName", resource_name)
        .with_data("cycle", path)
}

/// Create an internal error diagnostic for hosts surfacing invariant violations.
#[cold]
pub fn internal_error(message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001)
        .with_message(message)
        .with_note("this is a bug in the compiler host, not in the input")
}
