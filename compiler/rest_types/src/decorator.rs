//! Recorded decorator applications.

use rest_ir::TypeId;

/// Name of the host's key decorator.
pub const KEY_DECORATOR: &str = "@key";

/// A decorator argument value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecoratorArg {
    Type(TypeId),
    String(String),
}

impl DecoratorArg {
    /// The string argument, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecoratorArg::String(s) => Some(s),
            DecoratorArg::Type(_) => None,
        }
    }
}

/// One decorator applied to a declaration, in source order.
///
/// Cloning a property copies its applications, so this is how a clone keeps
/// its `@key` and gains a `@path`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecoratorApplication {
    /// Decorator name including the `@`.
    pub decorator: &'static str,
    pub args: Vec<DecoratorArg>,
}

impl DecoratorApplication {
    /// An application with no arguments.
    pub fn bare(decorator: &'static str) -> Self {
        DecoratorApplication {
            decorator,
            args: Vec::new(),
        }
    }

    /// Check if this applies the named decorator.
    pub fn is(&self, decorator: &str) -> bool {
        self.decorator == decorator
    }
}
