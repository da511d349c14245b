//! One compilation unit.
//!
//! `Program` owns everything the host compiler keeps per compilation: the
//! string interner, the type graph, the diagnostic sink and the `@key` state.
//! Nothing here is global; two programs never observe each other.

use rest_diagnostic::{invalid_target, Diagnostic, DiagnosticQueue, ErrorGuaranteed};
use rest_ir::{Name, PropertyId, Span, StringInterner, Target, TypeId};
use rustc_hash::FxHashMap;

use crate::{
    DecoratorApplication, DecoratorArg, ProgramOptions, PropertyDef, TypeGraph, TypeGraphError,
    KEY_DECORATOR,
};

/// Outcome of [`Program::insert_property`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InsertedProperty {
    /// The newly allocated property.
    pub id: PropertyId,
    /// The property previously stored under the same name, now detached.
    pub replaced: Option<PropertyId>,
}

/// A compilation unit of the host compiler.
#[derive(Debug, Default)]
pub struct Program {
    interner: StringInterner,
    graph: TypeGraph,
    diagnostics: DiagnosticQueue,
    /// Key-flagged properties and their declared key names.
    keys: FxHashMap<PropertyId, Name>,
    options: ProgramOptions,
}

impl Program {
    /// Create a program with default options.
    pub fn new() -> Self {
        Self::with_options(ProgramOptions::default())
    }

    /// Create a program with the given options.
    pub fn with_options(options: ProgramOptions) -> Self {
        Program {
            interner: StringInterner::new(),
            graph: TypeGraph::new(),
            diagnostics: DiagnosticQueue::with_config(options.diagnostics.clone()),
            keys: FxHashMap::default(),
            options,
        }
    }

    pub fn options(&self) -> &ProgramOptions {
        &self.options
    }

    // === Names ===

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Intern an identifier.
    pub fn intern(&mut self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Text of an interned name.
    pub fn name_str(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Declared name of a type, `"<unknown>"` for a foreign id.
    pub fn type_name(&self, id: TypeId) -> &str {
        self.graph
            .get(id)
            .map_or("<unknown>", |kind| self.interner.lookup(kind.name()))
    }

    // === Type graph ===

    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut TypeGraph {
        &mut self.graph
    }

    /// Declare an empty model named `name`.
    pub fn define_model(&mut self, name: &str) -> TypeId {
        let name = self.interner.intern(name);
        self.graph.add_model(name, Span::DUMMY)
    }

    /// Declare a scalar named `name`.
    pub fn define_scalar(&mut self, name: &str) -> TypeId {
        let name = self.interner.intern(name);
        self.graph.add_scalar(name, Span::DUMMY)
    }

    /// Instantiate `template` over `args` (`KeysOf<Member>`).
    pub fn instantiate(&mut self, template: &str, args: &[TypeId]) -> TypeId {
        let template = self.interner.intern(template);
        self.graph.instantiate(template, args.to_vec(), Span::DUMMY)
    }

    /// Declare a property at the end of `model`.
    pub fn add_property(
        &mut self,
        model: TypeId,
        name: &str,
        ty: TypeId,
    ) -> Result<PropertyId, TypeGraphError> {
        let name = self.interner.intern(name);
        self.graph.add_property(model, name, ty, Span::DUMMY)
    }

    /// Allocate `def` and insert it into `model` under its own name.
    ///
    /// Replaces an existing property of that name in place; the displaced
    /// property is detached and loses its key state. If `def` carries a
    /// `@key` application the key state is applied to the new property, the
    /// way the host re-runs decorators on a finished clone.
    pub fn insert_property(
        &mut self,
        model: TypeId,
        def: PropertyDef,
    ) -> Result<InsertedProperty, TypeGraphError> {
        self.graph.model(model)?;
        let name = def.name;
        let declared_key = def
            .decorators
            .iter()
            .find(|d| d.is(KEY_DECORATOR))
            .map(|d| {
                d.args
                    .first()
                    .and_then(DecoratorArg::as_str)
                    .map_or(name, |s| self.interner.intern(s))
            });

        let id = self.graph.alloc_property(def);
        let replaced = self.graph.set_property(model, name, id)?;
        if let Some(old) = replaced {
            self.keys.remove(&old);
        }
        if let Some(key_name) = declared_key {
            self.keys.insert(id, key_name);
        }
        tracing::trace!(?model, ?id, ?replaced, "inserted property");
        Ok(InsertedProperty { id, replaced })
    }

    // === @key ===

    /// Apply the host's `@key` decorator.
    ///
    /// `key_name` overrides the declared key name; it defaults to the
    /// property's own name.
    pub fn set_key(
        &mut self,
        property: PropertyId,
        key_name: Option<&str>,
    ) -> Result<(), TypeGraphError> {
        let own_name = self.graph.property(property)?.name;
        let declared = key_name.map_or(own_name, |s| self.interner.intern(s));
        let args = key_name
            .map(|s| vec![DecoratorArg::String(s.to_owned())])
            .unwrap_or_default();

        self.graph
            .property_mut(property)?
            .decorators
            .push(DecoratorApplication {
                decorator: KEY_DECORATOR,
                args,
            });
        self.keys.insert(property, declared);
        tracing::trace!(?property, key = self.interner.lookup(declared), "marked key");
        Ok(())
    }

    /// Check if a property is flagged as a key.
    pub fn is_key(&self, property: PropertyId) -> bool {
        self.keys.contains_key(&property)
    }

    /// Declared key name of a key-flagged property.
    pub fn key_name(&self, property: PropertyId) -> Option<Name> {
        self.keys.get(&property).copied()
    }

    // === Decorator targets ===

    /// Kind name of a decorator target (`"Model"`, `"Scalar"`, `"ModelProperty"`).
    pub fn target_kind_name(&self, target: Target) -> Result<&'static str, TypeGraphError> {
        match target {
            Target::Type(id) => Ok(self.graph.kind(id)?.kind_name()),
            Target::Property(id) => self.graph.property(id).map(|_| "ModelProperty"),
        }
    }

    /// Declaration location of a decorator target.
    pub fn target_span(&self, target: Target) -> Result<Span, TypeGraphError> {
        match target {
            Target::Type(id) => Ok(self.graph.kind(id)?.span()),
            Target::Property(id) => Ok(self.graph.property(id)?.span),
        }
    }

    /// Check that `target` is a model, reporting `invalid-target` otherwise.
    ///
    /// Returns `Ok(false)` after reporting; `Err` only for a foreign id.
    pub fn validate_model_target(
        &mut self,
        target: impl Into<Target>,
        decorator: &str,
    ) -> Result<bool, TypeGraphError> {
        let target = target.into();
        let found = self.target_kind_name(target)?;
        if found == "Model" {
            return Ok(true);
        }
        let span = self.target_span(target)?;
        self.report(invalid_target(target, span, decorator, "Model", found));
        Ok(false)
    }

    // === Diagnostics ===

    /// Report a diagnostic. Returns `false` if the sink filtered it.
    pub fn report(&mut self, diagnostic: Diagnostic) -> bool {
        tracing::debug!(code = %diagnostic.code, message = %diagnostic.message, "diagnostic");
        self.diagnostics.push(diagnostic)
    }

    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    /// Drain all diagnostics in emission order.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.flush()
    }

    /// Proof that at least one error was reported, if any was.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        self.diagnostics.has_errors()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "tests use expect to panic on unexpected state")]
mod tests;
