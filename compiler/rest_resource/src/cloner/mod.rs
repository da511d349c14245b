//! Root-first key chain cloning.
//!
//! `copy_resource_key_parameters` walks a resource's parent links up to the
//! root, then on the way back down clones each level's key property onto the
//! target model. Ancestor keys therefore land before descendant keys, the
//! order of a nested route such as `/orgs/{orgId}/teams/{teamId}`.

use rest_diagnostic::cyclic_parent_resource;
use rest_ir::{Name, PropertyId, TypeId};
use rest_stack::ensure_sufficient_stack;
use rest_types::{DecoratorApplication, Program, PropertyDef, TypeGraph, TypeGraphError};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::{PathParameterMarker, ResourceContext};

/// Which levels of the chain contribute keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyFilter {
    /// Every ancestor's key and the resource's own key.
    #[default]
    All,
    /// Ancestor keys only.
    ParentOnly,
}

impl KeyFilter {
    /// Map the decorator's optional filter argument; `"parent"` selects
    /// [`KeyFilter::ParentOnly`], anything else [`KeyFilter::All`].
    pub fn from_argument(filter: Option<&str>) -> Self {
        match filter {
            Some("parent") => KeyFilter::ParentOnly,
            _ => KeyFilter::All,
        }
    }
}

/// Builds a fully-formed key parameter from an immutable source property.
#[derive(Clone, Debug)]
pub struct KeyPropertyBuilder {
    def: PropertyDef,
}

impl KeyPropertyBuilder {
    /// Start from a structural clone of `source`.
    pub fn from_source(graph: &TypeGraph, source: PropertyId) -> Result<Self, TypeGraphError> {
        Ok(KeyPropertyBuilder {
            def: graph.clone_property(source)?,
        })
    }

    /// Rename the clone.
    #[must_use]
    pub fn named(mut self, name: Name) -> Self {
        self.def.name = name;
        self
    }

    /// Attach a decorator application, replacing one of the same decorator.
    #[must_use]
    pub fn with_decorator(mut self, application: DecoratorApplication) -> Self {
        self.def
            .decorators
            .retain(|d| !d.is(application.decorator));
        self.def.decorators.push(application);
        self
    }

    pub fn build(self) -> PropertyDef {
        self.def
    }
}

/// One key chain walk onto one target model.
pub struct KeyPropertyCloner<'a, M> {
    cx: &'a mut ResourceContext<M>,
    program: &'a mut Program,
    target: TypeId,
    visited: FxHashSet<TypeId>,
    /// Resources entered so far, outermost first.
    path: SmallVec<[TypeId; 8]>,
}

impl<'a, M: PathParameterMarker> KeyPropertyCloner<'a, M> {
    /// Clone the key chain of `resource_type` onto `target`.
    ///
    /// Each clone is inserted under its declared key name, replacing any
    /// existing property of that name, so rerunning is idempotent. A parent
    /// cycle is reported once as `cyclic-parent-resource` and ends the ascent;
    /// the resources visited before it still contribute their keys.
    ///
    /// `Err` only for ids foreign to the program's graph.
    #[tracing::instrument(level = "debug", skip(cx, program))]
    pub fn copy_resource_key_parameters(
        cx: &'a mut ResourceContext<M>,
        program: &'a mut Program,
        target: TypeId,
        resource_type: TypeId,
        filter: KeyFilter,
    ) -> Result<(), TypeGraphError> {
        let mut cloner = KeyPropertyCloner {
            cx,
            program,
            target,
            visited: FxHashSet::default(),
            path: SmallVec::new(),
        };

        match filter {
            KeyFilter::All => cloner.clone_chain(resource_type),
            KeyFilter::ParentOnly => {
                cloner.visited.insert(resource_type);
                cloner.path.push(resource_type);
                match cloner.cx.parent(resource_type) {
                    Some(parent) => cloner.clone_chain(parent),
                    None => Ok(()),
                }
            }
        }
    }

    fn clone_chain(&mut self, resource_type: TypeId) -> Result<(), TypeGraphError> {
        if !self.visited.insert(resource_type) {
            self.report_cycle(resource_type)?;
            return Ok(());
        }
        self.path.push(resource_type);

        if let Some(parent) = self.cx.parent(resource_type) {
            ensure_sufficient_stack(|| self.clone_chain(parent))?;
        }
        self.clone_key(resource_type)
    }

    fn clone_key(&mut self, resource_type: TypeId) -> Result<(), TypeGraphError> {
        let Some(binding) = self.cx.keys.binding(self.program, resource_type)? else {
            tracing::trace!(resource = self.program.type_name(resource_type), "no own key");
            return Ok(());
        };

        let source = binding.key_property;
        let key_name = match self.program.key_name(source) {
            Some(name) => name,
            None => self.program.graph().property(source)?.name,
        };
        let clone = KeyPropertyBuilder::from_source(self.program.graph(), source)?
            .named(key_name)
            .with_decorator(self.cx.marker.application())
            .build();

        let inserted = self.program.insert_property(self.target, clone)?;
        if let Some(replaced) = inserted.replaced {
            self.cx.marker.unmark(replaced);
        }
        self.cx.marker.mark(inserted.id, key_name);
        tracing::debug!(
            resource = self.program.type_name(resource_type),
            key = self.program.name_str(key_name),
            id = ?inserted.id,
            replaced = ?inserted.replaced,
            "cloned key parameter"
        );
        Ok(())
    }

    fn report_cycle(&mut self, resource_type: TypeId) -> Result<(), TypeGraphError> {
        let start = self
            .path
            .iter()
            .position(|&t| t == resource_type)
            .unwrap_or_default();
        let names: Vec<&str> = self.path[start..]
            .iter()
            .chain(std::iter::once(&resource_type))
            .map(|&t| self.program.type_name(t))
            .collect();
        let resource_name = self.program.type_name(resource_type);
        let span = self.program.graph().kind(resource_type)?.span();

        let diagnostic = cyclic_parent_resource(resource_type, span, resource_name, &names);
        self.program.report(diagnostic);
        Ok(())
    }
}
