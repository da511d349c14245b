//! Per-compilation resource state.

use rest_ir::{PropertyId, TypeId};
use rest_types::{Program, TypeGraphError};

use crate::{
    PathParameterMarker, PathParameters, ParentResourceGraph, ResourceKey, ResourceKeyRegistry,
};

/// Resource state for one compilation unit.
///
/// Created alongside a [`Program`] and dropped with it. Contexts never share
/// state, so independent programs can be processed side by side.
#[derive(Clone, Debug, Default)]
pub struct ResourceContext<M = PathParameters> {
    pub(crate) keys: ResourceKeyRegistry,
    pub(crate) parents: ParentResourceGraph,
    pub(crate) marker: M,
}

impl ResourceContext {
    /// Create a context with the default path parameter marker.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: PathParameterMarker> ResourceContext<M> {
    /// Create a context with a host-provided path parameter marker.
    pub fn with_marker(marker: M) -> Self {
        ResourceContext {
            keys: ResourceKeyRegistry::new(),
            parents: ParentResourceGraph::new(),
            marker,
        }
    }

    pub fn keys(&self) -> &ResourceKeyRegistry {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut ResourceKeyRegistry {
        &mut self.keys
    }

    pub fn parents(&self) -> &ParentResourceGraph {
        &self.parents
    }

    pub fn parents_mut(&mut self) -> &mut ParentResourceGraph {
        &mut self.parents
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }

    pub fn marker_mut(&mut self) -> &mut M {
        &mut self.marker
    }

    /// See [`ResourceKeyRegistry::binding`].
    pub fn binding(
        &mut self,
        program: &mut Program,
        resource_type: TypeId,
    ) -> Result<Option<ResourceKey>, TypeGraphError> {
        self.keys.binding(program, resource_type)
    }

    /// See [`ResourceKeyRegistry::set_binding`].
    pub fn set_binding(
        &mut self,
        resource_type: TypeId,
        key_property: PropertyId,
    ) -> ResourceKey {
        self.keys.set_binding(resource_type, key_property)
    }

    /// See [`ParentResourceGraph::set_parent`].
    pub fn set_parent(&mut self, resource: TypeId, parent: TypeId) -> Option<TypeId> {
        self.parents.set_parent(resource, parent)
    }

    /// See [`ParentResourceGraph::parent`].
    pub fn parent(&self, resource: TypeId) -> Option<TypeId> {
        self.parents.parent(resource)
    }
}
