//! Resource type to key property bindings.
//!
//! A binding is computed on first request by scanning the resource type's own
//! properties in declaration order and is cached from then on. The first
//! key-flagged property wins; each further one is reported as `duplicate-key`
//! during that scan only.

use rest_diagnostic::duplicate_key;
use rest_ir::{PropertyId, TypeId};
use rest_types::{Program, TypeGraphError};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// The key property bound to a resource type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    pub resource_type: TypeId,
    pub key_property: PropertyId,
}

/// Cache of resource key bindings for one compilation unit.
#[derive(Clone, Debug, Default)]
pub struct ResourceKeyRegistry {
    keys: FxHashMap<TypeId, ResourceKey>,
}

impl ResourceKeyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key_property` as the key of `resource_type`.
    ///
    /// Overwrites any existing binding; used by the scan and to pre-seed keys.
    pub fn set_binding(&mut self, resource_type: TypeId, key_property: PropertyId) -> ResourceKey {
        let key = ResourceKey {
            resource_type,
            key_property,
        };
        self.keys.insert(resource_type, key);
        key
    }

    /// The cached binding, without scanning.
    #[inline]
    pub fn cached(&self, resource_type: TypeId) -> Option<ResourceKey> {
        self.keys.get(&resource_type).copied()
    }

    /// The key binding of `resource_type`, scanning its properties on a miss.
    ///
    /// Returns `Ok(None)` for a resource without its own key; that outcome is
    /// not cached. `Err` only if `resource_type` is not a model of the graph.
    pub fn binding(
        &mut self,
        program: &mut Program,
        resource_type: TypeId,
    ) -> Result<Option<ResourceKey>, TypeGraphError> {
        if let Some(key) = self.cached(resource_type) {
            tracing::trace!(?resource_type, "resource key cache hit");
            return Ok(Some(key));
        }

        let candidates: SmallVec<[PropertyId; 2]> = program
            .graph()
            .model(resource_type)?
            .property_ids()
            .filter(|p| program.is_key(*p))
            .collect();

        let Some((&first, duplicates)) = candidates.split_first() else {
            return Ok(None);
        };

        let key = self.set_binding(resource_type, first);
        tracing::debug!(
            resource = program.type_name(resource_type),
            ?first,
            duplicates = duplicates.len(),
            "bound resource key"
        );

        if !duplicates.is_empty() {
            let resource_name = program.type_name(resource_type).to_owned();
            let first_def = program.graph().property(first)?;
            let first_span = first_def.span;
            let first_name = program.name_str(first_def.name).to_owned();
            for &property in duplicates {
                let span = program.graph().property(property)?.span;
                program.report(duplicate_key(
                    property,
                    span,
                    &resource_name,
                    &first_name,
                    first_span,
                ));
            }
        }

        Ok(Some(key))
    }

    /// Number of cached bindings.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if no binding is cached.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
