//! Internal invariant violations of the type graph.

use rest_ir::{PropertyId, TypeId};

/// An id did not resolve to the expected entity.
///
/// These indicate a bug in the host (an id from another graph, or a scalar
/// passed where the caller already checked for a model), not a problem in the
/// user's declarations, and are never reported as diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TypeGraphError {
    #[error("type {0:?} is not in the type graph")]
    UnknownType(TypeId),
    #[error("property {0:?} is not in the type graph")]
    UnknownProperty(PropertyId),
    #[error("type {0:?} is not a model")]
    NotAModel(TypeId),
}
