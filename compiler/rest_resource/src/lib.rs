//! Resource key inheritance for REST resource models.
//!
//! A resource type may carry one `@key` property and may name a parent
//! resource with `@parentResource`. For a generated key parameter model such
//! as `KeysOf<Member>`, `@copyResourceKeyParameters` fills the model with the
//! keys of every ancestor, root first, followed by the resource's own key:
//!
//! ```text
//! Org { @key orgId }  <-  Team { @key teamId }  <-  Member { @key memberId }
//!
//! KeysOf<Member>        => { orgId, teamId, memberId }   // /orgs/{orgId}/teams/{teamId}/members/{memberId}
//! ParentKeysOf<Member>  => { orgId, teamId }
//! ```
//!
//! # Architecture
//!
//! ```text
//! decorators (parentResource, copyResourceKeyParameters, apply_decorator)
//!     └── validate_key_copy_target   (ValidationGate)
//!     └── KeyPropertyCloner          (root-first walk)
//!             ├── ParentResourceGraph   (resource -> parent)
//!             ├── ResourceKeyRegistry   (resource -> own key, cached)
//!             └── PathParameterMarker   (@path on every clone)
//! ```
//!
//! All state lives in a [`ResourceContext`] created per compilation unit and
//! passed alongside the host's [`Program`](rest_types::Program). User errors are
//! diagnostics in the program's sink; `Err` values are host invariant
//! violations only.

mod cloner;
mod context;
pub mod decorators;
mod marker;
mod parent;
mod registry;
mod validate;

pub use cloner::{KeyFilter, KeyPropertyBuilder, KeyPropertyCloner};
pub use context::ResourceContext;
pub use decorators::{apply_decorator, copy_resource_key_parameters, parent_resource, DecoratorError};
pub use marker::{PathParameterMarker, PathParameters, PATH_DECORATOR};
pub use parent::{Ancestors, ParentResourceGraph};
pub use registry::{ResourceKey, ResourceKeyRegistry};
pub use validate::{validate_key_copy_target, KeyTargetError, COPY_RESOURCE_KEY_PARAMETERS};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rest_resource=debug` or `RUST_LOG=rest_resource=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host that installed its own subscriber keeps it.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
