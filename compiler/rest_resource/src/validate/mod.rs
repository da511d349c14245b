//! Shape check for `@copyResourceKeyParameters` targets.

use rest_diagnostic::not_key_type;
use rest_ir::{Target, TypeId};
use rest_types::{Program, TypeGraphError};

/// Name of the key copy decorator, as shown in diagnostics.
pub const COPY_RESOURCE_KEY_PARAMETERS: &str = "@copyResourceKeyParameters";

/// Why an entity cannot receive copied key parameters.
///
/// `InvalidTarget` and `NotKeyType` have already been reported as diagnostics
/// when returned; `Graph` is a host invariant violation and has not.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyTargetError {
    #[error("{COPY_RESOURCE_KEY_PARAMETERS} must be applied to a model, found {found}")]
    InvalidTarget { found: &'static str },
    #[error("{COPY_RESOURCE_KEY_PARAMETERS} target is not an instantiation over exactly one model")]
    NotKeyType,
    #[error(transparent)]
    Graph(#[from] TypeGraphError),
}

impl KeyTargetError {
    /// Check if this error was reported to the user as a diagnostic.
    pub fn is_reported(&self) -> bool {
        !matches!(self, KeyTargetError::Graph(_))
    }
}

/// Check that `entity` is a model instantiated over exactly one model and
/// return that model, the resource type whose keys are copied.
///
/// Reports `invalid-target` or `not-key-type` on failure. Nothing is mutated
/// apart from the diagnostic sink.
pub fn validate_key_copy_target(
    program: &mut Program,
    entity: TypeId,
) -> Result<TypeId, KeyTargetError> {
    let found = program.target_kind_name(Target::Type(entity))?;
    if !program.validate_model_target(entity, COPY_RESOURCE_KEY_PARAMETERS)? {
        return Err(KeyTargetError::InvalidTarget { found });
    }

    let model = program.graph().model(entity)?;
    let span = model.span;
    let argument = match model.template_args() {
        [arg] => Some(*arg),
        _ => None,
    };

    match argument {
        Some(resource_type) if program.graph().is_model(resource_type) => Ok(resource_type),
        _ => {
            program.report(not_key_type(entity, span));
            Err(KeyTargetError::NotKeyType)
        }
    }
}
