//! Decorator entry points.
//!
//! The host's decorator dispatch calls these once per application, in source
//! order. User errors are reported as diagnostics and the call returns
//! `Ok(())`; the host keeps evaluating other decorators either way.

use rest_diagnostic::{invalid_argument, invalid_target};
use rest_ir::{Target, TypeId};
use rest_types::{DecoratorArg, Program, TypeGraphError, KEY_DECORATOR};

use crate::{
    validate_key_copy_target, KeyFilter, KeyPropertyCloner, KeyTargetError, PathParameterMarker,
    ResourceContext, COPY_RESOURCE_KEY_PARAMETERS,
};

/// Namespace the resource decorators are declared in.
pub const NAMESPACE: &str = "Cadl.Rest";

/// `NAMESPACE` relative to `Cadl`, as written under `using Cadl;`.
pub const SHORT_NAMESPACE: &str = "Rest";

/// Name of the parent link decorator, as shown in diagnostics.
pub const PARENT_RESOURCE: &str = "@parentResource";

/// Errors from [`apply_decorator`] that are not user diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecoratorError {
    #[error("unknown decorator `{0}`")]
    UnknownDecorator(String),
    #[error(transparent)]
    Graph(#[from] TypeGraphError),
}

/// `@parentResource(parentType)` on `target`.
///
/// Reports `invalid-target` on `parent_type` if it is not a model; otherwise
/// records the link, replacing an earlier one.
#[tracing::instrument(level = "debug", skip(cx, program))]
pub fn parent_resource<M: PathParameterMarker>(
    cx: &mut ResourceContext<M>,
    program: &mut Program,
    target: TypeId,
    parent_type: TypeId,
) -> Result<(), TypeGraphError> {
    if !program.validate_model_target(parent_type, PARENT_RESOURCE)? {
        return Ok(());
    }
    if let Some(previous) = cx.set_parent(target, parent_type) {
        if previous != parent_type {
            tracing::debug!(
                resource = program.type_name(target),
                previous = program.type_name(previous),
                parent = program.type_name(parent_type),
                "replaced parent resource"
            );
        }
    }
    Ok(())
}

/// `@copyResourceKeyParameters(filter?)` on a generated key model.
///
/// `filter == Some("parent")` copies ancestor keys only.
#[tracing::instrument(level = "debug", skip(cx, program))]
pub fn copy_resource_key_parameters<M: PathParameterMarker>(
    cx: &mut ResourceContext<M>,
    program: &mut Program,
    entity: TypeId,
    filter: Option<&str>,
) -> Result<(), TypeGraphError> {
    let resource_type = match validate_key_copy_target(program, entity) {
        Ok(resource_type) => resource_type,
        Err(KeyTargetError::Graph(err)) => return Err(err),
        Err(err) => {
            tracing::trace!(%err, "key copy target rejected");
            return Ok(());
        }
    };
    KeyPropertyCloner::copy_resource_key_parameters(
        cx,
        program,
        entity,
        resource_type,
        KeyFilter::from_argument(filter),
    )
}

/// Dispatch a decorator by name.
///
/// Accepts `parentResource` and `copyResourceKeyParameters`, bare or
/// qualified with [`NAMESPACE`] or [`SHORT_NAMESPACE`], plus the host's
/// `key`; a leading `@` is optional.
pub fn apply_decorator<M: PathParameterMarker>(
    cx: &mut ResourceContext<M>,
    program: &mut Program,
    name: &str,
    target: Target,
    args: &[DecoratorArg],
) -> Result<(), DecoratorError> {
    let unprefixed = name.strip_prefix('@').unwrap_or(name);
    let (namespace, decorator) = match unprefixed.rsplit_once('.') {
        Some((namespace, decorator)) => (Some(namespace), decorator),
        None => (None, unprefixed),
    };

    match (namespace, decorator) {
        (None | Some(NAMESPACE | SHORT_NAMESPACE), "parentResource") => {
            apply_parent_resource(cx, program, target, args)?;
        }
        (None | Some(NAMESPACE | SHORT_NAMESPACE), "copyResourceKeyParameters") => {
            apply_copy_resource_key_parameters(cx, program, target, args)?;
        }
        (None, "key") => apply_key(program, target, args)?,
        _ => return Err(DecoratorError::UnknownDecorator(name.to_owned())),
    }
    Ok(())
}

fn apply_parent_resource<M: PathParameterMarker>(
    cx: &mut ResourceContext<M>,
    program: &mut Program,
    target: Target,
    args: &[DecoratorArg],
) -> Result<(), TypeGraphError> {
    let Target::Type(resource) = target else {
        program.validate_model_target(target, PARENT_RESOURCE)?;
        return Ok(());
    };
    match args {
        [DecoratorArg::Type(parent)] => parent_resource(cx, program, resource, *parent),
        _ => report_arguments(program, target, PARENT_RESOURCE, "expected one type argument"),
    }
}

fn apply_copy_resource_key_parameters<M: PathParameterMarker>(
    cx: &mut ResourceContext<M>,
    program: &mut Program,
    target: Target,
    args: &[DecoratorArg],
) -> Result<(), TypeGraphError> {
    let Target::Type(entity) = target else {
        program.validate_model_target(target, COPY_RESOURCE_KEY_PARAMETERS)?;
        return Ok(());
    };
    match args {
        [] => copy_resource_key_parameters(cx, program, entity, None),
        [DecoratorArg::String(filter)] => {
            copy_resource_key_parameters(cx, program, entity, Some(filter.as_str()))
        }
        _ => report_arguments(
            program,
            target,
            COPY_RESOURCE_KEY_PARAMETERS,
            "expected an optional string filter",
        ),
    }
}

fn apply_key(
    program: &mut Program,
    target: Target,
    args: &[DecoratorArg],
) -> Result<(), TypeGraphError> {
    let Target::Property(property) = target else {
        let found = program.target_kind_name(target)?;
        let span = program.target_span(target)?;
        program.report(invalid_target(target, span, KEY_DECORATOR, "ModelProperty", found));
        return Ok(());
    };
    match args {
        [] => program.set_key(property, None),
        [DecoratorArg::String(key_name)] => {
            program.set_key(property, Some(key_name.as_str()))
        }
        _ => report_arguments(program, target, KEY_DECORATOR, "expected an optional string name"),
    }
}

fn report_arguments(
    program: &mut Program,
    target: Target,
    decorator: &str,
    detail: &str,
) -> Result<(), TypeGraphError> {
    let span = program.target_span(target)?;
    program.report(invalid_argument(target, span, decorator, detail));
    Ok(())
}
