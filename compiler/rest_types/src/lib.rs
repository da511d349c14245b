//! Host-side type graph for the resource key engine.
//!
//! The engine runs inside a type-checking compiler; this crate is the slice of
//! that compiler it talks to:
//!
//! - `TypeGraph`: arena of models, scalars and properties addressed by
//!   `TypeId` / `PropertyId`
//! - `Program`: one compilation unit (interner, graph, diagnostic sink,
//!   `@key` state)
//! - `TypeGraph::clone_property`: the structural clone primitive
//! - `Program::validate_model_target`: decorator target validation
//!
//! # Design Decisions
//!
//! - Flat arenas with `Copy` ids instead of shared pointers
//! - Model properties are an `IndexMap` so declaration order is observable
//! - Invariant violations are `TypeGraphError` values, never diagnostics

mod decorator;
mod error;
mod graph;
mod options;
mod program;

pub use decorator::{DecoratorApplication, DecoratorArg, KEY_DECORATOR};
pub use error::TypeGraphError;
pub use graph::{ModelDef, PropertyDef, ScalarDef, TemplateInstance, TypeGraph, TypeKind};
pub use options::ProgramOptions;
pub use program::{InsertedProperty, Program};
