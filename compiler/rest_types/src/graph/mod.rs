//! Arena type graph: models, scalars and their properties.
//!
//! Types and properties live in two flat arenas. A model's property mapping
//! holds `PropertyId`s keyed by name in declaration order; the property values
//! themselves sit in the property arena so that a clone is a new arena entry
//! and never aliases its source.

use indexmap::IndexMap;
use rest_ir::{Name, PropertyId, Span, TypeId};

use crate::{DecoratorApplication, TypeGraphError};

/// A type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Model(ModelDef),
    Scalar(ScalarDef),
}

impl TypeKind {
    /// Kind name as used in decorator target diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeKind::Model(_) => "Model",
            TypeKind::Scalar(_) => "Scalar",
        }
    }

    /// Declared name of the type.
    pub fn name(&self) -> Name {
        match self {
            TypeKind::Model(model) => model.name,
            TypeKind::Scalar(scalar) => scalar.name,
        }
    }

    /// Declaration location.
    pub fn span(&self) -> Span {
        match self {
            TypeKind::Model(model) => model.span,
            TypeKind::Scalar(scalar) => scalar.span,
        }
    }

    /// The model definition, if this is a model.
    pub fn as_model(&self) -> Option<&ModelDef> {
        match self {
            TypeKind::Model(model) => Some(model),
            TypeKind::Scalar(_) => None,
        }
    }

    /// Check if this is a model.
    #[inline]
    pub fn is_model(&self) -> bool {
        matches!(self, TypeKind::Model(_))
    }
}

/// Template and arguments a model was instantiated from (`KeysOf<Member>`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TemplateInstance {
    pub template: Name,
    pub args: Vec<TypeId>,
}

/// A model declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelDef {
    pub name: Name,
    /// Own properties, keyed by in-model name, in declaration order.
    pub properties: IndexMap<Name, PropertyId>,
    /// Present only when this model is a template instantiation.
    pub template: Option<TemplateInstance>,
    pub span: Span,
}

impl ModelDef {
    /// Template arguments, empty for a plain declaration.
    pub fn template_args(&self) -> &[TypeId] {
        self.template.as_ref().map_or(&[], |t| t.args.as_slice())
    }

    /// Property ids in declaration order.
    pub fn property_ids(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.properties.values().copied()
    }
}

/// A scalar declaration (`string`, `int32`, `uuid`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScalarDef {
    pub name: Name,
    pub span: Span,
}

/// A model property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyDef {
    /// In-model name.
    pub name: Name,
    /// Property type.
    pub ty: TypeId,
    pub optional: bool,
    /// Owning model; `None` until the property is inserted into one.
    pub model: Option<TypeId>,
    pub decorators: Vec<DecoratorApplication>,
    /// The property this one was cloned from.
    pub source: Option<PropertyId>,
    pub span: Span,
}

impl PropertyDef {
    /// A fresh, unattached property with no decorators.
    pub fn new(name: Name, ty: TypeId, span: Span) -> Self {
        PropertyDef {
            name,
            ty,
            optional: false,
            model: None,
            decorators: Vec::new(),
            source: None,
            span,
        }
    }

    /// Check if the named decorator is applied.
    pub fn has_decorator(&self, decorator: &str) -> bool {
        self.decorators.iter().any(|d| d.is(decorator))
    }
}

/// Arena of types and properties for one compilation unit.
#[derive(Clone, Debug, Default)]
pub struct TypeGraph {
    types: Vec<TypeKind>,
    properties: Vec<PropertyDef>,
}

impl TypeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_type_id(&self) -> TypeId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "type count never exceeds u32::MAX"
        )]
        let raw = self.types.len() as u32;
        TypeId::from_raw(raw)
    }

    /// Declare an empty model.
    pub fn add_model(&mut self, name: Name, span: Span) -> TypeId {
        let id = self.next_type_id();
        self.types.push(TypeKind::Model(ModelDef {
            name,
            properties: IndexMap::new(),
            template: None,
            span,
        }));
        id
    }

    /// Declare a scalar.
    pub fn add_scalar(&mut self, name: Name, span: Span) -> TypeId {
        let id = self.next_type_id();
        self.types.push(TypeKind::Scalar(ScalarDef { name, span }));
        id
    }

    /// Create an empty model instantiated from `template` with `args`.
    pub fn instantiate(&mut self, template: Name, args: Vec<TypeId>, span: Span) -> TypeId {
        let id = self.add_model(template, span);
        if let Some(TypeKind::Model(model)) = self.types.last_mut() {
            model.template = Some(TemplateInstance { template, args });
        }
        id
    }

    /// Allocate an unattached property.
    pub fn alloc_property(&mut self, def: PropertyDef) -> PropertyId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "property count never exceeds u32::MAX"
        )]
        let id = PropertyId::from_raw(self.properties.len() as u32);
        self.properties.push(def);
        id
    }

    /// Insert `property` into `model` under `name`.
    ///
    /// An existing entry of the same name is replaced in place (it keeps its
    /// position in the mapping) and detached from `model`. Returns the
    /// replaced property.
    pub fn set_property(
        &mut self,
        model: TypeId,
        name: Name,
        property: PropertyId,
    ) -> Result<Option<PropertyId>, TypeGraphError> {
        self.model(model)?;
        self.property_mut(property)?.model = Some(model);
        let replaced = self.model_mut(model)?.properties.insert(name, property);
        if let Some(old) = replaced.filter(|&old| old != property) {
            self.property_mut(old)?.model = None;
        }
        Ok(replaced)
    }

    /// Declare a new property at the end of `model`.
    pub fn add_property(
        &mut self,
        model: TypeId,
        name: Name,
        ty: TypeId,
        span: Span,
    ) -> Result<PropertyId, TypeGraphError> {
        // Check the model before allocating so a bad id leaves no orphan.
        self.model(model)?;
        let id = self.alloc_property(PropertyDef::new(name, ty, span));
        self.set_property(model, name, id)?;
        Ok(id)
    }

    /// Structural clone of a property.
    ///
    /// The copy is unattached, records `property` as its source, and shares
    /// nothing mutable with the original.
    pub fn clone_property(&self, property: PropertyId) -> Result<PropertyDef, TypeGraphError> {
        let mut copy = self.property(property)?.clone();
        copy.model = None;
        copy.source = Some(property);
        Ok(copy)
    }

    // === Lookup Methods ===

    /// Look up a type.
    #[inline]
    pub fn get(&self, id: TypeId) -> Option<&TypeKind> {
        self.types.get(id.index())
    }

    /// Look up a type, failing on a foreign id.
    pub fn kind(&self, id: TypeId) -> Result<&TypeKind, TypeGraphError> {
        self.get(id).ok_or(TypeGraphError::UnknownType(id))
    }

    /// Look up a model, failing on a foreign id or a non-model.
    pub fn model(&self, id: TypeId) -> Result<&ModelDef, TypeGraphError> {
        self.kind(id)?
            .as_model()
            .ok_or(TypeGraphError::NotAModel(id))
    }

    fn model_mut(&mut self, id: TypeId) -> Result<&mut ModelDef, TypeGraphError> {
        match self.types.get_mut(id.index()) {
            Some(TypeKind::Model(model)) => Ok(model),
            Some(TypeKind::Scalar(_)) => Err(TypeGraphError::NotAModel(id)),
            None => Err(TypeGraphError::UnknownType(id)),
        }
    }

    /// Check if `id` is a model.
    #[inline]
    pub fn is_model(&self, id: TypeId) -> bool {
        self.get(id).is_some_and(TypeKind::is_model)
    }

    /// Look up a property.
    pub fn property(&self, id: PropertyId) -> Result<&PropertyDef, TypeGraphError> {
        self.properties
            .get(id.index())
            .ok_or(TypeGraphError::UnknownProperty(id))
    }

    /// Look up a property for mutation.
    pub fn property_mut(&mut self, id: PropertyId) -> Result<&mut PropertyDef, TypeGraphError> {
        self.properties
            .get_mut(id.index())
            .ok_or(TypeGraphError::UnknownProperty(id))
    }

    /// Look up a model property by name.
    pub fn find_property(
        &self,
        model: TypeId,
        name: Name,
    ) -> Result<Option<PropertyId>, TypeGraphError> {
        Ok(self.model(model)?.properties.get(&name).copied())
    }

    /// Number of types in the graph.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of properties in the graph, attached or not.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "tests use expect to panic on unexpected state")]
mod tests;
