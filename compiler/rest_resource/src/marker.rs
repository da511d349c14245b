//! Path parameter marking for cloned key properties.

use rest_ir::{Name, PropertyId};
use rest_types::DecoratorApplication;
use rustc_hash::FxHashMap;

/// Name of the host's path parameter decorator.
pub const PATH_DECORATOR: &str = "@path";

/// Marks a cloned key property as a path parameter.
///
/// The cloner attaches [`application`](Self::application) to each clone
/// before it is inserted and calls [`mark`](Self::mark) once it has an id.
/// A clone displaced by a rerun is passed to [`unmark`](Self::unmark).
pub trait PathParameterMarker {
    /// Decorator application placed on every clone.
    fn application(&self) -> DecoratorApplication {
        DecoratorApplication::bare(PATH_DECORATOR)
    }

    /// Record `property` as a path parameter named `name`.
    fn mark(&mut self, property: PropertyId, name: Name);

    /// Forget `property`; it is no longer attached to the target model.
    fn unmark(&mut self, property: PropertyId);
}

/// Default marker: records path parameters by property.
#[derive(Clone, Debug, Default)]
pub struct PathParameters {
    params: FxHashMap<PropertyId, Name>,
}

impl PathParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_path_parameter(&self, property: PropertyId) -> bool {
        self.params.contains_key(&property)
    }

    /// The path parameter name of `property`.
    pub fn parameter_name(&self, property: PropertyId) -> Option<Name> {
        self.params.get(&property).copied()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl PathParameterMarker for PathParameters {
    fn mark(&mut self, property: PropertyId, name: Name) {
        self.params.insert(property, name);
    }

    fn unmark(&mut self, property: PropertyId) {
        self.params.remove(&property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn marks_and_remarks() {
        let mut params = PathParameters::new();
        let p = PropertyId::from_raw(3);
        assert!(!params.is_path_parameter(p));

        params.mark(p, Name::from_raw(1));
        params.mark(p, Name::from_raw(2));

        assert!(params.is_path_parameter(p));
        assert_eq!(params.parameter_name(p), Some(Name::from_raw(2)));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn unmark_forgets_the_property() {
        let mut params = PathParameters::new();
        let kept = PropertyId::from_raw(1);
        let dropped = PropertyId::from_raw(2);
        params.mark(kept, Name::from_raw(1));
        params.mark(dropped, Name::from_raw(1));

        params.unmark(dropped);
        params.unmark(PropertyId::from_raw(9));

        assert!(params.is_path_parameter(kept));
        assert!(!params.is_path_parameter(dropped));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn default_application_is_bare_path() {
        let app = PathParameters::new().application();
        assert!(app.is(PATH_DECORATOR));
        assert!(app.args.is_empty());
    }
}
