//! Annotation instances attached to declarations.

use std::collections::BTreeMap;

/// Display name of the marker attribute type the generator reacts to.
///
/// Hosts that resolve the marker under a different name pass their own via
/// [`crate::CompilationModel::marker_attribute`].
pub const MARKER_ATTRIBUTE: &str = "GenerateInterface";

/// One applied annotation: the annotation type's display name plus its named
/// string options.
///
/// The marker annotation recognizes two options, `InterfaceName` and
/// `Namespace`. Unknown keys are carried but ignored by the generator. At
/// most one marker instance per declaration is assumed; multiplicity is
/// enforced upstream by the attribute's own definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationInstance {
    pub type_name: String,
    pub options: BTreeMap<String, String>,
}

impl AnnotationInstance {
    pub fn new(type_name: impl Into<String>) -> Self {
        AnnotationInstance {
            type_name: type_name.into(),
            options: BTreeMap::new(),
        }
    }

    /// The marker annotation with no options set.
    pub fn marker() -> Self {
        AnnotationInstance::new(MARKER_ATTRIBUTE)
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Look up an option value. An option counts as set only when present
    /// and non-empty.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
