//! Resolved-symbol model for class-like declarations.
//!
//! These types are the read-only view of the host compiler's symbol graph
//! that the generator consumes. The host front end (or a hand-built fake in
//! tests) constructs them; the generator never mutates them. Type, return,
//! and parameter types are carried as display strings exactly as the
//! semantic model renders them, nullability markers included.

use crate::annotation::AnnotationInstance;

/// Declared accessibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    PrivateProtected,
    Private,
}

/// Distinguishes ordinary methods from the method-kind members that must
/// never surface in a generated interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    Destructor,
    Operator,
    /// Compiler-synthesized accessor backing a property. The property itself
    /// is separately represented as a [`PropertySymbol`].
    PropertyAccessor,
}

/// Constraint set attached to a single type parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeConstraints {
    /// `class` constraint.
    pub reference_type: bool,
    /// `struct` constraint.
    pub value_type: bool,
    /// `unmanaged` constraint.
    pub unmanaged: bool,
    /// `notnull` constraint.
    pub not_null: bool,
    /// Named base-type/interface constraints, in declaration order.
    pub types: Vec<String>,
    /// `new()` constraint.
    pub parameterless_ctor: bool,
}

impl TypeConstraints {
    /// True when the set carries no constraint of any kind.
    pub fn is_empty(&self) -> bool {
        !self.reference_type
            && !self.value_type
            && !self.unmanaged
            && !self.not_null
            && self.types.is_empty()
            && !self.parameterless_ctor
    }
}

/// A generic type parameter, on a class or on an individual method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParam {
    pub name: String,
    pub constraints: TypeConstraints,
}

impl TypeParam {
    /// An unconstrained type parameter.
    pub fn new(name: impl Into<String>) -> Self {
        TypeParam {
            name: name.into(),
            constraints: TypeConstraints::default(),
        }
    }

    pub fn constrained(name: impl Into<String>, constraints: TypeConstraints) -> Self {
        TypeParam {
            name: name.into(),
            constraints,
        }
    }
}

/// A single method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSymbol {
    /// Display form of the parameter type, nullability markers verbatim.
    pub ty: String,
    pub name: String,
    /// Exact textual form of the declared default, if any: `"Hello"`,
    /// `null`, `true`, `42`, ...
    pub default_value: Option<String>,
}

impl ParamSymbol {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        ParamSymbol {
            ty: ty.into(),
            name: name.into(),
            default_value: None,
        }
    }

    pub fn with_default(
        ty: impl Into<String>,
        name: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        ParamSymbol {
            ty: ty.into(),
            name: name.into(),
            default_value: Some(literal.into()),
        }
    }
}

/// A method declared directly on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSymbol {
    pub name: String,
    pub accessibility: Accessibility,
    pub is_static: bool,
    pub kind: MethodKind,
    /// Display form of the return type.
    pub return_type: String,
    /// Method-level generic type parameters, in declaration order.
    pub type_params: Vec<TypeParam>,
    pub params: Vec<ParamSymbol>,
}

impl MethodSymbol {
    /// A public, instance, ordinary method with no parameters.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        MethodSymbol {
            name: name.into(),
            accessibility: Accessibility::Public,
            is_static: false,
            kind: MethodKind::Ordinary,
            return_type: return_type.into(),
            type_params: Vec::new(),
            params: Vec::new(),
        }
    }
}

/// A property declared directly on a class.
///
/// Accessor accessibility is resolved per accessor: an accessor without an
/// explicit modifier carries the property's own accessibility, so the host
/// front end reports the effective value here. `None` means the accessor is
/// absent entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySymbol {
    pub name: String,
    pub accessibility: Accessibility,
    pub is_static: bool,
    /// Display form of the value type.
    pub ty: String,
    pub getter: Option<Accessibility>,
    pub setter: Option<Accessibility>,
}

impl PropertySymbol {
    /// A public instance property with public `get` and `set` accessors.
    pub fn get_set(name: impl Into<String>, ty: impl Into<String>) -> Self {
        PropertySymbol {
            name: name.into(),
            accessibility: Accessibility::Public,
            is_static: false,
            ty: ty.into(),
            getter: Some(Accessibility::Public),
            setter: Some(Accessibility::Public),
        }
    }

    /// A public instance property with only a public `get` accessor.
    pub fn get_only(name: impl Into<String>, ty: impl Into<String>) -> Self {
        PropertySymbol {
            setter: None,
            ..PropertySymbol::get_set(name, ty)
        }
    }
}

/// A field declared on a class. Never projected; present so the exposure
/// filter sees the member kinds a real declaration carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSymbol {
    pub name: String,
    pub accessibility: Accessibility,
    pub is_static: bool,
    pub ty: String,
}

/// An event declared on a class. Never projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSymbol {
    pub name: String,
    pub accessibility: Accessibility,
    pub is_static: bool,
    pub ty: String,
}

/// Tagged union over the member kinds a class declaration can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberSymbol {
    Method(MethodSymbol),
    Property(PropertySymbol),
    Field(FieldSymbol),
    Event(EventSymbol),
}

impl MemberSymbol {
    pub fn name(&self) -> &str {
        match self {
            MemberSymbol::Method(m) => &m.name,
            MemberSymbol::Property(p) => &p.name,
            MemberSymbol::Field(f) => &f.name,
            MemberSymbol::Event(e) => &e.name,
        }
    }

    pub fn accessibility(&self) -> Accessibility {
        match self {
            MemberSymbol::Method(m) => m.accessibility,
            MemberSymbol::Property(p) => p.accessibility,
            MemberSymbol::Field(f) => f.accessibility,
            MemberSymbol::Event(e) => e.accessibility,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            MemberSymbol::Method(m) => m.is_static,
            MemberSymbol::Property(p) => p.is_static,
            MemberSymbol::Field(f) => f.is_static,
            MemberSymbol::Event(e) => e.is_static,
        }
    }
}

/// Resolved view of one class-like declaration.
///
/// Only members declared directly on the type appear in `members`; inherited
/// members are not part of this model and are never projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSymbol {
    /// Simple name, without namespace or type-parameter list.
    pub name: String,
    /// Enclosing namespace path, verbatim. Empty for the global namespace.
    pub namespace: String,
    pub accessibility: Accessibility,
    /// Class-level generic type parameters, in declaration order.
    pub type_params: Vec<TypeParam>,
    /// Members in declaration order.
    pub members: Vec<MemberSymbol>,
    pub annotations: Vec<AnnotationInstance>,
}

impl ClassSymbol {
    /// A public, non-generic class with no members and no annotations.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        ClassSymbol {
            name: name.into(),
            namespace: namespace.into(),
            accessibility: Accessibility::Public,
            type_params: Vec::new(),
            members: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_accessors_cover_all_kinds() {
        let members = [
            MemberSymbol::Method(MethodSymbol::new("Run", "void")),
            MemberSymbol::Property(PropertySymbol::get_set("Value", "string")),
            MemberSymbol::Field(FieldSymbol {
                name: "count".into(),
                accessibility: Accessibility::Private,
                is_static: false,
                ty: "int".into(),
            }),
            MemberSymbol::Event(EventSymbol {
                name: "Changed".into(),
                accessibility: Accessibility::Public,
                is_static: true,
                ty: "EventHandler".into(),
            }),
        ];

        let names: Vec<&str> = members.iter().map(MemberSymbol::name).collect();
        assert_eq!(names, ["Run", "Value", "count", "Changed"]);
        assert_eq!(members[2].accessibility(), Accessibility::Private);
        assert!(members[3].is_static());
        assert!(!members[0].is_static());
    }

    #[test]
    fn empty_constraint_set_reports_empty() {
        assert!(TypeConstraints::default().is_empty());
        assert!(
            !TypeConstraints {
                not_null: true,
                ..TypeConstraints::default()
            }
            .is_empty()
        );
    }
}
