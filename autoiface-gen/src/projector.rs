//! Member projection: decide which declared members the interface exposes.

use autoiface_core::{
    Accessibility, ClassSymbol, MemberSymbol, MethodKind, MethodSymbol, PropertySymbol,
};

/// A member that passed the exposure filter.
///
/// The filter guarantees what the renderer relies on: public, non-static,
/// and either an ordinary method or a property with at least one public
/// accessor. Fields and events never project, so the renderer's kind match
/// is closed over exactly these two shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectedMember<'a> {
    Method(&'a MethodSymbol),
    Property(&'a PropertySymbol),
}

impl<'a> ProjectedMember<'a> {
    /// Member name, borrowed from the underlying symbol rather than from
    /// this projection handle.
    pub fn name(&self) -> &'a str {
        match *self {
            ProjectedMember::Method(m) => &m.name,
            ProjectedMember::Property(p) => &p.name,
        }
    }
}

/// Stable exposure filter over the class's directly declared members, in
/// declaration order. Inherited members are not part of the model and are
/// never considered.
///
/// An empty result is valid: the class still yields an empty-bodied
/// interface.
pub fn project(class: &ClassSymbol) -> Vec<ProjectedMember<'_>> {
    class.members.iter().filter_map(project_member).collect()
}

fn project_member(member: &MemberSymbol) -> Option<ProjectedMember<'_>> {
    if member.accessibility() != Accessibility::Public || member.is_static() {
        return None;
    }

    match member {
        // Constructors, destructors, operators, and compiler-synthesized
        // property accessors are method-kind but must not surface; accessors
        // are already represented by their property.
        MemberSymbol::Method(m) if m.kind == MethodKind::Ordinary => {
            Some(ProjectedMember::Method(m))
        }
        // A property with no public accessor at all is silently dropped.
        // The accessor check is independent per accessor, so a public getter
        // with a non-public setter still projects (as get-only downstream).
        MemberSymbol::Property(p) if has_public_accessor(p) => {
            Some(ProjectedMember::Property(p))
        }
        _ => None,
    }
}

fn has_public_accessor(property: &PropertySymbol) -> bool {
    property.getter == Some(Accessibility::Public)
        || property.setter == Some(Accessibility::Public)
}
