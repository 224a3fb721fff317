//! Per-member signature rendering.

use autoiface_core::{
    Accessibility, MethodSymbol, ParamSymbol, PropertySymbol, TypeConstraints, TypeParam,
};

use crate::projector::ProjectedMember;

/// Render one projected member's canonical signature, one line, no
/// indentation.
pub fn render_member(member: &ProjectedMember) -> String {
    match member {
        ProjectedMember::Method(m) => render_method(m),
        ProjectedMember::Property(p) => render_property(p),
    }
}

/// `<returnType> <name><typeParamList>(<paramList>)<constraintClauses>;`
fn render_method(method: &MethodSymbol) -> String {
    let params = method
        .params
        .iter()
        .map(render_param)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {}{}({}){};",
        method.return_type,
        method.name,
        render_type_params(&method.type_params),
        params,
        render_constraint_clauses(&method.type_params),
    )
}

fn render_param(param: &ParamSymbol) -> String {
    match &param.default_value {
        // The declared literal is reproduced exactly, quotes and all.
        Some(literal) => format!("{} {} = {}", param.ty, param.name, literal),
        None => format!("{} {}", param.ty, param.name),
    }
}

/// `<type> <name> { get; set; }`, listing only the public accessors, get
/// before set. The projector guarantees at least one is present.
fn render_property(property: &PropertySymbol) -> String {
    let mut accessors = Vec::new();
    if property.getter == Some(Accessibility::Public) {
        accessors.push("get;");
    }
    if property.setter == Some(Accessibility::Public) {
        accessors.push("set;");
    }

    format!(
        "{} {} {{ {} }}",
        property.ty,
        property.name,
        accessors.join(" ")
    )
}

/// `<T1, T2>` using the parameters' own names in declaration order, or
/// nothing when the list is empty. Shared by method signatures and the
/// interface header of a generic class.
pub fn render_type_params(params: &[TypeParam]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    format!("<{}>", names.join(", "))
}

/// One `where <param> : ...` clause per constrained type parameter, clauses
/// joined by single spaces, with a single leading space so the block can be
/// appended directly after a parameter list or interface name. Empty when
/// nothing is constrained.
pub fn render_constraint_clauses(params: &[TypeParam]) -> String {
    let clauses: Vec<String> = params
        .iter()
        .filter(|p| !p.constraints.is_empty())
        .map(|p| format!("where {} : {}", p.name, render_constraints(&p.constraints)))
        .collect();

    if clauses.is_empty() {
        String::new()
    } else {
        format!(" {}", clauses.join(" "))
    }
}

/// Fixed constraint order: `class`, `struct`, `unmanaged`, `notnull`, named
/// type constraints in declaration order, `new()` last.
fn render_constraints(set: &TypeConstraints) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if set.reference_type {
        parts.push("class");
    }
    if set.value_type {
        parts.push("struct");
    }
    if set.unmanaged {
        parts.push("unmanaged");
    }
    if set.not_null {
        parts.push("notnull");
    }
    parts.extend(set.types.iter().map(String::as_str));
    if set.parameterless_ctor {
        parts.push("new()");
    }
    parts.join(", ")
}
