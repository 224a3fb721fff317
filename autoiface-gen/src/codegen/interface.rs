//! Declaration-block assembly: the full generated file.

use autoiface_core::{Accessibility, AnnotationInstance, ClassSymbol, GeneratedFile};
use serde::{Deserialize, Serialize};

use crate::codegen::signature;
use crate::projector::ProjectedMember;

/// Capability imports every generated file carries, whether or not a given
/// interface ends up using them.
const PREAMBLE_IMPORTS: [&str; 3] = [
    "using System;",
    "using System.Threading.Tasks;",
    "using System.Collections.Generic;",
];

/// Textual formatting policy for emitted files.
///
/// Layout choices only; nothing here changes which members are emitted or
/// how signatures read. Deserializable so hosts can load it from their own
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPolicy {
    /// One indentation level. Default: four spaces.
    pub indent: String,
    /// Line terminator. Default: `"\n"`.
    pub newline: String,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        RenderPolicy {
            indent: "    ".to_string(),
            newline: "\n".to_string(),
        }
    }
}

/// The options the marker annotation recognizes, extracted from the raw
/// key-value instance. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceOptions {
    /// Override for the synthesized interface's name.
    pub interface_name: Option<String>,
    /// Override for the synthesized interface's namespace.
    pub namespace: Option<String>,
}

impl InterfaceOptions {
    pub fn from_annotation(annotation: &AnnotationInstance) -> Self {
        InterfaceOptions {
            interface_name: annotation.option("InterfaceName").map(str::to_owned),
            namespace: annotation.option("Namespace").map(str::to_owned),
        }
    }
}

/// Render the full interface declaration for one candidate.
///
/// Header resolution:
/// - name: `InterfaceName` option if set, else `"I"` + class simple name
/// - namespace: `Namespace` option if set, else the class's own, verbatim
/// - accessibility: `internal` stays `internal`; everything else becomes
///   `public` (an interface consumed for DI must be at least as visible as
///   its consumers, so protected/private inputs widen to public)
/// - a generic class contributes its own type-parameter list and constraint
///   clauses to the interface header
pub fn render_interface(
    class: &ClassSymbol,
    options: &InterfaceOptions,
    members: &[ProjectedMember<'_>],
    policy: &RenderPolicy,
) -> GeneratedFile {
    let decl = InterfaceDecl {
        name: options
            .interface_name
            .clone()
            .unwrap_or_else(|| format!("I{}", class.name)),
        namespace: options
            .namespace
            .clone()
            .unwrap_or_else(|| class.namespace.clone()),
        accessibility: interface_accessibility(class.accessibility),
        type_params: signature::render_type_params(&class.type_params),
        constraints: signature::render_constraint_clauses(&class.type_params),
        members: members.iter().map(signature::render_member).collect(),
    };

    decl.into_file(policy)
}

fn interface_accessibility(declared: Accessibility) -> &'static str {
    match declared {
        Accessibility::Internal => "internal",
        _ => "public",
    }
}

/// Structured intermediate between synthesis and text: the header fields
/// plus the ordered member signatures, assembled into the final artifact in
/// one place.
struct InterfaceDecl {
    name: String,
    namespace: String,
    accessibility: &'static str,
    type_params: String,
    constraints: String,
    members: Vec<String>,
}

impl InterfaceDecl {
    fn into_file(self, policy: &RenderPolicy) -> GeneratedFile {
        let mut lines: Vec<String> = Vec::new();
        lines.push("// <auto-generated/>".to_string());
        // Nullability markers are reproduced verbatim in signatures, so the
        // emitted file must opt in to the nullable context.
        lines.push("#nullable enable".to_string());
        lines.push(String::new());
        lines.extend(PREAMBLE_IMPORTS.iter().map(|s| s.to_string()));
        lines.push(String::new());

        // An empty namespace (global, no override) omits the namespace
        // block and renders the interface at the top level.
        let depth = usize::from(!self.namespace.is_empty());
        if !self.namespace.is_empty() {
            lines.push(format!("namespace {}", self.namespace));
            lines.push("{".to_string());
        }

        let pad = policy.indent.repeat(depth);
        lines.push(format!(
            "{pad}{} interface {}{}{}",
            self.accessibility, self.name, self.type_params, self.constraints
        ));
        lines.push(format!("{pad}{{"));

        let member_pad = policy.indent.repeat(depth + 1);
        for member in &self.members {
            lines.push(format!("{member_pad}{member}"));
        }

        lines.push(format!("{pad}}}"));
        if !self.namespace.is_empty() {
            lines.push("}".to_string());
        }

        let mut text = lines.join(&policy.newline);
        text.push_str(&policy.newline);

        GeneratedFile::new(format!("{}.g.cs", self.name), text)
    }
}
