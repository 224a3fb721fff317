//! Interface synthesis pipeline for annotated class declarations.
//!
//! Given a [`CompilationModel`] (the host's resolved-symbol graph), the
//! pipeline selects marker-annotated class declarations, projects each
//! class's exposed members, and renders one C# interface artifact per
//! candidate:
//!
//! Selector → (per candidate) → Projector → Synthesizer → emit
//!
//! Candidates are independent: no shared mutable state, no ordering
//! dependency between outputs, no cross-candidate accumulation. The
//! per-candidate work fans out across a rayon pool, sharing the immutable
//! graph read-only; artifact order still follows candidate order.

pub mod codegen;
pub mod projector;
pub mod selector;

pub use codegen::interface::{InterfaceOptions, RenderPolicy};
pub use projector::ProjectedMember;

use autoiface_core::{CandidateDecl, CompilationModel, GeneratedFile, Skip};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Run the full pipeline with the default [`RenderPolicy`].
pub fn generate(compilation: &impl CompilationModel) -> Vec<GeneratedFile> {
    generate_with_policy(compilation, &RenderPolicy::default())
}

/// Run the full pipeline.
///
/// Infallible by design: every edge case degrades to "skip this candidate"
/// or "emit nothing", never to a hard failure of the host build. When the
/// marker attribute type does not resolve, the whole pass is a silent no-op.
pub fn generate_with_policy(
    compilation: &impl CompilationModel,
    policy: &RenderPolicy,
) -> Vec<GeneratedFile> {
    let Some(marker) = compilation.marker_attribute() else {
        debug!("pass aborted: {}", Skip::MarkerUnavailable);
        return Vec::new();
    };

    let selected: Vec<&CandidateDecl> = selector::select(compilation.candidates()).collect();

    selected
        .into_par_iter()
        .filter_map(|candidate| match synthesize(candidate, marker, policy) {
            Ok(file) => {
                trace!(artifact = %file.hint_name, "emitted interface");
                Some(file)
            }
            Err(skip) => {
                debug!("candidate skipped: {skip}");
                None
            }
        })
        .collect()
}

/// All-or-nothing synthesis for a single candidate.
fn synthesize(
    candidate: &CandidateDecl,
    marker: &str,
    policy: &RenderPolicy,
) -> Result<GeneratedFile, Skip> {
    let class = candidate.symbol.as_ref().ok_or(Skip::UnresolvedSymbol)?;
    let annotation = class
        .annotations
        .iter()
        .find(|a| a.type_name == marker)
        .ok_or(Skip::NotAnnotated)?;

    let options = InterfaceOptions::from_annotation(annotation);
    let members = projector::project(class);

    Ok(codegen::interface::render_interface(
        class, &options, &members, policy,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoiface_core::{AnnotationInstance, ClassSymbol, Compilation, MARKER_ATTRIBUTE};

    fn annotated(name: &str) -> ClassSymbol {
        let mut class = ClassSymbol::new(name, "Ns");
        class.annotations.push(AnnotationInstance::marker());
        class
    }

    #[test]
    fn missing_marker_type_aborts_the_whole_pass() {
        let compilation = Compilation {
            candidates: vec![CandidateDecl::resolved(annotated("Svc"))],
            marker: None,
        };

        assert!(generate(&compilation).is_empty());
    }

    #[test]
    fn unresolved_candidate_skips_only_itself() {
        let compilation = Compilation::new(MARKER_ATTRIBUTE)
            .with_candidate(CandidateDecl::resolved(annotated("First")))
            .with_candidate(CandidateDecl::unresolved())
            .with_candidate(CandidateDecl::resolved(annotated("Second")));

        let files = generate(&compilation);
        let names: Vec<&str> = files.iter().map(|f| f.hint_name.as_str()).collect();
        assert_eq!(names, ["IFirst.g.cs", "ISecond.g.cs"]);
    }

    #[test]
    fn annotated_but_not_with_marker_is_skipped() {
        let mut other = ClassSymbol::new("Other", "Ns");
        other
            .annotations
            .push(AnnotationInstance::new("Obsolete"));

        let compilation = Compilation::new(MARKER_ATTRIBUTE)
            .with_candidate(CandidateDecl::resolved(other))
            .with_candidate(CandidateDecl::resolved(annotated("Svc")));

        let files = generate(&compilation);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].hint_name, "ISvc.g.cs");
    }
}
