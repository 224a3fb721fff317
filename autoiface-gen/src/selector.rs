//! Candidate selection: the syntactic pre-filter.

use autoiface_core::CandidateDecl;

/// Retain declarations carrying at least one attribute list.
///
/// Purely syntactic; whether an attribute is actually the marker is checked
/// downstream against the resolved symbol. Candidates are independent, so
/// any processing order yields the same artifact set.
pub fn select(candidates: &[CandidateDecl]) -> impl Iterator<Item = &CandidateDecl> {
    candidates.iter().filter(|c| c.has_attribute_lists)
}
