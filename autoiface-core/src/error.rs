//! Skip taxonomy for candidates that produce no artifact.

use thiserror::Error;

/// Why a candidate (or the whole pass) yielded no output.
///
/// None of these is a hard failure: the pipeline resolves each locally,
/// logs it, and moves on. Generation degrades to "best still-valid output
/// or nothing" and never breaks the host build.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Skip {
    /// The marker attribute type is not resolvable in this compilation.
    /// Aborts the entire pass with empty output.
    #[error("marker attribute type is not resolvable in this compilation")]
    MarkerUnavailable,

    /// This candidate's declared symbol could not be resolved. Only this
    /// candidate is dropped; the rest of the pass proceeds.
    #[error("candidate symbol could not be resolved")]
    UnresolvedSymbol,

    /// The declaration has attribute lists but none of them is the marker.
    #[error("declaration does not carry the marker attribute")]
    NotAnnotated,
}
