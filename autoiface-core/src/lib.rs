//! Core model and host contract for the autoiface interface synthesizer.
//!
//! This crate provides:
//! - The resolved-symbol model: [`ClassSymbol`], [`MemberSymbol`] and its
//!   method/property/field/event shapes, type parameters and constraints
//! - [`AnnotationInstance`]: the marker annotation and its named options
//! - [`CompilationModel`] trait: the injected, read-only symbol-graph
//!   dependency the generator consumes
//! - [`GeneratedFile`]: the emitted source artifact
//! - [`Skip`]: the non-fatal taxonomy for candidates that yield no output
//!
//! The generator pipeline itself lives in `autoiface-gen`.

pub mod annotation;
pub mod artifact;
pub mod compilation;
pub mod error;
pub mod symbol;

pub use annotation::{AnnotationInstance, MARKER_ATTRIBUTE};
pub use artifact::GeneratedFile;
pub use compilation::{CandidateDecl, Compilation, CompilationModel};
pub use error::Skip;
pub use symbol::{
    Accessibility, ClassSymbol, EventSymbol, FieldSymbol, MemberSymbol, MethodKind, MethodSymbol,
    ParamSymbol, PropertySymbol, TypeConstraints, TypeParam,
};
