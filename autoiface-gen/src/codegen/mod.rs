//! Signature synthesis: render projected members and the interface
//! declaration block into C# source text.
//!
//! Split into per-member signature rendering (`signature`) and
//! declaration-block assembly (`interface`). Member rendering produces a
//! structured list of signature strings; the exact textual layout
//! (indentation, line endings) is applied only at the assembly boundary,
//! governed by [`interface::RenderPolicy`].

pub mod interface;
pub mod signature;
