//! Entity-to-view mapping.
//!
//! The assembly pipeline: classify the membership scenario, resolve the dynamic
//! property tabs, compose the built-in generic fields, then merge.

mod generic;
mod scenario;
mod tabs;
mod view;

pub use generic::*;
pub use scenario::*;
pub use tabs::*;
pub use view::*;
