//! Data models for the member view mapper.
//!
//! The display models match the frontend TypeScript interfaces exactly for seamless
//! interoperability.

mod display;
mod external;
mod member;
mod scenario;
mod value;

pub use display::*;
pub use external::*;
pub use member::*;
pub use scenario::*;
pub use value::*;
