//! Domain value objects and types.
//!
//! Search terms are validated at construction time so that blank input never
//! reaches the query engine.

pub mod errors;
pub mod operator;
pub mod term;

pub use errors::ValidationError;
pub use operator::{ModifierKeys, Operator};
pub use term::{property_term, SearchTerm};
