//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the test generator tools and their dispatcher
//! - **resources**: static documents describing generation parameters

pub mod resources;
pub mod tools;
