//! Manifest schema types.
//!
//! Defines the Rust types that mirror the manifesto YAML schema. These are
//! serialized/deserialized by the store and consumed by validate, verify,
//! and plan.

mod acceptance;
mod manifesto;
mod task;

pub use acceptance::AcceptanceCriteria;
pub use manifesto::{Guardrail, Manifesto, Metrics, Status};
pub use task::Task;
