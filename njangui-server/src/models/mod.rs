//! Domain models with validation at construction
//!
//! Payloads are validated when they are turned into a [`CreatePayload`].
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod document;
pub mod resource;
pub mod payload;
pub mod envelope;

pub use validation::ValidationError;
pub use document::{Document, Fields, RESERVED_FIELDS};
pub use resource::{Fund, Member, Resource};
pub use payload::CreatePayload;
pub use envelope::Envelope;
