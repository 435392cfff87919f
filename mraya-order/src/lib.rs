//! Mraya Order Engine
//!
//! Platform-agnostic order-intake logic for the Mraya landing page.
//! This crate provides validation, submission gating, and payload types
//! without UI or platform-specific dependencies.

pub mod endpoint;
pub mod form;
pub mod payload;
pub mod phase;
pub mod phone;
pub mod submit;

// Re-export commonly used types
pub use endpoint::{Endpoint, WEBHOOK_PLACEHOLDER};
pub use form::{FormError, OrderField, OrderForm};
pub use payload::{OrderPayload, PRODUCT_ID};
pub use phase::{SubmitPhase, begin_submission};
pub use phone::{PhoneValidation, validate_phone};
pub use submit::{SubmissionError, SubmissionOutcome};
