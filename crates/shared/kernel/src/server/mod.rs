//! Axum-facing kernel plumbing: shared state, error responses, system routes.

mod error;
mod health;
pub mod router;
mod state;

pub use error::{ApiError, ErrorBody};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateErrorExt, ApiStateInner};
