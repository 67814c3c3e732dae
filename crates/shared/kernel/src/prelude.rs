//! Convenience re-exports for slice and app crates.

pub use crate::domain::config::ApiConfig;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
pub use crate::safe_nanoid;
pub use crate::security::session::{GuardError, SessionGuard};
#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState, ApiStateBuilder, ApiStateError};
