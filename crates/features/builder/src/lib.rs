//! # Build-session feature slice
//!
//! Owns the mutable per-session configuration state. Each session is an
//! explicitly created, id-addressed [`Build`] behind its own lock, so many
//! independent sessions (tabs, users) can run against one process without
//! cross-contamination. Sessions are evicted after an idle TTL; an expired
//! session is indistinguishable from an unknown one.

mod error;
#[cfg(feature = "server")]
pub mod routes;
mod store;

pub use crate::error::{BuildError, BuildErrorExt};
pub use crate::store::Build;

use moka::sync::Cache;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use vhub_domain::config::ApiConfig;
use vhub_kernel::domain::registry::InitializedSlice;
use vhub_kernel::safe_nanoid;

/// A session's build behind its lock. One logical actor mutates a session at
/// a time; the lock only arbitrates between concurrent HTTP requests.
pub type SharedBuild = Arc<RwLock<Build>>;

/// Build-session feature state.
#[vhub_derive::vhub_slice]
pub struct Sessions {
    cache: Cache<String, SharedBuild>,
}

impl SessionsInner {
    /// Creates a new empty session and returns its id.
    #[must_use]
    pub fn create(&self) -> String {
        let id = safe_nanoid!();
        self.cache.insert(id.clone(), Arc::new(RwLock::new(Build::default())));
        tracing::debug!(session = %id, "Session created");
        id
    }

    /// Resolves an active session.
    ///
    /// # Errors
    /// Returns [`BuildError::SessionNotFound`] when the id is unknown or the
    /// session has expired.
    pub fn get(&self, id: &str) -> Result<SharedBuild, BuildError> {
        self.cache.get(id).ok_or_else(|| BuildError::SessionNotFound {
            message: id.to_owned().into(),
            context: None,
        })
    }

    /// Ends a session explicitly.
    ///
    /// # Errors
    /// Returns [`BuildError::SessionNotFound`] when the id is unknown or the
    /// session has already expired.
    pub fn remove(&self, id: &str) -> Result<(), BuildError> {
        self.get(id)?;
        self.cache.invalidate(id);
        tracing::debug!(session = %id, "Session removed");
        Ok(())
    }

    /// Number of currently cached sessions (approximate, for diagnostics).
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

/// Initialize the build-session feature.
///
/// # Errors
/// This initialization is infallible today; the `Result` keeps the slice
/// signature uniform across features.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, BuildError> {
    let session_cfg = &config.session;

    let mut builder = Cache::builder().max_capacity(session_cfg.cache_capacity);
    if session_cfg.idle_ttl_seconds > 0 {
        builder = builder.time_to_idle(Duration::from_secs(session_cfg.idle_ttl_seconds));
    }
    let cache = builder.build();

    tracing::info!(
        capacity = session_cfg.cache_capacity,
        idle_ttl_seconds = session_cfg.idle_ttl_seconds,
        "Sessions slice initialized"
    );

    let slice = Sessions::new(SessionsInner { cache });
    Ok(InitializedSlice::new(slice))
}
