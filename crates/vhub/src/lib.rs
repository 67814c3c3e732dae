//! Facade crate for `VeloHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `vhub` with the desired feature flags (`server`).
//! - Call `vhub::init` (server) to register feature slices; extend as new slices appear.

pub use vhub_domain as domain;
#[cfg(feature = "server")]
use vhub_domain::config::ApiConfig;
pub use vhub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use vhub_builder::routes::router as session_router;
        pub use vhub_catalog::routes::router as catalog_router;
        pub use vhub_kernel::server::router::system_router;
        pub use vhub_summary::routes::router as summary_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use vhub_builder as builder;
    pub use vhub_catalog as catalog;
    pub use vhub_summary as summary;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "catalog",
        "sessions",
        "summary",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Catalog (static input, loaded once)
    slices.push(features::catalog::init(config)?);

    // Build sessions
    slices.push(features::builder::init(config)?);

    Ok(slices)
}
