//! Shared string constants.

/// OpenAPI tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for catalog endpoints.
pub const CATALOG_TAG: &str = "Catalog";
/// OpenAPI tag for build-session endpoints.
pub const SESSION_TAG: &str = "Sessions";
/// OpenAPI tag for summary/export endpoints.
pub const SUMMARY_TAG: &str = "Summary";

/// Currency symbol used for price rendering in summaries and exports.
pub const CURRENCY_SYMBOL: &str = "£";
