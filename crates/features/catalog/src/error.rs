use std::borrow::Cow;

/// A specialized error enum for the catalog feature.
#[vhub_derive::vhub_error]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Catalog file error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },
    /// Catalog document is not valid JSON for the expected shape.
    #[error("Catalog parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// Catalog content violates an invariant (duplicate ids, empty color lists, ...).
    #[error("Catalog validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Lookup for a frame id that is not in the catalog.
    #[error("Unknown frame{}: {message}", format_context(.context))]
    UnknownFrame { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Lookup for a part id that is not in the requested category.
    #[error("Unknown part{}: {message}", format_context(.context))]
    UnknownPart { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
