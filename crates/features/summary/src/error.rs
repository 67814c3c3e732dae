use std::borrow::Cow;

/// A specialized error enum for the summary feature.
#[vhub_derive::vhub_error]
pub enum SummaryError {
    /// A summary or export was requested for a build with no frame selected.
    #[error("Nothing to summarize{}: {message}", format_context(.context))]
    EmptyBuild { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal summary error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
