use std::borrow::Cow;

/// A specialized error enum for the build-session feature.
#[vhub_derive::vhub_error]
pub enum BuildError {
    /// The session id does not resolve to an active session (unknown or expired).
    #[error("Unknown session{}: {message}", format_context(.context))]
    SessionNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A color was selected before any frame.
    #[error("No frame selected{}: {message}", format_context(.context))]
    NoFrame { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The color is not among the selected frame's declared colors.
    #[error("Color not declared by frame{}: {message}", format_context(.context))]
    UnknownColor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The part's own category disagrees with the targeted slot.
    #[error("Part category mismatch{}: {message}", format_context(.context))]
    CategoryMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal build error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
