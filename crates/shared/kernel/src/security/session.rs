use crate::SAFE_ALPHABET;
use std::borrow::Cow;

#[vhub_derive::vhub_error]
pub enum GuardError {
    #[error("Session id validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Utilities for safe handling of caller-supplied session IDs.
#[derive(Debug)]
pub struct SessionGuard;

impl SessionGuard {
    /// Length of IDs produced by `safe_nanoid!()`.
    pub const ID_LENGTH: usize = 12;

    /// Validates a session ID taken from a URL path.
    ///
    /// IDs are generated with `safe_nanoid!`, so anything with the wrong length
    /// or characters outside [`SAFE_ALPHABET`] can be rejected before touching
    /// the session cache.
    ///
    /// # Errors
    /// Returns an error if the ID has the wrong length or contains characters
    /// outside the safe alphabet.
    pub fn verify(id: impl AsRef<str>) -> Result<String, GuardError> {
        let id_ref = id.as_ref();

        if id_ref.len() != Self::ID_LENGTH {
            return Err(GuardError::Validation {
                message: format!("Expected {} characters, got {}", Self::ID_LENGTH, id_ref.len())
                    .into(),
                context: Some("Session id length mismatch".into()),
            });
        }

        if let Some(bad) = id_ref.chars().find(|ch| !SAFE_ALPHABET.contains(ch)) {
            return Err(GuardError::Validation {
                message: format!("Character '{bad}' is outside the session id alphabet").into(),
                context: Some("Session id charset mismatch".into()),
            });
        }

        Ok(id_ref.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_verification() {
        // Well-formed
        let id = crate::safe_nanoid!();
        assert_eq!(SessionGuard::verify(&id).unwrap(), id);

        // Wrong length
        assert!(SessionGuard::verify("short").is_err());

        // Ambiguous characters are not part of the alphabet
        assert!(SessionGuard::verify("O0Il10Il10Il").is_err());
    }
}
