//! Avatar reference validation.

use reqwest::Url;
use thiserror::Error;

/// Longest inline `data:image/` payload accepted, in characters.
pub const MAX_INLINE_LEN: usize = 500_000;

/// Reasons an avatar reference is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvatarError {
    #[error("La URL de imagen proporcionada no es válida.")]
    InvalidUrl,
    #[error("La imagen es demasiado grande. Máximo 500KB o usa una URL directa.")]
    TooLarge,
    #[error("El avatar debe ser una URL válida o imagen en formato base64.")]
    Unsupported,
}

/// Checks a non-empty avatar reference.
///
/// Accepts an absolute `http`/`https` URL that parses, or an inline
/// `data:image/` payload of at most [`MAX_INLINE_LEN`] characters. The empty
/// string is always accepted and clears the avatar.
pub fn validate(avatar: &str) -> Result<(), AvatarError> {
    if avatar.is_empty() {
        return Ok(());
    }

    if avatar.starts_with("http://") || avatar.starts_with("https://") {
        return Url::parse(avatar)
            .map(|_| ())
            .map_err(|_| AvatarError::InvalidUrl);
    }

    if avatar.starts_with("data:image/") {
        if avatar.chars().count() > MAX_INLINE_LEN {
            return Err(AvatarError::TooLarge);
        }
        return Ok(());
    }

    Err(AvatarError::Unsupported)
}
