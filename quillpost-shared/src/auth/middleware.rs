/// Bearer token resolution for authenticated routes
///
/// The HTTP layer reads the `Authorization` header and hands its raw value to
/// [`authenticate`]. On success the returned [`AuthContext`] is inserted into
/// the request extensions for handlers to extract:
///
/// ```
/// use chrono::Duration;
/// use quillpost_shared::auth::{jwt, middleware::authenticate};
///
/// let token = jwt::issue_token(5, "secret", Duration::hours(1)).unwrap();
/// let ctx = authenticate(&format!("Bearer {}", token), "secret").unwrap();
/// assert_eq!(ctx.user_id, 5);
/// ```
///
/// A missing header is treated as an empty string, which simply fails
/// validation. The token may be sent bare or with a `Bearer ` prefix.

use serde::{Deserialize, Serialize};

use super::jwt::{validate_token, JwtError};

/// Authentication context added to request extensions
///
/// Scoped to a single request; never shared across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID (the token subject)
    pub user_id: i64,
}

/// Why a request could not be authenticated
///
/// Callers log this but must not echo it to clients.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Header absent or empty
    #[error("Missing credentials")]
    MissingCredentials,

    /// Token failed validation
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] JwtError),
}

/// Strips an optional `Bearer ` scheme (case-insensitive) and surrounding whitespace
pub fn extract_token(header_value: &str) -> &str {
    let trimmed = header_value.trim();
    match trimmed.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer ") => trimmed[7..].trim_start(),
        _ => trimmed,
    }
}

/// Resolves an `Authorization` header value to an [`AuthContext`]
pub fn authenticate(header_value: &str, secret: &str) -> Result<AuthContext, AuthError> {
    let token = extract_token(header_value);
    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let claims = validate_token(token, secret)?;

    Ok(AuthContext {
        user_id: claims.sub,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{create_token, issue_token, Claims};
    use chrono::Duration;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_extract_token() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(extract_token("bearer abc"), "abc");
        assert_eq!(extract_token("abc.def.ghi"), "abc.def.ghi");
        assert_eq!(extract_token("  abc  "), "abc");
        assert_eq!(extract_token(""), "");
        assert_eq!(extract_token("Bearer "), "");
    }

    #[test]
    fn test_authenticate_bare_and_prefixed() {
        let token = issue_token(9, SECRET, Duration::hours(1)).unwrap();

        let ctx = authenticate(&token, SECRET).expect("bare token");
        assert_eq!(ctx.user_id, 9);

        let ctx = authenticate(&format!("Bearer {}", token), SECRET).expect("bearer token");
        assert_eq!(ctx, AuthContext { user_id: 9 });
    }

    #[test]
    fn test_authenticate_missing() {
        assert!(matches!(
            authenticate("", SECRET),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn test_authenticate_rejects_bad_tokens() {
        let wrong_secret = issue_token(1, "another-secret", Duration::hours(1)).unwrap();
        let expired = create_token(&Claims::new(1, Duration::seconds(-3600)).unwrap(), SECRET).unwrap();

        for header in [wrong_secret.as_str(), expired.as_str(), "garbage"] {
            assert!(matches!(
                authenticate(header, SECRET),
                Err(AuthError::InvalidToken(_))
            ));
        }
    }
}
