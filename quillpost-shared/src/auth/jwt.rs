/// JWT token generation and validation module
///
/// Tokens bind a request to a user identity. They are signed with HS256 using a
/// server-held secret and always carry an expiration claim. There is no
/// server-side revocation: validity is a function of signature and expiry only.
///
/// # Claims
///
/// - `sub`: User ID
/// - `iss`: Issuer (always "quillpost")
/// - `iat` / `nbf`: Issue time
/// - `exp`: Expiration time
///
/// # Example
///
/// ```
/// use quillpost_shared::auth::jwt::{create_token, validate_token, Claims};
/// use chrono::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new(42, Duration::hours(24))?;
/// let token = create_token(&claims, "your-secret-key")?;
///
/// let validated = validate_token(&token, "your-secret-key")?;
/// assert_eq!(validated.sub, 42);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Issuer claim written into and required on every token
pub const ISSUER: &str = "quillpost";

/// Default token lifetime when none is configured
pub const DEFAULT_EXPIRATION_HOURS: i64 = 24;

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Signature, structure or claim validation failed
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Token was issued by someone else
    #[error("Invalid issuer")]
    InvalidIssuer,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - User ID
    pub sub: i64,

    /// Issuer - Always "quillpost"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,
}

impl Claims {
    /// Creates claims for a user that expire after `expires_in`
    ///
    /// A negative duration produces an already-expired token, which is only
    /// useful in tests.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::CreateError` if the expiration falls outside the
    /// representable date range.
    pub fn new(user_id: i64, expires_in: Duration) -> Result<Self, JwtError> {
        let now = Utc::now();
        let expiration = now.checked_add_signed(expires_in).ok_or_else(|| {
            JwtError::CreateError(format!("Token lifetime out of range: {}", expires_in))
        })?;

        Ok(Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            nbf: now.timestamp(),
        })
    }

    /// Checks if token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Creates a signed JWT token from claims
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Issues a token for `user_id` with the given lifetime
///
/// Shorthand for building [`Claims`] and calling [`create_token`].
pub fn issue_token(user_id: i64, secret: &str, expires_in: Duration) -> Result<String, JwtError> {
    create_token(&Claims::new(user_id, expires_in)?, secret)
}

/// Validates a JWT token and extracts claims
///
/// Verifies signature, expiration, not-before and issuer.
///
/// # Errors
///
/// - `JwtError::Expired` if `exp` is in the past
/// - `JwtError::InvalidIssuer` if `iss` is not "quillpost"
/// - `JwtError::ValidationError` for malformed tokens and bad signatures
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}
