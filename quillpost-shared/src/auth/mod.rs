/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: JWT token issuing and validation
/// - [`middleware`]: Bearer header resolution into an [`middleware::AuthContext`]
///
/// # Example
///
/// ```no_run
/// use quillpost_shared::auth::password::{hash_password, verify_password};
/// use quillpost_shared::auth::jwt::{create_token, validate_token, Claims};
/// use chrono::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let token = create_token(&Claims::new(1, Duration::hours(24))?, "secret-key")?;
/// assert_eq!(validate_token(&token, "secret-key")?.sub, 1);
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
