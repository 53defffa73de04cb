/// API route handlers
///
/// - `health`: Health check endpoint
/// - `user`: Signup and signin
/// - `blog`: Create, update, list and fetch posts (bearer token required)

pub mod blog;
pub mod health;
pub mod user;
