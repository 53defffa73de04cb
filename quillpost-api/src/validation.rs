/// Request schemas
///
/// Bodies are first read loosely (every field is a raw JSON value, absent
/// fields are `null`), then sanitized into typed inputs, then validated.
/// A wrongly-typed field therefore sanitizes to `""` and fails validation
/// instead of failing deserialization.
///
/// | Schema | Constraints |
/// |---|---|
/// | [`SignUpInput`] | username 1-50, password 6+, name 1-100 |
/// | [`SignInInput`] | username and password non-empty |
/// | [`CreateBlogInput`] | title 1-200, content non-empty |
/// | [`UpdateBlogInput`] | id positive integer, title 1-200, content non-empty |
///
/// Lengths count characters of the sanitized text.

use crate::error::ApiResult;
use quillpost_shared::sanitize::{sanitize_plain_text, sanitize_rich_text, text_of};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

/// Raw signup/signin body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsPayload {
    pub username: Value,
    pub password: Value,
    pub name: Value,
}

/// Raw create/update body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlogPayload {
    pub id: Value,
    pub title: Value,
    pub content: Value,
}

#[derive(Debug, Clone, Validate)]
pub struct SignUpInput {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Validate)]
pub struct SignInInput {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateBlogInput {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateBlogInput {
    #[validate(range(min = 1, message = "Id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

// Passwords are hashed, never rendered, so they are taken verbatim.

impl From<&CredentialsPayload> for SignUpInput {
    fn from(payload: &CredentialsPayload) -> Self {
        Self {
            username: sanitize_plain_text(text_of(&payload.username)),
            password: text_of(&payload.password).to_string(),
            name: sanitize_plain_text(text_of(&payload.name)),
        }
    }
}

impl From<&CredentialsPayload> for SignInInput {
    fn from(payload: &CredentialsPayload) -> Self {
        Self {
            username: sanitize_plain_text(text_of(&payload.username)),
            password: text_of(&payload.password).to_string(),
        }
    }
}

impl From<&BlogPayload> for CreateBlogInput {
    fn from(payload: &BlogPayload) -> Self {
        Self {
            title: sanitize_plain_text(text_of(&payload.title)),
            content: sanitize_rich_text(text_of(&payload.content)),
        }
    }
}

impl From<&BlogPayload> for UpdateBlogInput {
    fn from(payload: &BlogPayload) -> Self {
        Self {
            id: integer_of(&payload.id),
            title: sanitize_plain_text(text_of(&payload.title)),
            content: sanitize_rich_text(text_of(&payload.content)),
        }
    }
}

/// Reads a JSON number with no fractional part (`7` or `7.0`)
///
/// Anything else falls to 0 and fails the range check.
fn integer_of(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        })
        .unwrap_or(0)
}

/// Sanitizes `payload` into `I` and validates it
pub fn sanitize_and_validate<'a, P, I>(payload: &'a P) -> ApiResult<I>
where
    I: From<&'a P> + Validate,
{
    let input = I::from(payload);
    input.validate()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use serde_json::json;

    fn blog_payload(value: Value) -> BlogPayload {
        serde_json::from_value(value).unwrap()
    }

    fn credentials(value: Value) -> CredentialsPayload {
        serde_json::from_value(value).unwrap()
    }

    fn failed_fields(err: ApiError) -> Vec<String> {
        match err {
            ApiError::ValidationError(details) => details.into_iter().map(|d| d.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_signup_valid() {
        let payload = credentials(json!({
            "username": "<b>ada</b>",
            "password": "secret1",
            "name": "Ada Lovelace"
        }));

        let input: SignUpInput = sanitize_and_validate(&payload).unwrap();
        assert_eq!(input.username, "ada");
        assert_eq!(input.password, "secret1");
        assert_eq!(input.name, "Ada Lovelace");
    }

    #[test]
    fn test_signup_limits() {
        let payload = credentials(json!({
            "username": "u".repeat(51),
            "password": "12345",
            "name": ""
        }));

        let err = sanitize_and_validate::<_, SignUpInput>(&payload).unwrap_err();
        assert_eq!(failed_fields(err), vec!["name", "password", "username"]);
    }

    #[test]
    fn test_signup_username_that_sanitizes_to_nothing() {
        let payload = credentials(json!({
            "username": "<script>x</script>",
            "password": "secret1",
            "name": "Ada"
        }));

        let err = sanitize_and_validate::<_, SignUpInput>(&payload).unwrap_err();
        assert_eq!(failed_fields(err), vec!["username"]);
    }

    #[test]
    fn test_signin_requires_both_fields() {
        let err = sanitize_and_validate::<_, SignInInput>(&credentials(json!({}))).unwrap_err();
        assert_eq!(failed_fields(err), vec!["password", "username"]);

        let ok: SignInInput =
            sanitize_and_validate(&credentials(json!({"username": "ada", "password": "x"}))).unwrap();
        assert_eq!(ok.username, "ada");
    }

    #[test]
    fn test_create_blog_title_length() {
        let at_limit = blog_payload(json!({"title": "t".repeat(200), "content": "<p>c</p>"}));
        assert!(sanitize_and_validate::<_, CreateBlogInput>(&at_limit).is_ok());

        let over = blog_payload(json!({"title": "t".repeat(201), "content": "<p>c</p>"}));
        let err = sanitize_and_validate::<_, CreateBlogInput>(&over).unwrap_err();
        assert_eq!(failed_fields(err), vec!["title"]);
    }

    #[test]
    fn test_create_blog_sanitizes_fields() {
        let payload = blog_payload(json!({
            "title": "<i>Hello</i>",
            "content": "<script>alert(1)</script><p>hi</p>"
        }));

        let input: CreateBlogInput = sanitize_and_validate(&payload).unwrap();
        assert_eq!(input.title, "Hello");
        assert_eq!(input.content, "<p>hi</p>");
    }

    #[test]
    fn test_create_blog_non_string_fields() {
        let payload = blog_payload(json!({"title": 5, "content": ["x"]}));
        let err = sanitize_and_validate::<_, CreateBlogInput>(&payload).unwrap_err();
        assert_eq!(failed_fields(err), vec!["content", "title"]);
    }

    #[test]
    fn test_content_of_only_script_is_empty() {
        let payload = blog_payload(json!({"title": "T", "content": "<script>evil()</script>"}));
        let err = sanitize_and_validate::<_, CreateBlogInput>(&payload).unwrap_err();
        assert_eq!(failed_fields(err), vec!["content"]);
    }

    #[test]
    fn test_update_blog_id() {
        for id in [json!(0), json!(-4), json!("7"), json!(1.5), json!(null)] {
            let payload = blog_payload(json!({"id": id, "title": "T", "content": "C"}));
            let err = sanitize_and_validate::<_, UpdateBlogInput>(&payload).unwrap_err();
            assert_eq!(failed_fields(err), vec!["id"]);
        }

        for id in [json!(7), json!(7.0)] {
            let payload = blog_payload(json!({"id": id, "title": "T", "content": "C"}));
            let input: UpdateBlogInput = sanitize_and_validate(&payload).unwrap();
            assert_eq!(input.id, 7);
        }
    }

    #[test]
    fn test_update_blog_id_out_of_range_float() {
        let payload = blog_payload(json!({"id": 1e300, "title": "T", "content": "C"}));
        let err = sanitize_and_validate::<_, UpdateBlogInput>(&payload).unwrap_err();
        assert_eq!(failed_fields(err), vec!["id"]);
    }

    #[test]
    fn test_ampersand_counts_as_one_character() {
        let title = format!("{}&", "t".repeat(199));
        let payload = blog_payload(json!({"title": title, "content": "<p>c</p>"}));

        let input: CreateBlogInput = sanitize_and_validate(&payload).unwrap();
        assert_eq!(input.title, title);

        let payload = blog_payload(json!({"title": "Q&A", "content": "<p>c</p>"}));
        let input: CreateBlogInput = sanitize_and_validate(&payload).unwrap();
        assert_eq!(input.title, "Q&A");
    }

    #[test]
    fn test_signup_name_with_ampersand_at_limit() {
        let name = format!("{}&", "n".repeat(99));
        let payload = credentials(json!({"username": "ada", "password": "secret1", "name": name}));

        let input: SignUpInput = sanitize_and_validate(&payload).unwrap();
        assert_eq!(input.name, name);
    }
}
