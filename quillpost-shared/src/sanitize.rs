/// HTML sanitization for user-supplied text
///
/// Two policies are applied before validation:
///
/// - **Plain text** (titles, usernames, display names): every tag is stripped
///   and only the text survives.
/// - **Rich text** (blog content): a fixed set of structural and formatting
///   tags is kept, with no attributes. Everything else is stripped.
///
/// Under both policies `<script>` and `<style>` elements are removed together
/// with their contents. In rich text the surviving text is HTML-escaped. Plain
/// text keeps `&` and non-breaking spaces as typed, while `<` and `>` stay
/// escaped as `&lt;` / `&gt;`.
///
/// # Example
///
/// ```
/// use quillpost_shared::sanitize::{sanitize_plain_text, sanitize_rich_text};
///
/// assert_eq!(sanitize_plain_text("<b>Bob</b>"), "Bob");
/// assert_eq!(
///     sanitize_rich_text("<script>alert(1)</script><p>hi</p>"),
///     "<p>hi</p>"
/// );
/// ```

use ammonia::Builder;
use serde_json::Value;

/// Tags permitted in rich text, all without attributes
pub const RICH_TEXT_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "u", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li",
    "blockquote",
];

/// Elements dropped along with everything inside them
const STRIPPED_WITH_BODY: &[&str] = &["script", "style"];

fn policy(tags: &[&'static str]) -> Builder<'static> {
    let mut builder = Builder::empty();
    builder
        .add_tags(tags.iter().copied())
        .add_clean_content_tags(STRIPPED_WITH_BODY.iter().copied())
        .strip_comments(true);
    builder
}

/// Removes all markup, keeping only text
///
/// The serializer entity-encodes `&` and U+00A0; both are decoded again so
/// the stored value and its length match what the user typed. Decoding is a
/// single pass, so an encoded `&lt;` never turns back into a bare `<`.
pub fn sanitize_plain_text(input: &str) -> String {
    policy(&[])
        .clean(input)
        .to_string()
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

/// Keeps only [`RICH_TEXT_TAGS`] (attribute-free) and drops everything else
pub fn sanitize_rich_text(input: &str) -> String {
    policy(RICH_TEXT_TAGS).clean(input).to_string()
}

/// Borrows the string inside a JSON value; any other JSON type yields `""`
///
/// Request bodies are read loosely so that a wrongly-typed field sanitizes to
/// an empty string and is then rejected by validation.
pub fn text_of(value: &Value) -> &str {
    value.as_str().unwrap_or("")
}
