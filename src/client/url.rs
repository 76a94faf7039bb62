//! Request URL construction.
//!
//! URL building is a pure function of the configuration and the request
//! descriptor, producing URLs of the shape:
//!
//! ```text
//! <api_root>/<resource>[/<item_id>][?<key>=<value>][&|?token=<access_token>]
//! ```

/// Builds the full request URL from its parts.
///
/// The resource has leading/trailing slashes stripped before joining onto the
/// root. Filter keys and values are percent-encoded. The token value has any
/// leading/trailing `?` characters stripped before encoding, and is appended
/// with `&` when a query string already exists, `?` otherwise.
pub(crate) fn build_url(
    api_root: &str,
    resource: &str,
    item_id: Option<&str>,
    filter: Option<(&str, &str)>,
    access_token: Option<&str>,
) -> String {
    let mut url = format!("{api_root}/{}", resource.trim_matches('/'));

    if let Some(item_id) = item_id {
        url.push('/');
        url.push_str(item_id);
    }

    if let Some((key, value)) = filter {
        url.push('?');
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }

    if let Some(token) = access_token {
        let separator = if url.contains('?') { '&' } else { '?' };
        url.push(separator);
        url.push_str("token=");
        url.push_str(&urlencoding::encode(token.trim_matches('?')));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "https://api.example.com";

    #[test]
    fn test_base_path_joins_root_and_resource() {
        let url = build_url(ROOT, "users", None, None, None);
        assert_eq!(url, "https://api.example.com/users");
    }

    #[test]
    fn test_resource_leading_slash_stripped() {
        let url = build_url(ROOT, "/users", None, None, None);
        assert_eq!(url, "https://api.example.com/users");
    }

    #[test]
    fn test_resource_trailing_slash_stripped() {
        let url = build_url(ROOT, "users/", None, None, None);
        assert_eq!(url, "https://api.example.com/users");
    }

    #[test]
    fn test_resource_surrounding_slashes_stripped() {
        let url = build_url(ROOT, "//users//", None, None, None);
        assert_eq!(url, "https://api.example.com/users");
    }

    #[test]
    fn test_item_id_appended_as_path_segment() {
        let url = build_url(ROOT, "users", Some("42"), None, None);
        assert_eq!(url, "https://api.example.com/users/42");
    }

    #[test]
    fn test_filter_appended_as_query_string() {
        let url = build_url(ROOT, "users", None, Some(("status", "open")), None);
        assert_eq!(url, "https://api.example.com/users?status=open");
    }

    #[test]
    fn test_filter_value_is_percent_encoded() {
        let url = build_url(ROOT, "users", None, Some(("name", "a b&c")), None);
        assert_eq!(url, "https://api.example.com/users?name=a%20b%26c");
    }

    #[test]
    fn test_filter_key_is_percent_encoded() {
        let url = build_url(ROOT, "users", None, Some(("rank order", "1")), None);
        assert_eq!(url, "https://api.example.com/users?rank%20order=1");
    }

    #[test]
    fn test_token_appended_with_question_mark_when_no_query() {
        let url = build_url(ROOT, "users", None, None, Some("abc123"));
        assert_eq!(url, "https://api.example.com/users?token=abc123");
    }

    #[test]
    fn test_token_appended_with_ampersand_after_filter() {
        let url = build_url(ROOT, "users", None, Some(("status", "open")), Some("abc123"));
        assert_eq!(
            url,
            "https://api.example.com/users?status=open&token=abc123"
        );
    }

    #[test]
    fn test_token_leading_question_mark_stripped() {
        let url = build_url(ROOT, "users", None, None, Some("?abc123"));
        assert_eq!(url, "https://api.example.com/users?token=abc123");
    }

    #[test]
    fn test_token_trailing_question_mark_stripped() {
        let url = build_url(ROOT, "users", None, None, Some("abc123?"));
        assert_eq!(url, "https://api.example.com/users?token=abc123");
    }

    #[test]
    fn test_all_parts_combined() {
        let url = build_url(
            ROOT,
            "/users/",
            Some("42"),
            Some(("status", "open")),
            Some("?abc123"),
        );
        assert_eq!(
            url,
            "https://api.example.com/users/42?status=open&token=abc123"
        );
    }

    #[test]
    fn test_item_id_without_filter_or_token_has_no_query() {
        let url = build_url(ROOT, "users", Some("42"), None, None);
        assert!(!url.contains('?'));
        assert!(url.ends_with("/42"));
    }
}
