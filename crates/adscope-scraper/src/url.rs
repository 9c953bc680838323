//! Ad Library URL parsing.

use url::Url;

/// Outcome of parsing a user-supplied Ad Library URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAdLibraryUrl {
    pub page_id: Option<String>,
    pub valid: bool,
}

/// Extract the Facebook page ID from an Ad Library URL.
///
/// Accepted formats:
/// - `https://www.facebook.com/ads/library/?...&view_all_page_id=123456789`
/// - `https://www.facebook.com/ads/library/?id=123456789`
/// - `https://facebook.com/ads/library?view_all_page_id=123456789`
///
/// A URL is valid when the host is `facebook.com` (or a subdomain) and the
/// path contains `/ads/library`. The page ID may still be absent from a
/// valid URL.
pub fn parse_ad_library_url(raw: &str) -> ParsedAdLibraryUrl {
    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(_) => {
            return ParsedAdLibraryUrl {
                page_id: None,
                valid: false,
            }
        }
    };

    let host = parsed.host_str().unwrap_or("").to_lowercase();
    let is_facebook_host = host == "facebook.com" || host.ends_with(".facebook.com");
    let is_ads_path = parsed.path().contains("/ads/library");

    let page_id = parsed
        .query_pairs()
        .find(|(key, _)| key == "view_all_page_id")
        .or_else(|| parsed.query_pairs().find(|(key, _)| key == "id"))
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());

    ParsedAdLibraryUrl {
        page_id,
        valid: is_facebook_host && is_ads_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_all_page_id() {
        let parsed = parse_ad_library_url(
            "https://www.facebook.com/ads/library/?active_status=all&ad_type=all&country=US&view_all_page_id=123456789",
        );
        assert!(parsed.valid);
        assert_eq!(parsed.page_id.as_deref(), Some("123456789"));
    }

    #[test]
    fn test_parse_id_param() {
        let parsed = parse_ad_library_url("https://www.facebook.com/ads/library/?id=987654321");
        assert!(parsed.valid);
        assert_eq!(parsed.page_id.as_deref(), Some("987654321"));
    }

    #[test]
    fn test_parse_bare_host_no_trailing_slash() {
        let parsed =
            parse_ad_library_url("https://facebook.com/ads/library?view_all_page_id=42");
        assert!(parsed.valid);
        assert_eq!(parsed.page_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_view_all_page_id_wins_over_id() {
        let parsed = parse_ad_library_url(
            "https://www.facebook.com/ads/library/?id=2&view_all_page_id=1",
        );
        assert_eq!(parsed.page_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_non_facebook_host_is_invalid() {
        let parsed = parse_ad_library_url("https://example.com/ads/library/?id=1");
        assert!(!parsed.valid);
    }

    #[test]
    fn test_spoofed_host_suffix_is_invalid() {
        let parsed = parse_ad_library_url("https://notfacebook.com/ads/library/?id=1");
        assert!(!parsed.valid);
    }

    #[test]
    fn test_wrong_path_is_invalid() {
        let parsed = parse_ad_library_url("https://www.facebook.com/profile/?id=1");
        assert!(!parsed.valid);
    }

    #[test]
    fn test_garbage_is_invalid() {
        let parsed = parse_ad_library_url("not a url at all");
        assert!(!parsed.valid);
        assert_eq!(parsed.page_id, None);
    }

    #[test]
    fn test_valid_url_without_page_id() {
        let parsed = parse_ad_library_url("https://www.facebook.com/ads/library/");
        assert!(parsed.valid);
        assert_eq!(parsed.page_id, None);
    }
}
