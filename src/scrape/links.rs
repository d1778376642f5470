//! Detail link resolution
//!
//! Calendar listings link their detail pages with site-relative hrefs such as
//! `/events/42`. These are appended to a configured base (which may carry its
//! own path), rather than resolved with RFC 3986 semantics, so the base path
//! is never dropped.

use url::Url;

/// Turns a raw `href` into an absolute URL for the secondary fetch
///
/// Returns `None` when the href does not point at a fetchable page:
/// - empty hrefs and fragment-only anchors (`#`, `#details`)
/// - `javascript:`, `mailto:`, `tel:` and `data:` schemes
/// - protocol-relative hrefs (`//host/path`)
/// - results that are not valid HTTP(S) URLs
///
/// # Example
///
/// ```
/// use du_harvest::scrape::resolve_detail_link;
///
/// assert_eq!(
///     resolve_detail_link("/events/42", "https://www.du.edu/calendar").as_deref(),
///     Some("https://www.du.edu/calendar/events/42")
/// );
/// ```
pub fn resolve_detail_link(href: &str, base: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') || href.starts_with("//") {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if ["javascript:", "mailto:", "tel:", "data:"]
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return None;
    }

    let candidate = if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            href.trim_start_matches('/')
        )
    };

    match Url::parse(&candidate) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(candidate),
        Ok(url) => {
            tracing::debug!(%href, scheme = url.scheme(), "Skipping non-HTTP detail link");
            None
        }
        Err(e) => {
            tracing::warn!(%href, error = %e, "Ignoring unusable detail link");
            None
        }
    }
}
