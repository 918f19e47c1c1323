//! Navigation targets for page-size changes and server-side page links.
//!
//! Builds the URL a browser would load: query parameters are replaced in
//! place when present, appended otherwise, and every other parameter is
//! left untouched.

use url::Url;

/// Location used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost/admin/";

/// Query parameter holding the one-based page number.
pub const PAGE_PARAM: &str = "page";
/// Query parameter holding the rows per page.
pub const PAGE_SIZE_PARAM: &str = "page_size";

/// [`DEFAULT_BASE_URL`] parsed.
pub fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("static URL is valid")
}

/// `base` with each `(key, value)` set.
///
/// The first occurrence of a key keeps its position and takes the new
/// value; later duplicates are dropped. Absent keys are appended in the
/// order given.
pub fn with_params(base: &Url, params: &[(&str, String)]) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut applied = vec![false; params.len()];

    for (key, value) in base.query_pairs() {
        match params.iter().position(|(k, _)| *k == key) {
            Some(index) if applied[index] => {}
            Some(index) => {
                applied[index] = true;
                pairs.push((key.into_owned(), params[index].1.clone()));
            }
            None => pairs.push((key.into_owned(), value.into_owned())),
        }
    }
    for (index, (key, value)) in params.iter().enumerate() {
        if !applied[index] {
            pairs.push((key.to_string(), value.clone()));
        }
    }

    let mut url = base.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}

/// Target of a page-size change: `page_size=n` and back to `page=1`.
pub fn page_size_url(base: &Url, page_size: usize) -> Url {
    with_params(
        base,
        &[
            (PAGE_SIZE_PARAM, page_size.to_string()),
            (PAGE_PARAM, "1".to_string()),
        ],
    )
}

/// Target of a page link: `page=n`, page size unchanged.
pub fn page_link_url(base: &Url, page: usize) -> Url {
    with_params(base, &[(PAGE_PARAM, page.to_string())])
}

/// Positive integer value of `key` in the query string, if any.
pub fn usize_param(url: &Url, key: &str) -> Option<usize> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid test URL")
    }

    #[test]
    fn page_size_url_appends_missing_params() {
        let target = page_size_url(&url("http://localhost/admin/products"), 25);
        assert_eq!(
            target.as_str(),
            "http://localhost/admin/products?page_size=25&page=1"
        );
    }

    #[test]
    fn page_size_url_replaces_in_place_and_keeps_others() {
        let base = url("http://localhost/admin/orders?page=4&status=paid&page_size=10");

        let target = page_size_url(&base, 50);

        assert_eq!(
            target.as_str(),
            "http://localhost/admin/orders?page=1&status=paid&page_size=50"
        );
    }

    #[test]
    fn duplicate_params_collapse_to_first_position() {
        let base = url("http://localhost/admin/?page=2&q=x&page=3");

        let target = page_link_url(&base, 7);

        assert_eq!(target.as_str(), "http://localhost/admin/?page=7&q=x");
    }

    #[test]
    fn page_link_keeps_page_size() {
        let base = url("http://localhost/admin/?page_size=25");
        let target = page_link_url(&base, 3);

        assert_eq!(usize_param(&target, PAGE_SIZE_PARAM), Some(25));
        assert_eq!(usize_param(&target, PAGE_PARAM), Some(3));
    }

    #[test]
    fn usize_param_ignores_invalid_values() {
        let target = url("http://localhost/admin/?page=abc&page_size=0");

        assert_eq!(usize_param(&target, PAGE_PARAM), None);
        assert_eq!(usize_param(&target, PAGE_SIZE_PARAM), None);
        assert_eq!(usize_param(&target, "missing"), None);
    }

    #[test]
    fn default_base_url_is_local_admin() {
        assert_eq!(default_base_url().as_str(), DEFAULT_BASE_URL);
    }
}
