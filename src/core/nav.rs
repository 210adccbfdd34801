pub const HOME_PAGE: &str = "index.html";

/// File name of the current page: the last path segment, or the home page
/// when the path ends in `/` or is empty.
#[inline]
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => HOME_PAGE,
    }
}

/// Indices of the links whose `href` equals `current`. Links without an
/// `href` attribute never match.
pub fn matching_links<S: AsRef<str>>(current: &str, hrefs: &[Option<S>]) -> Vec<usize> {
    hrefs
        .iter()
        .enumerate()
        .filter_map(|(i, href)| match href {
            Some(h) if h.as_ref() == current => Some(i),
            _ => None,
        })
        .collect()
}
