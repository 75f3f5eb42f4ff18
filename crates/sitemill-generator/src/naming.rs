//! File naming scheme for sitemap pages and indexes.
//!
//! Page `p` of index `i` is written to `s{i}-{p}.xml` and index `i` to
//! `i{i}.xml`. Both numbers are 1-based.

/// File name of sitemap page `page` belonging to index `index`.
#[must_use]
pub fn page_file_name(index: usize, page: usize) -> String {
    format!("s{index}-{page}.xml")
}

/// File name of sitemap index `index`.
#[must_use]
pub fn index_file_name(index: usize) -> String {
    format!("i{index}.xml")
}

/// Index number encoded in an index file name, if `name` is one.
#[must_use]
pub fn parse_index_file_name(name: &str) -> Option<usize> {
    let digits = name.strip_prefix('i')?.strip_suffix(".xml")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&n| n > 0)
}
