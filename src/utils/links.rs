//! 链接筛选
//!
//! Open and copy actions only ever see values that look like web links.
//! Anything else is dropped without an error.

/// 可识别的协议前缀
const LINK_PREFIXES: &[&str] = &["http://", "https://"];

/// Whether a value starts with a recognized scheme prefix (case-insensitive)
///
/// Leading whitespace disqualifies the value.
pub fn is_link(value: &str) -> bool {
    LINK_PREFIXES.iter().any(|prefix| {
        value
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Keep only the link-like values, preserving order
pub fn openable_links<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter(|v| is_link(v.as_ref()))
        .map(|v| v.as_ref().to_string())
        .collect()
}

/// Clipboard payload: one link per line
pub fn join_links(links: &[String]) -> String {
    links.join("\n")
}
