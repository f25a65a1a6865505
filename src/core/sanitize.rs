// src/core/sanitize.rs

/// Trim every text fragment and glue the non-empty ones together with no separator.
/// Matches how the rendered cards read once markup is gone.
pub fn join_stripped<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Keep a language code safe for use inside a file name.
pub fn file_component(s: &str) -> String {
    let out: String = s
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() { s!("unknown") } else { out }
}
