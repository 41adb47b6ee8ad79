/// Lower-cases the first character of `src`, leaving the rest untouched.
pub fn lower_first(src: &str) -> String {
    let mut chars = src.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compares two identifiers the way schema metadata views do, ignoring case.
pub fn eq_ignore_case(lhs: &str, rhs: &str) -> bool {
    lhs.eq_ignore_ascii_case(rhs) || lhs.to_lowercase() == rhs.to_lowercase()
}

pub fn pluralize(src: &str) -> String {
    pluralizer::pluralize(src, 2, false)
}

/// Appends `n` to `base`, except for the first candidate which is `base`
/// itself. Produces `base`, `base2`, `base3`, ...
pub fn numbered(base: &str, n: usize) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{base}{n}")
    }
}
