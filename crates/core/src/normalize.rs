/// Map raw column cells to their canonical comparable form: absent cells
/// become empty, surrounding whitespace is stripped, and entries that end up
/// empty are dropped. Order is preserved; the function is pure and
/// idempotent.
///
/// Case is left alone: equality downstream is on the trimmed string as
/// written, only the sort key uppercases.
///
/// # Examples
///
/// ```
/// use tabdiff_core::normalize;
///
/// let raw = vec![Some(" 0.A01 ".to_string()), None, Some("  ".to_string())];
/// assert_eq!(normalize(&raw), vec!["0.A01"]);
/// ```
#[must_use]
pub fn normalize(values: &[Option<String>]) -> Vec<String> {
    values
        .iter()
        .map(|cell| cell.as_deref().unwrap_or("").trim())
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .collect()
}
