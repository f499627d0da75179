//! Helpers for reading optional free-text fields the way clinicians fill
//! them in: an absent field and an empty string both mean "not recorded".

/// The recorded text of an optional field, or `""` when absent.
pub fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// True when the field carries a non-empty value.
pub fn is_present(field: &Option<String>) -> bool {
    !text(field).is_empty()
}

/// Case-insensitive substring check against a recorded field.
pub fn contains(field: &Option<String>, needle: &str) -> bool {
    text(field).to_lowercase().contains(needle)
}

/// True when any of the given keywords appears (case-insensitively) in the
/// recorded text. Deliberately a plain substring check — the interview
/// fields are free text and the matching stays simple.
pub fn any_keyword(field: &Option<String>, keywords: &[&str]) -> bool {
    let lowered = text(field).to_lowercase();
    keywords.iter().any(|kw| lowered.contains(kw))
}
