/// Removes every `"` and `'` from the template.
///
/// This is a plain character filter, not shell unquoting: quotes are dropped
/// wherever they appear, paired or not.
#[must_use]
pub fn strip_quotes(template: &str) -> String {
    template.chars().filter(|c| !matches!(c, '"' | '\'')).collect()
}
