//! Placeholder substitution
//!
//! Replacement is first-occurrence-only per placeholder: a template that
//! repeats `{error}` only has its first instance filled. This matches the
//! original engine's behavior and is a preserved quirk, not a bug.

/// Fill `{name}` placeholders in a template from a placeholder→value map.
///
/// Each key replaces at most its first occurrence; unknown placeholders in
/// the template are left as-is.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        let marker = format!("{{{}}}", name);
        out = out.replacen(&marker, value, 1);
    }
    out
}
