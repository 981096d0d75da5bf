//! `${name}` placeholder expansion for fragment text

use std::collections::BTreeMap;

/// Resolves `${name}` placeholders against a fixed set of values.
///
/// Expansion is a single pass: substituted values are never rescanned, so a
/// value containing `${` is copied through literally.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderResolver {
    values: BTreeMap<&'static str, String>,
}

impl PlaceholderResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for a placeholder
    pub fn add_value(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    /// Check if a placeholder value is provided
    pub fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Value of a placeholder, if provided
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Expand every placeholder in `template`.
    ///
    /// Fails on an unknown name or an unterminated `${`.
    pub fn expand(&self, template: &str) -> Result<String, String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find('}')
                .ok_or_else(|| format!("unterminated placeholder near {:?}", truncate(after)))?;
            let name = &after[..end];
            let value = self
                .values
                .get(name)
                .ok_or_else(|| format!("unknown placeholder ${{{name}}}"))?;
            out.push_str(value);
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(24) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
