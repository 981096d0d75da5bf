//! Identifier casing and list helpers used while composing generated source
//!
//! All transforms are total and depend on nothing but their input. Words are
//! split on `-`, `_`, whitespace and lower-to-upper boundaries; digits stay
//! attached to the word they follow.

use heck::{ToKebabCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase};

/// Represents a case transformation for identifier derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// PascalCase (e.g., AuthMethod)
    PascalCase,
    /// snake_case (e.g., auth_method)
    SnakeCase,
    /// kebab-case (e.g., auth-method)
    KebabCase,
    /// Title Case (e.g., Auth Method)
    TitleCase,
    /// SHOUTY_SNAKE_CASE (e.g., AUTH_METHOD)
    ShoutySnakeCase,
}

impl CaseTransform {
    /// Apply case transformation to a string
    pub fn apply(&self, input: &str) -> String {
        match self {
            CaseTransform::PascalCase => input.to_pascal_case(),
            CaseTransform::SnakeCase => input.to_snake_case(),
            CaseTransform::KebabCase => input.to_kebab_case(),
            CaseTransform::TitleCase => input.to_title_case(),
            CaseTransform::ShoutySnakeCase => input.to_shouty_snake_case(),
        }
    }
}

/// Token-separated input to a PascalCase identifier.
///
/// `""` maps to `""`, and input that is already PascalCase is returned
/// unchanged.
pub fn pascal_case(input: &str) -> String {
    CaseTransform::PascalCase.apply(input)
}

/// `auth-method` to `auth_method`
pub fn snake_case(input: &str) -> String {
    CaseTransform::SnakeCase.apply(input)
}

/// `AuthMethod` to `auth-method`
pub fn kebab_case(input: &str) -> String {
    CaseTransform::KebabCase.apply(input)
}

/// `AuthMethod` to `Auth Method`
pub fn title_case(input: &str) -> String {
    CaseTransform::TitleCase.apply(input)
}

/// `AuthMethod` to `AUTH_METHOD`
pub fn shouty_snake_case(input: &str) -> String {
    CaseTransform::ShoutySnakeCase.apply(input)
}

/// Whether `action` appears in `list`
pub fn has_action<T: PartialEq>(list: &[T], action: &T) -> bool {
    list.iter().any(|candidate| candidate == action)
}

/// Whether `input` is usable verbatim as a Rust identifier.
///
/// Keywords and `_` are rejected; raw identifiers such as `r#type` are
/// accepted.
pub fn is_rust_identifier(input: &str) -> bool {
    syn::parse_str::<syn::Ident>(input)
        .map(|ident| ident == input)
        .unwrap_or(false)
}
