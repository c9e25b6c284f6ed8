//! String transformation utilities for code generation
//!
//! Identifier casing for the client generators plus the naive
//! capitalization/pluralization used when deriving paths, tags, and GraphQL
//! type names from resource names.

/// Converts a string to snake_case for Python identifiers.
///
/// Handles camelCase, PascalCase, kebab-case, and space-separated input.
///
/// # Examples
/// ```
/// use apiforge::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("listUsers"), "list_users");
/// assert_eq!(to_snake_case("getUserById"), "get_user_by_id");
/// assert_eq!(to_snake_case("find-pets-by-status"), "find_pets_by_status");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            out.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else {
            // Separator: collapse runs into a single underscore
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_is_lowercase = false;
        }
    }

    out.trim_end_matches('_').to_string()
}

/// Converts a string to UpperCamelCase (PascalCase) for type names.
///
/// # Examples
/// ```
/// use apiforge::generation::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("list_users"), "ListUsers");
/// assert_eq!(to_proper_case("user-profile"), "UserProfile");
/// ```
pub fn to_proper_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Converts a string to camelCase for TypeScript identifiers.
///
/// # Examples
/// ```
/// use apiforge::generation::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("list_users"), "listUsers");
/// assert_eq!(to_camel_case("GetUserById"), "getUserById");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_proper_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Naive capitalize-first-letter, the only normalization applied to
/// resource names when deriving tags.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Naive singular form: strips one trailing `s` unless the word ends in `ss`.
pub fn singularize(s: &str) -> String {
    if s.len() > 1 && s.ends_with('s') && !s.ends_with("ss") {
        s[..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Naive plural form: appends `s` unless one is already there.
pub fn pluralize(s: &str) -> String {
    if s.ends_with('s') {
        s.to_string()
    } else {
        format!("{s}s")
    }
}
