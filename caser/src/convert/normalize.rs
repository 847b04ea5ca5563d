/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::style::Style;

/// Normalize a string written in `style` to snake case.
pub fn to_snake(style: Style, val: &str) -> String {
    match style {
        Style::Pascal => pascal_to_snake_case(val),
        Style::Camel => camel_to_snake_case(val),
        Style::Kebab => kebab_to_snake_case(val),
        Style::Space => space_to_snake_case(val),
        Style::Snake => val.to_string(),
    }
}

/// Convert PascalCase to snake_case. An underscore is inserted before
/// every uppercase letter that starts a new word, so runs of capitals
/// stay together: `HTTPServer` becomes `http_server`.
pub fn pascal_to_snake_case(val: &str) -> String {
    let mut res = String::with_capacity(val.len() + val.len() / 2);
    let mut chars = val.chars().peekable();
    while let Some(c) = chars.next() {
        /* The last character never starts a word. */
        if let Some(next) = chars.peek() {
            if c.is_uppercase() && !next.is_uppercase() {
                res.push('_');
            }
        }
        res.extend(c.to_lowercase());
    }
    res.trim_matches('_').to_string()
}

pub fn camel_to_snake_case(val: &str) -> String {
    pascal_to_snake_case(val)
}

pub fn kebab_to_snake_case(val: &str) -> String {
    val.replace('-', "_").to_lowercase()
}

pub fn space_to_snake_case(val: &str) -> String {
    val.replace(' ', "_").to_lowercase()
}
