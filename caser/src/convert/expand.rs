/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::style::Style;

/// Expand a snake case string to `style`.
pub fn from_snake(style: Style, val: &str) -> String {
    match style {
        Style::Pascal => snake_to_pascal_case(val),
        Style::Camel => snake_to_camel_case(val),
        Style::Kebab => snake_to_kebab_case(val),
        Style::Space => snake_to_space_case(val),
        Style::Snake => val.to_string(),
    }
}

/// Drop the underscores, uppercasing the character following each one.
fn join_words(val: &str) -> String {
    let mut res = String::with_capacity(val.len());
    let mut after_underscore = false;
    for c in val.chars() {
        match c {
            '_' => after_underscore = true,
            c if after_underscore => {
                res.extend(c.to_uppercase());
                after_underscore = false;
            }
            c => res.push(c),
        }
    }
    res
}

pub fn snake_to_pascal_case(val: &str) -> String {
    let joined = join_words(val);
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert snake_case to camelCase. The first character keeps its case,
/// so a snake case string starting with a capital yields a camel case
/// string starting with a capital.
pub fn snake_to_camel_case(val: &str) -> String {
    join_words(val)
}

pub fn snake_to_kebab_case(val: &str) -> String {
    val.replace('_', "-").trim_matches('-').to_string()
}

pub fn snake_to_space_case(val: &str) -> String {
    val.replace('_', " ")
}
