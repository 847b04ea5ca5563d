/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod expand;
mod normalize;

#[cfg(test)]
mod test;

pub use expand::{
    from_snake, snake_to_camel_case, snake_to_kebab_case,
    snake_to_pascal_case, snake_to_space_case,
};
pub use normalize::{
    camel_to_snake_case, kebab_to_snake_case, pascal_to_snake_case,
    space_to_snake_case, to_snake,
};

use crate::detect::{detect_case, is_case};
use crate::error::Result;
use crate::style::Style;

/// Detect the style of `val` and convert it to `target`.
///
/// Every conversion goes through snake case: the detected style is
/// normalized to snake case, which is then expanded to the target
/// style.
pub fn convert_to(val: &str, target: Style) -> Result<String> {
    let source = detect_case(val)?;
    Ok(convert_from(val, source, target))
}

/// Convert `val`, known to be written in `source`, to `target`.
pub fn convert_from(val: &str, source: Style, target: Style) -> String {
    let snake = to_snake(source, val);
    let mut res = from_snake(target, &snake);
    if target.separator().is_none() {
        res.retain(|c| c != ' ');
    }
    log::trace!("converted {val:?} from {source} to {target} case: {res:?}");
    res
}

pub fn to_snake_case(val: &str) -> Result<String> {
    convert_to(val, Style::Snake)
}

pub fn to_pascal_case(val: &str) -> Result<String> {
    convert_to(val, Style::Pascal)
}

pub fn to_camel_case(val: &str) -> Result<String> {
    convert_to(val, Style::Camel)
}

pub fn to_kebab_case(val: &str) -> Result<String> {
    convert_to(val, Style::Kebab)
}

pub fn to_space_case(val: &str) -> Result<String> {
    convert_to(val, Style::Space)
}

pub fn to_upper_snake_case(val: &str) -> Result<String> {
    Ok(to_snake_case(val)?.to_uppercase())
}

pub fn to_lower_snake_case(val: &str) -> Result<String> {
    Ok(to_snake_case(val)?.to_lowercase())
}

pub fn to_upper_kebab_case(val: &str) -> Result<String> {
    Ok(to_kebab_case(val)?.to_uppercase())
}

pub fn to_lower_kebab_case(val: &str) -> Result<String> {
    Ok(to_kebab_case(val)?.to_lowercase())
}

pub fn to_upper_space_case(val: &str) -> Result<String> {
    Ok(to_space_case(val)?.to_uppercase())
}

pub fn to_lower_space_case(val: &str) -> Result<String> {
    Ok(to_space_case(val)?.to_lowercase())
}

/// Case detection and conversion as methods on strings.
///
/// ```
/// use caser::{Casing, Style};
///
/// assert_eq!("some_string_here".to_case(Style::Camel).unwrap(), "someStringHere");
/// assert_eq!("kebab-case".detect_case().unwrap(), Style::Kebab);
/// ```
pub trait Casing {
    fn detect_case(&self) -> Result<Style>;
    fn to_case(&self, style: Style) -> Result<String>;
    fn is_case(&self, style: Style) -> bool;
}

impl Casing for str {
    fn detect_case(&self) -> Result<Style> {
        detect_case(self)
    }

    fn to_case(&self, style: Style) -> Result<String> {
        convert_to(self, style)
    }

    fn is_case(&self, style: Style) -> bool {
        is_case(self, style)
    }
}
