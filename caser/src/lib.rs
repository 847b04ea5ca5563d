/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Detection of and conversion between identifier case styles: snake
//! case, PascalCase, camelCase, kebab-case and space case.
//!
//! ```
//! assert_eq!(caser::to_kebab_case("some_string_here").unwrap(), "some-string-here");
//! assert_eq!(caser::detect_case("camelCase").unwrap(), caser::Style::Camel);
//! ```

mod convert;
mod detect;
mod error;
mod style;

pub use convert::{
    camel_to_snake_case, convert_from, convert_to, from_snake,
    kebab_to_snake_case, pascal_to_snake_case, snake_to_camel_case,
    snake_to_kebab_case, snake_to_pascal_case, snake_to_space_case,
    space_to_snake_case, to_camel_case, to_kebab_case, to_lower_kebab_case,
    to_lower_snake_case, to_lower_space_case, to_pascal_case, to_snake,
    to_snake_case, to_space_case, to_upper_kebab_case, to_upper_snake_case,
    to_upper_space_case, Casing,
};
pub use detect::{detect_case, is_case};
pub use error::{Error, Result};
pub use style::Style;
