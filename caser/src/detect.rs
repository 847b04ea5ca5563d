/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::style::Style;

/* Pascal and camel case need at least one lower-to-upper or
 * upper-to-lower transition after the first character. */
const PASCAL_PATTERN: &str = r"^[A-Z]([A-Z0-9]*[a-z][a-z0-9]*[A-Z]|[a-z0-9]*[A-Z][A-Z0-9]*[a-z])[A-Za-z0-9]*$";
const CAMEL_PATTERN: &str = r"^[a-z]([A-Z0-9]*[a-z][a-z0-9]*[A-Z]|[a-z0-9]*[A-Z][A-Z0-9]*[a-z])[A-Za-z0-9]*$";
const SNAKE_PATTERN: &str = r"^([a-zA-Z0-9]+_|[a-zA-Z0-9]+)*$";
const KEBAB_PATTERN: &str = r"^([a-zA-Z0-9]+-|[a-zA-Z0-9]+)*$";
const SPACE_PATTERN: &str = r"^([a-zA-Z0-9]+ |[a-zA-Z0-9]+)*$";

fn pattern(style: Style) -> &'static Regex {
    static PASCAL: OnceLock<Regex> = OnceLock::new();
    static CAMEL: OnceLock<Regex> = OnceLock::new();
    static SNAKE: OnceLock<Regex> = OnceLock::new();
    static KEBAB: OnceLock<Regex> = OnceLock::new();
    static SPACE: OnceLock<Regex> = OnceLock::new();

    let (cell, source) = match style {
        Style::Pascal => (&PASCAL, PASCAL_PATTERN),
        Style::Camel => (&CAMEL, CAMEL_PATTERN),
        Style::Snake => (&SNAKE, SNAKE_PATTERN),
        Style::Kebab => (&KEBAB, KEBAB_PATTERN),
        Style::Space => (&SPACE, SPACE_PATTERN),
    };
    cell.get_or_init(|| {
        Regex::new(source)
            .expect("case style pattern is valid and should always compile")
    })
}

/// Detect the case style a string is written in.
///
/// Styles are tried in the order of [`Style::ALL`] and the first match
/// wins, so a single lowercase word is reported as snake case. Strings
/// mixing separators or case transitions with separators, the empty
/// string and anything outside of ASCII letters and digits fail with
/// [`Error::NoStyleDetected`].
pub fn detect_case(s: &str) -> Result<Style> {
    if s.is_empty() {
        log::debug!("cannot detect case of an empty string");
        return Err(Error::NoStyleDetected(s.to_string()));
    }
    match Style::ALL
        .into_iter()
        .find(|style| pattern(*style).is_match(s))
    {
        Some(style) => {
            log::debug!("detected {style} case in {s:?}");
            Ok(style)
        }
        None => {
            log::debug!("no case detected in {s:?}");
            Err(Error::NoStyleDetected(s.to_string()))
        }
    }
}

/// Whether `s` is detected as being written in `style`.
pub fn is_case(s: &str, style: Style) -> bool {
    detect_case(s).is_ok_and(|detected| detected == style)
}
