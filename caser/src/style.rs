/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The ways of writing an identifier that can be detected and
/// converted between.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Example: snake_case
    Snake,
    /// Example: PascalCase
    Pascal,
    /// Example: camelCase
    Camel,
    /// Example: kebab-case
    Kebab,
    /// Example: space case
    Space,
}

impl Style {
    /// All styles, in the order in which they are tried by
    /// [`detect_case`](crate::detect_case).
    pub const ALL: [Style; 5] = [
        Style::Pascal,
        Style::Camel,
        Style::Snake,
        Style::Kebab,
        Style::Space,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Snake => "snake",
            Style::Pascal => "pascal",
            Style::Camel => "camel",
            Style::Kebab => "kebab",
            Style::Space => "space",
        }
    }

    /// The name of the style, written in the style itself.
    pub fn example(self) -> &'static str {
        match self {
            Style::Snake => "snake_case",
            Style::Pascal => "PascalCase",
            Style::Camel => "camelCase",
            Style::Kebab => "kebab-case",
            Style::Space => "space case",
        }
    }

    pub fn separator(self) -> Option<char> {
        match self {
            Style::Snake => Some('_'),
            Style::Kebab => Some('-'),
            Style::Space => Some(' '),
            Style::Pascal | Style::Camel => None,
        }
    }

    /// Whether upper- and lowercase variants exist for this style.
    /// Folding a pascal or camel case string would lose its word
    /// boundaries.
    pub fn supports_case_fold(self) -> bool {
        self.separator().is_some()
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower
            .strip_suffix("case")
            .map(|n| n.trim_end_matches(['_', '-', ' ']))
            .unwrap_or(lower.as_str());
        match name {
            "snake" => Ok(Style::Snake),
            "pascal" => Ok(Style::Pascal),
            "camel" => Ok(Style::Camel),
            "kebab" => Ok(Style::Kebab),
            "space" => Ok(Style::Space),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}
