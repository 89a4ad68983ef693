//! # Substitutions
//!
//! Names of textual substitutions and the protocol a block uses to have them
//! applied. What each substitution does is up to the [`Substitutor`]; blocks
//! only pass their declared list along, in order.

pub mod pipeline;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

pub use pipeline::{Converter, Identity, Substitutor};

/// A named substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sub {
    #[serde(rename = "specialcharacters", alias = "specialchars")]
    SpecialCharacters,
    #[serde(rename = "quotes")]
    Quotes,
    #[serde(rename = "attributes")]
    Attributes,
    #[serde(rename = "replacements")]
    Replacements,
    #[serde(rename = "macros")]
    Macros,
    #[serde(rename = "post_replacements")]
    PostReplacements,
    #[serde(rename = "callouts")]
    Callouts,
}

impl Sub {
    pub const ALL: [Sub; 7] = [
        Sub::SpecialCharacters,
        Sub::Quotes,
        Sub::Attributes,
        Sub::Replacements,
        Sub::Macros,
        Sub::PostReplacements,
        Sub::Callouts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sub::SpecialCharacters => "specialcharacters",
            Sub::Quotes => "quotes",
            Sub::Attributes => "attributes",
            Sub::Replacements => "replacements",
            Sub::Macros => "macros",
            Sub::PostReplacements => "post_replacements",
            Sub::Callouts => "callouts",
        }
    }
}

impl fmt::Display for Sub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sub {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "specialchars" {
            return Ok(Sub::SpecialCharacters);
        }
        Self::ALL
            .into_iter()
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| UnknownName::new("substitution", s))
    }
}

/// A named, ordered group of substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubPreset {
    None,
    Basic,
    Header,
    Normal,
    Verbatim,
}

impl SubPreset {
    pub const ALL: [SubPreset; 5] = [
        SubPreset::None,
        SubPreset::Basic,
        SubPreset::Header,
        SubPreset::Normal,
        SubPreset::Verbatim,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SubPreset::None => "none",
            SubPreset::Basic => "basic",
            SubPreset::Header => "header",
            SubPreset::Normal => "normal",
            SubPreset::Verbatim => "verbatim",
        }
    }

    pub fn subs(self) -> &'static [Sub] {
        match self {
            SubPreset::None => &[],
            SubPreset::Basic => &[Sub::SpecialCharacters],
            SubPreset::Header => &[Sub::SpecialCharacters, Sub::Attributes],
            SubPreset::Normal => &[
                Sub::SpecialCharacters,
                Sub::Quotes,
                Sub::Attributes,
                Sub::Replacements,
                Sub::Macros,
                Sub::PostReplacements,
            ],
            SubPreset::Verbatim => &[Sub::SpecialCharacters, Sub::Callouts],
        }
    }

    /// The preset's substitutions as an owned list.
    pub fn expand(self) -> Vec<Sub> {
        self.subs().to_vec()
    }
}

impl fmt::Display for SubPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubPreset {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownName::new("substitution preset", s))
    }
}
