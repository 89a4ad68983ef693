use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// How a block's stored lines become rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentModel {
    /// Content comes from nested child blocks.
    Compound,
    /// One logical paragraph: lines are joined before substitution.
    #[default]
    Simple,
    /// Line structure is preserved; surrounding blank lines are trimmed.
    Verbatim,
    /// Like `Verbatim`, for content passed through untouched by default.
    Raw,
    /// No content at all.
    Empty,
}

impl ContentModel {
    pub const ALL: [ContentModel; 5] = [
        ContentModel::Compound,
        ContentModel::Simple,
        ContentModel::Verbatim,
        ContentModel::Raw,
        ContentModel::Empty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentModel::Compound => "compound",
            ContentModel::Simple => "simple",
            ContentModel::Verbatim => "verbatim",
            ContentModel::Raw => "raw",
            ContentModel::Empty => "empty",
        }
    }
}

impl fmt::Display for ContentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentModel {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownName::new("content model", s))
    }
}

/// The kind of structural unit a block represents.
///
/// Informational only: rendering never branches on it. Collaborators and
/// diagnostics use it, and [`ContextDefaults`](super::ContextDefaults) maps
/// it to a conventional content model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    Paragraph,
    Listing,
    Literal,
    Pass,
    Stem,
    Verse,
    Comment,
    Example,
    Sidebar,
    Quote,
    Open,
    Admonition,
    Preamble,
    Image,
    ThematicBreak,
    PageBreak,
}

impl Context {
    pub const ALL: [Context; 16] = [
        Context::Paragraph,
        Context::Listing,
        Context::Literal,
        Context::Pass,
        Context::Stem,
        Context::Verse,
        Context::Comment,
        Context::Example,
        Context::Sidebar,
        Context::Quote,
        Context::Open,
        Context::Admonition,
        Context::Preamble,
        Context::Image,
        Context::ThematicBreak,
        Context::PageBreak,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Context::Paragraph => "paragraph",
            Context::Listing => "listing",
            Context::Literal => "literal",
            Context::Pass => "pass",
            Context::Stem => "stem",
            Context::Verse => "verse",
            Context::Comment => "comment",
            Context::Example => "example",
            Context::Sidebar => "sidebar",
            Context::Quote => "quote",
            Context::Open => "open",
            Context::Admonition => "admonition",
            Context::Preamble => "preamble",
            Context::Image => "image",
            Context::ThematicBreak => "thematic_break",
            Context::PageBreak => "page_break",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Context {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownName::new("context", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_model_is_simple() {
        assert_eq!(ContentModel::default(), ContentModel::Simple);
    }

    #[test]
    fn content_model_names_parse_back() {
        for model in ContentModel::ALL {
            assert_eq!(model.as_str().parse::<ContentModel>(), Ok(model));
        }
    }

    #[test]
    fn context_names_parse_back() {
        for context in Context::ALL {
            assert_eq!(context.to_string().parse::<Context>(), Ok(context));
        }
    }

    #[test]
    fn unknown_content_model_is_rejected() {
        let err = "nested".parse::<ContentModel>().unwrap_err();
        assert_eq!(err, UnknownName::new("content model", "nested"));
    }

    #[test]
    fn context_names_are_case_sensitive() {
        assert!("Paragraph".parse::<Context>().is_err());
    }
}
