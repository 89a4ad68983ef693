use std::collections::BTreeMap;

use super::{ContentModel, Context, ContextDefaults};
use crate::subs::Sub;

/// Raw source handed to a block at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Unsplit text; normalized into lines on construction.
    Text(String),
    /// Already-split lines, without terminators.
    Lines(Vec<String>),
}

impl Source {
    /// Returns true if there is no source text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Source::Text(text) => text.is_empty(),
            Source::Lines(lines) => lines.is_empty(),
        }
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}

impl From<Vec<String>> for Source {
    fn from(lines: Vec<String>) -> Self {
        Source::Lines(lines)
    }
}

impl From<&[String]> for Source {
    fn from(lines: &[String]) -> Self {
        Source::Lines(lines.to_vec())
    }
}

impl From<&[&str]> for Source {
    fn from(lines: &[&str]) -> Self {
        Source::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Source {
    fn from(lines: [&str; N]) -> Self {
        Source::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

/// Options for [`Block::new`](super::Block::new). Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockOptions {
    pub content_model: ContentModel,
    pub attributes: BTreeMap<String, String>,
    pub subs: Vec<Sub>,
    pub source: Option<Source>,
    pub style: Option<String>,
}

impl BlockOptions {
    /// Options carrying the conventional content model and subs for `context`.
    pub fn for_context(context: Context) -> Self {
        let defaults = ContextDefaults::for_context(context);
        Self {
            content_model: defaults.content_model,
            subs: defaults.subs.expand(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
