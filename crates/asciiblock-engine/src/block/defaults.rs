use super::{ContentModel, Context};
use crate::subs::SubPreset;

/// The conventional content model and substitutions for a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextDefaults {
    pub content_model: ContentModel,
    pub subs: SubPreset,
}

impl ContextDefaults {
    pub const fn new(content_model: ContentModel, subs: SubPreset) -> Self {
        Self {
            content_model,
            subs,
        }
    }

    pub fn for_context(context: Context) -> Self {
        use ContentModel::*;

        match context {
            Context::Paragraph => Self::new(Simple, SubPreset::Normal),
            Context::Listing | Context::Literal => Self::new(Verbatim, SubPreset::Verbatim),
            Context::Verse => Self::new(Verbatim, SubPreset::Normal),
            Context::Pass | Context::Stem => Self::new(Raw, SubPreset::None),
            Context::Comment | Context::Image | Context::ThematicBreak | Context::PageBreak => {
                Self::new(Empty, SubPreset::None)
            }
            Context::Example
            | Context::Sidebar
            | Context::Quote
            | Context::Open
            | Context::Admonition
            | Context::Preamble => Self::new(Compound, SubPreset::None),
        }
    }
}
