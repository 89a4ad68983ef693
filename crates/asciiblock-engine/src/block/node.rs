use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use super::{
    BlockOptions, ContentModel, Context, Source,
    lines::{EOL, normalize_lines_from_string, strip_blank_lines},
};
use crate::subs::{Converter, Sub};

/// Identity of a block, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of document structure that renders its source lines to content.
///
/// # Invariants
///
/// - `content_model` never changes after construction
/// - `lines` hold no terminators and are owned by this block alone
/// - `lines` are ignored when rendering `Compound` and `Empty` blocks
#[derive(Debug)]
pub struct Block {
    id: BlockId,
    context: Context,
    content_model: ContentModel,
    /// Raw source lines. May be edited until the block is rendered.
    pub lines: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Substitutions to apply, in order.
    pub subs: Vec<Sub>,
    pub style: Option<String>,
    blocks: Vec<Block>,
}

impl Block {
    pub fn new(context: Context, opts: BlockOptions) -> Self {
        let lines = match opts.source {
            None => vec![],
            Some(source) if source.is_empty() => vec![],
            Some(Source::Text(text)) => normalize_lines_from_string(&text),
            Some(Source::Lines(lines)) => lines,
        };

        let block = Self {
            id: BlockId::new(),
            context,
            content_model: opts.content_model,
            lines,
            attributes: opts.attributes,
            subs: opts.subs,
            style: opts.style,
            blocks: vec![],
        };
        log::debug!("created {block}");
        block
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// Alias for [`Block::context`].
    pub fn blockname(&self) -> Context {
        self.context
    }

    pub fn content_model(&self) -> ContentModel {
        self.content_model
    }

    /// Child blocks. Only rendered when the content model is `Compound`.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    /// Appends a child block, taking ownership of it.
    pub fn append(&mut self, child: Block) {
        self.blocks.push(child);
    }

    /// Renders this block's content.
    ///
    /// Dispatches on the content model:
    /// - `Compound`: the converter aggregates the child blocks
    /// - `Simple`: lines are joined with [`EOL`], then substituted as text
    /// - `Verbatim` / `Raw`: lines are substituted as a sequence; a result of
    ///   fewer than two lines is returned as is, otherwise leading and
    ///   trailing blank lines are stripped and the rest joined with [`EOL`]
    /// - `Empty`: `None`
    ///
    /// # Returns
    /// `Ok(None)` when there is no content: always for `Empty`, and for
    /// `Verbatim` / `Raw` when substitution yields zero lines. A
    /// `Verbatim` / `Raw` result whose lines are all blank renders as
    /// `Some("")`.
    ///
    /// # Errors
    /// Errors from the converter are returned unchanged.
    pub fn content<C: Converter>(&self, converter: &C) -> Result<Option<String>, C::Error> {
        log::trace!("rendering {self}");
        match self.content_model {
            ContentModel::Compound => converter.aggregate(&self.blocks).map(Some),
            ContentModel::Simple => converter
                .apply_text(&self.lines.join(EOL), &self.subs)
                .map(Some),
            ContentModel::Verbatim | ContentModel::Raw => {
                let mut result = converter.apply_lines(&self.lines, &self.subs)?;
                if result.len() < 2 {
                    return Ok(result.pop());
                }
                Ok(Some(strip_blank_lines(&result).join(EOL)))
            }
            ContentModel::Empty => Ok(None),
        }
    }

    /// The raw lines joined with [`EOL`], without any substitution.
    ///
    /// Not meaningful for `Compound` blocks, whose content lives in children.
    pub fn source(&self) -> String {
        self.lines.join(EOL)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block@{} {{ context: {}, content_model: {}, style: {}, ",
            self.id,
            self.context,
            self.content_model,
            self.style.as_deref().unwrap_or("none"),
        )?;
        match self.content_model {
            ContentModel::Compound => write!(f, "blocks: {} }}", self.blocks.len()),
            _ => write!(f, "lines: {} }}", self.lines.len()),
        }
    }
}
