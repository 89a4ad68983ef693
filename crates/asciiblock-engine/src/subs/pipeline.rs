use std::convert::Infallible;

use super::Sub;
use crate::block::{Block, EOL};

/// Applies named substitutions to block text.
///
/// Substitutions run in the order given; later ones see the output of
/// earlier ones.
pub trait Substitutor {
    type Error;

    /// Substitutes a single joined string.
    fn apply_text(&self, text: &str, subs: &[Sub]) -> Result<String, Self::Error>;

    /// Substitutes a sequence of lines. The result may have a different
    /// number of lines than the input.
    fn apply_lines(&self, lines: &[String], subs: &[Sub]) -> Result<Vec<String>, Self::Error>;
}

/// Renders whole blocks. Compound blocks use it to aggregate their children.
pub trait Converter: Substitutor {
    /// Renders one block to its final output.
    fn convert(&self, block: &Block) -> Result<String, Self::Error>;

    /// Renders child blocks in order and joins them with [`EOL`].
    fn aggregate(&self, blocks: &[Block]) -> Result<String, Self::Error> {
        let parts = blocks
            .iter()
            .map(|b| self.convert(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(EOL))
    }
}

/// A converter that changes nothing.
///
/// Substitutions return their input, and a block converts to its own content
/// (no content converts to an empty string).
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Substitutor for Identity {
    type Error = Infallible;

    fn apply_text(&self, text: &str, _subs: &[Sub]) -> Result<String, Self::Error> {
        Ok(text.to_string())
    }

    fn apply_lines(&self, lines: &[String], _subs: &[Sub]) -> Result<Vec<String>, Self::Error> {
        Ok(lines.to_vec())
    }
}

impl Converter for Identity {
    fn convert(&self, block: &Block) -> Result<String, Self::Error> {
        Ok(block.content(self)?.unwrap_or_default())
    }
}
