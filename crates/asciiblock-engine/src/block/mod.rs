//! # Blocks
//!
//! A [`Block`] holds the raw source lines of one structural unit and renders
//! them to content on demand.
//!
//! ## Rendering
//!
//! Rendering is a single dispatch on the block's [`ContentModel`]:
//!
//! - **`Compound`**: content comes from child blocks, joined by the converter
//! - **`Simple`**: lines are joined into one string, then substituted
//! - **`Verbatim`** / **`Raw`**: lines are substituted as a sequence, then
//!   surrounding blank lines are trimmed and the rest joined
//! - **`Empty`**: no content
//!
//! ## Modules
//!
//! - **`types`**: `Context` and `ContentModel` tags
//! - **`lines`**: `EOL`, string-to-lines normalization, blank-line trimming
//! - **`options`**: `BlockOptions` and `Source` construction inputs
//! - **`defaults`**: conventional content model and subs per context
//! - **`node`**: the `Block` itself
//!
//! ## Key Invariants
//!
//! - The content model is fixed at construction
//! - Lines never carry terminators; joining always uses [`EOL`]
//! - A block's line storage is never shared with its constructor input

pub mod defaults;
pub mod lines;
pub mod node;
pub mod options;
pub mod types;

pub use defaults::ContextDefaults;
pub use lines::EOL;
pub use node::{Block, BlockId};
pub use options::{BlockOptions, Source};
pub use types::{ContentModel, Context};
