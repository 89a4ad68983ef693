pub mod block;
pub mod error;
pub mod subs;

// Re-export key types for easier usage
pub use block::{
    Block, BlockId, BlockOptions, ContentModel, Context, ContextDefaults, EOL, Source,
};
pub use error::UnknownName;
pub use subs::{Converter, Identity, Sub, SubPreset, Substitutor};
