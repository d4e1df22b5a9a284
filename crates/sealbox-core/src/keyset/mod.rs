//! Keyset handle and writer contracts.

mod handle;
mod writer;

pub use handle::KeysetHandle;
pub use writer::{BinaryWriter, KeysetWriter};
