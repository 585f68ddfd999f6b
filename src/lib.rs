pub mod buffer;
pub mod case;
pub mod codec;
pub mod error;
pub mod indexers;
pub mod mutators;
pub mod normalize;
pub mod properties;
mod tables;
mod trie;
pub mod segmentation;

#[cfg(feature = "names")]
pub mod names;

#[cfg(feature = "locale")]
pub mod locale;

pub use buffer::AStr;
pub use error::{AStrError, Utf8Error};
