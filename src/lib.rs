//! Huffman coding over text.
//!
//! ```
//! use huffcode::{compress, decompress};
//!
//! let encoded = compress("BOOKKEEPER")?;
//! assert_eq!(decompress(&encoded)?, "BOOKKEEPER");
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```

pub mod bit;
pub mod bitio;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod flatten;
pub mod frequency;
pub mod huffman;
pub mod options;
pub mod tree;

pub use bit::{format_bits, parse_bits, Bit};
pub use codec::{compress, compress_with, decompress, EncodedData};
pub use error::{HuffmanError, HuffmanResult};
pub use options::{HuffmanOptions, TieBreak};
pub use tree::EncodingTreeNode;
