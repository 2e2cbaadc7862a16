use log::debug;

use crate::bit::{format_bits, Bit};
use crate::decode::decode_text;
use crate::encode::encode_text;
use crate::error::{HuffmanError, HuffmanResult};
use crate::flatten::{flatten_tree, unflatten_tree};
use crate::frequency::{distinct_symbols, frequency_map};
use crate::huffman::build_huffman_tree;
use crate::options::HuffmanOptions;

/// A compressed message together with the flattened tree needed to read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedData {
    /// Pre-order tree shape, `1` for an internal node and `0` for a leaf.
    pub tree_shape: Vec<Bit>,
    /// Leaf symbols in the order their `0` appears in `tree_shape`.
    pub tree_leaves: Vec<char>,
    pub message_bits: Vec<Bit>,
}

impl EncodedData {
    /// Checks that `tree_shape` holds one leaf marker per entry of
    /// `tree_leaves` and one internal marker fewer.
    pub fn validate(&self) -> HuffmanResult<()> {
        let leaf_markers = self.tree_shape.iter().filter(|bit| **bit == Bit::Zero).count();
        let internal_markers = self.tree_shape.len() - leaf_markers;

        if leaf_markers != self.tree_leaves.len() {
            return Err(HuffmanError::MalformedTree(format!(
                "shape has {} leaf markers but {} leaf symbols were given",
                leaf_markers,
                self.tree_leaves.len()
            )));
        }
        if internal_markers + 1 != leaf_markers {
            return Err(HuffmanError::MalformedTree(format!(
                "{} internal nodes cannot hold {} leaves",
                internal_markers, leaf_markers
            )));
        }

        Ok(())
    }

    pub fn message_len(&self) -> usize {
        self.message_bits.len()
    }

    /// Size of the flattened tree: shape bits plus the symbols themselves.
    pub fn tree_bits(&self) -> usize {
        self.tree_shape.len()
            + self
                .tree_leaves
                .iter()
                .map(|symbol| symbol.len_utf8() * 8)
                .sum::<usize>()
    }

    /// One-line size report, e.g. `25 message bits + 29 tree bits`.
    pub fn summary(&self) -> String {
        format!(
            "{} message bits + {} tree bits",
            self.message_len(),
            self.tree_bits()
        )
    }
}

impl std::fmt::Display for EncodedData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "shape:   {}", format_bits(&self.tree_shape))?;
        writeln!(f, "leaves:  {}", self.tree_leaves.iter().collect::<String>())?;
        write!(f, "message: {}", format_bits(&self.message_bits))
    }
}

pub fn compress(text: &str) -> HuffmanResult<EncodedData> {
    compress_with(text, &HuffmanOptions::default())
}

pub fn compress_with(text: &str, options: &HuffmanOptions) -> HuffmanResult<EncodedData> {
    if distinct_symbols(text, 2) < 2 {
        return Err(HuffmanError::InvalidInput(
            "input requires at least two distinct characters".to_string(),
        ));
    }

    let tree = build_huffman_tree(&frequency_map(text), options)?;
    let (tree_shape, tree_leaves) = flatten_tree(&tree);
    let message_bits = encode_text(&tree, text)?;

    debug!(
        "compressed {} symbols into {} message bits ({} tree leaves)",
        text.chars().count(),
        message_bits.len(),
        tree_leaves.len()
    );

    Ok(EncodedData {
        tree_shape,
        tree_leaves,
        message_bits,
    })
}

pub fn decompress(data: &EncodedData) -> HuffmanResult<String> {
    let tree = unflatten_tree(&data.tree_shape, &data.tree_leaves)?;
    let text = decode_text(&tree, &data.message_bits)?;

    debug!(
        "decompressed {} message bits into {} symbols",
        data.message_bits.len(),
        text.chars().count()
    );

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::parse_bits;

    fn data(shape: &str, leaves: &str, message: &str) -> EncodedData {
        EncodedData {
            tree_shape: parse_bits(shape).unwrap(),
            tree_leaves: leaves.chars().collect(),
            message_bits: parse_bits(message).unwrap(),
        }
    }

    #[test]
    fn decompresses_small_examples() {
        assert_eq!(decompress(&data("10100", "EWK", "11010")).unwrap(), "KEW");
        assert_eq!(decompress(&data("1011000", "ADBN", "1000101")).unwrap(), "DAB");
        assert_eq!(
            decompress(&data("1101000", "NMSO", "001010011")).unwrap(),
            "NOMS"
        );
    }

    #[test]
    fn round_trips() {
        for text in ["BOOKKEEPER", "Mississippi", "BRAIN"] {
            let encoded = compress(text).unwrap();
            encoded.validate().unwrap();
            assert_eq!(decompress(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn rejects_single_symbol_input() {
        assert!(matches!(compress("AAAA"), Err(HuffmanError::InvalidInput(_))));
        assert!(matches!(compress(""), Err(HuffmanError::InvalidInput(_))));
    }

    #[test]
    fn validate_catches_mismatched_leaves() {
        assert!(data("10100", "EW", "").validate().is_err());
        assert!(data("1000", "EWK", "").validate().is_err());
        assert!(data("10100", "EWK", "").validate().is_ok());
    }

    #[test]
    fn reports_sizes() {
        let encoded = data("10100", "EWK", "11010");
        assert_eq!(encoded.message_len(), 5);
        assert_eq!(encoded.tree_bits(), 5 + 3 * 8);
        assert_eq!(encoded.to_string(), "shape:   10100\nleaves:  EWK\nmessage: 11010");
        assert_eq!(encoded.summary(), "5 message bits + 29 tree bits");
    }
}
