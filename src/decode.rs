use crate::bit::Bit;
use crate::bitio::BitReader;
use crate::error::{HuffmanError, HuffmanResult};
use crate::tree::EncodingTreeNode;

/// Walks `tree` along `bits`, emitting a symbol at every leaf and restarting
/// from the root.
///
/// Ending anywhere but the root is a [`HuffmanError::TruncatedMessage`]; the
/// error carries whatever was decoded up to that point.
pub fn decode_text(tree: &EncodingTreeNode, bits: &[Bit]) -> HuffmanResult<String> {
    if tree.is_leaf() {
        return Err(HuffmanError::MalformedTree(
            "a single-leaf tree cannot consume any bits".to_string(),
        ));
    }

    let mut reader = BitReader::new(bits);
    let mut message = String::new();
    let mut current = tree;

    while let Some(bit) = reader.read_bit() {
        current = match (current, bit) {
            (EncodingTreeNode::Internal { zero, .. }, Bit::Zero) => &**zero,
            (EncodingTreeNode::Internal { one, .. }, Bit::One) => &**one,
            // Leaves are never kept as the current node.
            (EncodingTreeNode::Leaf(_), _) => tree,
        };

        if let EncodingTreeNode::Leaf(symbol) = current {
            message.push(*symbol);
            current = tree;
        }
    }

    if !std::ptr::eq(current, tree) {
        return Err(HuffmanError::TruncatedMessage {
            decoded: message,
            position: reader.position(),
        });
    }

    Ok(message)
}
