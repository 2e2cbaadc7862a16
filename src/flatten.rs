use crate::bit::Bit;
use crate::bitio::{BitReader, BitWriter};
use crate::error::{HuffmanError, HuffmanResult};
use crate::tree::{EncodingTreeNode, MAX_TREE_DEPTH};

/// Flattens a tree into its pre-order shape bits and leaf symbols.
///
/// A leaf writes `0` and its symbol; an internal node writes `1` and then
/// its `zero` and `one` subtrees. A tree with `n` leaves yields `2n - 1`
/// shape bits and `n` symbols.
pub fn flatten_tree(tree: &EncodingTreeNode) -> (Vec<Bit>, Vec<char>) {
    let leaves = tree.leaf_count();
    let mut shape = BitWriter::with_capacity(2 * leaves - 1);
    let mut symbols = Vec::with_capacity(leaves);

    flatten_impl(tree, &mut shape, &mut symbols);

    (shape.into_bits(), symbols)
}

fn flatten_impl(node: &EncodingTreeNode, shape: &mut BitWriter, symbols: &mut Vec<char>) {
    match node {
        EncodingTreeNode::Leaf(symbol) => {
            shape.write_bit(Bit::Zero);
            symbols.push(*symbol);
        }
        EncodingTreeNode::Internal { zero, one } => {
            shape.write_bit(Bit::One);
            flatten_impl(zero, shape, symbols);
            flatten_impl(one, shape, symbols);
        }
    }
}

/// Rebuilds the tree described by `shape` and `leaves`.
///
/// Both sequences are read front to back, mirroring [`flatten_tree`]. They
/// must describe exactly one tree: running out of either, leaving entries
/// unread, or nesting a leaf deeper than [`MAX_TREE_DEPTH`] is a
/// [`HuffmanError::MalformedTree`].
pub fn unflatten_tree(shape: &[Bit], leaves: &[char]) -> HuffmanResult<EncodingTreeNode> {
    let mut shape_reader = BitReader::new(shape);
    let mut leaf_reader = leaves.iter();

    // A tree with n leaves is at most n - 1 levels deep.
    let max_depth = leaves.len().min(MAX_TREE_DEPTH);
    let tree = unflatten_impl(&mut shape_reader, &mut leaf_reader, 0, max_depth)?;

    if !shape_reader.is_exhausted() {
        return Err(HuffmanError::MalformedTree(format!(
            "{} unused shape bits after the tree was complete",
            shape_reader.remaining()
        )));
    }
    if leaf_reader.len() != 0 {
        return Err(HuffmanError::MalformedTree(format!(
            "{} unused leaf symbols after the tree was complete",
            leaf_reader.len()
        )));
    }

    Ok(tree)
}

fn unflatten_impl(
    shape: &mut BitReader<'_>,
    leaves: &mut std::slice::Iter<'_, char>,
    depth: usize,
    max_depth: usize,
) -> HuffmanResult<EncodingTreeNode> {
    if depth > max_depth {
        return Err(HuffmanError::MalformedTree(format!(
            "shape nests deeper than {max_depth} levels"
        )));
    }

    match shape.read_bit() {
        None => Err(HuffmanError::MalformedTree(format!(
            "shape ended after {} bits with the tree incomplete",
            shape.position()
        ))),
        Some(Bit::Zero) => leaves
            .next()
            .map(|symbol| EncodingTreeNode::leaf(*symbol))
            .ok_or_else(|| {
                HuffmanError::MalformedTree(format!(
                    "no leaf symbol left for the leaf at shape bit {}",
                    shape.position() - 1
                ))
            }),
        Some(Bit::One) => {
            let zero = unflatten_impl(shape, leaves, depth + 1, max_depth)?;
            let one = unflatten_impl(shape, leaves, depth + 1, max_depth)?;
            Ok(EncodingTreeNode::internal(zero, one))
        }
    }
}
