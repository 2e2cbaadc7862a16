use crate::frequency::FrequencyMap;

/// Deepest leaf accepted when a tree is read back from its flattened form.
///
/// Tree walks here are recursive, so depth is capped well below what the
/// stack can take. A tree built from counts that fit in a `usize` is less
/// than 100 levels deep.
pub const MAX_TREE_DEPTH: usize = 1024;

/// A node of a prefix-code tree.
///
/// Internal nodes own both children; following `zero` appends a `0` to the
/// code and following `one` appends a `1`. The children are not
/// interchangeable. Dropping the root releases the whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingTreeNode {
    Leaf(char),
    Internal {
        zero: Box<EncodingTreeNode>,
        one: Box<EncodingTreeNode>,
    },
}

impl EncodingTreeNode {
    pub fn leaf(symbol: char) -> Self {
        EncodingTreeNode::Leaf(symbol)
    }

    pub fn internal(zero: EncodingTreeNode, one: EncodingTreeNode) -> Self {
        EncodingTreeNode::Internal {
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, EncodingTreeNode::Leaf(_))
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            EncodingTreeNode::Leaf(symbol) => Some(*symbol),
            EncodingTreeNode::Internal { .. } => None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            EncodingTreeNode::Leaf(_) => 1,
            EncodingTreeNode::Internal { zero, one } => zero.leaf_count() + one.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            EncodingTreeNode::Leaf(_) => 0,
            EncodingTreeNode::Internal { zero, one } => 1 + zero.depth().max(one.depth()),
        }
    }

    /// Depth of the first leaf holding `symbol`, in pre-order.
    pub fn depth_of(&self, symbol: char) -> Option<usize> {
        match self {
            EncodingTreeNode::Leaf(s) => (*s == symbol).then_some(0),
            EncodingTreeNode::Internal { zero, one } => zero
                .depth_of(symbol)
                .or_else(|| one.depth_of(symbol))
                .map(|depth| depth + 1),
        }
    }

    /// Sum of `frequency * depth` over all leaves, i.e. the number of bits
    /// needed to encode a text with these frequencies.
    pub fn weighted_path_length(&self, freqs: &FrequencyMap) -> usize {
        self.weighted_path_length_at(freqs, 0)
    }

    fn weighted_path_length_at(&self, freqs: &FrequencyMap, depth: usize) -> usize {
        match self {
            EncodingTreeNode::Leaf(symbol) => freqs.get(symbol).copied().unwrap_or(0) * depth,
            EncodingTreeNode::Internal { zero, one } => {
                zero.weighted_path_length_at(freqs, depth + 1)
                    + one.weighted_path_length_at(freqs, depth + 1)
            }
        }
    }

    fn fmt_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        depth: usize,
        label: &str,
    ) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            EncodingTreeNode::Leaf(symbol) => writeln!(f, "{indent}{label}-> {symbol:?}"),
            EncodingTreeNode::Internal { zero, one } => {
                writeln!(f, "{indent}{label}-> *")?;
                zero.fmt_node(f, depth + 1, "0")?;
                one.fmt_node(f, depth + 1, "1")
            }
        }
    }
}

impl std::fmt::Display for EncodingTreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_node(f, 0, "root")
    }
}
