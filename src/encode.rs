use std::collections::BTreeMap;

use crate::bit::Bit;
use crate::bitio::BitWriter;
use crate::error::{HuffmanError, HuffmanResult};
use crate::tree::EncodingTreeNode;

/// Symbol to its path from the root.
pub type CodeTable = BTreeMap<char, Vec<Bit>>;

pub fn build_code_table(tree: &EncodingTreeNode) -> CodeTable {
    let mut table = CodeTable::new();
    let mut path = Vec::new();
    build_code_table_impl(tree, &mut path, &mut table);
    table
}

fn build_code_table_impl(node: &EncodingTreeNode, path: &mut Vec<Bit>, table: &mut CodeTable) {
    match node {
        EncodingTreeNode::Leaf(symbol) => {
            // Hand-made trees may repeat a symbol; the first leaf in pre-order wins.
            table.entry(*symbol).or_insert_with(|| path.clone());
        }
        EncodingTreeNode::Internal { zero, one } => {
            path.push(Bit::Zero);
            build_code_table_impl(zero, path, table);
            path.pop();

            path.push(Bit::One);
            build_code_table_impl(one, path, table);
            path.pop();
        }
    }
}

/// Encodes `text` with the codes of `tree`, concatenated in text order.
pub fn encode_text(tree: &EncodingTreeNode, text: &str) -> HuffmanResult<Vec<Bit>> {
    if tree.is_leaf() {
        return Err(HuffmanError::MalformedTree(
            "a single-leaf tree assigns an empty code".to_string(),
        ));
    }

    let table = build_code_table(tree);
    let mut writer = BitWriter::new();

    for symbol in text.chars() {
        let code = table
            .get(&symbol)
            .ok_or(HuffmanError::UnknownSymbol(symbol))?;
        writer.write_bits(code);
    }

    Ok(writer.into_bits())
}

/// True when no code in `table` is a prefix of another.
pub fn is_prefix_free(table: &CodeTable) -> bool {
    let codes: Vec<&Vec<Bit>> = table.values().collect();

    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            if a.starts_with(b) || b.starts_with(a) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::parse_bits;
    use crate::tree::tests::example_tree;

    #[test]
    fn builds_example_code_table() {
        let table = build_code_table(&example_tree());

        assert_eq!(table.len(), 4);
        assert_eq!(table[&'T'], parse_bits("0").unwrap());
        assert_eq!(table[&'R'], parse_bits("100").unwrap());
        assert_eq!(table[&'S'], parse_bits("101").unwrap());
        assert_eq!(table[&'E'], parse_bits("11").unwrap());
        assert!(is_prefix_free(&table));
    }

    #[test]
    fn encodes_example_texts() {
        let tree = example_tree();
        assert_eq!(encode_text(&tree, "T").unwrap(), parse_bits("0").unwrap());
        assert_eq!(
            encode_text(&tree, "RES").unwrap(),
            parse_bits("10011101").unwrap()
        );
        assert!(encode_text(&tree, "").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_symbol() {
        assert_eq!(
            encode_text(&example_tree(), "TEX"),
            Err(HuffmanError::UnknownSymbol('X'))
        );
    }

    #[test]
    fn rejects_single_leaf_tree() {
        let err = encode_text(&EncodingTreeNode::leaf('A'), "AAA").unwrap_err();
        assert!(matches!(err, HuffmanError::MalformedTree(_)));
    }

    #[test]
    fn detects_prefix_collision() {
        let mut table = CodeTable::new();
        table.insert('a', parse_bits("01").unwrap());
        table.insert('b', parse_bits("011").unwrap());
        assert!(!is_prefix_free(&table));
    }
}
