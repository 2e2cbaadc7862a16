/// Which of several equal-priority entries the tree builder pops first.
///
/// Entries are stamped with an increasing sequence number when pushed; leaves
/// are pushed in ascending symbol order before any merge happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TieBreak {
    /// Most recently pushed entry first.
    #[default]
    #[value(name = "last")]
    LastInserted,
    /// Oldest entry first.
    #[value(name = "first")]
    FirstInserted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HuffmanOptions {
    pub tie_break: TieBreak,
}

impl HuffmanOptions {
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        HuffmanOptions { tie_break }
    }
}
