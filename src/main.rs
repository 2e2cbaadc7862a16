use clap::Parser;
use huffcode::{compress_with, decompress, parse_bits, EncodedData, HuffmanOptions, TieBreak};

#[derive(Debug, Clone, clap::Args)]
struct CompressArgs {
    text: String,

    #[arg(long, value_enum, default_value_t = TieBreak::LastInserted)]
    tie_break: TieBreak,
}

#[derive(Debug, Clone, clap::Args)]
struct DecompressArgs {
    /// Pre-order tree shape as 0/1 digits
    #[arg(long)]
    shape: String,

    /// Leaf symbols in pre-order
    #[arg(long)]
    leaves: String,

    /// Encoded message as 0/1 digits
    #[arg(long)]
    message: String,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Operation {
    Compress(CompressArgs),
    Decompress(DecompressArgs),
}

#[derive(Debug, clap::Parser)]
struct Args {
    #[command(subcommand)]
    op: Operation,
}

fn compress_cmd(args: CompressArgs) -> anyhow::Result<()> {
    let encoded = compress_with(&args.text, &HuffmanOptions::with_tie_break(args.tie_break))?;
    println!("{encoded}");
    println!("size:    {}", encoded.summary());
    Ok(())
}

fn decompress_cmd(args: DecompressArgs) -> anyhow::Result<()> {
    let data = EncodedData {
        tree_shape: parse_bits(&args.shape)?,
        tree_leaves: args.leaves.chars().collect(),
        message_bits: parse_bits(&args.message)?,
    };
    data.validate()?;

    println!("{}", decompress(&data)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.op {
        Operation::Compress(args) => compress_cmd(args),
        Operation::Decompress(args) => decompress_cmd(args),
    }
}
