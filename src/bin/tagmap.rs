//! Map `word_TAG` tokens from Chinese Treebank tags to universal tags.

use std::io::Write;

use clap::Parser;

use segdiff::logging;
use segdiff::tools::tagmap;

#[derive(Parser)]
#[command(name = "tagmap", version, about = "Map CTB part-of-speech tags to universal tags")]
struct Args {
    /// Report per-tag counts and frequent words instead of rewriting.
    #[arg(short, long)]
    summary: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if args.summary {
        tagmap::summarize(stdin.lock(), &mut out)?;
    } else {
        tagmap::map_tags(stdin.lock(), &mut out)?;
    }
    out.flush()?;
    Ok(())
}
