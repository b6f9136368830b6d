//! Print stdin lines in random order.

use std::io::Write;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use segdiff::logging;
use segdiff::tools::shuffle::shuffle_lines;

#[derive(Parser)]
#[command(name = "shuffle-lines", version, about = "Print stdin lines in random order")]
struct Args {
    /// Seed for a reproducible order.
    #[arg(short, long, env = "SHUFFLE_SEED")]
    seed: Option<u64>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let lines = shuffle_lines(stdin.lock(), &mut out, &mut rng)?;
    out.flush()?;
    info!(lines, seed = ?args.seed, "shuffled");
    Ok(())
}
