//! Extract articles from a `<docurl>`-delimited HTML dump as JSON lines.

use clap::Parser;

use segdiff::logging;
use segdiff::tools::wash::wash;

#[derive(Parser)]
#[command(name = "wash-html", version, about = "Extract title and text from an HTML dump on stdin")]
struct Args {
    /// -v logs skipped pages, -vv every page.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    // wash flushes after every article
    let mut out = stdout.lock();
    wash(stdin.lock(), &mut out)?;
    Ok(())
}
