use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use segdiff::driver::{self, Options};
use segdiff::logging;
use segdiff::render::Style;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How to mark violating and divergent tokens.
    #[arg(long, value_enum, default_value_t = Style::Color, env = "SEGDIFF_STYLE")]
    style: Style,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, env = "SEGDIFF_COLOR")]
    color: ColorChoice,
    /// Print lines whose segmentations cover different text undecorated and carry on.
    #[arg(short, long)]
    keep_going: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Gold segmentation, one sentence per line.
    reference: Option<PathBuf>,
    /// Segmentation to check.
    candidate: Option<PathBuf>,
}

impl Cli {
    /// Both input paths, or nothing when either is missing.
    fn paths(&self) -> Option<(PathBuf, PathBuf)> {
        Some((self.reference.clone()?, self.candidate.clone()?))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    // Nothing to compare.
    let Some((reference, candidate)) = cli.paths() else {
        return Ok(());
    };
    logging::init(cli.verbose);
    match cli.color {
        ColorChoice::Auto => {}
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
    let options = Options {
        style: cli.style,
        keep_going: cli.keep_going,
    };
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    driver::run_files(&reference, &candidate, &mut out, options)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_paths_means_nothing_to_do() {
        let cli = Cli::try_parse_from(["segdiff"]).unwrap();
        assert!(cli.paths().is_none());
        let cli = Cli::try_parse_from(["segdiff", "gold.txt"]).unwrap();
        assert!(cli.paths().is_none());
    }

    #[test]
    fn two_paths_are_compared() {
        let cli = Cli::try_parse_from(["segdiff", "gold.txt", "system.txt"]).unwrap();
        assert_eq!(
            cli.paths(),
            Some((PathBuf::from("gold.txt"), PathBuf::from("system.txt")))
        );
    }

    #[test]
    fn style_and_color_flags() {
        let cli = Cli::try_parse_from([
            "segdiff", "--style", "brackets", "--color", "never", "-k", "a", "b",
        ])
        .unwrap();
        assert_eq!(cli.style, Style::Brackets);
        assert!(matches!(cli.color, ColorChoice::Never));
        assert!(cli.keep_going);
        assert!(Cli::try_parse_from(["segdiff", "--style", "rainbow"]).is_err());
    }
}
