use std::io::Write;
use std::path::PathBuf;
use colored::*;
use env_logger::Builder;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use pairbias::fix::run_fix;
use pairbias::fix::write_summary;
use pairbias::bias_parsers::PairArguments;


#[derive(Debug, Parser)]
#[command(name = "pb-fix")]
#[command(author, version, about = "Hydrogen bond restraints for selected base pairs (PLUMED input)")]
pub struct Cli {
    /// Input structure file (.gro), or "-" for stdin
    #[arg(short, long, value_name = "FILE", default_value = "2a43.gro")]
    pub gro: String,

    /// Output file for the PLUMED directives, or "-" for stdout
    #[arg(short, long, value_name = "FILE", default_value = "fix.txt")]
    pub out: String,

    /// Also write a JSON report of the resolved pairs.
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten, next_help_heading = "Base pairs")]
    pub pairs: PairArguments,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = run_fix(&cli.gro, &cli.out, &cli.pairs)?;

    if cli.out != "-" {
        for rp in &output.resolved {
            let class = if rp.pair.kind.is_wobble() { "wobble" } else { "WCF" };
            println!("{} {:<12} {:<6} {} bond(s)",
                rp.pair.kind.to_string().cyan(),
                rp.pair.to_string(),
                class,
                rp.num_bonds());
        }
        println!("{} {} restraints on {} base pairs -> {}",
            "Wrote".green(), output.directives.len(), output.resolved.len(), cli.out.yellow());
    }

    if let Some(path) = &cli.summary {
        write_summary(path, &output)?;
    }

    Ok(())
}
