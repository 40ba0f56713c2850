use clap::Parser;
use colored::*;
use anyhow::Result;

use pb_bias::PairTemplate;
use pb_bias::DistancePotential;

use pairbias::bias_parsers::ProfileArguments;


#[derive(Debug, Parser)]
#[command(name = "pb-profile")]
#[command(version, about = "Tabulate the hydrogen bond potentials of a base pair kind")]
pub struct Cli {
    /// Print the MATHEVAL expressions before the table.
    #[arg(long)]
    show_expr: bool,

    #[command(flatten, next_help_heading = "Distance grid")]
    grid: ProfileArguments,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let grid = cli.grid.grid()?;

    let template = PairTemplate::of(cli.grid.kind);
    let [a, b] = &template.terms;

    if cli.show_expr {
        for (label, term) in [("a:", a), ("b:", b)] {
            println!("{} {}", label.yellow(), term.expression());
            println!("   {} well, {:.4} at x = {}",
                if term.is_attractive() { "attractive" } else { "repulsive" },
                term.breakpoint_value(), term.upper);
        }
    }

    println!("# {} {}", template.kind.to_string().cyan(),
        format!("{:>8} {:>12} {:>12} {:>12}", "x/nm", "a(x)", "b(x)", "a+b").green());
    for x in grid {
        println!("     {:>8.4} {:>12.4} {:>12.4} {:>12.4}",
            x, a.value(x), b.value(x), template.total(x));
    }
    Ok(())
}
