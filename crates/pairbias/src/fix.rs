use std::path::Path;
use log::info;
use anyhow::Result;
use anyhow::anyhow;

use pb_bias::resolve_all;
use pb_bias::BiasDirectives;
use pb_bias::ResolvedBasePair;
use pb_bias::summary::BiasSummary;

use crate::input_parsers::read_structure_input;
use crate::bias_parsers::PairArguments;

/// Resolved pairs and the directives generated from them.
#[derive(Debug)]
pub struct FixOutput {
    pub structure: String,
    pub resolved: Vec<ResolvedBasePair>,
    pub directives: BiasDirectives,
}

impl FixOutput {
    pub fn summary(&self) -> BiasSummary {
        BiasSummary::new(&self.structure, &self.resolved, &self.directives)
    }
}

/// Parse pairs, read `gro` ("-" = stdin) and resolve every pair. Nothing
/// is written here, so any failure leaves the output untouched.
pub fn build_directives(gro: &str, pairs: &PairArguments) -> Result<FixOutput> {
    let pairs = pairs.canonical_pairs()?;
    let index = read_structure_input(gro)?;
    info!("Read {} atom lines in {} residues from {}.",
        index.num_atoms(), index.num_residues(), gro);

    let resolved = resolve_all(&index, &pairs)?;
    let directives = BiasDirectives::try_from(resolved.as_slice())?;
    Ok(FixOutput { structure: gro.to_string(), resolved, directives })
}

/// Write `text` to `out`, or to stdout for "-".
pub fn write_output(out: &str, text: &str) -> Result<()> {
    if out == "-" {
        print!("{}", text);
        return Ok(());
    }
    std::fs::write(out, text).map_err(|e| anyhow!("Cannot write {}: {}", out, e))
}

pub fn write_summary<P: AsRef<Path>>(path: P, output: &FixOutput) -> Result<()> {
    let path = path.as_ref();
    let json = output.summary().to_json()?;
    std::fs::write(path, json).map_err(|e| anyhow!("Cannot write {}: {}", path.display(), e))?;
    info!("Summary written to {}.", path.display());
    Ok(())
}

/// The whole `pb-fix` pipeline: resolve first, then write `out`.
pub fn run_fix(gro: &str, out: &str, pairs: &PairArguments) -> Result<FixOutput> {
    let output = build_directives(gro, pairs)?;
    write_output(out, &output.directives.to_string())?;
    Ok(output)
}
