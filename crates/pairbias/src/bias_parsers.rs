use clap::Args;
use anyhow::Result;
use anyhow::bail;
use log::debug;

use pb_pairs::PairKind;
use pb_pairs::CanonicalPair;
use pb_pairs::parse_pair_list;

/// Base pair selection.
#[derive(Debug, Args)]
pub struct PairArguments {
    /// Comma-separated base pairs, e.g. "G3-C16,C4-G15" (also "3G-16C").
    #[arg(short, long, value_name = "PAIRS",
        default_value = "G3-C16,C4-G15,G5-C14,G6-C13,G11-C26,C10-G27,C9-G28")]
    pub pair: String,
}

impl PairArguments {
    pub fn canonical_pairs(&self) -> Result<Vec<CanonicalPair>> {
        let pairs = parse_pair_list(&self.pair)?;
        debug!("Parsed {} base pair(s) from '{}'", pairs.len(), self.pair);
        Ok(pairs)
    }
}

/// Upper bound on the number of rows `pb-profile` will tabulate.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Distance grid for tabulating potentials.
#[derive(Debug, Args)]
pub struct ProfileArguments {
    /// Base pair kind (GC, GU or AU; reversed spellings are accepted).
    #[arg(short, long, default_value = "GC")]
    pub kind: PairKind,

    /// First distance (nm).
    #[arg(long, default_value_t = 0.15)]
    pub from: f64,

    /// Last distance (nm).
    #[arg(long, default_value_t = 0.6)]
    pub to: f64,

    /// Distance increment (nm).
    #[arg(long, default_value_t = 0.01)]
    pub step: f64,
}

impl ProfileArguments {
    /// Validate that all parameters make sense.
    pub fn validate(&self) -> Result<()> {
        if !(self.from.is_finite() && self.to.is_finite() && self.step.is_finite()) {
            bail!("from, to and step must be finite (got {}, {}, {})", self.from, self.to, self.step);
        }
        if !(self.step > 0.0) {
            bail!("step must be > 0 (got {})", self.step);
        }
        if self.to < self.from {
            bail!("to ({}) must not be smaller than from ({})", self.to, self.from);
        }
        if self.from < 0.0 {
            bail!("from must be a distance >= 0 (got {})", self.from);
        }
        let intervals = ((self.to - self.from) / self.step + 1e-9).floor();
        if intervals >= MAX_GRID_POINTS as f64 {
            bail!("grid from {} to {} in steps of {} exceeds {} points",
                self.from, self.to, self.step, MAX_GRID_POINTS);
        }
        Ok(())
    }

    /// Grid points from `from` to `to` (inclusive, up to rounding).
    pub fn grid(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let n = ((self.to - self.from) / self.step + 1e-9).floor() as usize;
        Ok((0..=n).map(|i| self.from + i as f64 * self.step).collect())
    }
}
