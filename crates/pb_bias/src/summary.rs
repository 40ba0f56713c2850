use serde::Serialize;

use crate::BiasError;
use crate::BiasDirectives;
use crate::ResolvedBasePair;
use crate::BIAS_LABEL;


#[derive(Debug, Serialize)]
pub struct BiasSummary {
    pub structure: String,
    pub bias_label: String,
    pub num_bonds: usize,
    pub pairs: Vec<PairSummary>,
}

#[derive(Debug, Serialize)]
pub struct PairSummary {
    pub pair: String,
    pub kind: String,
    /// Watson-Crick (GC, AU) rather than wobble (GU).
    pub wcf: bool,
    /// Residue identifiers as they appear in the structure file.
    pub residues: [String; 2],
    pub atoms: [Vec<String>; 2],
    /// DISTANCE labels of the restraints emitted for this pair.
    pub distances: Vec<String>,
}

impl BiasSummary {
    /// Distance labels are handed out in the same order as in
    /// `BiasDirectives`: pair by pair, bond by bond.
    pub fn new(structure: &str, resolved: &[ResolvedBasePair], directives: &BiasDirectives) -> Self {
        let mut labels = directives.bonds().iter().map(|b| b.distance_label());
        let pairs = resolved.iter().map(|rp| {
            PairSummary {
                pair: rp.pair.to_string(),
                kind: rp.pair.kind.to_string(),
                wcf: rp.pair.kind.is_wcf(),
                residues: [rp.pair.sides[0].identifier(), rp.pair.sides[1].identifier()],
                atoms: rp.matches.clone(),
                distances: labels.by_ref().take(rp.num_bonds()).collect(),
            }
        }).collect();

        BiasSummary {
            structure: structure.to_string(),
            bias_label: BIAS_LABEL.to_string(),
            num_bonds: directives.len(),
            pairs,
        }
    }

    pub fn to_json(&self) -> Result<String, BiasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
