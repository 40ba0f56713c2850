use pb_pairs::PairKind;

use crate::HBondPotential;
use crate::DistancePotential;


/// Atom names and hydrogen bond potentials of one base pair kind. Side 0
/// is the leading base (G or A), side 1 the trailing base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairTemplate {
    pub kind: PairKind,
    pub atom_names: [&'static [&'static str]; 2],
    pub terms: [HBondPotential; 2],
}

// Energies in kJ/mol, distances in nm.
pub const AU_TEMPLATE: PairTemplate = PairTemplate {
    kind: PairKind::AU,
    atom_names: [&["N1", "H61"], &["H3", "O4"]],
    terms: [
        HBondPotential::new(-198.74, 0.19, 0.49, -59.622, 0.68),
        HBondPotential::new(1987.4, 0.19, 0.22, 59.622, 0.41),
    ],
};

pub const GC_TEMPLATE: PairTemplate = PairTemplate {
    kind: PairKind::GC,
    atom_names: [&["H21", "H1", "O6"], &["O2", "N3", "H41"]],
    terms: [
        HBondPotential::new(-133.888, 0.2, 0.5, -40.1664, 0.7),
        HBondPotential::new(267.776, 0.2, 0.35, 40.1664, 0.55),
    ],
};

pub const GU_TEMPLATE: PairTemplate = PairTemplate {
    kind: PairKind::GU,
    atom_names: [&["O6", "H1"], &["H3", "O2"]],
    terms: [
        HBondPotential::new(-188.28, 0.2, 0.45, -47.07, 0.65),
        HBondPotential::new(470.7, 0.2, 0.3, 47.07, 0.5),
    ],
};

impl PairTemplate {
    pub fn of(kind: PairKind) -> &'static PairTemplate {
        match kind {
            PairKind::AU => &AU_TEMPLATE,
            PairKind::GC => &GC_TEMPLATE,
            PairKind::GU => &GU_TEMPLATE,
        }
    }

    pub fn accepts(&self, side: usize, atom_name: &str) -> bool {
        self.atom_names[side].iter().any(|&name| name == atom_name)
    }

    /// Combined energy of both terms at distance x.
    pub fn total(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.value(x)).sum()
    }
}
