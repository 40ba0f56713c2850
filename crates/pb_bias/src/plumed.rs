use std::fmt;

use pb_pairs::PairKind;

use crate::BiasError;
use crate::PairTemplate;
use crate::DistancePotential;
use crate::ResolvedBasePair;


/// Label of the BIASVALUE action.
pub const BIAS_LABEL: &str = "b_f";

/// One DISTANCE collective variable and its two MATHEVAL energy terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondRestraint {
    /// 1-based, counted across all base pairs.
    pub number: usize,
    pub kind: PairKind,
    pub atoms: [String; 2],
}

impl BondRestraint {
    pub fn distance_label(&self) -> String {
        format!("f{}", self.number)
    }

    pub fn term_labels(&self) -> [String; 2] {
        [format!("f_f{}a", self.number), format!("f_f{}b", self.number)]
    }
}

impl fmt::Display for BondRestraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cv = self.distance_label();
        writeln!(f, "{}: DISTANCE ATOMS={},{}", cv, self.atoms[0], self.atoms[1])?;
        let template = PairTemplate::of(self.kind);
        for (label, term) in self.term_labels().iter().zip(template.terms.iter()) {
            writeln!(f, "{}: MATHEVAL ARG={} FUNC={} PERIODIC=NO", label, cv, term.expression())?;
        }
        Ok(())
    }
}

/// The complete PLUMED input: all bond restraints followed by a single
/// BIASVALUE summing their energy terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiasDirectives {
    bonds: Vec<BondRestraint>,
}

impl BiasDirectives {
    pub fn bonds(&self) -> &[BondRestraint] {
        &self.bonds
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// All MATHEVAL labels in emission order.
    pub fn bias_arguments(&self) -> Vec<String> {
        self.bonds.iter().flat_map(|b| b.term_labels()).collect()
    }
}

impl TryFrom<&[ResolvedBasePair]> for BiasDirectives {
    type Error = BiasError;

    fn try_from(pairs: &[ResolvedBasePair]) -> Result<Self, Self::Error> {
        let mut bonds = Vec::new();
        for resolved in pairs {
            for bond in resolved.bonds() {
                bonds.push(BondRestraint {
                    number: bonds.len() + 1,
                    kind: resolved.pair.kind,
                    atoms: bond.atoms,
                });
            }
        }
        if bonds.is_empty() {
            return Err(BiasError::Empty);
        }
        Ok(BiasDirectives { bonds })
    }
}

impl fmt::Display for BiasDirectives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bond in &self.bonds {
            write!(f, "{}", bond)?;
        }
        writeln!(f, "BIASVALUE ARG={} LABEL={}", self.bias_arguments().join(","), BIAS_LABEL)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::StructureIndex;
    use crate::resolve_all;
    use pb_pairs::parse_pair_list;

    fn directives(index: &StructureIndex, pairs: &str) -> Result<BiasDirectives, BiasError> {
        let pairs = parse_pair_list(pairs).unwrap();
        let resolved = resolve_all(index, &pairs)?;
        BiasDirectives::try_from(resolved.as_slice())
    }

    #[test]
    fn test_single_bond_output() {
        let mut index = StructureIndex::default();
        index.insert("2A", "N1", "31");
        index.insert("7U", "H3", "204");
        let text = directives(&index, "U7-A2").unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "f1: DISTANCE ATOMS=31,204");
        assert_eq!(lines[1], "f_f1a: MATHEVAL ARG=f1 FUNC=(-198.74*(0.19-x)^2)*step(x-0.19)*step(0.49-x)+(-59.622*(2*x-0.68))*step(x-0.49) PERIODIC=NO");
        assert_eq!(lines[2], "f_f1b: MATHEVAL ARG=f1 FUNC=(1987.4*(0.19-x)^2)*step(x-0.19)*step(0.22-x)+(59.622*(2*x-0.41))*step(x-0.22) PERIODIC=NO");
        assert_eq!(lines[3], "BIASVALUE ARG=f_f1a,f_f1b LABEL=b_f");
    }

    #[test]
    fn test_counter_runs_across_pairs() {
        let mut index = StructureIndex::default();
        for (res, name, reference) in [
            ("3G", "H21", "1"), ("3G", "H1", "2"), ("3G", "O6", "3"),
            ("16C", "O2", "4"), ("16C", "N3", "5"), ("16C", "H41", "6"),
            ("4G", "O6", "7"), ("4G", "H1", "8"),
            ("15U", "H3", "9"), ("15U", "O2", "10"),
        ] {
            index.insert(res, name, reference);
        }
        let dirs = directives(&index, "G3-C16,U15-G4").unwrap();
        assert_eq!(dirs.len(), 5);
        assert_eq!(dirs.bonds()[3].distance_label(), "f4");
        assert_eq!(dirs.bonds()[3].kind, PairKind::GU);
        assert_eq!(dirs.bonds()[4].atoms, ["8".to_string(), "10".to_string()]);

        let text = dirs.to_string();
        assert_eq!(text.lines().filter(|l| l.contains(": DISTANCE ")).count(), 5);
        assert_eq!(text.lines().filter(|l| l.contains(": MATHEVAL ")).count(), 10);
        assert!(text.contains("f4: DISTANCE ATOMS=7,9\n"));
        assert!(text.contains("f_f4b: MATHEVAL ARG=f4 FUNC=(470.7*(0.2-x)^2)*step(x-0.2)*step(0.3-x)+(47.07*(2*x-0.5))*step(x-0.3) PERIODIC=NO\n"));

        let last = text.lines().last().unwrap();
        assert_eq!(last,
            "BIASVALUE ARG=f_f1a,f_f1b,f_f2a,f_f2b,f_f3a,f_f3b,f_f4a,f_f4b,f_f5a,f_f5b LABEL=b_f");
    }

    #[test]
    fn test_bias_lists_two_labels_per_bond() {
        let mut index = StructureIndex::default();
        index.insert("1G", "H1", "1");
        index.insert("1G", "O6", "2");
        index.insert("9C", "N3", "3");
        index.insert("9C", "O2", "4");
        let dirs = directives(&index, "G1-C9,C9-G1").unwrap();
        assert_eq!(dirs.len(), 4);
        let last = dirs.to_string().lines().last().unwrap().to_string();
        let args = last.strip_prefix("BIASVALUE ARG=").unwrap().strip_suffix(" LABEL=b_f").unwrap();
        assert_eq!(args.split(',').count(), 2 * dirs.len());
    }

    #[test]
    fn test_missing_atoms_produce_no_directives() {
        let mut index = StructureIndex::default();
        index.insert("1G", "H1", "1");
        let res = directives(&index, "G1-C9");
        assert!(matches!(res, Err(BiasError::AtomNotFound { ref pair, .. }) if pair == "G1-C9"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let empty: &[ResolvedBasePair] = &[];
        let res = BiasDirectives::try_from(empty);
        assert!(matches!(res, Err(BiasError::Empty)));
    }
}
