use log::{info, warn};
use colored::*;
use pb_pairs::CanonicalPair;

use crate::BiasError;
use crate::PairTemplate;
use crate::StructureIndex;


/// One hydrogen bond: reference tokens of the leading-side and the
/// trailing-side atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAtomPair {
    pub atoms: [String; 2],
}

/// A canonical pair together with the atoms found for each of its sides.
#[derive(Debug, Clone)]
pub struct ResolvedBasePair {
    pub pair: CanonicalPair,
    /// Matched reference tokens per side, in file order.
    pub matches: [Vec<String>; 2],
}

impl ResolvedBasePair {
    pub fn template(&self) -> &'static PairTemplate {
        PairTemplate::of(self.pair.kind)
    }

    /// The i-th atom of side 0 pairs with the i-th atom of side 1. Surplus
    /// atoms on the longer side are dropped.
    pub fn bonds(&self) -> Vec<ResolvedAtomPair> {
        let [lead, trail] = &self.matches;
        lead.iter()
            .zip(trail.iter())
            .map(|(a, b)| ResolvedAtomPair { atoms: [a.clone(), b.clone()] })
            .collect()
    }

    pub fn num_bonds(&self) -> usize {
        self.matches[0].len().min(self.matches[1].len())
    }

    pub fn is_balanced(&self) -> bool {
        self.matches[0].len() == self.matches[1].len()
    }
}

/// Look up the donor/acceptor atoms of both sides of `pair`. Fails if
/// either side has no matching atom.
pub fn resolve_pair(index: &StructureIndex, pair: &CanonicalPair) -> Result<ResolvedBasePair, BiasError> {
    let template = PairTemplate::of(pair.kind);
    let mut matches: [Vec<String>; 2] = Default::default();

    for (side, residue) in pair.sides.iter().enumerate() {
        let identifier = residue.identifier();
        let refs = index.references(&identifier, |name| template.accepts(side, name));
        if refs.is_empty() {
            return Err(BiasError::AtomNotFound {
                pair: pair.to_string(),
                residue: identifier,
                atoms: template.atom_names[side].join(","),
            });
        }
        matches[side] = refs;
    }

    let resolved = ResolvedBasePair { pair: *pair, matches };
    if !resolved.is_balanced() {
        warn!("{} Base pair {} has {} atoms on {} but {} on {}, using the first {}.",
            "WARNING:".red(), pair,
            resolved.matches[0].len(), pair.sides[0],
            resolved.matches[1].len(), pair.sides[1],
            resolved.num_bonds());
    }
    Ok(resolved)
}

/// Resolve every pair in order. The first pair with a missing side aborts.
pub fn resolve_all(index: &StructureIndex, pairs: &[CanonicalPair]) -> Result<Vec<ResolvedBasePair>, BiasError> {
    pairs.iter()
        .map(|pair| {
            let resolved = resolve_pair(index, pair)?;
            info!("{} pair {}: {} hydrogen bond(s).", pair.kind, pair, resolved.num_bonds());
            Ok(resolved)
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const GRO: &str = "\
GC and AU pairs
   14
    3G      N1    1   1.000   1.000   1.000
    3G     H21    2   1.000   1.000   1.000
    3G      H1    3   1.000   1.000   1.000
    3G      O6    4   1.000   1.000   1.000
   16C      O2    5   1.000   1.000   1.000
   16C      N3    6   1.000   1.000   1.000
   16C     H41    7   1.000   1.000   1.000
   16C      N4    8   1.000   1.000   1.000
    5A      N1    9   1.000   1.000   1.000
    5A     H61   10   1.000   1.000   1.000
    5A     H62   11   1.000   1.000   1.000
   12U      H3   12   1.000   1.000   1.000
   12U      O4   13   1.000   1.000   1.000
   12U      O2   14   1.000   1.000   1.000
   2.00000   2.00000   2.00000
";

    fn index() -> StructureIndex {
        StructureIndex::from_reader(Cursor::new(GRO)).unwrap()
    }

    #[test]
    fn test_resolve_gc_pair() {
        let pair: CanonicalPair = "G3-C16".parse().unwrap();
        let resolved = resolve_pair(&index(), &pair).unwrap();
        assert_eq!(resolved.matches[0], vec!["2", "3", "4"]);
        assert_eq!(resolved.matches[1], vec!["5", "6", "7"]);
        let bonds = resolved.bonds();
        assert_eq!(bonds.len(), 3);
        assert_eq!(bonds[0].atoms, ["2".to_string(), "5".to_string()]);
        assert_eq!(bonds[2].atoms, ["4".to_string(), "7".to_string()]);
    }

    #[test]
    fn test_resolve_is_order_independent() {
        let a = resolve_pair(&index(), &"U12-A5".parse::<CanonicalPair>().unwrap()).unwrap();
        let b = resolve_pair(&index(), &"5A-12U".parse::<CanonicalPair>().unwrap()).unwrap();
        assert_eq!(a.matches, b.matches);
        assert_eq!(a.matches[0], vec!["9", "10"]);
        assert_eq!(a.matches[1], vec!["12", "13"]);
    }

    #[test]
    fn test_missing_side_names_the_pair() {
        let pair: CanonicalPair = "G3-C17".parse().unwrap();
        let err = resolve_pair(&index(), &pair).unwrap_err();
        match err {
            BiasError::AtomNotFound { pair, residue, atoms } => {
                assert_eq!(pair, "G3-C17");
                assert_eq!(residue, "17C");
                assert_eq!(atoms, "O2,N3,H41");
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_unbalanced_sides_truncate() {
        let mut index = StructureIndex::default();
        index.insert("1G", "O6", "100");
        index.insert("1G", "H1", "101");
        index.insert("9U", "H3", "200");
        let resolved = resolve_pair(&index, &"G1-U9".parse::<CanonicalPair>().unwrap()).unwrap();
        assert!(!resolved.is_balanced());
        assert_eq!(resolved.num_bonds(), 1);
        assert_eq!(resolved.bonds(), vec![ResolvedAtomPair { atoms: ["100".into(), "200".into()] }]);
    }

    #[test]
    fn test_resolve_all_stops_at_first_failure() {
        let pairs: Vec<CanonicalPair> = vec![
            "G3-C16".parse().unwrap(),
            "A5-U13".parse().unwrap(),
            "A5-U12".parse().unwrap(),
        ];
        let err = resolve_all(&index(), &pairs).unwrap_err();
        assert!(matches!(err, BiasError::AtomNotFound { ref pair, .. } if pair == "A5-U13"));

        let resolved = resolve_all(&index(), &[pairs[0], pairs[2]]).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].num_bonds(), 2);
    }
}
