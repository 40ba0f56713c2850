use std::io::BufRead;
use ahash::AHashMap;
use log::debug;

use crate::BiasError;


/// One atom line of a structure file, reduced to what matters here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomRecord {
    pub name: String,
    /// The third field, written verbatim into ATOMS=... (the atom number
    /// in .gro files).
    pub reference: String,
}

/// All atom lines of a structure file, grouped by residue identifier
/// (first field, e.g. "16C") in file order.
///
/// Header and box lines are not special-cased: the count line has fewer
/// than three fields and is skipped, the others never carry a residue
/// identifier that a base pair asks for.
#[derive(Debug, Default, Clone)]
pub struct StructureIndex {
    residues: AHashMap<String, Vec<AtomRecord>>,
    num_atoms: usize,
}

impl StructureIndex {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, BiasError> {
        let mut index = StructureIndex::default();
        let mut skipped = 0;
        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(residue), Some(name), Some(reference)) => {
                    index.insert(residue, name, reference);
                }
                _ => skipped += 1,
            }
        }
        debug!("Indexed {} atom lines in {} residues ({} lines skipped).",
            index.num_atoms(), index.num_residues(), skipped);
        Ok(index)
    }

    pub fn insert(&mut self, residue: &str, name: &str, reference: &str) {
        self.residues.entry(residue.to_string()).or_default().push(AtomRecord {
            name: name.to_string(),
            reference: reference.to_string(),
        });
        self.num_atoms += 1;
    }

    pub fn num_atoms(&self) -> usize {
        self.num_atoms
    }

    pub fn num_residues(&self) -> usize {
        self.residues.len()
    }

    pub fn residue(&self, identifier: &str) -> &[AtomRecord] {
        self.residues.get(identifier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Reference tokens of all atoms in `identifier` whose name passes
    /// `accept`, in file order.
    pub fn references<F>(&self, identifier: &str, accept: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        self.residue(identifier)
            .iter()
            .filter(|atom| accept(atom.name.as_str()))
            .map(|atom| atom.reference.clone())
            .collect()
    }
}
