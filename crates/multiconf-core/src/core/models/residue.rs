use super::atom::Atom;
use std::fmt;

/// One residue of a parsed structure, holding its atoms in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    /// The residue name as written in the source file (e.g., "ALA", "GLY").
    pub name: String,
    atoms: Vec<Atom>,
}

impl Residue {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            atoms: Vec::new(),
        }
    }

    pub fn with_atoms(name: &str, atoms: Vec<Atom>) -> Self {
        Self {
            name: name.to_string(),
            atoms,
        }
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}

/// Identity of a reference residue for correspondence purposes.
///
/// `index` is the 0-based position of the residue in document order within
/// the first chain, NOT the author-assigned residue number: author numbering
/// may start at 0, 1, or 2 (or worse) and is unreliable for matching across
/// structures. The residue name is carried alongside so that a positional
/// match is only accepted when the names agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueKey {
    pub index: usize,
    pub name: String,
}

impl ResidueKey {
    pub fn new(index: usize, name: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.name)
    }
}
