use phf::{Map, Set, phf_map, phf_set};

static STANDARD_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
};

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    // Ambiguity and extended codes.
    "ASX" => 'B', "GLX" => 'Z', "SEC" => 'U', "PYL" => 'O', "UNK" => 'X',
};

/// Whether a residue name is one of the 20 canonical amino acids.
///
/// Used for display and logging only; the correspondence engine treats
/// residue names as opaque tokens and matches non-standard names just fine.
pub fn is_standard_residue(name: &str) -> bool {
    STANDARD_RESIDUE_NAMES.contains(name.trim())
}

/// One-letter display code for a three-letter residue name, including the
/// ambiguity codes (ASX, GLX) and the extended alphabet (SEC, PYL, UNK).
pub fn one_letter_code(name: &str) -> Option<char> {
    ONE_LETTER_CODES.get(name.trim()).copied()
}
