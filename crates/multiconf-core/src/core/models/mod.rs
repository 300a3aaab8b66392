pub mod atom;
pub mod records;
pub mod residue;
pub mod structure;
