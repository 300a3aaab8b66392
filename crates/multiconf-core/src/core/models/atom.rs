use nalgebra::Point3;
use std::str::FromStr;

/// Chemical element of an atom, reduced to the species this library needs
/// to distinguish.
///
/// The only decision made on element identity is the exclusion of hydrogens
/// from centroid construction, so everything beyond the common protein
/// elements collapses into [`Element::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
    Sulfur,
    Selenium,
    Other,
}

impl Element {
    /// Returns `true` for hydrogen (including deuterium as parsed from "D").
    pub fn is_hydrogen(&self) -> bool {
        matches!(self, Element::Hydrogen)
    }
}

impl FromStr for Element {
    type Err = ();

    /// Parses an element symbol, case-insensitively. Unknown symbols map to
    /// [`Element::Other`] rather than failing, because parsers hand over
    /// whatever the source file contains.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" | "D" => Ok(Element::Hydrogen),
            "C" => Ok(Element::Carbon),
            "N" => Ok(Element::Nitrogen),
            "O" => Ok(Element::Oxygen),
            "S" => Ok(Element::Sulfur),
            "SE" => Ok(Element::Selenium),
            _ => Ok(Element::Other),
        }
    }
}

/// One atom of a parsed structure.
///
/// Instances are produced by an external structure parser and consumed
/// read-only. `occupancy` is `None` when the source file carries no
/// occupancy column; `altloc` is `None` for a blank alternate-location code
/// (normalized to group `'A'` during centroid construction).
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom name as written in the source file (e.g., "CA", "OG1").
    pub name: String,
    /// The chemical element, used only to exclude hydrogens.
    pub element: Element,
    /// Alternate-location code, `None` when blank.
    pub altloc: Option<char>,
    /// Fractional occupancy in `[0, 1]`, `None` when absent from the source.
    pub occupancy: Option<f64>,
    /// Coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates an atom with full occupancy and no alternate location, the
    /// common case for predicted-ensemble frames.
    pub fn new(name: &str, element: Element, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            element,
            altloc: None,
            occupancy: Some(1.0),
            position,
        }
    }
}
