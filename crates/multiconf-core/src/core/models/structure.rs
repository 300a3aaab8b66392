use super::residue::Residue;

/// One chain of a model, holding residues in document order.
///
/// Document order is load-bearing: the sequential index that the
/// correspondence engine keys on is simply a residue's position in this
/// list.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// Chain identifier from the source file (e.g., 'A').
    pub id: char,
    residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: char) -> Self {
        Self {
            id,
            residues: Vec::new(),
        }
    }

    pub fn add_residue(&mut self, residue: Residue) {
        self.residues.push(residue);
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
}

/// One model of a structure. For a deposited reference this is the single
/// crystallographic model; for a predicted ensemble each model is one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    chains: Vec<Chain>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chain(&mut self, chain: Chain) {
        self.chains.push(chain);
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// The first chain in document order. Only the first chain takes part in
    /// correspondence; multi-chain matching is out of scope by design.
    pub fn first_chain(&self) -> Option<&Chain> {
        self.chains.first()
    }
}

/// A parsed structure as delivered by an external parser: ordered models,
/// each with ordered chains of ordered residues.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// Identifier of the structure (e.g., a PDB ID or a predictor tag).
    pub id: String,
    models: Vec<Model>,
}

impl Structure {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            models: Vec::new(),
        }
    }

    pub fn with_models(id: &str, models: Vec<Model>) -> Self {
        Self {
            id: id.to_string(),
            models,
        }
    }

    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn first_model(&self) -> Option<&Model> {
        self.models.first()
    }
}
