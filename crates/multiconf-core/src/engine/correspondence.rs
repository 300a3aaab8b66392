use super::centroids::CentroidMap;
use crate::core::models::residue::ResidueKey;
use tracing::{debug, warn};

// Matching-policy constants.
pub const BASE_OFFSET_CANDIDATES: usize = 5;
pub const OFFSET_PROBE_WINDOW: usize = 10;
pub const MAX_FORWARD_SHIFT: usize = 3;
pub const MAX_CONSECUTIVE_MISMATCHES: u32 = 5;

/// Outcome of scanning one ensemble position against the reference keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Match,
    /// Matched `k` positions ahead; the offset grew by `k` permanently.
    Shift(usize),
    Skip,
    AbortModel,
}

/// Mutable scan state for one model.
///
/// The offset is monotonic non-decreasing: the scanner models deletions in
/// the ensemble relative to the reference and has no symmetric mechanism
/// for insertions. That asymmetry is inherited from the matching policy;
/// changing it would change which residues appear in the output.
#[derive(Debug, Clone, Copy)]
pub struct ShiftState {
    offset: usize,
    consecutive_mismatches: u32,
}

impl ShiftState {
    pub fn new(base_offset: usize) -> Self {
        Self {
            offset: base_offset,
            consecutive_mismatches: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Exact key first, then forward offsets `+1..=+MAX_FORWARD_SHIFT`
    /// (smallest match wins); too many consecutive misses abandons the model.
    pub fn step<F>(&mut self, position: usize, name: &str, has_key: F) -> Transition
    where
        F: Fn(usize, &str) -> bool,
    {
        if has_key(position + self.offset, name) {
            self.consecutive_mismatches = 0;
            return Transition::Match;
        }

        for k in 1..=MAX_FORWARD_SHIFT {
            if has_key(position + self.offset + k, name) {
                self.offset += k;
                self.consecutive_mismatches = 0;
                return Transition::Shift(k);
            }
        }

        self.consecutive_mismatches += 1;
        if self.consecutive_mismatches > MAX_CONSECUTIVE_MISMATCHES {
            Transition::AbortModel
        } else {
            Transition::Skip
        }
    }
}

/// Resolution of one model's positions against the reference keys.
#[derive(Debug, Clone, Default)]
pub struct ResolvedModel {
    pub keys: Vec<Option<ResidueKey>>,
    pub unresolved: usize,
    pub aborted: bool,
}

impl ResolvedModel {
    pub fn get(&self, position: usize) -> Option<&ResidueKey> {
        self.keys.get(position).and_then(|k| k.as_ref())
    }
}

/// Scores each candidate offset by matches over the leading probe window;
/// highest count wins, ties to the smaller offset.
pub fn find_base_offset(names: &[String], reference: &CentroidMap) -> usize {
    let probe = names.len().min(OFFSET_PROBE_WINDOW);
    let mut best_offset = 0;
    let mut best_count = 0;

    for offset in 0..BASE_OFFSET_CANDIDATES {
        let count = (0..probe)
            .filter(|&i| reference.contains_key(&ResidueKey::new(i + offset, &names[i])))
            .count();
        if count > best_count {
            best_count = count;
            best_offset = offset;
        }
    }
    best_offset
}

/// Scans one model's positions in order, resolving each occupied position
/// to a reference key. Unoccupied positions are passed over without
/// touching the state; an abort leaves the rest unresolved.
pub fn resolve_positions(
    names: &[String],
    occupied: &[bool],
    base_offset: usize,
    reference: &CentroidMap,
) -> ResolvedModel {
    let mut state = ShiftState::new(base_offset);
    let mut resolved = ResolvedModel {
        keys: vec![None; names.len()],
        ..Default::default()
    };

    for position in 0..names.len() {
        if !occupied.get(position).copied().unwrap_or(false) {
            continue;
        }
        let name = &names[position];
        let transition = state.step(position, name, |index, name| {
            reference.contains_key(&ResidueKey::new(index, name))
        });

        match transition {
            Transition::Match => {
                resolved.keys[position] = Some(ResidueKey::new(position + state.offset(), name));
            }
            Transition::Shift(k) => {
                debug!(
                    position,
                    shift = k,
                    offset = state.offset(),
                    "Detected possible missing residue, offset adjusted"
                );
                resolved.keys[position] = Some(ResidueKey::new(position + state.offset(), name));
            }
            Transition::Skip => {
                resolved.unresolved += 1;
            }
            Transition::AbortModel => {
                let remaining = (position..names.len())
                    .filter(|&p| occupied.get(p).copied().unwrap_or(false))
                    .count();
                resolved.unresolved += remaining;
                resolved.aborted = true;
                warn!(
                    position,
                    remaining, "Too many consecutive mismatches, skipping remaining residues"
                );
                break;
            }
        }
    }
    resolved
}
