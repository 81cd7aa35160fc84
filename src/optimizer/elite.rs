use crate::bitstring::Bitstring;

/// Bounded archive of the best solutions seen, ascending by score.
#[derive(Debug, Clone)]
pub struct EliteMemory {
    capacity: usize,
    entries: Vec<(Bitstring, f64)>,
}

impl EliteMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts, re-sorts, and drops everything past capacity.
    pub fn insert(&mut self, position: Bitstring, score: f64) {
        self.entries.push((position, score));
        // Stable sort: on ties the earlier entry stays ahead.
        self.entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[(Bitstring, f64)] {
        &self.entries
    }

    pub fn positions(&self) -> impl Iterator<Item = &Bitstring> {
        self.entries.iter().map(|(p, _)| p)
    }

    pub fn best(&self) -> Option<&(Bitstring, f64)> {
        self.entries.first()
    }
}
