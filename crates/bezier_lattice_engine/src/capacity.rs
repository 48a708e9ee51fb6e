//! Hysterese-Politik für die drei dynamischen Arrays (Anker, Lattice-Nodes, Trace).
//!
//! Wachsen um Faktor `high_water`, sobald die Belegung `capacity / high_water`
//! erreicht. Schrumpfen um denselben Faktor, sobald die Belegung auf
//! `capacity / low_water` fällt, nie unter `min_capacity`.

use crate::error::CapacityError;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Standard-Wachstumsfaktor (Wachsen bei halber Belegung).
pub const DEFAULT_HIGH_WATER: usize = 2;
/// Standard-Schrumpfschwelle (Schrumpfen bei 1/8 Belegung).
pub const DEFAULT_LOW_WATER: usize = 8;
/// Standard-Mindestkapazität.
pub const DEFAULT_MIN_CAPACITY: usize = 4;

/// Parameter der Wachstums-/Schrumpf-Politik.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityPolicy {
    /// Wachstumsfaktor und Schwelle (`capacity / high_water`)
    pub high_water: usize,
    /// Schrumpfschwelle (`capacity / low_water`)
    pub low_water: usize,
    /// Untergrenze der Kapazität
    pub min_capacity: usize,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            high_water: DEFAULT_HIGH_WATER,
            low_water: DEFAULT_LOW_WATER,
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}

impl CapacityPolicy {
    /// Prüft die Parameter auf Konsistenz.
    pub fn validate(&self) -> Result<(), CapacityError> {
        if self.high_water < 2 {
            return Err(CapacityError::InvalidPolicy {
                reason: "high_water muss mindestens 2 sein",
            });
        }
        if self.low_water <= self.high_water {
            return Err(CapacityError::InvalidPolicy {
                reason: "low_water muss größer als high_water sein",
            });
        }
        if self.min_capacity == 0 {
            return Err(CapacityError::InvalidPolicy {
                reason: "min_capacity muss größer als 0 sein",
            });
        }
        Ok(())
    }

    /// True wenn bei Belegung `len` die Kapazität wachsen muss.
    pub fn should_grow(&self, len: usize, capacity: usize) -> bool {
        len >= capacity / self.high_water
    }

    /// Nächstgrößere Kapazität, `None` bei Überlauf.
    pub fn grown(&self, capacity: usize) -> Option<usize> {
        capacity
            .checked_mul(self.high_water)
            .map(|grown| grown.max(self.min_capacity))
    }

    /// True wenn bei Belegung `len` die Kapazität schrumpfen darf.
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        capacity > self.min_capacity && len <= capacity / self.low_water
    }

    /// Nächstkleinere Kapazität (nie unter `min_capacity`).
    pub fn shrunk(&self, capacity: usize) -> usize {
        (capacity / self.high_water).max(self.min_capacity)
    }

    /// Wendet die Politik so lange an, bis `required` Elemente stabil Platz haben.
    pub fn fit(&self, required: usize, capacity: usize) -> Result<usize, CapacityError> {
        let mut capacity = capacity.max(self.min_capacity);
        while self.should_grow(required, capacity) {
            capacity = self
                .grown(capacity)
                .ok_or(CapacityError::Exhausted { requested: usize::MAX })?;
        }
        while self.should_shrink(required, capacity) {
            let next = self.shrunk(capacity);
            if next == capacity || self.should_grow(required, next) {
                break;
            }
            capacity = next;
        }
        Ok(capacity)
    }
}

/// Wachsendes Array, dessen Kapazität der `CapacityPolicy` folgt.
///
/// Die Kapazität ist die logische Politik-Kapazität; der zugrunde liegende
/// `Vec` reserviert mindestens so viel.
#[derive(Debug, Clone)]
pub struct PolicyVec<T> {
    items: Vec<T>,
    capacity: usize,
    policy: CapacityPolicy,
}

impl<T> PolicyVec<T> {
    /// Erstellt ein leeres Array mit Mindestkapazität.
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            items: Vec::with_capacity(policy.min_capacity),
            capacity: policy.min_capacity,
            policy,
        }
    }

    /// Aktuelle Politik-Kapazität.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Verwendete Politik.
    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Read-only Sicht auf alle Elemente.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mutierbare Sicht auf alle Elemente (Länge bleibt fix).
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Mutierbarer Zugriff auf ein einzelnes Element.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Hängt ein Element an; wächst vorher, falls die Schwelle erreicht wird.
    pub fn push(&mut self, item: T) -> Result<(), CapacityError> {
        if self.policy.should_grow(self.items.len() + 1, self.capacity) {
            let grown = self
                .policy
                .grown(self.capacity)
                .ok_or(CapacityError::Exhausted { requested: usize::MAX })?;
            self.reserve_to(grown)?;
        }
        self.items.push(item);
        Ok(())
    }

    /// Entfernt das letzte Element.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop();
        if item.is_some() {
            self.shrink_if_sparse();
        }
        item
    }

    /// Entfernt das Element an `index`. Außerhalb des Bereichs: No-op.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.shrink_if_sparse();
        Some(item)
    }

    /// Leert das Array und schrumpft entsprechend der Politik.
    pub fn clear(&mut self) {
        self.items.clear();
        self.shrink_if_sparse();
    }

    /// Leert das Array und bringt die Kapazität auf `required` (Neuaufbau).
    pub fn clear_and_fit(&mut self, required: usize) -> Result<(), CapacityError> {
        self.items.clear();
        let target = self.policy.fit(required, self.capacity)?;
        if target > self.capacity {
            self.reserve_to(target)
        } else {
            self.shrink_to(target);
            Ok(())
        }
    }

    fn reserve_to(&mut self, capacity: usize) -> Result<(), CapacityError> {
        let additional = capacity.saturating_sub(self.items.len());
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| CapacityError::Exhausted {
                requested: capacity,
            })?;
        log::trace!("PolicyVec: Kapazität {} -> {}", self.capacity, capacity);
        self.capacity = capacity;
        Ok(())
    }

    fn shrink_to(&mut self, capacity: usize) {
        if capacity < self.capacity {
            self.items.shrink_to(capacity);
            log::trace!("PolicyVec: Kapazität {} -> {}", self.capacity, capacity);
            self.capacity = capacity;
        }
    }

    fn shrink_if_sparse(&mut self) {
        let mut target = self.capacity;
        while self.policy.should_shrink(self.items.len(), target) {
            let next = self.policy.shrunk(target);
            if next == target {
                break;
            }
            target = next;
        }
        self.shrink_to(target);
    }
}

impl<T> Deref for PolicyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}
