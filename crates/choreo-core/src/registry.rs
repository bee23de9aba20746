//! Ordered collection of dancers.

use crate::dancer::{Dancer, DancerId};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Order list does not match stored dancers ({order} ordered, {stored} stored)")]
    InconsistentOrder { order: usize, stored: usize },
}

/// Keyed dancer storage that remembers insertion order.
///
/// Insertion order only gives a stable draw order; it has no other meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DancerRegistry {
    dancers: HashMap<DancerId, Dancer>,
    order: Vec<DancerId>,
}

impl DancerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dancer at the given board position and return its key.
    pub fn add(&mut self, position: Point) -> DancerId {
        self.insert(Dancer::new(position))
    }

    /// Store an existing dancer, replacing any dancer with the same key.
    pub fn insert(&mut self, dancer: Dancer) -> DancerId {
        let id = dancer.id();
        if self.dancers.insert(id, dancer).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Remove a dancer.
    pub fn remove(&mut self, id: DancerId) -> Option<Dancer> {
        self.order.retain(|&d| d != id);
        self.dancers.remove(&id)
    }

    pub fn get(&self, id: DancerId) -> Option<&Dancer> {
        self.dancers.get(&id)
    }

    pub fn get_mut(&mut self, id: DancerId) -> Option<&mut Dancer> {
        self.dancers.get_mut(&id)
    }

    pub fn contains(&self, id: DancerId) -> bool {
        self.dancers.contains_key(&id)
    }

    /// Dancers in insertion order.
    ///
    /// The iterator is finite and can be cloned to restart it; membership
    /// cannot change while it is borrowed.
    pub fn entries(&self) -> impl Iterator<Item = (DancerId, &Dancer)> + Clone + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.dancers.get(&id).map(|d| (id, d)))
    }

    /// Keys in insertion order.
    pub fn ids(&self) -> &[DancerId] {
        &self.order
    }

    /// Find the front-most dancer under a board point.
    pub fn dancer_at(&self, point: Point, radius: f64) -> Option<DancerId> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.dancers
                    .get(id)
                    .is_some_and(|d| d.hit_test(point, radius))
            })
    }

    pub fn len(&self) -> usize {
        self.dancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dancers.is_empty()
    }

    /// Serialize the registry to JSON.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a registry from JSON.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let registry: Self = serde_json::from_str(json)?;
        let consistent = registry.order.len() == registry.dancers.len()
            && registry.order.iter().all(|id| registry.dancers.contains_key(id));
        if !consistent {
            return Err(RegistryError::InconsistentOrder {
                order: registry.order.len(),
                stored: registry.dancers.len(),
            });
        }
        Ok(registry)
    }
}
