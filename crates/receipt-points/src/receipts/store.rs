use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::RwLock;

use uuid::Uuid;

use super::domain::{Points, ReceiptId};

/// Default number of identifiers drawn before a collision is treated as fatal.
pub const DEFAULT_ID_ATTEMPTS: NonZeroU32 = match NonZeroU32::new(8) {
    Some(attempts) => attempts,
    None => unreachable!(),
};

/// Source of fresh receipt identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ReceiptId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ReceiptId {
        ReceiptId(Uuid::new_v4().to_string())
    }
}

/// Storage abstraction so the service can be exercised with failing doubles.
pub trait ScoreStore: Send + Sync {
    /// Records `points` under a newly issued identifier.
    fn put(&self, points: Points) -> Result<ReceiptId, StoreError>;
    fn get(&self, id: &ReceiptId) -> Result<Points, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
    #[error("identifier generator collided on {attempts} consecutive attempts")]
    IdCollision { attempts: u32 },
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime map of receipt identifiers to points.
///
/// Every read and write goes through one `RwLock`; identifiers are generated
/// outside it and the collision check plus insert happen under a single write
/// guard, so concurrent `put` calls cannot replace each other's records.
#[derive(Debug)]
pub struct InMemoryScoreStore<G = UuidGenerator> {
    records: RwLock<HashMap<ReceiptId, Points>>,
    generator: G,
    max_attempts: NonZeroU32,
}

impl InMemoryScoreStore<UuidGenerator> {
    pub fn new() -> Self {
        Self::with_generator(UuidGenerator, DEFAULT_ID_ATTEMPTS)
    }
}

impl Default for InMemoryScoreStore<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> InMemoryScoreStore<G>
where
    G: IdGenerator,
{
    pub fn with_generator(generator: G, max_attempts: NonZeroU32) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            generator,
            max_attempts,
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl<G> ScoreStore for InMemoryScoreStore<G>
where
    G: IdGenerator,
{
    fn put(&self, points: Points) -> Result<ReceiptId, StoreError> {
        for _ in 0..self.max_attempts.get() {
            let candidate = self.generator.generate();
            let mut records = self.records.write().map_err(|_| poisoned())?;
            if let Entry::Vacant(slot) = records.entry(candidate) {
                let id = slot.key().clone();
                slot.insert(points);
                return Ok(id);
            }
        }

        Err(StoreError::IdCollision {
            attempts: self.max_attempts.get(),
        })
    }

    fn get(&self, id: &ReceiptId) -> Result<Points, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        records
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("score store lock poisoned".to_string())
}
