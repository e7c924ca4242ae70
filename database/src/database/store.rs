use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use crate::{
    consts::consts::RecordId,
    model::record::{Record, RecordInput},
};

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Not found, record does not exist: {0}")]
    NotFound(RecordId),

    #[error("Store is empty, there is no record to pick")]
    Empty,
}

/// Everything guarded by the store lock. The random source lives here as well so a pick
/// reads the key set and draws its index inside one critical section.
struct StoreState {
    records: HashMap<RecordId, Record>,
    rng: StdRng,
}

/// Concurrent in-memory collection of records.
///
/// A single mutex guards the whole mapping. Every operation holds it only for the duration of
/// its read or write, and returned values are owned copies, so callers never observe the live map.
pub struct RecordStore {
    state: Mutex<StoreState>,
}

impl RecordStore {
    /// Creates an empty store whose random source is seeded once from the OS
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates an empty store with a deterministic random source
    pub fn with_rng_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(StoreState {
                records: HashMap::new(),
                rng,
            }),
        }
    }

    /// Pre-seeds the store, each input is assigned a fresh identifier
    pub fn with_records(self, inputs: impl IntoIterator<Item = RecordInput>) -> Self {
        for input in inputs {
            self.insert(input);
        }

        self
    }

    // No operation can leave the map half-written, so a panic in another holder does not
    //  invalidate the data and the guard can be recovered.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all records, in no particular order
    pub fn list(&self) -> Vec<Record> {
        self.lock().records.values().cloned().collect()
    }

    pub fn get(&self, id: &RecordId) -> Result<Record, StoreError> {
        self.lock()
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Stores the input under a newly generated identifier and returns the stored record
    pub fn insert(&self, input: RecordInput) -> Record {
        let record = {
            let mut state = self.lock();

            let mut id = RecordId::new();

            while state.records.contains_key(&id) {
                id = RecordId::new();
            }

            let record = input.into_record(id.clone());
            state.records.insert(id, record.clone());

            record
        };

        log::debug!("Inserted record [id: {}]", record.id);

        record
    }

    /// Picks a record uniformly at random among the records present at the instant of the call
    pub fn pick_random(&self) -> Result<Record, StoreError> {
        let mut state = self.lock();
        let StoreState { records, rng } = &mut *state;

        let index = match records.len() {
            0 => return Err(StoreError::Empty),
            1 => 0,
            len => rng.gen_range(0..len),
        };

        records.values().nth(index).cloned().ok_or(StoreError::Empty)
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
