//! In-memory record store

use super::types::{Record, RecordId};
use parking_lot::Mutex;
use tracing::debug;

/// Routine reasons an answer update is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    #[error("answer must not be empty")]
    EmptyAnswer,

    #[error("no record with id {0}")]
    NotFound(RecordId),
}

/// Repository of question records
///
/// Implementations own identifier allocation and timestamps. Every
/// operation is atomic with respect to the others.
pub trait RecordStore: Send + Sync {
    /// Log a new question and return a copy of the created record
    fn create_record(&self, question: &str) -> Record;

    /// Attach an answer to an existing record
    ///
    /// The answer is checked before the id. Re-answering overwrites the
    /// previous answer and answer time.
    fn try_update_record(&self, id: RecordId, answer: &str) -> Result<Record, UpdateError>;

    /// Snapshot of all records in creation order
    fn records(&self) -> Vec<Record>;

    /// Look up a single record
    fn get_record(&self, id: RecordId) -> Option<Record>;

    /// Number of records held
    fn len(&self) -> usize;

    /// Check if the store holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct Arena {
    records: Vec<Record>,
    /// Next id to hand out; never reused
    next_id: RecordId,
}

/// Process-local store guarded by a single mutex
#[derive(Debug)]
pub struct InMemoryStore {
    inner: Mutex<Arena>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Arena {
                records: Vec::new(),
                next_id: RecordId::FIRST,
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryStore {
    fn create_record(&self, question: &str) -> Record {
        let mut arena = self.inner.lock();
        let id = arena.next_id;
        arena.next_id = id.next();

        let record = Record::new(id, question);
        arena.records.push(record.clone());
        debug!(id = %id, "Question record created");
        record
    }

    fn try_update_record(&self, id: RecordId, answer: &str) -> Result<Record, UpdateError> {
        if answer.is_empty() {
            debug!(id = %id, "Rejected empty answer");
            return Err(UpdateError::EmptyAnswer);
        }

        let mut arena = self.inner.lock();
        // Ids are allocated in ascending order, so the vector is sorted by id.
        let index = arena
            .records
            .binary_search_by_key(&id, Record::id)
            .map_err(|_| {
                debug!(id = %id, "No record to update");
                UpdateError::NotFound(id)
            })?;

        let record = &mut arena.records[index];
        record.set_answer(answer);
        debug!(id = %id, "Question record answered");
        Ok(record.clone())
    }

    fn records(&self) -> Vec<Record> {
        self.inner.lock().records.clone()
    }

    fn get_record(&self, id: RecordId) -> Option<Record> {
        let arena = self.inner.lock();
        arena
            .records
            .binary_search_by_key(&id, Record::id)
            .ok()
            .map(|index| arena.records[index].clone())
    }

    fn len(&self) -> usize {
        self.inner.lock().records.len()
    }
}
