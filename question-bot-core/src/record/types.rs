//! Record data structures

use chrono::{DateTime, Utc};
use std::fmt;
use std::num::{NonZeroU64, ParseIntError};
use std::str::FromStr;

/// Store-assigned identifier of a record. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(NonZeroU64);

impl RecordId {
    pub(crate) const FIRST: Self = Self(NonZeroU64::MIN);

    /// Wrap a raw id, rejecting the reserved value 0
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Get the raw integer value
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<NonZeroU64>().map(Self)
    }
}

/// One logged question and its eventual answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    question: String,
    answer: Option<String>,
    time_asked: DateTime<Utc>,
    time_answered: Option<DateTime<Utc>>,
}

impl Record {
    /// Only the store mints records, so ids stay store-assigned.
    pub(crate) fn new(id: RecordId, question: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: None,
            time_asked: Utc::now(),
            time_answered: None,
        }
    }

    /// Set (or overwrite) the answer and stamp the answer time
    pub(crate) fn set_answer(&mut self, answer: impl Into<String>) {
        self.answer = Some(answer.into());
        self.time_answered = Some(Utc::now());
    }

    /// Get the record id
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Get the question text
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the answer, if one has been recorded
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// When the question was asked
    pub fn time_asked(&self) -> DateTime<Utc> {
        self.time_asked
    }

    /// When the latest answer was recorded
    pub fn time_answered(&self) -> Option<DateTime<Utc>> {
        self.time_answered
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}
