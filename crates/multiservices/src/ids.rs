//! Identifier and time sources injected into the record store.
//!
//! Production stores use [`UuidIds`] and [`SystemClock`]. Tests swap in
//! [`SequentialIds`] and [`FixedClock`] so created records are fully
//! deterministic.

use crate::model::RecordId;
use chrono::{DateTime, Utc};
use std::cell::Cell;
use uuid::Uuid;

pub trait IdGenerator {
    fn next_id(&self) -> RecordId;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> RecordId {
        RecordId::new(Uuid::new_v4().to_string())
    }
}

/// Counter-based ids: `"1"`, `"2"`, ...
///
/// The counter lives in the generator, not in storage, so two generators
/// writing to the same collection will collide. Meant for tests and
/// throwaway stores.
#[derive(Debug)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> RecordId {
        let id = self.next.get();
        self.next.set(id + 1);
        RecordId::new(id.to_string())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
