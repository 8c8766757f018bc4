//! Append-only attendance ledger.
//!
//! Backed by the `attendance-ledger` store key, which holds the full ordered
//! list of records as a JSON array. Append is the only mutation; admin views
//! get read access and nothing else.

use crate::models::attendance_record::AttendanceRecord;
use crate::store::{ATTENDANCE_LEDGER, KeyValueStore, StoreError};
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Clone)]
pub struct Ledger {
    store: Arc<dyn KeyValueStore>,
}

impl Ledger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<AttendanceRecord>, StoreError> {
        match self.store.get(ATTENDANCE_LEDGER)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn append(&self, record: AttendanceRecord) -> Result<(), StoreError> {
        log::debug!("ledger: appending claim by {}", record.username);
        let mut records = self.load()?;
        records.push(record);
        self.store
            .put(ATTENDANCE_LEDGER, &serde_json::to_string(&records)?)
    }

    /// All records in insertion order. Each call restarts from the head.
    pub fn query_all(&self) -> Result<impl Iterator<Item = AttendanceRecord>, StoreError> {
        Ok(self.load()?.into_iter())
    }

    /// Records whose claim instant falls on `day` in local time.
    pub fn query_by_day(
        &self,
        day: NaiveDate,
    ) -> Result<impl Iterator<Item = AttendanceRecord>, StoreError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(move |record| record.taken_on() == day))
    }

    pub fn count_for_day(&self, day: NaiveDate) -> Result<usize, StoreError> {
        Ok(self.query_by_day(day)?.count())
    }
}
