//! BookingLedger - append-only persisted history of successful bookings.
//!
//! The persisted form is one JSON array under a single storage key, read
//! fully and rewritten wholesale on each append. The ledger is an audit
//! history only: it is never reconciled against the catalog's remaining
//! counters, which reset from the host markup on every session.

use log::warn;

use crate::booking::Booking;
use crate::store::{KeyValueStore, StoreError};

/// Storage key the ledger persists under.
pub const BOOKINGS_KEY: &str = "bookings";

pub struct BookingLedger<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BookingLedger<S> {
    pub fn new(store: S) -> BookingLedger<S> {
        Self::with_key(store, BOOKINGS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> BookingLedger<S> {
        BookingLedger {
            store,
            key: key.into(),
        }
    }

    /// The full persisted sequence in append order. Absent, unreadable, or
    /// corrupt storage reads as empty rather than failing.
    pub fn load_all(&self) -> Vec<Booking> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("booking ledger unreadable, treating as empty: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(bookings) => bookings,
            Err(err) => {
                warn!("booking ledger corrupt, treating as empty: {}", err);
                Vec::new()
            }
        }
    }

    /// Read the current sequence, append, rewrite in full.
    ///
    /// Not transactional against a concurrent writer: two interleaved
    /// read-modify-write appends can silently drop one entry. The host
    /// runs a single tab, so this matches the source behavior and is kept
    /// as a documented limitation.
    pub fn append(&self, booking: &Booking) -> Result<(), StoreError> {
        let mut bookings = self.load_all();
        bookings.push(booking.clone());
        let raw =
            serde_json::to_string(&bookings).map_err(|err| StoreError::Serde(err.to_string()))?;
        self.store.set(&self.key, raw)
    }
}
