//! CourseCatalog - the single owned arena of loaded slots.
//!
//! The catalog owns every [`CourseSlot`] for the session lifetime. View
//! projections are pure reads over it, recomputed on demand; nothing holds
//! a copy that can drift after a booking mutates a counter.

use chrono::NaiveDate;
use log::warn;

use crate::date;
use crate::error::BookingError;
use crate::slot::{CourseSlot, SlotDescriptor, SlotId};
use crate::view::SlotFilter;

/// Snapshot of a slot's fields taken at the moment a booking succeeds.
/// Records built from it never see later mutation of the slot.
#[derive(Clone, Debug, PartialEq)]
pub struct BookedSnapshot {
    pub course: String,
    pub date: String,
    pub time: String,
    pub coach: String,
    /// Seats left after the decrement.
    pub remaining: u32,
}

pub struct CourseCatalog {
    slots: Vec<CourseSlot>,
}

impl CourseCatalog {
    /// Parse host-rendered descriptors into typed slots, in source order.
    /// Total across partially malformed input: bad capacity or date keeps
    /// the record with zero capacity, an unknown kind tag drops it with a
    /// warning.
    pub fn load<I>(descriptors: I) -> CourseCatalog
    where
        I: IntoIterator<Item = SlotDescriptor>,
    {
        let mut slots = Vec::new();
        for descriptor in descriptors {
            match CourseSlot::from_descriptor(&descriptor) {
                Some(slot) => slots.push(slot),
                None => warn!(
                    "skipping course {:?} with unknown kind tag {:?}",
                    descriptor.name, descriptor.kind
                ),
            }
        }
        CourseCatalog { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in load order.
    pub fn slots(&self) -> &[CourseSlot] {
        &self.slots
    }

    /// Exact match on the identity tuple.
    pub fn find_slot(&self, id: &SlotId) -> Option<&CourseSlot> {
        self.slots.iter().find(|slot| slot.id() == *id)
    }

    fn find_slot_mut(&mut self, id: &SlotId) -> Option<&mut CourseSlot> {
        self.slots.iter_mut().find(|slot| slot.id() == *id)
    }

    /// Slots on the given day, ascending by time. The sort is stable, so
    /// slots sharing a time keep their load order.
    pub fn slots_on(&self, day: NaiveDate) -> Vec<&CourseSlot> {
        let key = date::key(day);
        let mut matches: Vec<&CourseSlot> =
            self.slots.iter().filter(|slot| slot.date == key).collect();
        matches.sort_by(|a, b| a.time.cmp(&b.time));
        matches
    }

    /// Slots passing the filter, in load order.
    pub fn slots_matching(&self, filter: &SlotFilter) -> Vec<&CourseSlot> {
        self.slots.iter().filter(|slot| filter.matches(slot)).collect()
    }

    /// Drive the availability transition for the slot matching `id`. On
    /// success the slot's counter has already been decremented and the
    /// returned snapshot carries its fields as of booking time.
    pub fn book(&mut self, id: &SlotId) -> Result<BookedSnapshot, BookingError> {
        let Some(slot) = self.find_slot_mut(id) else {
            return Err(BookingError::SlotNotFound {
                course: id.name.clone(),
                date: id.date.clone(),
                time: id.time.clone(),
            });
        };

        if !slot.book() {
            return Err(BookingError::CapacityExhausted {
                course: slot.name.clone(),
                date: slot.date.clone(),
                time: slot.time.clone(),
            });
        }

        Ok(BookedSnapshot {
            course: slot.name.clone(),
            date: slot.date.clone(),
            time: slot.time.clone(),
            coach: slot.coach.clone(),
            remaining: slot.remaining(),
        })
    }
}
