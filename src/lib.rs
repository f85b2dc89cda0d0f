mod booking;
mod catalog;
pub mod date;
mod error;
mod ledger;
mod session;
mod slot;
mod store;
mod view;

pub use booking::{Booking, BookingConfirmation, BookingForm};
pub use catalog::{BookedSnapshot, CourseCatalog};
pub use error::BookingError;
pub use ledger::{BookingLedger, BOOKINGS_KEY};
pub use session::{Jump, Outcome, Projection, TimetableConfig, TimetableSession, UserEvent};
pub use slot::{Availability, ClassKind, CourseSlot, SlotDescriptor, SlotId};
pub use store::{InMemoryStore, JsonFileStore, KeyValueStore, StoreError};
pub use view::{
    project_day, project_week, DayProjection, KindFilter, SlotFilter, SlotView, ViewMode,
    WeekProjection,
};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
