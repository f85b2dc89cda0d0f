//! TimetableSession - synchronous dispatch of user interaction events.
//!
//! One session owns the catalog, the ledger, and the view state. Events
//! are handled one at a time in arrival order and no handler yields
//! mid-mutation, which is what keeps the check-and-decrement in
//! [`CourseSlot::book`](crate::CourseSlot::book) atomic without a lock.
//! Anyone introducing asynchronous work inside a handler must re-establish
//! that guarantee explicitly.

use chrono::{Duration, NaiveDate, Utc};
#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;
use log::warn;

use crate::booking::{Booking, BookingConfirmation, BookingForm};
use crate::catalog::CourseCatalog;
use crate::error::BookingError;
use crate::ledger::{BookingLedger, BOOKINGS_KEY};
use crate::slot::{SlotDescriptor, SlotId};
use crate::store::KeyValueStore;
#[cfg(feature = "emitter")]
use crate::view::SlotView;
use crate::view::{self, DayProjection, SlotFilter, ViewMode, WeekProjection};

/// Session configuration: where the ledger persists and which date the
/// timetable opens on.
#[derive(Clone, Debug)]
pub struct TimetableConfig {
    pub storage_key: String,
    pub anchor: NaiveDate,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        TimetableConfig {
            storage_key: BOOKINGS_KEY.to_string(),
            // The host page's opening week.
            anchor: NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid anchor date"),
        }
    }
}

/// Date navigation steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jump {
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
}

impl Jump {
    fn days(self) -> i64 {
        match self {
            Jump::PrevDay => -1,
            Jump::NextDay => 1,
            Jump::PrevWeek => -7,
            Jump::NextWeek => 7,
        }
    }
}

/// Discrete user interaction events, dispatched by kind.
#[derive(Clone, Debug)]
pub enum UserEvent {
    /// Click on a course slot; opens the booking modal when bookable.
    SelectSlot(SlotId),
    /// Booking form submission against an identity tuple.
    SubmitBooking(SlotId, BookingForm),
    CloseModal,
    SetKindFilter(crate::view::KindFilter),
    SetSearch(String),
    SetViewMode(ViewMode),
    Navigate(Jump),
}

/// What a dispatched event produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A bookable slot was selected; carries the modal preview line.
    SlotSelected { preview: String },
    Confirmed(BookingConfirmation),
    Rejected(BookingError),
    /// View state changed; re-render via [`TimetableSession::current_view`].
    ViewUpdated,
    /// The event had no effect (e.g. selecting a full slot).
    Ignored,
}

/// The active projection, recomputed from live catalog state.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    Week(WeekProjection),
    Day(DayProjection),
}

pub struct TimetableSession<S: KeyValueStore> {
    catalog: CourseCatalog,
    ledger: BookingLedger<S>,
    mode: ViewMode,
    anchor: NaiveDate,
    filter: SlotFilter,
    pending: Option<SlotId>,
    last_booking_id: u64,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl<S: KeyValueStore> TimetableSession<S> {
    pub fn new<I>(descriptors: I, store: S) -> TimetableSession<S>
    where
        I: IntoIterator<Item = SlotDescriptor>,
    {
        Self::with_config(descriptors, store, TimetableConfig::default())
    }

    pub fn with_config<I>(
        descriptors: I,
        store: S,
        config: TimetableConfig,
    ) -> TimetableSession<S>
    where
        I: IntoIterator<Item = SlotDescriptor>,
    {
        TimetableSession {
            catalog: CourseCatalog::load(descriptors),
            ledger: BookingLedger::with_key(store, config.storage_key),
            mode: ViewMode::Week,
            anchor: config.anchor,
            filter: SlotFilter::default(),
            pending: None,
            last_booking_id: 0,
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        }
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &BookingLedger<S> {
        &self.ledger
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn filter(&self) -> &SlotFilter {
        &self.filter
    }

    /// The slot currently staged in the booking modal, if any.
    pub fn pending_slot(&self) -> Option<&SlotId> {
        self.pending.as_ref()
    }

    /// Dispatch one user event synchronously.
    pub fn handle(&mut self, event: UserEvent) -> Outcome {
        match event {
            UserEvent::SelectSlot(id) => self.select_slot(id),
            UserEvent::SubmitBooking(id, form) => self.submit_booking(id, form),
            UserEvent::CloseModal => {
                self.pending = None;
                Outcome::ViewUpdated
            }
            UserEvent::SetKindFilter(kind) => {
                self.filter.kind = kind;
                Outcome::ViewUpdated
            }
            UserEvent::SetSearch(term) => {
                self.filter.search = term;
                Outcome::ViewUpdated
            }
            UserEvent::SetViewMode(mode) => {
                self.mode = mode;
                Outcome::ViewUpdated
            }
            UserEvent::Navigate(jump) => {
                self.anchor = self.anchor + Duration::days(jump.days());
                Outcome::ViewUpdated
            }
        }
    }

    /// Recompute the active projection. Called after any `handle` that
    /// returned `ViewUpdated` or `Confirmed`, so a booking is visible on
    /// the immediately following render.
    pub fn current_view(&self) -> Projection {
        match self.mode {
            ViewMode::Week => {
                Projection::Week(view::project_week(&self.catalog, self.anchor, &self.filter))
            }
            ViewMode::Day => {
                Projection::Day(view::project_day(&self.catalog, self.anchor, &self.filter))
            }
        }
    }

    /// Register a host render hook. Booking success emits
    /// `"booking:confirmed"` with the confirmation JSON and
    /// `"slot:updated"` with the updated slot row JSON.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    fn select_slot(&mut self, id: SlotId) -> Outcome {
        let Some(slot) = self.catalog.find_slot(&id) else {
            return Outcome::Ignored;
        };
        if !slot.is_bookable() {
            return Outcome::Ignored;
        }

        let preview = format!(
            "Course: {} | Time: {} {} | Instructor: {}",
            slot.name, slot.date, slot.time, slot.coach
        );
        self.pending = Some(id);
        Outcome::SlotSelected { preview }
    }

    fn submit_booking(&mut self, id: SlotId, form: BookingForm) -> Outcome {
        let snapshot = match self.catalog.book(&id) {
            Ok(snapshot) => snapshot,
            Err(err) => return Outcome::Rejected(err),
        };

        let booking = Booking::new(self.next_booking_id(), &snapshot, form);
        if let Err(err) = self.ledger.append(&booking) {
            // The seat is taken either way; persistence is best-effort.
            warn!("failed to persist booking {}: {}", booking.id, err);
        }
        self.pending = None;

        let confirmation = BookingConfirmation {
            course: snapshot.course,
            date: snapshot.date,
            time: snapshot.time,
        };

        #[cfg(feature = "emitter")]
        self.notify(&confirmation, &id);

        Outcome::Confirmed(confirmation)
    }

    /// Millisecond-derived, strictly increasing within the session even
    /// when two bookings land on the same clock tick.
    fn next_booking_id(&mut self) -> u64 {
        let now_ms = Utc::now().timestamp_millis().max(0) as u64;
        self.last_booking_id = now_ms.max(self.last_booking_id + 1);
        self.last_booking_id
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self, confirmation: &BookingConfirmation, id: &SlotId) {
        if let Ok(payload) = serde_json::to_string(confirmation) {
            self.emitter.emit("booking:confirmed", payload);
        }

        let updated = self.catalog.find_slot(id).map(SlotView::from);
        if let Some(row) = updated {
            if let Ok(payload) = serde_json::to_string(&row) {
                self.emitter.emit("slot:updated", payload);
            }
        }
    }
}
