use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::BookedSnapshot;

/// Customer fields collected by the booking form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Immutable record of one completed reservation.
///
/// Course fields are snapshots taken at booking time, not live references;
/// later mutation of the slot's counter never reaches an appended record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,
    pub course: String,
    pub date: String,
    pub time: String,
    pub coach: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// RFC 3339 creation time.
    pub timestamp: String,
}

impl Booking {
    pub fn new(id: u64, snapshot: &BookedSnapshot, form: BookingForm) -> Booking {
        Booking {
            id,
            course: snapshot.course.clone(),
            date: snapshot.date.clone(),
            time: snapshot.time.clone(),
            coach: snapshot.coach.clone(),
            name: form.name,
            phone: form.phone,
            email: form.email,
            notes: form.notes,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Payload surfaced to the host page when a booking succeeds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub course: String,
    pub date: String,
    pub time: String,
}
