use std::fmt;

/// Errors surfaced by booking operations.
///
/// Malformed load-time input is not represented here: such records load
/// with zero capacity instead, keeping the catalog load total. Storage
/// failures live in [`crate::StoreError`] and never block a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The slot exists but has no remaining capacity.
    CapacityExhausted {
        course: String,
        date: String,
        time: String,
    },
    /// No loaded slot matches the identity tuple.
    SlotNotFound {
        course: String,
        date: String,
        time: String,
    },
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::CapacityExhausted { course, date, time } => {
                write!(f, "{} on {} at {} is fully booked", course, date, time)
            }
            BookingError::SlotNotFound { course, date, time } => {
                write!(f, "no class {} on {} at {}", course, date, time)
            }
        }
    }
}

impl std::error::Error for BookingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_capacity_exhausted() {
        let err = BookingError::CapacityExhausted {
            course: "Mat Fundamentals".to_string(),
            date: "2024-06-10".to_string(),
            time: "09:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Mat Fundamentals on 2024-06-10 at 09:00 is fully booked"
        );
    }

    #[test]
    fn display_slot_not_found() {
        let err = BookingError::SlotNotFound {
            course: "Reformer Flow".to_string(),
            date: "2024-06-11".to_string(),
            time: "18:00".to_string(),
        };
        assert_eq!(err.to_string(), "no class Reformer Flow on 2024-06-11 at 18:00");
    }
}
