#![allow(dead_code)]

use studio_booking::{BookingForm, SlotDescriptor};

pub fn descriptor(
    kind: &str,
    name: &str,
    coach: &str,
    date: &str,
    time: &str,
    remaining: &str,
) -> SlotDescriptor {
    SlotDescriptor {
        kind: kind.to_string(),
        name: name.to_string(),
        coach: coach.to_string(),
        time: time.to_string(),
        date: date.to_string(),
        remaining: Some(remaining.to_string()),
    }
}

/// The opening week of the studio's timetable, as the host page renders
/// it. Mixes both date shapes deliberately.
pub fn opening_week() -> Vec<SlotDescriptor> {
    vec![
        descriptor("reformer", "Reformer Flow", "Sofia Marchetti", "2024-06-10", "07:30", "4"),
        descriptor("rehab", "Back Care", "Daniel Reyes", "2024-06-10", "07:30", "6"),
        descriptor("mat", "Mat Fundamentals", "Emma Liu", "2024-06-10", "09:00", "8"),
        descriptor("postnatal", "Postnatal Recovery", "Emma Liu", "June 11, 2024", "10:30", "5"),
        descriptor("reformer", "Reformer Intermediate", "Sofia Marchetti", "June 11, 2024", "18:00", "3"),
        descriptor("private", "Private Session", "Daniel Reyes", "2024-06-12", "14:00", "1"),
        descriptor("mat", "Evening Mat", "Emma Liu", "2024-06-12", "19:00", "0"),
    ]
}

pub fn form(name: &str) -> BookingForm {
    BookingForm {
        name: name.to_string(),
        phone: "555-0101".to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        notes: None,
    }
}
