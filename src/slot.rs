use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date;

/// Display category of a class. Governs presentation only; slot identity
/// never depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Mat,
    Reformer,
    Postnatal,
    Rehab,
    Private,
}

impl ClassKind {
    pub fn from_tag(tag: &str) -> Option<ClassKind> {
        match tag.trim() {
            "mat" => Some(ClassKind::Mat),
            "reformer" => Some(ClassKind::Reformer),
            "postnatal" => Some(ClassKind::Postnatal),
            "rehab" => Some(ClassKind::Rehab),
            "private" => Some(ClassKind::Private),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ClassKind::Mat => "mat",
            ClassKind::Reformer => "reformer",
            ClassKind::Postnatal => "postnatal",
            ClassKind::Rehab => "rehab",
            ClassKind::Private => "private",
        }
    }
}

/// Identity of a slot within a loaded catalog: name + date key + time.
/// The coach is deliberately not part of it — a slot could be recoached
/// without becoming a different slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId {
    pub name: String,
    pub date: String,
    pub time: String,
}

impl SlotId {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> SlotId {
        SlotId {
            name: name.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}

/// Raw attribute bundle as rendered by the host page, before any
/// normalization.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SlotDescriptor {
    pub kind: String,
    pub name: String,
    pub coach: String,
    pub time: String,
    pub date: String,
    #[serde(default)]
    pub remaining: Option<String>,
}

/// Availability state of a slot. `Open` iff seats remain; once `Exhausted`
/// a slot stays so for the rest of the session (there is no cancellation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Open,
    Exhausted,
}

/// One offering of one class at one date and time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseSlot {
    pub kind: ClassKind,
    pub name: String,
    pub coach: String,
    /// Canonical date key (`YYYY-MM-DD`), or the raw trimmed string when
    /// the source matched neither accepted shape (such a slot loads with
    /// zero capacity).
    pub date: String,
    /// 24-hour `HH:MM`; sorts lexicographically in time-of-day order.
    pub time: String,
    remaining: u32,
}

impl CourseSlot {
    pub fn new(
        kind: ClassKind,
        name: impl Into<String>,
        coach: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        remaining: u32,
    ) -> CourseSlot {
        CourseSlot {
            kind,
            name: name.into(),
            coach: coach.into(),
            date: date::key(date),
            time: time.into(),
            remaining,
        }
    }

    /// Build a slot from raw host attributes. Fail-soft: a missing or
    /// non-numeric `remaining` reads as 0, and a date matching neither
    /// accepted shape keeps the slot under its raw string with capacity
    /// forced to 0. Only an unknown kind tag drops the record.
    pub fn from_descriptor(descriptor: &SlotDescriptor) -> Option<CourseSlot> {
        let kind = ClassKind::from_tag(&descriptor.kind)?;

        let mut remaining = descriptor
            .remaining
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);

        let date = match date::canonical_key(&descriptor.date) {
            Some(key) => key,
            None => {
                remaining = 0;
                descriptor.date.trim().to_string()
            }
        };

        Some(CourseSlot {
            kind,
            name: descriptor.name.trim().to_string(),
            coach: descriptor.coach.trim().to_string(),
            date,
            time: descriptor.time.trim().to_string(),
            remaining,
        })
    }

    pub fn id(&self) -> SlotId {
        SlotId::new(&self.name, &self.date, &self.time)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn availability(&self) -> Availability {
        if self.remaining > 0 {
            Availability::Open
        } else {
            Availability::Exhausted
        }
    }

    pub fn is_bookable(&self) -> bool {
        self.remaining > 0
    }

    /// The only availability transition: check and decrement without
    /// yielding in between. Returns `false` on an exhausted slot and
    /// leaves the counter untouched.
    pub fn book(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(remaining: Option<&str>) -> SlotDescriptor {
        SlotDescriptor {
            kind: "mat".to_string(),
            name: "Mat Fundamentals".to_string(),
            coach: "Emma Liu".to_string(),
            time: "09:00".to_string(),
            date: "2024-06-10".to_string(),
            remaining: remaining.map(String::from),
        }
    }

    #[test]
    fn kind_tag_roundtrip() {
        for kind in [
            ClassKind::Mat,
            ClassKind::Reformer,
            ClassKind::Postnatal,
            ClassKind::Rehab,
            ClassKind::Private,
        ] {
            assert_eq!(ClassKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ClassKind::from_tag("yoga"), None);
    }

    #[test]
    fn from_descriptor_canonical_date() {
        let slot = CourseSlot::from_descriptor(&descriptor(Some("8"))).unwrap();
        assert_eq!(slot.date, "2024-06-10");
        assert_eq!(slot.remaining(), 8);
        assert_eq!(slot.availability(), Availability::Open);
    }

    #[test]
    fn from_descriptor_long_form_date() {
        let mut d = descriptor(Some("5"));
        d.date = "June 10, 2024".to_string();
        let slot = CourseSlot::from_descriptor(&d).unwrap();
        assert_eq!(slot.date, "2024-06-10");
    }

    #[test]
    fn missing_remaining_reads_as_zero() {
        let slot = CourseSlot::from_descriptor(&descriptor(None)).unwrap();
        assert_eq!(slot.remaining(), 0);
        assert!(!slot.is_bookable());
    }

    #[test]
    fn non_numeric_remaining_reads_as_zero() {
        let slot = CourseSlot::from_descriptor(&descriptor(Some("lots"))).unwrap();
        assert_eq!(slot.remaining(), 0);
    }

    #[test]
    fn unparseable_date_loads_unbookable() {
        let mut d = descriptor(Some("8"));
        d.date = "whenever".to_string();
        let slot = CourseSlot::from_descriptor(&d).unwrap();
        assert_eq!(slot.date, "whenever");
        assert_eq!(slot.remaining(), 0);
        assert_eq!(slot.availability(), Availability::Exhausted);
    }

    #[test]
    fn unknown_kind_drops_record() {
        let mut d = descriptor(Some("8"));
        d.kind = "spin".to_string();
        assert!(CourseSlot::from_descriptor(&d).is_none());
    }

    #[test]
    fn identity_ignores_coach() {
        let mut a = CourseSlot::from_descriptor(&descriptor(Some("8"))).unwrap();
        a.coach = "Someone Else".to_string();
        let b = CourseSlot::from_descriptor(&descriptor(Some("8"))).unwrap();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn book_decrements_until_exhausted() {
        let mut slot = CourseSlot::from_descriptor(&descriptor(Some("2"))).unwrap();
        assert!(slot.book());
        assert_eq!(slot.remaining(), 1);
        assert!(slot.book());
        assert_eq!(slot.remaining(), 0);
        assert_eq!(slot.availability(), Availability::Exhausted);
        assert!(!slot.book());
        assert_eq!(slot.remaining(), 0);
    }

    #[test]
    fn at_most_capacity_bookings_succeed() {
        let mut slot = CourseSlot::from_descriptor(&descriptor(Some("5"))).unwrap();
        let successes = (0..20).filter(|_| slot.book()).count();
        assert_eq!(successes, 5);
        assert_eq!(slot.remaining(), 0);
    }
}
