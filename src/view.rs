//! View projections - the week grid and day list renderings.
//!
//! Both are pure functions over the live catalog, recomputed on demand.
//! Filter state is orthogonal to the anchor date and view mode; kind and
//! search compose via logical AND.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CourseCatalog;
use crate::date;
use crate::slot::{ClassKind, CourseSlot};

/// Which rendering of the timetable is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Week,
    Day,
}

/// Kind restriction. `All` short-circuits to no restriction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(ClassKind),
}

/// Composable filter state over the catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotFilter {
    pub kind: KindFilter,
    /// Case-insensitive substring matched against name OR coach; empty
    /// matches everything.
    pub search: String,
}

impl SlotFilter {
    pub fn matches(&self, slot: &CourseSlot) -> bool {
        match self.kind {
            KindFilter::All => {}
            KindFilter::Only(kind) => {
                if slot.kind != kind {
                    return false;
                }
            }
        }

        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        slot.name.to_lowercase().contains(&term) || slot.coach.to_lowercase().contains(&term)
    }
}

/// One render row handed back to the host page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub kind: ClassKind,
    pub name: String,
    pub coach: String,
    pub date: String,
    pub time: String,
    pub remaining: u32,
    pub bookable: bool,
}

impl From<&CourseSlot> for SlotView {
    fn from(slot: &CourseSlot) -> SlotView {
        SlotView {
            kind: slot.kind,
            name: slot.name.clone(),
            coach: slot.coach.clone(),
            date: slot.date.clone(),
            time: slot.time.clone(),
            remaining: slot.remaining(),
            bookable: slot.is_bookable(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeekProjection {
    /// `anchor - anchor+6` range label.
    pub range_label: String,
    pub slots: Vec<SlotView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayProjection {
    /// `YYYY-MM-DD (Weekday)` heading.
    pub heading: String,
    pub slots: Vec<SlotView>,
}

/// All slots passing the filter, in load order. The host's weekly grid
/// already places slots; this projection only decides visibility and the
/// range label.
pub fn project_week(
    catalog: &CourseCatalog,
    anchor: NaiveDate,
    filter: &SlotFilter,
) -> WeekProjection {
    WeekProjection {
        range_label: date::week_range_label(anchor),
        slots: catalog
            .slots_matching(filter)
            .into_iter()
            .map(SlotView::from)
            .collect(),
    }
}

/// The anchor day's slots, time-sorted, intersected with the filter.
pub fn project_day(
    catalog: &CourseCatalog,
    anchor: NaiveDate,
    filter: &SlotFilter,
) -> DayProjection {
    DayProjection {
        heading: date::day_heading(anchor),
        slots: catalog
            .slots_on(anchor)
            .into_iter()
            .filter(|slot| filter.matches(slot))
            .map(SlotView::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::SlotDescriptor;

    fn descriptor(kind: &str, name: &str, coach: &str, date: &str, time: &str) -> SlotDescriptor {
        SlotDescriptor {
            kind: kind.to_string(),
            name: name.to_string(),
            coach: coach.to_string(),
            time: time.to_string(),
            date: date.to_string(),
            remaining: Some("4".to_string()),
        }
    }

    fn catalog() -> CourseCatalog {
        CourseCatalog::load(vec![
            descriptor("mat", "Mat Fundamentals", "Emma Liu", "2024-06-10", "09:00"),
            descriptor("reformer", "Reformer Flow", "Sofia Marchetti", "2024-06-10", "07:30"),
            descriptor("rehab", "Back Care", "Daniel Reyes", "2024-06-11", "07:30"),
        ])
    }

    #[test]
    fn filter_matches_kind_and_term_with_and() {
        let source = catalog();
        let slot = &source.slots()[0];
        let hit = SlotFilter {
            kind: KindFilter::Only(ClassKind::Mat),
            search: "emma".to_string(),
        };
        let wrong_kind = SlotFilter {
            kind: KindFilter::Only(ClassKind::Reformer),
            search: "emma".to_string(),
        };
        let wrong_term = SlotFilter {
            kind: KindFilter::Only(ClassKind::Mat),
            search: "sofia".to_string(),
        };
        assert!(hit.matches(slot));
        assert!(!wrong_kind.matches(slot));
        assert!(!wrong_term.matches(slot));
    }

    #[test]
    fn filter_search_is_case_insensitive() {
        let source = catalog();
        let slot = &source.slots()[1];
        let filter = SlotFilter {
            kind: KindFilter::All,
            search: "REFORMER".to_string(),
        };
        assert!(filter.matches(slot));
    }

    #[test]
    fn week_projection_keeps_load_order_and_labels_range() {
        let anchor = crate::date::parse("2024-06-10").unwrap();
        let week = project_week(&catalog(), anchor, &SlotFilter::default());
        assert_eq!(week.range_label, "2024-06-10 - 2024-06-16");
        let names: Vec<&str> = week.slots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Mat Fundamentals", "Reformer Flow", "Back Care"]);
    }

    #[test]
    fn day_projection_sorts_by_time() {
        let anchor = crate::date::parse("2024-06-10").unwrap();
        let day = project_day(&catalog(), anchor, &SlotFilter::default());
        assert_eq!(day.heading, "2024-06-10 (Monday)");
        let times: Vec<&str> = day.slots.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, vec!["07:30", "09:00"]);
    }

    #[test]
    fn day_projection_applies_filter() {
        let anchor = crate::date::parse("2024-06-10").unwrap();
        let filter = SlotFilter {
            kind: KindFilter::Only(ClassKind::Reformer),
            search: String::new(),
        };
        let day = project_day(&catalog(), anchor, &filter);
        assert_eq!(day.slots.len(), 1);
        assert_eq!(day.slots[0].name, "Reformer Flow");
    }

    #[test]
    fn slot_view_reports_bookability() {
        let mut source = catalog();
        let id = source.slots()[0].id();
        while source.find_slot(&id).unwrap().is_bookable() {
            source.book(&id).unwrap();
        }
        let anchor = crate::date::parse("2024-06-10").unwrap();
        let day = project_day(&source, anchor, &SlotFilter::default());
        let row = day.slots.iter().find(|s| s.name == "Mat Fundamentals").unwrap();
        assert_eq!(row.remaining, 0);
        assert!(!row.bookable);
    }
}
