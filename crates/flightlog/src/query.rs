//! Age-based selection of flight records.

use chrono::{Datelike, Local};

use crate::record::Record;

/// The current calendar year from the local clock.
#[must_use]
pub fn current_year() -> i64 {
    i64::from(Local::now().year())
}

/// Select records at least `period` years old, in their original order.
#[must_use]
pub fn select_by_age(records: &[Record], period: i64) -> Vec<&Record> {
    select_by_age_at(records, period, current_year())
}

/// Select records at least `period` years old as of `current_year`.
///
/// Records without an integer year count as zero years old, so they are only
/// selected when `period <= 0`.
#[must_use]
pub fn select_by_age_at(records: &[Record], period: i64, current_year: i64) -> Vec<&Record> {
    records
        .iter()
        .filter(|record| record.age(current_year) >= period)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Old", 1, "Tu-134").with_year(1990),
            Record::new("Mid", 2, "A320").with_year(2014),
            Record::new("New", 3, "MC-21").with_year(2023),
            Record::new("Unknown", 4, "Boeing"),
        ]
    }

    fn points<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().copied().map(Record::point).collect()
    }

    #[test]
    fn test_select_by_period() {
        let records = sample();
        let selected = select_by_age_at(&records, 10, 2024);
        assert_eq!(points(&selected), vec!["Old", "Mid"]);
    }

    #[test]
    fn test_select_boundary_is_inclusive() {
        let records = sample();
        let selected = select_by_age_at(&records, 34, 2024);
        assert_eq!(points(&selected), vec!["Old"]);

        let selected = select_by_age_at(&records, 35, 2024);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_select_zero_includes_records_without_year() {
        let records = sample();
        let selected = select_by_age_at(&records, 0, 2024);
        assert_eq!(points(&selected), vec!["Old", "Mid", "New", "Unknown"]);
    }

    #[test]
    fn test_select_positive_excludes_records_without_year() {
        let records = vec![Record::new("Unknown", 4, "Boeing")];
        assert!(select_by_age_at(&records, 1, 2024).is_empty());
    }

    #[test]
    fn test_select_negative_period() {
        let records = sample();
        let selected = select_by_age_at(&records, -5, 2024);
        assert_eq!(selected.len(), records.len());
    }

    #[test]
    fn test_select_preserves_order() {
        let records = vec![
            Record::new("B", 1, "X").with_year(2000),
            Record::new("A", 2, "X").with_year(1980),
            Record::new("C", 3, "X").with_year(1990),
        ];
        let selected = select_by_age_at(&records, 20, 2024);
        assert_eq!(points(&selected), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_select_extreme_years() {
        let records = vec![
            Record::new("Ancient", 1, "X").with_year(i64::MIN),
            Record::new("Far future", 2, "Y").with_year(i64::MAX),
        ];

        let selected = select_by_age_at(&records, 0, 2024);
        assert_eq!(points(&selected), vec!["Ancient"]);

        let selected = select_by_age_at(&records, i64::MAX, 2024);
        assert_eq!(points(&selected), vec!["Ancient"]);

        let selected = select_by_age_at(&records, i64::MIN, 2024);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_select_non_integer_year_counts_as_current() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"point":"Odd","year":"1990"}]"#).unwrap();
        assert_eq!(select_by_age_at(&records, 0, 2024).len(), 1);
        assert!(select_by_age_at(&records, 1, 2024).is_empty());
    }

    #[test]
    fn test_select_empty() {
        assert!(select_by_age_at(&[], 0, 2024).is_empty());
    }

    #[test]
    fn test_select_by_age_uses_current_year() {
        let this_year = current_year();
        let records = vec![Record::new("Now", 1, "X").with_year(this_year)];
        assert_eq!(select_by_age(&records, 0).len(), 1);
        assert!(select_by_age(&records, 1).is_empty());
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
