//! In-memory flight list.
//!
//! The [`FlightLog`] owns the records for one session. It is created empty,
//! grows through [`FlightLog::add`], and is replaced wholesale by
//! [`FlightLog::replace`] when a file is loaded.

use tracing::debug;

use crate::record::Record;

/// Ordered collection of flight records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightLog {
    records: Vec<Record>,
}

impl FlightLog {
    /// Create an empty flight log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flight log holding `records` in the given order.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Append a record.
    ///
    /// Once the log holds more than one record it is re-sorted by
    /// [`Record::name`]. The sort is stable, so records sharing a name
    /// (including the usual case where none has one) keep insertion order.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
        if self.records.len() > 1 {
            self.records.sort_by(|a, b| a.name().cmp(b.name()));
        }
        debug!("Flight log now holds {} records", self.records.len());
    }

    /// Replace every record with `records`, keeping their order.
    pub fn replace(&mut self, records: Vec<Record>) {
        debug!(
            "Replacing {} records with {}",
            self.records.len(),
            records.len()
        );
        self.records = records;
    }

    /// All records in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the log and return its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let log = FlightLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.records().is_empty());
    }

    #[test]
    fn test_add_single() {
        let mut log = FlightLog::new();
        log.add(Record::new("Moscow", 101, "Boeing"));

        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].point(), "Moscow");
    }

    #[test]
    fn test_add_without_names_keeps_insertion_order() {
        let mut log = FlightLog::new();
        log.add(Record::new("B", 2, "Y"));
        log.add(Record::new("A", 1, "X"));
        log.add(Record::new("C", 3, "Z"));

        let points: Vec<_> = log.records().iter().map(Record::point).collect();
        assert_eq!(points, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_add_sorts_by_name() {
        let mut log = FlightLog::new();
        log.add(Record::new("first", 1, "X").with_name("charlie"));
        log.add(Record::new("second", 2, "X").with_name("alpha"));
        log.add(Record::new("third", 3, "X").with_name("bravo"));

        let names: Vec<_> = log.records().iter().map(Record::name).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_add_missing_name_sorts_first() {
        let mut log = FlightLog::new();
        log.add(Record::new("named", 1, "X").with_name("a"));
        log.add(Record::new("unnamed", 2, "X"));

        assert_eq!(log.records()[0].point(), "unnamed");
        assert_eq!(log.records()[1].point(), "named");
    }

    #[test]
    fn test_replace_keeps_order_without_sorting() {
        let mut log = FlightLog::new();
        log.add(Record::new("old", 1, "X"));

        log.replace(vec![
            Record::new("z", 1, "X").with_name("z"),
            Record::new("a", 2, "X").with_name("a"),
        ]);

        let points: Vec<_> = log.records().iter().map(Record::point).collect();
        assert_eq!(points, vec!["z", "a"]);
    }

    #[test]
    fn test_replace_with_empty() {
        let mut log = FlightLog::from_records(vec![Record::new("x", 1, "X")]);
        log.replace(Vec::new());
        assert!(log.is_empty());
    }

    #[test]
    fn test_into_records() {
        let log = FlightLog::from_records(vec![Record::new("x", 1, "X")]);
        let records = log.into_records();
        assert_eq!(records.len(), 1);
    }
}
