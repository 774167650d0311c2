//! Core record type for flightlog.
//!
//! A [`Record`] is one flight entry. Records typed in at the prompt carry
//! `point`, `number` and `type`; records read from a file are kept exactly
//! as written, whatever keys and value types they hold, so that a load
//! followed by a save reproduces them key for key and in the same order.
//!
//! The known fields are read through typed accessors that state the
//! default used when a field is absent or holds a value of another type.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the destination field.
pub const POINT: &str = "point";
/// Key of the flight number field.
pub const NUMBER: &str = "number";
/// Key of the aircraft type field.
pub const TYPE: &str = "type";
/// Key of the sort field.
pub const NAME: &str = "name";
/// Key of the service start year field.
pub const YEAR: &str = "year";

/// A single flight entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record with the three fields the prompt asks for.
    #[must_use]
    pub fn new(point: impl Into<String>, number: i64, kind: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(POINT.to_string(), Value::from(point.into()));
        fields.insert(NUMBER.to_string(), Value::from(number));
        fields.insert(TYPE.to_string(), Value::from(kind.into()));
        Self { fields }
    }

    /// Set the service start year.
    #[must_use]
    pub fn with_year(self, year: i64) -> Self {
        self.with(YEAR, year)
    }

    /// Set the sort key.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with(NAME, name.into())
    }

    /// Set an arbitrary field, keeping its position if it already exists.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Raw value of a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields in order.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Destination, or `""` when absent or not a string.
    #[must_use]
    pub fn point(&self) -> &str {
        self.str_field(POINT)
    }

    /// Flight number, or `None` when absent or not an integer.
    #[must_use]
    pub fn number(&self) -> Option<i64> {
        self.fields.get(NUMBER).and_then(Value::as_i64)
    }

    /// Aircraft type, or `""` when absent or not a string.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.str_field(TYPE)
    }

    /// Sort key, or `""` when absent or not a string.
    #[must_use]
    pub fn name(&self) -> &str {
        self.str_field(NAME)
    }

    /// Service start year, or `None` when absent or not an integer.
    #[must_use]
    pub fn year(&self) -> Option<i64> {
        self.fields.get(YEAR).and_then(Value::as_i64)
    }

    /// Service start year, or `current_year` when there is none.
    #[must_use]
    pub fn year_or(&self, current_year: i64) -> i64 {
        self.year().unwrap_or(current_year)
    }

    /// Age in years relative to `current_year`. Records without a year are
    /// zero years old; ages beyond the `i64` range saturate.
    #[must_use]
    pub fn age(&self, current_year: i64) -> i64 {
        current_year.saturating_sub(self.year_or(current_year))
    }

    /// Text shown for `key` in a table: strings as-is, other values as
    /// their JSON text, `default` when absent.
    #[must_use]
    pub fn display_field<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        match self.fields.get(key) {
            None => Cow::Borrowed(default),
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}
