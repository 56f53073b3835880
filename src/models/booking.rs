use crate::errors::AppResult;
use crate::models::catalog::{Ambience, Cuisine, Location, PriceRange, Restaurant};
use crate::models::field::Field;
use crate::session::SessionStore;
use crate::utils::date::format_display;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The session record: booking state accumulated one step at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricerange: Option<PriceRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Cuisine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambience: Option<Ambience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_points: Option<u32>,
}

impl Booking {
    /// A booking is in progress once the user-info step has stored a name.
    pub fn in_progress(&self) -> bool {
        self.name.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Booking::default()
    }

    /// Rebuild the record from whatever the store currently holds.
    /// Keys that are not booking fields are ignored.
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> AppResult<Self> {
        let snapshot = store.snapshot()?;
        let map: Map<String, Value> = snapshot
            .into_iter()
            .filter(|(k, _)| Field::from_key(k).is_some())
            .collect();
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    fn entries(&self) -> AppResult<BTreeMap<String, Value>> {
        let mut out = BTreeMap::new();
        if let Value::Object(map) = serde_json::to_value(self)? {
            for (key, value) in map {
                debug!("session set {key} = {value}");
                out.insert(key, value);
            }
        }
        Ok(out)
    }

    /// Write every present field into the store, all or nothing.
    pub fn persist<S: SessionStore + ?Sized>(&self, store: &mut S) -> AppResult<()> {
        store.set_many(self.entries()?)
    }

    /// Make this record the whole session: older keys are dropped in the
    /// same write.
    pub fn replace_in<S: SessionStore + ?Sized>(&self, store: &mut S) -> AppResult<()> {
        store.replace(self.entries()?)
    }

    /// Display value of one field, if set. The date is rendered with
    /// `date_format`; the stored value is left untouched.
    pub fn display_value(&self, field: Field, date_format: &str) -> Option<String> {
        match field {
            Field::Name => self.name.clone(),
            Field::Phone => self.phone.clone(),
            Field::Date => self.date.map(|d| format_display(d, date_format)),
            Field::People => self.people.map(|p| p.to_string()),
            Field::Time => self.time.clone(),
            Field::Location => self.location.map(|c| c.to_string()),
            Field::PriceRange => self.pricerange.map(|c| c.to_string()),
            Field::Cuisine => self.cuisine.map(|c| c.to_string()),
            Field::Ambience => self.ambience.map(|c| c.to_string()),
            Field::Restaurant => self.restaurant.map(|c| c.to_string()),
            Field::Table => self.table.map(|t| t.to_string()),
            Field::Rating => self.rating.map(|r| r.to_string()),
            Field::Feedback => self.feedback.clone(),
            Field::RewardPoints => self.reward_points.map(|p| p.to_string()),
        }
    }

    /// Read-only snapshot of the set fields, in field order, ready to print.
    pub fn display_rows(&self, date_format: &str) -> Vec<(Field, String)> {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.display_value(f, date_format).map(|v| (f, v)))
            .collect()
    }
}
