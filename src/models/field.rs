use serde::Serialize;
use std::fmt;

/// Every field the session record can hold, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Field {
    Name,
    Phone,
    Date,
    People,
    Time,
    Location,
    PriceRange,
    Cuisine,
    Ambience,
    Restaurant,
    Table,
    Rating,
    Feedback,
    RewardPoints,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::Name,
        Field::Phone,
        Field::Date,
        Field::People,
        Field::Time,
        Field::Location,
        Field::PriceRange,
        Field::Cuisine,
        Field::Ambience,
        Field::Restaurant,
        Field::Table,
        Field::Rating,
        Field::Feedback,
        Field::RewardPoints,
    ];

    /// Form / session-store key.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::People => "people",
            Field::Time => "time",
            Field::Location => "location",
            Field::PriceRange => "pricerange",
            Field::Cuisine => "cuisine",
            Field::Ambience => "ambience",
            Field::Restaurant => "restaurant",
            Field::Table => "table",
            Field::Rating => "rating",
            Field::Feedback => "feedback",
            Field::RewardPoints => "reward_points",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Human readable label used in summaries and messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone number",
            Field::Date => "Reservation date",
            Field::People => "Number of people",
            Field::Time => "Time slot",
            Field::Location => "Location",
            Field::PriceRange => "Price range",
            Field::Cuisine => "Cuisine",
            Field::Ambience => "Ambience",
            Field::Restaurant => "Restaurant",
            Field::Table => "Table",
            Field::Rating => "Rating",
            Field::Feedback => "Feedback",
            Field::RewardPoints => "Reward points",
        }
    }

    /// Message shown when the raw value cannot be parsed or falls outside
    /// its accepted range. Both cases share the same text.
    pub fn format_message(&self) -> String {
        match self {
            Field::Phone => "Phone number must be exactly 10 digits.".to_string(),
            Field::Date => "Invalid date format.".to_string(),
            Field::People => "Number of people must be a number between 1 and 50.".to_string(),
            Field::Table => "Table must be a number between 1 and 15.".to_string(),
            Field::Rating => "Rating must be between 0 and 5.".to_string(),
            other => format!("{} has an invalid value.", other.label()),
        }
    }

    pub fn choice_message(&self) -> String {
        format!("Please choose a valid {}.", self.label().to_lowercase())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
