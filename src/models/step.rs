use serde::Serialize;
use std::fmt;

/// The stages of the reservation wizard, in the order they are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Step {
    Entry,
    UserInfo,
    Location,
    PriceRange,
    Cuisine,
    Ambience,
    Restaurant,
    Table,
    Confirmation,
    Rating,
}

impl Step {
    pub const ORDER: [Step; 10] = [
        Step::Entry,
        Step::UserInfo,
        Step::Location,
        Step::PriceRange,
        Step::Cuisine,
        Step::Ambience,
        Step::Restaurant,
        Step::Table,
        Step::Confirmation,
        Step::Rating,
    ];

    /// Position in `ORDER`.
    pub fn index(&self) -> usize {
        match self {
            Step::Entry => 0,
            Step::UserInfo => 1,
            Step::Location => 2,
            Step::PriceRange => 3,
            Step::Cuisine => 4,
            Step::Ambience => 5,
            Step::Restaurant => 6,
            Step::Table => 7,
            Step::Confirmation => 8,
            Step::Rating => 9,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::Entry => "entry",
            Step::UserInfo => "user-info",
            Step::Location => "location",
            Step::PriceRange => "price-range",
            Step::Cuisine => "cuisine",
            Step::Ambience => "ambience",
            Step::Restaurant => "restaurant",
            Step::Table => "table",
            Step::Confirmation => "confirmation",
            Step::Rating => "rating",
        }
    }

    /// Subcommand that drives this step.
    pub fn command(&self) -> &'static str {
        match self {
            Step::Entry => "rreserve start",
            Step::UserInfo => "rreserve user",
            Step::Location => "rreserve location",
            Step::PriceRange => "rreserve pricerange",
            Step::Cuisine => "rreserve cuisine",
            Step::Ambience => "rreserve ambience",
            Step::Restaurant => "rreserve restaurant",
            Step::Table => "rreserve table",
            Step::Confirmation => "rreserve confirm",
            Step::Rating => "rreserve rate",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
