//! Fixed option catalogs offered by the choice steps.
//!
//! Each catalog is a closed enum; the user-facing label is the only accepted
//! spelling (exact, case-sensitive match) and also the stored form.

use crate::models::field::Field;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A closed set of candidates for one choice field.
pub trait Choice: Sized + Copy + 'static {
    /// The session field the choice is stored under.
    const FIELD: Field;
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == s)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

macro_rules! catalog {
    ($name:ident, $field:expr, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const FIELD: Field = $field;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $name::from_label(&raw).ok_or_else(|| {
                    de::Error::custom(format!(
                        "unknown {} '{}', expected one of: {}",
                        $field.key(),
                        raw,
                        $name::labels().join(", ")
                    ))
                })
            }
        }
    };
}

catalog!(Location, Field::Location, {
    Jayanagar => "Jayanagar",
    Indiranagar => "Indiranagar",
    SarjapurRoad => "Sarjapur Road",
});

catalog!(PriceRange, Field::PriceRange, {
    Budget => "₹50-₹500",
    Mid => "₹500-₹2000",
    Premium => "₹2000-₹5000",
});

catalog!(Cuisine, Field::Cuisine, {
    Indian => "Indian",
    Italian => "Italian",
    Chinese => "Chinese",
});

catalog!(Ambience, Field::Ambience, {
    FineDining => "Fine Dining",
    Buffet => "Buffet",
    Cafe => "Cafe",
});

catalog!(Restaurant, Field::Restaurant, {
    KaravalliTaj => "Karavalli @ Taj",
    HardRockCafe => "Hard Rock Cafe",
    Zoeys => "Zoey's",
});
