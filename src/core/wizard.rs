//! Reservation wizard state machine.
//!
//! The walk is described by `STEPS`, an ordered table of
//! `{step, fields, collector, successor}`. A transition never touches the
//! caller's record: collectors work on a draft that is handed back only when
//! every check of the step passes.

use crate::config::Config;
use crate::core::validate;
use crate::errors::Rejection;
use crate::models::booking::Booking;
use crate::models::catalog::{Ambience, Choice, Cuisine, Location, PriceRange, Restaurant};
use crate::models::field::Field;
use crate::models::form::Form;
use crate::models::step::Step;
use crate::utils::date::format_iso;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

pub const DEFAULT_REWARD_POINTS: u32 = 10_000;
pub const DEFAULT_DATE_DISPLAY: &str = "%d/%m/%Y";

type Collector = fn(&Wizard, &Form, &mut Booking) -> Result<(), Rejection>;

/// One row of the transition table.
pub struct StepSpec {
    pub step: Step,
    /// Fields the step reads from the submitted form.
    pub fields: &'static [Field],
    /// Steps that only make sense once a booking exists.
    pub requires_booking: bool,
    /// `None` marks the terminal step.
    pub successor: Option<Step>,
    collect: Collector,
}

pub static STEPS: [StepSpec; 10] = [
    StepSpec {
        step: Step::Entry,
        fields: &[],
        requires_booking: false,
        successor: Some(Step::UserInfo),
        collect: collect_entry,
    },
    StepSpec {
        step: Step::UserInfo,
        fields: &[Field::Name, Field::Phone, Field::Date, Field::People, Field::Time],
        requires_booking: false,
        successor: Some(Step::Location),
        collect: collect_user_info,
    },
    StepSpec {
        step: Step::Location,
        fields: &[Field::Location],
        requires_booking: false,
        successor: Some(Step::PriceRange),
        collect: |_, form, b| {
            b.location = Some(validate::choice::<Location>(form.raw(Field::Location))?);
            Ok(())
        },
    },
    StepSpec {
        step: Step::PriceRange,
        fields: &[Field::PriceRange],
        requires_booking: false,
        successor: Some(Step::Cuisine),
        collect: |_, form, b| {
            b.pricerange = Some(validate::choice::<PriceRange>(form.raw(Field::PriceRange))?);
            Ok(())
        },
    },
    StepSpec {
        step: Step::Cuisine,
        fields: &[Field::Cuisine],
        requires_booking: false,
        successor: Some(Step::Ambience),
        collect: |_, form, b| {
            b.cuisine = Some(validate::choice::<Cuisine>(form.raw(Field::Cuisine))?);
            Ok(())
        },
    },
    StepSpec {
        step: Step::Ambience,
        fields: &[Field::Ambience],
        requires_booking: false,
        successor: Some(Step::Restaurant),
        collect: |_, form, b| {
            b.ambience = Some(validate::choice::<Ambience>(form.raw(Field::Ambience))?);
            Ok(())
        },
    },
    StepSpec {
        step: Step::Restaurant,
        fields: &[Field::Restaurant],
        requires_booking: false,
        successor: Some(Step::Table),
        collect: |_, form, b| {
            b.restaurant = Some(validate::choice::<Restaurant>(form.raw(Field::Restaurant))?);
            Ok(())
        },
    },
    StepSpec {
        step: Step::Table,
        fields: &[Field::Table],
        requires_booking: false,
        successor: Some(Step::Confirmation),
        collect: |_, form, b| {
            b.table = Some(validate::table_number(form.trimmed(Field::Table))?);
            Ok(())
        },
    },
    StepSpec {
        step: Step::Confirmation,
        fields: &[],
        requires_booking: true,
        successor: Some(Step::Rating),
        collect: |_, _, _| Ok(()),
    },
    StepSpec {
        step: Step::Rating,
        fields: &[Field::Rating, Field::Feedback],
        requires_booking: true,
        successor: None,
        collect: collect_rating,
    },
];

fn collect_entry(_: &Wizard, _: &Form, booking: &mut Booking) -> Result<(), Rejection> {
    *booking = Booking::default();
    Ok(())
}

/// Checked in order name, phone, date, people; the first failure wins and
/// nothing is stored.
fn collect_user_info(wiz: &Wizard, form: &Form, booking: &mut Booking) -> Result<(), Rejection> {
    let name = validate::name(form.raw(Field::Name))?;
    let phone = validate::phone(form.trimmed(Field::Phone))?;
    let date = validate::date(form.trimmed(Field::Date), wiz.today)?;
    let people = validate::party_size(form.trimmed(Field::People))?;

    booking.name = Some(name);
    booking.phone = Some(phone);
    booking.date = Some(date);
    booking.people = Some(people);
    booking.time = Some(form.trimmed(Field::Time).to_string());
    Ok(())
}

fn collect_rating(wiz: &Wizard, form: &Form, booking: &mut Booking) -> Result<(), Rejection> {
    let rating = validate::rating(form.trimmed(Field::Rating))?;

    booking.rating = Some(rating);
    booking.feedback = Some(form.trimmed(Field::Feedback).to_string());
    booking.reward_points = Some(wiz.reward_points);
    Ok(())
}

/// Result of submitting input to a step.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Advance { next: Step, record: Booking },
    Stay { step: Step, reason: Rejection },
    Redirect { step: Step, reason: Rejection },
    Terminate { record: Booking },
}

/// What a step shows when visited without input.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Personal details form, pre-filled with today's date.
    Details { default_date: String },
    Choices { step: Step, options: Vec<&'static str> },
    TableNumber { range: RangeInclusive<u8> },
    Review { rows: Vec<(Field, String)> },
    Rating { scale: RangeInclusive<f64> },
    Redirect { step: Step, reason: Rejection },
}

#[derive(Debug, Clone)]
pub struct Wizard {
    today: NaiveDate,
    reward_points: u32,
    date_format: String,
}

impl Wizard {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            reward_points: DEFAULT_REWARD_POINTS,
            date_format: DEFAULT_DATE_DISPLAY.to_string(),
        }
    }

    pub fn from_config(cfg: &Config, today: NaiveDate) -> Self {
        Self::new(today)
            .with_reward_points(cfg.reward_points)
            .with_date_format(&cfg.date_display_format)
    }

    pub fn with_reward_points(mut self, points: u32) -> Self {
        self.reward_points = points;
        self
    }

    pub fn with_date_format(mut self, fmt: &str) -> Self {
        self.date_format = fmt.to_string();
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Table row for `step`. `STEPS` is laid out in `Step::ORDER`.
    pub fn spec(step: Step) -> &'static StepSpec {
        &STEPS[step.index()]
    }

    /// Submit `form` to `step`. The passed record is never modified; an
    /// updated copy travels in `Advance`/`Terminate`.
    pub fn submit(&self, step: Step, form: &Form, booking: &Booking) -> Directive {
        let spec = Self::spec(step);

        if spec.requires_booking && !booking.in_progress() {
            return Directive::Redirect {
                step: Step::Entry,
                reason: Rejection::NoBookingInProgress,
            };
        }

        let mut draft = booking.clone();
        if let Err(reason) = (spec.collect)(self, form, &mut draft) {
            return Directive::Stay { step, reason };
        }

        match spec.successor {
            Some(next) => Directive::Advance {
                next,
                record: draft,
            },
            None => Directive::Terminate { record: draft },
        }
    }

    /// Visit `step` without input. Read-only.
    pub fn view(&self, step: Step, booking: &Booking) -> View {
        if Self::spec(step).requires_booking && !booking.in_progress() {
            return View::Redirect {
                step: Step::Entry,
                reason: Rejection::NoBookingInProgress,
            };
        }

        match step {
            Step::Entry | Step::UserInfo => View::Details {
                default_date: format_iso(self.today),
            },
            Step::Location => Self::choices::<Location>(step),
            Step::PriceRange => Self::choices::<PriceRange>(step),
            Step::Cuisine => Self::choices::<Cuisine>(step),
            Step::Ambience => Self::choices::<Ambience>(step),
            Step::Restaurant => Self::choices::<Restaurant>(step),
            Step::Table => View::TableNumber {
                range: validate::TABLE_NUMBER,
            },
            Step::Confirmation => View::Review {
                rows: booking.display_rows(&self.date_format),
            },
            Step::Rating => View::Rating {
                scale: validate::RATING_SCALE,
            },
        }
    }

    fn choices<C: Choice>(step: Step) -> View {
        View::Choices {
            step,
            options: C::labels(),
        }
    }
}
