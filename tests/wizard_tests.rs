use chrono::{Duration, NaiveDate};
use rreserve::core::wizard::{Directive, STEPS, View, Wizard};
use rreserve::errors::Rejection;
use rreserve::models::booking::Booking;
use rreserve::models::catalog::{Ambience, Cuisine, Location, PriceRange, Restaurant};
use rreserve::models::field::Field;
use rreserve::models::form::Form;
use rreserve::models::step::Step;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn wizard() -> Wizard {
    Wizard::new(today())
}

fn user_form(people: &str) -> Form {
    Form::from_pairs([
        ("name", "Asha"),
        ("phone", "9876543210"),
        ("date", "2025-06-15"),
        ("people", people),
        ("time", "7 PM"),
    ])
}

fn advance(wiz: &Wizard, step: Step, form: Form, booking: &Booking) -> (Step, Booking) {
    match wiz.submit(step, &form, booking) {
        Directive::Advance { next, record } => (next, record),
        other => panic!("expected advance from {step}, got {other:?}"),
    }
}

fn one(field: Field, value: &str) -> Form {
    Form::new().with(field, Some(value))
}

/// Walk the wizard from Entry through Table.
fn booked_until_table(wiz: &Wizard) -> Booking {
    let (_, b) = advance(wiz, Step::Entry, Form::new(), &Booking::default());
    let (_, b) = advance(wiz, Step::UserInfo, user_form("4"), &b);
    let (_, b) = advance(wiz, Step::Location, one(Field::Location, "Jayanagar"), &b);
    let (_, b) = advance(wiz, Step::PriceRange, one(Field::PriceRange, "₹50-₹500"), &b);
    let (_, b) = advance(wiz, Step::Cuisine, one(Field::Cuisine, "Chinese"), &b);
    let (_, b) = advance(wiz, Step::Ambience, one(Field::Ambience, "Cafe"), &b);
    let (_, b) = advance(wiz, Step::Restaurant, one(Field::Restaurant, "Zoey's"), &b);
    let (next, b) = advance(wiz, Step::Table, one(Field::Table, "12"), &b);
    assert_eq!(next, Step::Confirmation);
    b
}

#[test]
fn test_step_table_is_linear() {
    assert_eq!(STEPS.len(), Step::ORDER.len());
    for (i, spec) in STEPS.iter().enumerate() {
        assert_eq!(spec.step, Step::ORDER[i]);
        assert_eq!(spec.successor, Step::ORDER.get(i + 1).copied());
    }
    assert!(Wizard::spec(Step::Rating).successor.is_none());
}

#[test]
fn test_every_step_finds_its_own_row() {
    for (i, step) in Step::ORDER.into_iter().enumerate() {
        assert_eq!(step.index(), i);
        assert_eq!(Wizard::spec(step).step, step);
    }
}

#[test]
fn test_only_confirmation_and_rating_need_a_booking() {
    for spec in STEPS.iter() {
        let expected = matches!(spec.step, Step::Confirmation | Step::Rating);
        assert_eq!(spec.requires_booking, expected, "{}", spec.step);
    }
}

#[test]
fn test_step_fields() {
    assert_eq!(
        Wizard::spec(Step::UserInfo).fields,
        &[Field::Name, Field::Phone, Field::Date, Field::People, Field::Time]
    );
    assert_eq!(Wizard::spec(Step::Table).fields, &[Field::Table]);
    assert_eq!(
        Wizard::spec(Step::Rating).fields,
        &[Field::Rating, Field::Feedback]
    );
    assert!(Wizard::spec(Step::Confirmation).fields.is_empty());
}

#[test]
fn test_entry_clears_previous_booking() {
    let wiz = wizard();
    let old = booked_until_table(&wiz);
    assert!(old.in_progress());

    let (next, record) = advance(&wiz, Step::Entry, Form::new(), &old);
    assert_eq!(next, Step::UserInfo);
    assert!(record.is_empty());
}

#[test]
fn test_scenario_a_user_info_advances_to_location() {
    let wiz = wizard();
    let (next, b) = advance(&wiz, Step::UserInfo, user_form("4"), &Booking::default());

    assert_eq!(next, Step::Location);
    assert_eq!(b.name.as_deref(), Some("Asha"));
    assert_eq!(b.phone.as_deref(), Some("9876543210"));
    assert_eq!(b.date, Some(today()));
    assert_eq!(b.people, Some(4));
    assert_eq!(b.time.as_deref(), Some("7 PM"));
    assert!(b.location.is_none());
}

#[test]
fn test_scenario_b_bad_phone_stays_without_writing() {
    let wiz = wizard();
    let form = Form::from_pairs([
        ("name", "Asha"),
        ("phone", "12345"),
        ("date", "2025-06-20"),
        ("people", "4"),
    ]);
    let before = Booking::default();

    match wiz.submit(Step::UserInfo, &form, &before) {
        Directive::Stay { step, reason } => {
            assert_eq!(step, Step::UserInfo);
            assert_eq!(reason, Rejection::FormatInvalid(Field::Phone));
            assert!(reason.to_string().contains("must be exactly 10 digits"));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(before.is_empty());
}

#[test]
fn test_scenario_c_full_walk_terminates_with_rewards() {
    let wiz = wizard();
    let b = booked_until_table(&wiz);
    let (next, b) = advance(&wiz, Step::Confirmation, Form::new(), &b);
    assert_eq!(next, Step::Rating);

    let form = Form::from_pairs([("rating", "4.5"), ("feedback", "Great!")]);
    let record = match wiz.submit(Step::Rating, &form, &b) {
        Directive::Terminate { record } => record,
        other => panic!("expected terminate, got {other:?}"),
    };

    assert_eq!(record.rating, Some(4.5));
    assert_eq!(record.feedback.as_deref(), Some("Great!"));
    assert_eq!(record.reward_points, Some(10_000));

    assert_eq!(record.name.as_deref(), Some("Asha"));
    assert_eq!(record.people, Some(4));
    assert_eq!(record.location, Some(Location::Jayanagar));
    assert_eq!(record.pricerange, Some(PriceRange::Budget));
    assert_eq!(record.cuisine, Some(Cuisine::Chinese));
    assert_eq!(record.ambience, Some(Ambience::Cafe));
    assert_eq!(record.restaurant, Some(Restaurant::Zoeys));
    assert_eq!(record.table, Some(12));
}

#[test]
fn test_scenario_d_confirmation_without_booking_redirects() {
    let wiz = wizard();
    let expected = Directive::Redirect {
        step: Step::Entry,
        reason: Rejection::NoBookingInProgress,
    };

    assert_eq!(
        wiz.submit(Step::Confirmation, &Form::new(), &Booking::default()),
        expected
    );
    assert_eq!(
        wiz.view(Step::Confirmation, &Booking::default()),
        View::Redirect {
            step: Step::Entry,
            reason: Rejection::NoBookingInProgress,
        }
    );
    assert!(
        Rejection::NoBookingInProgress
            .to_string()
            .contains("start a booking first")
    );
}

#[test]
fn test_scenario_e_party_size_out_of_range() {
    let wiz = wizard();
    for people in ["51", "0"] {
        match wiz.submit(Step::UserInfo, &user_form(people), &Booking::default()) {
            Directive::Stay { step, reason } => {
                assert_eq!(step, Step::UserInfo);
                assert_eq!(reason, Rejection::OutOfRange(Field::People));
            }
            other => panic!("people={people}: unexpected {other:?}"),
        }
    }
}

#[test]
fn test_user_info_validates_in_order() {
    let wiz = wizard();
    // every field is wrong: the name is reported first
    let all_bad = Form::from_pairs([
        ("name", " "),
        ("phone", "1"),
        ("date", "yesterday"),
        ("people", "0"),
    ]);
    let reason_of = |form: &Form| match wiz.submit(Step::UserInfo, form, &Booking::default()) {
        Directive::Stay { reason, .. } => reason,
        other => panic!("unexpected {other:?}"),
    };

    assert_eq!(reason_of(&all_bad), Rejection::MissingField(Field::Name));

    let bad_date = Form::from_pairs([
        ("name", "Asha"),
        ("phone", "9876543210"),
        ("date", "2025-06-14"),
        ("people", "0"),
    ]);
    assert_eq!(reason_of(&bad_date), Rejection::PastDate);

    let no_date = Form::from_pairs([("name", "Asha"), ("phone", "9876543210")]);
    assert_eq!(reason_of(&no_date), Rejection::MissingField(Field::Date));
}

#[test]
fn test_user_info_trims_inputs_and_accepts_empty_time() {
    let wiz = wizard();
    let form = Form::from_pairs([
        ("name", "  Asha  "),
        ("phone", " 9876543210 "),
        ("date", " 2025-06-16 "),
        ("people", " 2 "),
    ]);
    let (_, b) = advance(&wiz, Step::UserInfo, form, &Booking::default());

    assert_eq!(b.name.as_deref(), Some("Asha"));
    assert_eq!(b.phone.as_deref(), Some("9876543210"));
    assert_eq!(b.date, Some(today() + Duration::days(1)));
    assert_eq!(b.people, Some(2));
    assert_eq!(b.time.as_deref(), Some(""));
}

#[test]
fn test_choice_steps_reject_near_matches() {
    let wiz = wizard();
    let b = Booking::default();
    let cases = [
        (Step::Location, Field::Location, "jayanagar"),
        (Step::PriceRange, Field::PriceRange, "50-500"),
        (Step::Cuisine, Field::Cuisine, " Indian"),
        (Step::Ambience, Field::Ambience, "fine dining"),
        (Step::Restaurant, Field::Restaurant, "Zoeys"),
    ];
    for (step, field, raw) in cases {
        assert_eq!(
            wiz.submit(step, &one(field, raw), &b),
            Directive::Stay {
                step,
                reason: Rejection::NotInCandidateSet(field),
            }
        );
    }
}

#[test]
fn test_failed_step_keeps_record_unchanged() {
    let wiz = wizard();
    let b = booked_until_table(&wiz);
    let snapshot = b.clone();

    let res = wiz.submit(Step::Table, &one(Field::Table, "16"), &b);
    assert_eq!(
        res,
        Directive::Stay {
            step: Step::Table,
            reason: Rejection::OutOfRange(Field::Table),
        }
    );
    assert_eq!(b, snapshot);
}

#[test]
fn test_earlier_step_can_be_resubmitted() {
    let wiz = wizard();
    let b = booked_until_table(&wiz);

    let (next, b2) = advance(&wiz, Step::UserInfo, user_form("9"), &b);
    assert_eq!(next, Step::Location);
    assert_eq!(b2.people, Some(9));
    assert_eq!(b2.table, Some(12));
}

#[test]
fn test_rating_failure_and_reward_override() {
    let wiz = wizard().with_reward_points(250);
    let b = booked_until_table(&wiz);

    let bad = Form::from_pairs([("rating", "6"), ("feedback", "meh")]);
    assert_eq!(
        wiz.submit(Step::Rating, &bad, &b),
        Directive::Stay {
            step: Step::Rating,
            reason: Rejection::OutOfRange(Field::Rating),
        }
    );

    let ok = Form::from_pairs([("rating", "0")]);
    match wiz.submit(Step::Rating, &ok, &b) {
        Directive::Terminate { record } => {
            assert_eq!(record.rating, Some(0.0));
            assert_eq!(record.feedback.as_deref(), Some(""));
            assert_eq!(record.reward_points, Some(250));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_rating_requires_booking() {
    let wiz = wizard();
    let form = Form::from_pairs([("rating", "5")]);
    assert!(matches!(
        wiz.submit(Step::Rating, &form, &Booking::default()),
        Directive::Redirect {
            step: Step::Entry,
            ..
        }
    ));
}

#[test]
fn test_views_do_not_touch_the_record() {
    let wiz = wizard();
    let b = booked_until_table(&wiz);
    let snapshot = b.clone();

    for step in Step::ORDER {
        let _ = wiz.view(step, &b);
    }
    assert_eq!(b, snapshot);
}

#[test]
fn test_choice_views_list_catalogs() {
    let wiz = wizard();
    let b = Booking::default();
    assert_eq!(
        wiz.view(Step::Location, &b),
        View::Choices {
            step: Step::Location,
            options: vec!["Jayanagar", "Indiranagar", "Sarjapur Road"],
        }
    );
    assert_eq!(
        wiz.view(Step::UserInfo, &b),
        View::Details {
            default_date: "2025-06-15".to_string(),
        }
    );
    assert_eq!(wiz.view(Step::Table, &b), View::TableNumber { range: 1..=15 });
}

#[test]
fn test_review_formats_date_for_display_only() {
    let wiz = wizard();
    let b = booked_until_table(&wiz);

    let rows = match wiz.view(Step::Confirmation, &b) {
        View::Review { rows } => rows,
        other => panic!("unexpected {other:?}"),
    };
    assert!(rows.contains(&(Field::Date, "15/06/2025".to_string())));
    assert!(rows.contains(&(Field::PriceRange, "₹50-₹500".to_string())));
    assert_eq!(rows[0], (Field::Name, "Asha".to_string()));
    assert_eq!(b.date, Some(today()));
}

#[test]
fn test_review_with_custom_date_format() {
    let wiz = wizard().with_date_format("%d %b %Y");
    let b = booked_until_table(&wiz);
    match wiz.view(Step::Confirmation, &b) {
        View::Review { rows } => {
            assert!(rows.contains(&(Field::Date, "15 Jun 2025".to_string())));
        }
        other => panic!("unexpected {other:?}"),
    }

    // a pattern a date cannot satisfy falls back to ISO
    let wiz = wizard().with_date_format("%H:%M");
    match wiz.view(Step::Confirmation, &b) {
        View::Review { rows } => {
            assert!(rows.contains(&(Field::Date, "2025-06-15".to_string())));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_config_reward_points_default_and_override() {
    use rreserve::config::Config;
    use rreserve::core::wizard::DEFAULT_REWARD_POINTS;

    let cfg = Config::parse("database: /tmp/rr.sqlite\n").unwrap();
    assert_eq!(cfg.reward_points, DEFAULT_REWARD_POINTS);
    assert_eq!(cfg.reward_points, 10_000);
    assert_eq!(cfg.date_display_format, "%d/%m/%Y");

    let cfg = Config::parse("database: /tmp/rr.sqlite\nreward_points: 500\n").unwrap();
    let wiz = Wizard::from_config(&cfg, today());
    let booking = booked_until_table(&wiz);
    let rating = Form::from_pairs([("rating", "3")]);
    match wiz.submit(Step::Rating, &rating, &booking) {
        Directive::Terminate { record } => assert_eq!(record.reward_points, Some(500)),
        other => panic!("expected terminate, got {other:?}"),
    }
}
