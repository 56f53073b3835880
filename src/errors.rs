//! Unified application error type.
//! Infrastructure failures (db, config, io) surface as `AppError`; a user
//! input the wizard refuses is a `Rejection`, which is recoverable by
//! submitting the step again.

use crate::models::field::Field;
use crate::models::step::Step;
use std::io;
use thiserror::Error;

/// Why a step refused its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("{} is required.", .0.label())]
    MissingField(Field),

    #[error("{}", .0.format_message())]
    FormatInvalid(Field),

    #[error("{}", .0.format_message())]
    OutOfRange(Field),

    #[error("{}", .0.choice_message())]
    NotInCandidateSet(Field),

    #[error("Reservation date cannot be in the past.")]
    PastDate,

    #[error("Please start a booking first.")]
    NoBookingInProgress,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database / session store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Wizard outcomes surfaced to the shell
    // ---------------------------
    #[error("{reason} (step: {step})")]
    Rejected { step: Step, reason: Rejection },

    #[error("{0} Run `rreserve start` to begin.")]
    NoBooking(Rejection),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
