pub mod booking;
pub mod catalog;
pub mod field;
pub mod form;
pub mod step;
