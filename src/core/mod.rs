pub mod flow;
pub mod log;
pub mod validate;
pub mod wizard;
