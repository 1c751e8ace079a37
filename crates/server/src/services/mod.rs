//! Application services.

pub mod intake;
