//! Usecase layer: application workflows + events.

pub mod check;
pub mod convert;
pub mod event;
pub mod stats;
