//! Output rendering: candidate cards and console formatting.

pub mod card;
pub mod console;
