//! Page components

pub mod dashboard;
pub mod public;
pub mod shop;
