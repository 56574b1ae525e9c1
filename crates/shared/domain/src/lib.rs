//! # Domain Models
//!
//! Pure data for the lexicon front end: the transfer objects the backend sends, the richer
//! domain objects the front end renders, search commands, and configuration.
//! Keep it lean: no I/O and no conversion logic, only data and small helpers.

// Lets `#[model_class]` expansions refer to `::scriba_domain` from inside this crate.
extern crate self as scriba_domain;

pub mod config;
pub mod dto;
pub mod model;
pub mod search;

pub use scriba_derive::model_class;
