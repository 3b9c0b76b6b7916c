//! Errors that can occur while tokenizing and parsing.
//!
//! Every error is a [`symcalc_error::Error`] carrying one of the kinds defined in [`kind`].

pub mod kind;

pub use symcalc_error::Error;
