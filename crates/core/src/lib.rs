//! Domain rules for the venue backend.
//!
//! Pure functions and constants shared by the database and API layers.
//! Nothing in this crate performs I/O.

pub mod booking;
pub mod error;
pub mod finance;
pub mod forms;
pub mod karaoke;
pub mod ordering;
pub mod promotion;
pub mod review;
pub mod types;
pub mod validation;
