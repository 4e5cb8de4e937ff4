//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod booking;
pub mod contact;
pub mod dj_note;
pub mod engineering_booking;
pub mod finance;
pub mod form_state;
pub mod gallery;
pub mod inquiry;
pub mod instagram_post;
pub mod karaoke;
pub mod karaoke_hosting;
pub mod music_break;
pub mod performance_booking;
pub mod photo_slider;
pub mod promotion;
pub mod review;
pub mod user;
