//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing for admin passwords and the karaoke PIN.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod jwt;
pub mod password;
