//! SQL builders, one per source type.
//!
//! Builders are pure string formatting over the resource id and the static
//! filter table, so the same inputs always produce the same text.

pub mod early_education;
pub mod family_services;
pub mod schools;
