//! Data model for the Jupiter front page category payload.
//!
//! The payload is an externally supplied JSON document. Only the
//! `data.category.frontPage` path is modelled; everything else is ignored on
//! decode. All types are read-only views: nothing in the workspace mutates a
//! decoded payload.
#![allow(missing_docs)]

pub mod payload;
pub mod row;
#[cfg(feature = "serde")]
mod serde_helpers;

pub use payload::{Category, CategoryData, CategoryPayload};
pub use row::{Item, Photo, Row};
