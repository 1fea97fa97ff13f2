//! slice-markers - Build triangle-list visualization markers for mapping slice limits

pub mod config;
pub mod domain;
pub mod geometry;
pub mod marker;
