//! Residency Day-Counting Engine
//!
//! This crate estimates how many days a person has spent outside a home
//! jurisdiction, and how many of those were remote-working days, over a
//! trailing window anchored at an arbitrary date. It sweeps that window across
//! a date range to build a daily series and downsamples the series to monthly
//! maxima without hiding transient limit breaches.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
