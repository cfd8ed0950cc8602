//! Business-rules engine for a multi-tenant healthcare staffing platform.
//!
//! This crate implements the derivation rules shared by the staffing portals:
//! shift duration and request validation, rate previews with multiplier
//! stacking, document compliance evaluation, shift cancellation windows, and
//! notification preference validation.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rules;
