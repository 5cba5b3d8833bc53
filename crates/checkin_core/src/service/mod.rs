//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and clock capabilities into the daily rollover
//!   lifecycle and the per-module save entry points.
//! - Keep front-end layers decoupled from storage details.

pub mod checkin_service;
