//! Integration tests
//!
//! Whole-router tests against an in-memory database, plus on-disk database
//! and configuration checks.

pub mod api;
pub mod config_test;
