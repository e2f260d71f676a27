//! API integration tests
//!
//! Integration tests for all HTTP endpoints

mod auth_test;
mod gis_test;
mod pages_test;
