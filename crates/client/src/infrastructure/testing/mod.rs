//! Test doubles shared by unit tests

pub mod fixtures;
