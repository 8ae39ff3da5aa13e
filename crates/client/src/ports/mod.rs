//! Client port definitions.
//!
//! Application code depends on these traits; concrete adapters live in
//! `crate::infrastructure`.

pub mod outbound;
