//! Mobile shell bindings for `skilltrack_core`.

pub mod api;
