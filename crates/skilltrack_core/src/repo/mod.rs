//! Data-access port for raw fetch payloads.
//!
//! # Responsibility
//! - Define the pull interface the refresh service reads from.
//! - Provide snapshot-backed sources for tests, the CLI and the FFI shell.
//!
//! # Invariants
//! - Sources hand out raw JSON; decoding happens in `model`.

pub mod source;
