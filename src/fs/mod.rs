//! File system utilities for assessa
//!
//! JSON reading and atomic JSON writing for scripts, profiles and snapshots.

mod json;

pub use json::{read_json, read_profile, read_script, read_snapshot, write_json, write_text};
