//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: OS specific implementations (settings files, directories, keymaps).

pub mod adapters;
pub mod ports;
