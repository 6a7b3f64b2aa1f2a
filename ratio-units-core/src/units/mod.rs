//! Predefined unit modules grouped by category.
//!
//! `ratio-units-core` ships a small set of built-in scales so that conversions and formatting work out of the box
//! without downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: metres, centimetres, millimetres (centimetre is the base scale).
//! - [`angle`]: degrees and radians (degree is the base scale).
//! - [`dose`]: gray and centigray (gray is the base scale).

pub mod angle;
pub mod dose;
pub mod length;
