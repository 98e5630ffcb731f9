//! Header emission.
//!
//! Renders a [`Lattice`](crate::Lattice) as a C++ header holding one X-macro
//! row per type and a constant with the number of bits in use.

mod config;
mod render;


pub use config::Config;
pub use render::{render, write};
