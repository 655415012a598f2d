//! Single-screen arcade shooter.
//!
//! The library holds the whole simulation; the binary only wires it to a
//! terminal. Nothing here touches I/O directly: drawing goes through the
//! [`surface::DrawSurface`] trait and randomness through an injected RNG.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod spawn;
pub mod surface;
