#![warn(clippy::all, clippy::cargo)]

mod error;
mod grid;
mod topology;
mod world;
pub mod zoo;

pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use topology::Topology;
pub use world::World;
