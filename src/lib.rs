//! Conway's Game of Life on an unbounded plane.

pub mod controller;
pub mod engine;
pub mod error;
pub mod input;
pub mod pattern;
pub mod pos;
pub mod render;

pub use controller::{Command, Controller, Flow, Settings};
pub use engine::{LifeBoard, LiveCells, StepReport, Viewport};
pub use error::{Error, Result};
pub use pos::Coord;
