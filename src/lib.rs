//! plot-print: resolution-independent printing of 2D plots.
//!
//! A plot laid out for the screen is re-laid out in its own logical
//! coordinates and composited onto a target of any pixel density: title,
//! legend and axis scales through a scaled world transform, canvas content
//! in device pixels with pre-scaled scale maps.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotPrinter, PrintConfig, PrintOptions, PrintOutcome};
pub use error::{PrintError, PrintResult};
