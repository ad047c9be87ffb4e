//! Rendering subsystem for drawing the timeline board.
//!
//! This module contains the low-level painters:
//! - Time axis header (tick labels, gridlines, "now" chip)
//! - Flight row rendering (event pills, annotation baselines)
//!
//! Painters consume geometry from the domain layer unchanged; they decide
//! colors and strokes, never positions.

pub mod axis_renderer;
pub mod row_renderer;
