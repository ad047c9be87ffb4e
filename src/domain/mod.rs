//! Domain logic for the apron timeline viewer.
//!
//! This module contains the layout engine and related pure functions:
//! - Time axis mapping (clock strings to pixel offsets, day rollover)
//! - Timeline extent and tick-count calculation
//! - Track allocation (greedy packing of event pills)
//! - Annotation baseline placement
//! - Row height resolution
//! - Auto-scroll alignment of the "now" marker
//! - Axis tick generation
//! - Flight search filtering
//!
//! Everything here is stateless and independently testable; the GUI feeds
//! results into the rendering layer unchanged.

pub mod time_axis;
pub mod extent;
pub mod tracks;
pub mod annotations;
pub mod row_height;
pub mod ticks;
pub mod auto_scroll;
pub mod filtering;
