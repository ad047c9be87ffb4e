//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from domain logic:
//! - Status and lifecycle color mapping for pills, badges, and log bubbles
//! - Theme palette lookup

pub mod color_mapping;
