//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the apron viewer:
//! - Header panel (search, date, scale selector, legend, theme selector)
//! - Flight list (the left column of info cards, scroll-synced to the board)
//! - Timeline panel (tick header, flight rows, now marker, auto-scroll)
//! - Flight detail panel (times table, remarks editor, event status cards)
//! - Capsule modal (lifecycle log, quick commands, control input)
//! - Status bar (memory, snapshot source, counts)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod flight_list;
pub mod timeline_panel;
pub mod flight_panel;
pub mod capsule_modal;
pub mod status_bar;
pub mod panel_manager;
