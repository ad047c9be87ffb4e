//! Utility modules for the apron timeline viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{
    control_entry_id, control_timestamp, format_memory_mb, format_time_with_day,
    get_current_memory_mb,
};
