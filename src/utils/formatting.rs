//! Text formatting utilities for the apron timeline viewer.

use chrono::Local;
use rapron::model::is_no_data;
use rapron::TIME_NONE;
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a milestone time as `HH:MM(DD)`, the detail-panel convention that
/// pins a time to its day of month. No-data values pass through unchanged.
pub fn format_time_with_day(time: Option<&str>, day_of_month: &str) -> String {
    match time {
        Some(t) if !is_no_data(t) => format!("{}({})", t, day_of_month),
        _ => TIME_NONE.to_string(),
    }
}

/// Wall-clock stamp for newly created lifecycle entries, `MM-DD HH:MM`.
pub fn control_timestamp() -> String {
    Local::now().format("%m-%d %H:%M").to_string()
}

/// Unique-enough id for a locally created control entry.
pub fn control_entry_id() -> String {
    format!("ctrl_{}", Local::now().timestamp_millis())
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_with_day() {
        assert_eq!(format_time_with_day(Some("10:45"), "05"), "10:45(05)");
        assert_eq!(format_time_with_day(Some(TIME_NONE), "05"), TIME_NONE);
        assert_eq!(format_time_with_day(None, "05"), TIME_NONE);
    }

    #[test]
    fn test_control_timestamp_shape() {
        let stamp = control_timestamp();
        // MM-DD HH:MM
        assert_eq!(stamp.len(), 11);
        assert_eq!(&stamp[2..3], "-");
        assert_eq!(&stamp[5..6], " ");
        assert_eq!(&stamp[8..9], ":");
    }

    #[test]
    fn test_control_entry_id_prefix() {
        assert!(control_entry_id().starts_with("ctrl_"));
    }

    #[test]
    fn test_format_memory_mb() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
