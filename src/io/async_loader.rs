//! Asynchronous schedule snapshot loading.
//!
//! This module handles loading schedule files in background threads,
//! keeping the GUI responsive during file I/O operations.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;
use rapron::{generate_demo_schedule, ScheduleData, ScheduleReader};

/// Shared flag for an in-flight load. Results travel over the channel; only
/// the progress bit is shared, wrapped in `Arc<Mutex<..>>` between the GUI
/// thread and the loading thread.
#[derive(Default)]
struct LoadingState {
    in_progress: bool,
}

/// Seed used for the in-app demo snapshot, so demo sessions are comparable.
pub const DEMO_SEED: u64 = 42;

/// Filler flights generated beneath the curated demo set.
pub const DEMO_EXTRA_FLIGHTS: usize = 14;

/// Result of a completed snapshot loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded snapshot
        data: ScheduleData,
        /// Path to the file that was loaded (None for demo schedules)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of schedule snapshots.
///
/// Coordinates background-thread file loading with the main GUI thread so
/// large or compressed snapshots never block a frame.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<ScheduleData, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::default())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Starts loading a snapshot file asynchronously from the specified path.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the snapshot file (`.json` or `.json.br`)
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        if let Ok(mut state) = self.loading_state.lock() {
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        let path_string = path.to_string_lossy().into_owned();

        thread::spawn(move || {
            let reader = ScheduleReader::new();
            let result = reader.read(&path_string).map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);

            if let Ok(mut state) = loading_state.lock() {
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Generates the in-memory demo snapshot.
    ///
    /// Generation is deterministic and fast, so it runs synchronously.
    pub fn load_demo_schedule(&mut self) -> ScheduleData {
        generate_demo_schedule(DEMO_SEED, DEMO_EXTRA_FLIGHTS)
    }

    /// Checks if background loading has completed and returns the result.
    ///
    /// Call once per frame in the update loop.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(data) => {
                        let path = self.pending_load_path.take();
                        LoadResult::Success { data, path }
                    }
                    Err(error_msg) => {
                        self.pending_load_path = None;
                        LoadResult::Error(error_msg)
                    }
                };

                self.loading_receiver = None;

                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_demo_schedule_loading() {
        let mut loader = AsyncLoader::new();
        let data = loader.load_demo_schedule();
        assert!(!data.flights.is_empty());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_file_load_roundtrip() {
        use rapron::ScheduleWriter;

        let path = std::env::temp_dir().join("rapron_loader_test.json");
        let path_str = path.to_string_lossy().into_owned();

        let data = generate_demo_schedule(7, 2);
        let mut writer = ScheduleWriter::new(&path_str).unwrap();
        writer
            .write_header(&data.metadata.airport, &data.metadata.date, data.metadata.day_start_hour)
            .unwrap();
        for flight in &data.flights {
            writer.write_flight(flight).unwrap();
        }
        writer.write_footer().unwrap();
        writer.finish().unwrap();

        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_file_load(path.clone(), &ctx);

        // Wait for the background thread to deliver.
        let mut result = LoadResult::None;
        for _ in 0..100 {
            result = loader.check_completion();
            if !matches!(result, LoadResult::None) {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        match result {
            LoadResult::Success { data: loaded, path: loaded_path } => {
                assert_eq!(loaded.flights.len(), data.flights.len());
                assert_eq!(loaded_path, Some(path.clone()));
            }
            LoadResult::Error(e) => panic!("load failed: {}", e),
            LoadResult::None => panic!("load never completed"),
        }

        let _ = std::fs::remove_file(path);
    }
}
