//! Apron Operations Timeline GUI Application
//!
//! An interactive Gantt-style dashboard for airport ground handling, built
//! on the egui framework. The viewer features:
//! - A horizontally scrolling timeline with one row per flight
//! - Greedy track packing of ground-handling event pills
//! - Annotation baselines for release and takeoff windows

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - A live "now" marker refreshed once per minute, with deferred auto-scroll
//! - Flight detail panel with editable remarks
//! - Capsule modal with a lifecycle log and control-directive input
//! - Asynchronous snapshot loading with a loading indicator
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - The layout engine (time mapping, packing, extent, ticks)
//! - `presentation/` - Color mapping (separated from domain logic)
//! - `cache/` - Memoization of derived geometry
//! - `io/` - Snapshot loading and simulated control dispatch
//! - `utils/` - Formatting helpers
//! - `ui/` - Panel rendering and interaction
//! - `rendering/` - Low-level painters for the axis header and rows
//! - `state/` - Focused state components

use eframe::egui;
use std::path::PathBuf;
use std::time::Duration;

mod utils;
mod cache;
mod domain;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, TIME_SCALE_KEY};
use domain::time_axis::TimeScale;
use io::{AsyncLoader, ControlDispatcher};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point for the apron timeline viewer.
fn main() -> eframe::Result {
    // Optional snapshot file to load on startup
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 860.0])
            .with_title("Apron Operations Timeline"),
        ..Default::default()
    };

    eframe::run_native(
        "Apron Operations Timeline",
        options,
        Box::new(move |cc| Ok(Box::new(ApronViewerApp::new(cc, initial_file)))),
    )
}

/// The main apron timeline viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading, clock refresh, and mutations
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct ApronViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous snapshot loader
    loader: AsyncLoader,
    /// Simulated persistence for control directives
    dispatcher: ControlDispatcher,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl ApronViewerApp {
    /// Creates a new viewer with theme and scale restored from storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let scale: TimeScale =
            SettingsCoordinator::load_setting_or(cc.storage, TIME_SCALE_KEY, TimeScale::default());

        Self {
            state: AppState::with_preferences(theme_name, scale),
            loader: AsyncLoader::new(),
            dispatcher: ControlDispatcher::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenDemoRequested => {
                ApplicationCoordinator::open_demo_schedule(&mut self.state, &mut self.loader);
            }
            PanelInteraction::FlightCardClicked { flight_id } => {
                ApplicationCoordinator::handle_flight_card_click(&mut self.state, flight_id);
            }
            PanelInteraction::PillClicked { flight_id, event_id } => {
                ApplicationCoordinator::handle_event_pill_click(&mut self.state, flight_id, event_id);
            }
            PanelInteraction::PanelClosed => {
                self.state.selection.close_panel();
            }
            PanelInteraction::RemarksSaved => {
                ApplicationCoordinator::save_remarks(&mut self.state);
            }
            PanelInteraction::ModalClosed => {
                self.state.selection.close_modal();
            }
            PanelInteraction::ControlSubmitted => {
                ApplicationCoordinator::submit_control(&mut self.state, &mut self.dispatcher, ctx);
            }
        }
    }
}

impl eframe::App for ApronViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, TIME_SCALE_KEY, &self.state.axis.scale());
    }

    /// Main update loop.
    ///
    /// 1. Pick up async loading and control-dispatch completions
    /// 2. Refresh the wall clock when its minute interval elapsed
    /// 3. Apply the theme and render all panels
    /// 4. Handle panel interactions
    /// 5. Schedule repaints for the pending auto-scroll and the next minute
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);
        ApplicationCoordinator::check_control_completion(&mut self.state, &mut self.dispatcher);
        ApplicationCoordinator::refresh_clock(&mut self.state, ctx.content_rect().width());

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            storage.set_string("theme_preference", self.state.theme.current_theme_name().to_string());
            SettingsCoordinator::save_setting(storage, TIME_SCALE_KEY, &self.state.axis.scale());
        }

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, &self.loader, self.dispatcher.is_dispatching())
        {
            self.handle_panel_interaction(interaction, ctx);
        }

        // Wake up for the deferred auto-scroll shot, and for the next minute.
        if self.state.scroll.has_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
        ctx.request_repaint_after(self.state.clock.next_refresh_delay());
    }
}
