//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, flight list, timeline, detail panel,
//! capsule modal, status bar) and funnels their interactions back to the
//! application coordinator.

use eframe::egui;

use crate::app::AppState;
use crate::domain::auto_scroll::SIDEBAR_WIDTH;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::ui::{capsule_modal, flight_list, flight_panel, header, status_bar, timeline_panel};

/// Result of panel interactions handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a snapshot file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the demo schedule
    OpenDemoRequested,
    /// A flight info card was clicked
    FlightCardClicked { flight_id: String },
    /// An event pill was clicked
    PillClicked { flight_id: String, event_id: String },
    /// The detail panel was closed
    PanelClosed,
    /// The remarks draft should be written through
    RemarksSaved,
    /// The capsule modal was closed
    ModalClosed,
    /// The control draft should be submitted
    ControlSubmitted,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
        is_dispatching: bool,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors =
            color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name())
                .clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoRequested => {
                        PanelInteraction::OpenDemoRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, is_dispatching);
        });

        // Detail panel on the right, only while open
        if state.selection.panel_open() {
            egui::SidePanel::right("flight_detail_panel")
                .default_width(380.0)
                .resizable(true)
                .show(ctx, |ui| {
                    if let Some(panel_interaction) =
                        flight_panel::render_flight_panel(ui, state, &theme_colors)
                    {
                        interaction = Some(match panel_interaction {
                            flight_panel::FlightPanelInteraction::Close => {
                                PanelInteraction::PanelClosed
                            }
                            flight_panel::FlightPanelInteraction::SaveRemarks => {
                                PanelInteraction::RemarksSaved
                            }
                        });
                    }
                });
        }

        // Left panel: flight info cards
        let list_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::SidePanel::left("flight_list_panel")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .frame(list_frame)
            .show(ctx, |ui| {
                if let Some(flight_list::FlightListInteraction::CardClicked { flight_id }) =
                    flight_list::render_flight_list(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::FlightCardClicked { flight_id });
                }
            });

        // Central panel: the timeline board
        let timeline_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(timeline_frame)
            .show(ctx, |ui| {
                if let Some(timeline_panel::TimelinePanelInteraction::PillClicked {
                    flight_id,
                    event_id,
                }) = timeline_panel::render_timeline_panel(ui, state, loader.is_loading(), &theme_colors)
                {
                    interaction = Some(PanelInteraction::PillClicked { flight_id, event_id });
                }
            });

        // Capsule modal floats above everything
        if let Some(modal_interaction) =
            capsule_modal::render_capsule_modal(ctx, state, is_dispatching, &theme_colors)
        {
            interaction = Some(match modal_interaction {
                capsule_modal::CapsuleModalInteraction::Close => PanelInteraction::ModalClosed,
                capsule_modal::CapsuleModalInteraction::SubmitControl => {
                    PanelInteraction::ControlSubmitted
                }
            });
        }

        interaction
    }
}
