//! Meeting Scheduler GUI Application
//!
//! An interactive week planner for proposing meeting times across two
//! timezones. The window features:
//! - A Monday to Sunday grid of half-hour cells with click and drag selection
//! - Time label columns for the user's own zone and the other party's zone
//! - Business-hours shading computed in the other party's zone
//! - A generated proposal, ready to copy to the clipboard

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and the theme/settings coordinators
//! - `domain/` - Grid geometry and hit-testing
//! - `presentation/` - Cell color mapping (separated from domain logic)
//! - `io/` - Clipboard sink
//! - `ui/` - Panel rendering and grid input handling
//! - `state/` - Theme and layout state

use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod domain;
mod presentation;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, SettingsCoordinator, ThemeCoordinator};
use io::EguiClipboard;
use ui::input::grid_input_handler::GridInput;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "meetslot=info,meetslot_gui=info";

/// Main application entry point that initializes logging and launches the scheduler GUI.
fn main() -> eframe::Result {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 500.0])
            .with_title("Meeting Scheduler"),
        ..Default::default()
    };

    eframe::run_native(
        "Meeting Scheduler",
        options,
        Box::new(|cc| Ok(Box::new(MeetslotApp::new(cc)))),
    )
}

/// Logs to stdout, filtered by `RUST_LOG` when present.
fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

/// The main Meeting Scheduler application.
///
/// Rendering is delegated to `PanelManager`; the panel interactions it
/// returns are applied to the scheduler here.
struct MeetslotApp {
    /// Centralized application state
    state: AppState,
}

impl MeetslotApp {
    /// Creates the scheduler with theme and preferences loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let preferences = SettingsCoordinator::load_preferences(cc.storage);

        let state = AppState::with_preferences(theme_name, &preferences);
        info!(
            "Scheduling from {} to {} for the week of {}",
            state.scheduler.source_timezone_id(),
            state.scheduler.target_timezone_id(),
            state.scheduler.week().monday()
        );

        Self { state }
    }

    /// Applies one panel interaction to the scheduler.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        let scheduler = &mut self.state.scheduler;
        match interaction {
            PanelInteraction::Grid(GridInput::Pressed(cell)) => {
                self.state.status_message = None;
                scheduler.cell_pressed(cell);
            }
            PanelInteraction::Grid(GridInput::DraggedOver(cell)) => {
                scheduler.pointer_over(cell);
            }
            PanelInteraction::Grid(GridInput::Released) => {
                scheduler.pointer_released();
            }
            PanelInteraction::Grid(GridInput::RightClicked(cell)) => {
                self.state.status_message = None;
                scheduler.cell_right_clicked(cell);
            }
            PanelInteraction::SourceTimezoneSelected(label) => {
                scheduler.set_source_timezone(&label);
            }
            PanelInteraction::TargetTimezoneSelected(label) => {
                scheduler.set_target_timezone(&label);
            }
            PanelInteraction::DurationSelected(duration) => {
                scheduler.set_duration(duration);
            }
            PanelInteraction::CopyRequested => {
                let mut clipboard = EguiClipboard::new(ctx);
                self.state.status_message = match scheduler.copy_proposal(&mut clipboard) {
                    Ok(()) => Some("Proposal copied to clipboard".to_string()),
                    Err(e) => {
                        warn!("Could not copy proposal: {:#}", e);
                        Some(format!("Copy failed: {}", e))
                    }
                };
            }
            PanelInteraction::ClearRequested => {
                self.state.status_message = None;
                scheduler.clear_all();
            }
        }
    }
}

impl eframe::App for MeetslotApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_preferences(storage, &self.state.preferences());
    }

    /// Main update loop that renders all UI panels and applies their interactions.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // The displayed week follows the calendar while the app stays open
        self.state.refresh_week();

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
            SettingsCoordinator::save_preferences(storage, &self.state.preferences());
        }

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
