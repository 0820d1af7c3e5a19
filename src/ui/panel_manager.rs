//! Panel orchestration and layout management.
//!
//! Lays out the header, proposal and grid panels and gathers their
//! interactions for the application to apply to the scheduler.

use crate::app::AppState;
use crate::ui::input::grid_input_handler::GridInput;
use crate::ui::{grid_panel, header, proposal_panel};
use meetslot::MeetingDuration;

/// Result of panel interactions that need to be handled by the application.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// A pointer event on the week grid
    Grid(GridInput),
    /// The user's own timezone changed (display label)
    SourceTimezoneSelected(String),
    /// The other party's timezone changed (display label)
    TargetTimezoneSelected(String),
    /// The meeting duration changed
    DurationSelected(MeetingDuration),
    /// Copy the proposal to the clipboard
    CopyRequested,
    /// Deselect every cell
    ClearRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation; interactions
    /// are returned in the order they occurred.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        let theme_colors = state.theme.current_theme().colors.clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interactions.push(match header_interaction {
                    header::HeaderInteraction::SourceTimezoneSelected(label) => {
                        PanelInteraction::SourceTimezoneSelected(label)
                    }
                    header::HeaderInteraction::TargetTimezoneSelected(label) => {
                        PanelInteraction::TargetTimezoneSelected(label)
                    }
                    header::HeaderInteraction::DurationSelected(duration) => {
                        PanelInteraction::DurationSelected(duration)
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("proposal_panel")
            .default_height(ctx.content_rect().height() * 0.28)
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(egui::Margin::same(4)).show(ui, |ui| {
                    if let Some(proposal_interaction) =
                        proposal_panel::render_proposal_panel(ui, state, &theme_colors)
                    {
                        interactions.push(match proposal_interaction {
                            proposal_panel::ProposalInteraction::CopyRequested => {
                                PanelInteraction::CopyRequested
                            }
                            proposal_panel::ProposalInteraction::ClearRequested => {
                                PanelInteraction::ClearRequested
                            }
                        });
                    }
                });
            });

        let grid_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(6))
            .fill(theme_colors.background);

        egui::CentralPanel::default()
            .frame(grid_frame)
            .show(ctx, |ui| {
                let grid_events = grid_panel::render_grid_panel(ui, state, &theme_colors);
                interactions.extend(grid_events.into_iter().map(PanelInteraction::Grid));
            });

        interactions
    }
}
