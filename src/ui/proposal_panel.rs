//! Proposal panel UI rendering
//!
//! Shows the generated proposal as read-only text with the copy and clear
//! buttons next to it.

use eframe::egui;
use egui::{RichText, ScrollArea};
use meetslot::ThemeColors;

use crate::app::AppState;

/// Result of proposal panel interactions
pub enum ProposalInteraction {
    /// User clicked "Copy to Clipboard"
    CopyRequested,
    /// User clicked "Clear Selection"
    ClearRequested,
}

/// Renders the proposal text and its action buttons.
pub fn render_proposal_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<ProposalInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            if ui.button("📋 Copy to Clipboard").clicked() {
                interaction = Some(ProposalInteraction::CopyRequested);
            }

            let has_selection = state.scheduler.selection().has_selection();
            if ui
                .add_enabled(has_selection, egui::Button::new("✖ Clear Selection"))
                .clicked()
            {
                interaction = Some(ProposalInteraction::ClearRequested);
            }

            if let Some(message) = &state.status_message {
                ui.label(RichText::new(message).color(theme_colors.text_dim));
            }
        });

        ui.separator();

        ScrollArea::vertical()
            .id_salt("proposal_text")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut text = state.scheduler.proposal();
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
            });
    });

    interaction
}
