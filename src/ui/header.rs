//! Header panel UI rendering
//!
//! Handles the top bar with the two timezone selectors, the meeting
//! duration selector and the theme selector.

use eframe::egui;
use meetslot::{MeetingDuration, TimezoneProvider};

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked their own timezone (display label)
    SourceTimezoneSelected(String),
    /// User picked the other party's timezone (display label)
    TargetTimezoneSelected(String),
    /// User picked a meeting duration
    DurationSelected(MeetingDuration),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let catalog = state.scheduler.catalog();

        ui.label("My Time Zone:");
        if let Some(label) = timezone_selector(
            ui,
            "source_timezone",
            state.scheduler.source_label(),
            state.layout.source_filter_mut(),
            catalog,
        ) {
            interaction = Some(HeaderInteraction::SourceTimezoneSelected(label));
        }

        ui.separator();

        ui.label("Other Time Zone:");
        if let Some(label) = timezone_selector(
            ui,
            "target_timezone",
            state.scheduler.target_label(),
            state.layout.target_filter_mut(),
            catalog,
        ) {
            interaction = Some(HeaderInteraction::TargetTimezoneSelected(label));
        }

        ui.separator();

        ui.label("Meeting Duration:");
        let mut duration = state.scheduler.duration();
        egui::ComboBox::from_id_salt("meeting_duration")
            .selected_text(duration.label())
            .show_ui(ui, |ui| {
                for option in MeetingDuration::ALL {
                    ui.selectable_value(&mut duration, option, option.label());
                }
            });
        if duration != state.scheduler.duration() {
            interaction = Some(HeaderInteraction::DurationSelected(duration));
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name
                        );
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    interaction
}

/// A timezone combo box whose popup starts with a filter field.
///
/// Clicks inside the popup keep it open so the filter can be typed into;
/// picking an entry closes it. Returns the newly chosen display label, if any.
fn timezone_selector(
    ui: &mut egui::Ui,
    id_salt: &str,
    current_label: &str,
    filter: &mut String,
    catalog: &dyn TimezoneProvider,
) -> Option<String> {
    let chosen = egui::ComboBox::from_id_salt(id_salt)
        .selected_text(current_label)
        .width(260.0)
        .height(400.0)
        .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
        .show_ui(ui, |ui| timezone_list(ui, filter, current_label, catalog))
        .inner
        .flatten();

    if chosen.is_some() {
        filter.clear();
    }
    chosen
}

/// Popup body: the focused filter field and the matching entries.
fn timezone_list(
    ui: &mut egui::Ui,
    filter: &mut String,
    current_label: &str,
    catalog: &dyn TimezoneProvider,
) -> Option<String> {
    let filter_response = ui.add(egui::TextEdit::singleline(filter).hint_text("Type to filter"));
    if ui.memory(|memory| memory.focused().is_none()) {
        filter_response.request_focus();
    }
    ui.separator();

    let matches = catalog.filter(filter);
    if matches.is_empty() {
        ui.weak("No matching time zones");
    }

    let mut chosen = None;
    for entry in matches {
        let is_current = entry.display_label == current_label;
        if ui.selectable_label(is_current, &entry.display_label).clicked() {
            if !is_current {
                chosen = Some(entry.display_label.clone());
            }
            ui.close();
        }
    }
    chosen
}
