//! Clipboard sink backed by egui's platform integration.

use meetslot::ClipboardSink;

/// Writes proposal text to the system clipboard through an egui context.
pub struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiClipboard<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardSink for EguiClipboard<'_> {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}
