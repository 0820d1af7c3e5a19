//! Output sinks backed by the windowing layer.

mod clipboard;

pub use clipboard::EguiClipboard;
