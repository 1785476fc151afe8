//! Presentation effects and the surface that performs them.

use crate::Table;

/// One thing the presentation surface should show.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Title(String),
    Text(String),
    /// File picker with a prompt and the accepted extensions.
    Uploader { label: String, accept: Vec<String> },
    Success(String),
    Table(Table),
    Error(String),
}

/// A presentation surface (terminal, browser, test recorder).
///
/// Return values are never consumed by the pipeline; surfaces that can fail
/// keep their own error state.
pub trait Presenter {
    fn show_title(&mut self, text: &str);
    fn show_text(&mut self, text: &str);
    fn show_uploader(&mut self, label: &str, accept: &[String]);
    fn show_success(&mut self, text: &str);
    fn show_table(&mut self, table: &Table);
    fn show_error(&mut self, text: &str);
}

impl Effect {
    /// Perform this effect on a presenter.
    pub fn present(&self, presenter: &mut dyn Presenter) {
        match self {
            Effect::Title(text) => presenter.show_title(text),
            Effect::Text(text) => presenter.show_text(text),
            Effect::Uploader { label, accept } => presenter.show_uploader(label, accept),
            Effect::Success(text) => presenter.show_success(text),
            Effect::Table(table) => presenter.show_table(table),
            Effect::Error(text) => presenter.show_error(text),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Effect::Title(_) => "title",
            Effect::Text(_) => "text",
            Effect::Uploader { .. } => "uploader",
            Effect::Success(_) => "success",
            Effect::Table(_) => "table",
            Effect::Error(_) => "error",
        }
    }
}

/// Perform effects in order.
pub fn present_all(effects: &[Effect], presenter: &mut dyn Presenter) {
    for effect in effects {
        effect.present(presenter);
    }
}
