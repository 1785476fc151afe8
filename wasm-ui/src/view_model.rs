//! What the page shows, collected from pipeline effects.

use ott_tagger::{Effect, Presenter, Table, present_all};

/// Outcome banner shown above the table.
#[derive(Clone, PartialEq, Debug)]
pub enum Status {
    Success(String),
    Error(String),
}

/// Everything the `App` component renders, filled in by presenting effects.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ViewModel {
    pub title: String,
    pub welcome: Vec<String>,
    pub upload_label: String,
    /// HTML `accept` attribute value (e.g. `.csv`).
    pub accept: String,
    pub status: Option<Status>,
    pub table: Option<Table>,
}

impl ViewModel {
    pub fn from_effects(effects: &[Effect]) -> Self {
        let mut view = Self::default();
        present_all(effects, &mut view);
        view
    }
}

impl Presenter for ViewModel {
    fn show_title(&mut self, text: &str) {
        self.title = text.to_string();
    }

    fn show_text(&mut self, text: &str) {
        self.welcome.push(text.to_string());
    }

    fn show_uploader(&mut self, label: &str, accept: &[String]) {
        self.upload_label = label.to_string();
        self.accept = accept
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(",");
    }

    fn show_success(&mut self, text: &str) {
        self.status = Some(Status::Success(text.to_string()));
    }

    fn show_table(&mut self, table: &Table) {
        self.table = Some(table.clone());
    }

    fn show_error(&mut self, text: &str) {
        self.status = Some(Status::Error(text.to_string()));
        self.table = None;
    }
}
