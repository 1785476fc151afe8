//! Page text and host defaults.

/// Static text shown on every render of the page, plus the accept filter
/// the host surfaces apply to uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub welcome: String,
    pub upload_label: String,
    pub success_message: String,
    /// Accepted file extensions, without the dot.
    pub accept: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Disney+ OTT Metadata Tagger".to_string(),
            welcome: "Welcome to the metadata tagging system".to_string(),
            upload_label: "Upload your metadata file".to_string(),
            success_message: "File uploaded successfully!".to_string(),
            accept: vec!["csv".to_string()],
        }
    }
}

impl PageConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Accept list as string slices, for [`UploadedFile::is_accepted`](crate::UploadedFile::is_accepted).
    pub fn accept_list(&self) -> Vec<&str> {
        self.accept.iter().map(String::as_str).collect()
    }

    /// Accept list in HTML `accept` attribute form (`.csv,.txt`).
    pub fn accept_attr(&self) -> String {
        self.accept
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(",")
    }
}
