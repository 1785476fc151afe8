//! # ott-tagger
//!
//! Upload a CSV metadata file and view it as a table.
//!
//! The whole program is one small pipeline: a host surface (the `ott-view`
//! CLI or the Yew web UI) hands over an optional [`UploadedFile`], the
//! [`Page`] parses it into a [`Table`], and the host performs the returned
//! [`Effect`]s through a [`Presenter`].
//!
//! ## Overview
//!
//! - **No file yet**: title, welcome text and the upload prompt.
//! - **Parsed**: the same, plus a success message and the table.
//! - **Failed**: the same, plus `"An error occurred: "` and the reason.
//!
//! ## Example
//!
//! ```
//! use ott_tagger::{Effect, Page, UploadedFile};
//!
//! let page = Page::default();
//! let file = UploadedFile::new("titles.csv", "name,year\nMoana,2016\nEncanto,2021\n");
//!
//! let effects = page.handle_upload(Some(&file));
//! let Some(Effect::Table(table)) = effects.last() else {
//!     panic!("expected a table");
//! };
//!
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.rows()[1].get("name"), Some("Encanto"));
//! ```

pub mod config;
pub mod effect;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod render;
pub mod table;
pub mod upload;

pub use config::PageConfig;
pub use effect::{Effect, Presenter, present_all};
pub use error::PipelineError;
pub use parse::{DEFAULT_MAX_BYTES, ParseOptions, parse_csv};
pub use pipeline::{ERROR_PREFIX, ErrorReport, Outcome, Page};
pub use render::{JsonPresenter, TextPresenter, format_table};
pub use table::{CellValue, ColumnKind, Row, Table};
pub use upload::UploadedFile;
