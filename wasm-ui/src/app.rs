//! Main application component.

use gloo::console;
use gloo::file::File;
use gloo::file::callbacks::{FileReader, read_as_bytes};
use ott_tagger::{ErrorReport, Outcome, Page, PipelineError, UploadedFile};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{StatusBanner, TablePanel, UploadPanel};
use crate::view_model::ViewModel;

/// Page state: the latest rendered view and the file it came from.
#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    pub view: ViewModel,
    pub file_name: Option<String>,
}

impl AppState {
    /// State for the given input, computed fresh from the pipeline.
    pub fn for_upload(page: &Page, file: Option<&UploadedFile>) -> Self {
        Self {
            view: ViewModel::from_effects(&page.handle_upload(file)),
            file_name: file.map(|f| f.name.clone()),
        }
    }

    /// State after the browser failed to read the selected file.
    pub fn for_read_error(page: &Page, name: &str, reason: &str) -> Self {
        let err = PipelineError::Io(std::io::Error::other(reason.to_string()));
        let effects = page.effects_for(Outcome::Failed(ErrorReport::from_failure(&err)));
        Self {
            view: ViewModel::from_effects(&effects),
            file_name: Some(name.to_string()),
        }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let page = use_memo((), |_| Page::default());
    let state = {
        let page = page.clone();
        use_state(move || AppState::for_upload(&page, None))
    };
    // In-flight read; replacing it cancels the previous one.
    let reader = use_mut_ref(|| None::<FileReader>);

    let on_upload = {
        let state = state.clone();
        let page = page.clone();
        let reader = reader.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let name = file.name();
            let media_type = file.type_();
            let candidate =
                UploadedFile::new(name.clone(), Vec::new()).with_media_type(media_type.clone());
            if !candidate.is_accepted(&page.config.accept_list()) {
                console::warn!(format!("ignoring {name}: not an accepted file type"));
                input.set_value("");
                return;
            }

            console::log!(format!("reading {name} ({} bytes)", file.size()));
            let state = state.clone();
            let page = page.clone();
            let task = read_as_bytes(&File::from(file), move |result| {
                let next = match result {
                    Ok(bytes) => {
                        let upload = UploadedFile::new(name.clone(), bytes).with_media_type(media_type);
                        AppState::for_upload(&page, Some(&upload))
                    }
                    Err(e) => AppState::for_read_error(&page, &name, &e.to_string()),
                };
                state.set(next);
            });
            *reader.borrow_mut() = Some(task);

            // Clear the input so the same file can be uploaded again
            input.set_value("");
        })
    };

    let on_clear = {
        let state = state.clone();
        let page = page.clone();
        let reader = reader.clone();
        Callback::from(move |_| {
            reader.borrow_mut().take();
            state.set(AppState::for_upload(&page, None));
        })
    };

    let view = &state.view;

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ &view.title }</h1>
                    { for view.welcome.iter().map(|text| html! {
                        <p class="subtitle">{ text }</p>
                    })}
                </div>
            </header>

            <main class="main">
                <div class="panels">
                    <UploadPanel
                        label={view.upload_label.clone()}
                        accept={view.accept.clone()}
                        file_name={state.file_name.clone()}
                        on_upload={on_upload}
                        on_clear={on_clear}
                    />

                    if let Some(status) = &view.status {
                        <StatusBanner status={status.clone()} />
                    }

                    if let Some(table) = &view.table {
                        <TablePanel table={table.clone()} />
                    }
                </div>
            </main>

            <footer class="footer">
                <div class="footer-row">
                    <span>{ "CSV upload | UTF-8 | One header row" }</span>
                </div>
                <div class="footer-row">
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_model::Status;

    #[test]
    fn test_initial_state_awaits_upload() {
        let state = AppState::for_upload(&Page::default(), None);
        assert_eq!(state.file_name, None);
        assert_eq!(state.view.status, None);
        assert!(state.view.table.is_none());
    }

    #[test]
    fn test_upload_state_tracks_file_name() {
        let file = UploadedFile::new("titles.csv", "name\nBolt\n");
        let state = AppState::for_upload(&Page::default(), Some(&file));
        assert_eq!(state.file_name.as_deref(), Some("titles.csv"));
        assert!(state.view.table.is_some());
    }

    #[test]
    fn test_read_error_state() {
        let state = AppState::for_read_error(&Page::default(), "titles.csv", "NotReadableError");
        assert_eq!(
            state.view.status,
            Some(Status::Error(
                "An error occurred: failed to read uploaded file: NotReadableError".to_string()
            ))
        );
    }
}
