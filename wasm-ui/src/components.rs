//! UI Components for the upload page.

use ott_tagger::{ColumnKind, Table};
use yew::prelude::*;

use crate::view_model::Status;

/// Upload panel with the file picker.
#[derive(Properties, PartialEq)]
pub struct UploadPanelProps {
    pub label: String,
    pub accept: String,
    pub file_name: Option<String>,
    pub on_upload: Callback<web_sys::Event>,
    pub on_clear: Callback<()>,
}

#[function_component(UploadPanel)]
pub fn upload_panel(props: &UploadPanelProps) -> Html {
    let on_change = {
        let on_upload = props.on_upload.clone();
        Callback::from(move |e: web_sys::Event| {
            on_upload.emit(e);
        })
    };

    let on_clear_click = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| {
            on_clear.emit(());
        })
    };

    html! {
        <div class="panel upload-panel">
            <div class="panel-header">
                <h2>{ &props.label }</h2>
                <div class="button-group">
                    <label class="file-button">
                        { "Browse files" }
                        <input type="file" accept={props.accept.clone()} onchange={on_change} />
                    </label>
                    if props.file_name.is_some() {
                        <button class="clear-button" onclick={on_clear_click}>
                            { "Clear" }
                        </button>
                    }
                </div>
            </div>
            <div class="panel-content">
                if let Some(name) = &props.file_name {
                    <span class="file-name">{ name }</span>
                } else {
                    <span class="hint">{ format!("Drag and drop or browse ({})", props.accept) }</span>
                }
            </div>
        </div>
    }
}

/// Success or error banner.
#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: Status,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    match &props.status {
        Status::Success(text) => html! { <div class="success">{ text }</div> },
        Status::Error(text) => html! { <div class="error">{ text }</div> },
    }
}

/// Table panel rendering the parsed grid.
#[derive(Properties, PartialEq)]
pub struct TablePanelProps {
    pub table: Table,
}

#[function_component(TablePanel)]
pub fn table_panel(props: &TablePanelProps) -> Html {
    let table = &props.table;
    let kinds = table.column_kinds();
    let cell_class = |kind: &ColumnKind| if kind.is_numeric() { "cell numeric" } else { "cell" };

    html! {
        <div class="panel table-panel">
            <div class="panel-header">
                <h2>{ "Contents" }</h2>
                <span class="stats">
                    { format!("{} rows x {} columns", table.row_count(), table.column_count()) }
                </span>
            </div>
            <div class="panel-content">
                <table class="data-grid">
                    <thead>
                        <tr>
                            <th class="index"></th>
                            { for table.columns().iter().zip(&kinds).map(|(name, kind)| html! {
                                <th class={cell_class(kind)} title={kind.name()}>{ name }</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        { for table.rows().iter().enumerate().map(|(idx, row)| html! {
                            <tr>
                                <td class="index">{ idx }</td>
                                { for row.cells().iter().zip(&kinds).map(|(cell, kind)| html! {
                                    <td class={cell_class(kind)}>{ cell }</td>
                                })}
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
