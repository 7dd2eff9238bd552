//! Form building blocks shared by the editor dialogs: labeled fields, the
//! save/delete action bar, the comma-separated tag editor, and the upload
//! controls that exchange files for URL references.

use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::editor::inputs::{add_tags, remove_tag};
use crate::helpers::show_toast;

pub fn field(label: &str, control: Html) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{ label.to_string() }</span>
            { control }
        </label>
    }
}

pub fn text_input(
    value: &str,
    placeholder: &str,
    disabled: bool,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <input
            class="input"
            type="text"
            value={value.to_string()}
            placeholder={placeholder.to_string()}
            disabled={disabled}
            {oninput}
        />
    }
}

/// Text input with a keystroke allow-list: a disallowed printable key is
/// swallowed before it reaches the value (navigation and shortcut keys pass
/// through). The `oninput` handler still re-checks the whole value, so
/// pasted text is filtered as well.
pub fn filtered_input(
    value: &str,
    placeholder: &str,
    disabled: bool,
    allow: fn(&str) -> bool,
    oninput: Callback<InputEvent>,
) -> Html {
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        let key = e.key();
        if key.chars().count() == 1 && !allow(&key) {
            e.prevent_default();
        }
    });

    html! {
        <input
            class="input"
            type="text"
            value={value.to_string()}
            placeholder={placeholder.to_string()}
            disabled={disabled}
            {oninput}
            {onkeydown}
        />
    }
}

pub fn textarea_input(
    value: &str,
    rows: u32,
    placeholder: &str,
    disabled: bool,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <textarea
            class="input"
            rows={rows.to_string()}
            value={value.to_string()}
            placeholder={placeholder.to_string()}
            disabled={disabled}
            {oninput}
        />
    }
}

/// Save/delete bar at the bottom of every dialog. The save button is
/// disabled while the draft's request is in flight; a failed save surfaces
/// the server message just above the buttons.
pub fn actions(
    saving: bool,
    error: Option<&str>,
    on_save: Callback<MouseEvent>,
    on_delete: Option<Callback<MouseEvent>>,
) -> Html {
    html! {
        <div class="dialog-footer">
            {
                if let Some(error) = error {
                    html! { <p class="dialog-error">{ error.to_string() }</p> }
                } else {
                    html! {}
                }
            }
            <div class="dialog-actions">
                {
                    if let Some(on_delete) = on_delete {
                        html! {
                            <button class="btn btn-danger" onclick={on_delete} disabled={saving}>
                                {"Hapus"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                <button class="btn btn-primary" onclick={on_save} disabled={saving}>
                    { if saving { "Menyimpan..." } else { "Simpan" } }
                </button>
            </div>
        </div>
    }
}

/// Comma/Enter separated tag editor for the property features list.
pub struct TagInput {
    buffer: String,
}

pub enum TagMsg {
    SetBuffer(String),
    Commit,
    Remove(usize),
}

#[derive(Properties, PartialEq)]
pub struct TagInputProps {
    pub value: Vec<String>,
    pub onchange: Callback<Vec<String>>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

impl Component for TagInput {
    type Message = TagMsg;
    type Properties = TagInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        if props.disabled {
            return false;
        }
        match msg {
            TagMsg::SetBuffer(text) => {
                self.buffer = text;
                true
            }
            TagMsg::Commit => {
                if self.buffer.trim().is_empty() {
                    return false;
                }
                props.onchange.emit(add_tags(&props.value, &self.buffer));
                self.buffer.clear();
                true
            }
            TagMsg::Remove(index) => {
                props.onchange.emit(remove_tag(&props.value, index));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let disabled = ctx.props().disabled;

        let onkeydown = link.batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == "," {
                e.prevent_default();
                Some(TagMsg::Commit)
            } else {
                None
            }
        });

        html! {
            <div class="tag-input">
                <div class="tag-chips">
                    { for ctx.props().value.iter().enumerate().map(|(index, tag)| {
                        let remove = link.callback(move |_| TagMsg::Remove(index));
                        html! {
                            <span class="tag-chip">
                                { tag.clone() }
                                <button
                                    type="button"
                                    onclick={remove}
                                    disabled={disabled}
                                    aria-label={format!("Hapus {}", tag)}
                                >
                                    {"×"}
                                </button>
                            </span>
                        }
                    }) }
                </div>
                <input
                    class="input"
                    value={self.buffer.clone()}
                    placeholder={ctx.props().placeholder.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        TagMsg::SetBuffer(input.value())
                    })}
                    {onkeydown}
                    onblur={link.callback(|_| TagMsg::Commit)}
                    disabled={disabled}
                />
            </div>
        }
    }
}

/// Single-file upload bound to one URL field (hero image, catalog PDF, …).
/// The file goes to the asset endpoint; only the returned URL is stored.
pub struct UploadField {
    uploading: bool,
}

pub enum UploadMsg {
    Selected(web_sys::File),
    Finished(Result<String, String>),
}

#[derive(Properties, PartialEq)]
pub struct UploadFieldProps {
    pub value: String,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub accept: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

impl Component for UploadField {
    type Message = UploadMsg;
    type Properties = UploadFieldProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { uploading: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UploadMsg::Selected(file) => {
                self.uploading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(UploadMsg::Finished(api::upload_file(file).await));
                });
                true
            }
            UploadMsg::Finished(Ok(url)) => {
                self.uploading = false;
                ctx.props().onchange.emit(url);
                true
            }
            UploadMsg::Finished(Err(e)) => {
                self.uploading = false;
                show_toast(&format!("Gagal mengunggah: {}", e));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let onchange = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(UploadMsg::Selected)
        });

        html! {
            <div class="upload-field">
                {
                    if props.value.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <a class="upload-preview" href={props.value.clone()} target="_blank">
                                { props.value.clone() }
                            </a>
                        }
                    }
                }
                <input
                    type="file"
                    accept={props.accept.clone()}
                    {onchange}
                    disabled={props.disabled || self.uploading}
                />
                { if self.uploading { html! { <span class="upload-busy">{"Mengunggah..."}</span> } } else { html! {} } }
            </div>
        }
    }
}

/// Gallery upload: appends each uploaded file's URL and supports removal by
/// index.
pub struct MultiUploadField {
    uploading: bool,
}

pub enum MultiUploadMsg {
    Selected(web_sys::File),
    Finished(Result<String, String>),
    Remove(usize),
}

#[derive(Properties, PartialEq)]
pub struct MultiUploadFieldProps {
    pub value: Vec<String>,
    pub onchange: Callback<Vec<String>>,
    #[prop_or_default]
    pub accept: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

impl Component for MultiUploadField {
    type Message = MultiUploadMsg;
    type Properties = MultiUploadFieldProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { uploading: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MultiUploadMsg::Selected(file) => {
                self.uploading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(MultiUploadMsg::Finished(api::upload_file(file).await));
                });
                true
            }
            MultiUploadMsg::Finished(Ok(url)) => {
                self.uploading = false;
                let mut value = ctx.props().value.clone();
                value.push(url);
                ctx.props().onchange.emit(value);
                true
            }
            MultiUploadMsg::Finished(Err(e)) => {
                self.uploading = false;
                show_toast(&format!("Gagal mengunggah: {}", e));
                true
            }
            MultiUploadMsg::Remove(index) => {
                let mut value = ctx.props().value.clone();
                if index < value.len() {
                    value.remove(index);
                    ctx.props().onchange.emit(value);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let onchange = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(MultiUploadMsg::Selected)
        });

        html! {
            <div class="upload-field">
                <div class="upload-thumbs">
                    { for props.value.iter().enumerate().map(|(index, url)| {
                        let remove = link.callback(move |_| MultiUploadMsg::Remove(index));
                        html! {
                            <span class="upload-thumb">
                                <img src={url.clone()} alt={format!("Gambar {}", index + 1)} />
                                <button type="button" onclick={remove} disabled={props.disabled}>
                                    {"×"}
                                </button>
                            </span>
                        }
                    }) }
                </div>
                <input
                    type="file"
                    accept={props.accept.clone()}
                    {onchange}
                    disabled={props.disabled || self.uploading}
                />
                { if self.uploading { html! { <span class="upload-busy">{"Mengunggah..."}</span> } } else { html! {} } }
            </div>
        }
    }
}
