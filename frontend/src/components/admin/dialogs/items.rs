//! Dialogs for section child items. Unlike sections these can be created
//! repeatedly and soft-deleted, so the dialog title follows the draft mode
//! and a delete action appears when an existing item is being edited.

use common::model::kind::ItemKind;
use yew::html::Scope;
use yew::prelude::*;

use super::widgets::{self, UploadField};
use super::{set_area, set_field, set_with};
use crate::components::admin::messages::{EditMsg, Msg};
use crate::components::admin::state::AdminDashboard;
use crate::components::modal::Modal;
use crate::editor::inputs;
use crate::editor::{EditorId, Mode};
use crate::video::{is_valid_youtube_url, to_embed_url};

fn item_modal(
    link: &Scope<AdminDashboard>,
    kind: ItemKind,
    title: &str,
    saving: bool,
    error: Option<&str>,
    can_delete: bool,
    body: Html,
) -> Html {
    let id = EditorId::Item(kind);
    let on_delete = can_delete.then(|| link.callback(move |_| Msg::RequestDelete(id)));
    html! {
        <Modal title={title.to_string()} on_close={link.callback(move |_| Msg::CancelEdit(id))}>
            { body }
            { widgets::actions(saving, error, link.callback(move |_| Msg::Save(id)), on_delete) }
        </Modal>
    }
}

pub fn about_stat_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.about_stat;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let editing = draft.mode() == Some(Mode::Edit) && value.id.is_some();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Label", widgets::text_input(
                &value.label, "Contoh: Properti Terjual", saving,
                set_field(link, EditMsg::AboutStat, value, |v, s| v.label = s))) }
            { widgets::field("Nilai", widgets::filtered_input(
                &value.value, "Contoh: 20+", saving, inputs::is_numeric_symbols,
                set_field(link, EditMsg::AboutStat, value, |v, s| {
                    // Digits and symbols only; an invalid input is dropped
                    // silently and the field keeps its previous value.
                    if inputs::is_numeric_symbols(&s) {
                        v.value = s;
                    }
                }))) }
        </>
    };

    let title = if editing { "Ubah Statistik" } else { "Tambah Statistik" };
    item_modal(link, ItemKind::AboutStat, title, saving, draft.error(), editing, body)
}

pub fn why_reason_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.why_reason;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let editing = draft.mode() == Some(Mode::Edit) && value.id.is_some();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Ikon", widgets::text_input(
                &value.icon, "Contoh: 🏠", saving,
                set_field(link, EditMsg::WhyReason, value, |v, s| v.icon = s))) }
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Lokasi Strategis", saving,
                set_field(link, EditMsg::WhyReason, value, |v, s| v.title = s))) }
            { widgets::field("Deskripsi", widgets::textarea_input(
                &value.description, 3, "", saving,
                set_area(link, EditMsg::WhyReason, value, |v, s| v.description = s))) }
        </>
    };

    let title = if editing { "Ubah Alasan" } else { "Tambah Alasan" };
    item_modal(link, ItemKind::WhyReason, title, saving, draft.error(), editing, body)
}

pub fn service_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.service_item;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let editing = draft.mode() == Some(Mode::Edit) && value.id.is_some();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Ikon", widgets::text_input(
                &value.icon, "Contoh: 🏘️", saving,
                set_field(link, EditMsg::ServiceItem, value, |v, s| v.icon = s))) }
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Pengelolaan Villa", saving,
                set_field(link, EditMsg::ServiceItem, value, |v, s| v.title = s))) }
            { widgets::field("Deskripsi", widgets::textarea_input(
                &value.description, 3, "", saving,
                set_area(link, EditMsg::ServiceItem, value, |v, s| v.description = s))) }
        </>
    };

    let title = if editing { "Ubah Layanan" } else { "Tambah Layanan" };
    item_modal(link, ItemKind::Service, title, saving, draft.error(), editing, body)
}

pub fn testimonial_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.testimonial_item;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let editing = draft.mode() == Some(Mode::Edit) && value.id.is_some();
    let link = ctx.link();

    let rating_text = if value.rating == 0.0 {
        String::new()
    } else {
        value.rating.to_string()
    };

    let body = html! {
        <>
            { widgets::field("Nama", widgets::text_input(
                &value.name, "Contoh: Budi Santoso", saving,
                set_field(link, EditMsg::TestimonialItem, value, |v, s| v.name = s))) }
            { widgets::field("Peran", widgets::text_input(
                &value.role, "Contoh: Tamu Keluarga", saving,
                set_field(link, EditMsg::TestimonialItem, value, |v, s| v.role = s))) }
            { widgets::field("Foto", html! {
                <UploadField
                    value={value.image.clone()}
                    accept="image/*"
                    disabled={saving}
                    onchange={set_with(link, EditMsg::TestimonialItem, value, |v: &mut _, url: String| v.image = url)}
                />
            }) }
            { widgets::field("Rating (0\u{2013}5)", widgets::text_input(
                &rating_text, "Contoh: 4.8", saving,
                set_field(link, EditMsg::TestimonialItem, value, |v, s| {
                    v.rating = inputs::parse_rating(&s).unwrap_or(0.0);
                }))) }
            { widgets::field("Konten", widgets::textarea_input(
                &value.content, 4, "Apa kata tamu Anda?", saving,
                set_area(link, EditMsg::TestimonialItem, value, |v, s| v.content = s))) }
            { widgets::field("URL Video", widgets::text_input(
                &value.url_video, "https://www.youtube.com/watch?v=...", saving,
                set_field(link, EditMsg::TestimonialItem, value, |v, s| v.url_video = s))) }
            {
                // Inline warning only; an invalid URL never blocks saving.
                if value.url_video.is_empty() {
                    html! {}
                } else if is_valid_youtube_url(&value.url_video) {
                    html! {
                        <iframe
                            class="video-preview"
                            src={to_embed_url(&value.url_video)}
                            title="Pratinjau video"
                        />
                    }
                } else {
                    html! { <p class="field-warning">{"URL video YouTube tidak valid"}</p> }
                }
            }
        </>
    };

    let title = if editing { "Ubah Testimoni" } else { "Tambah Testimoni" };
    item_modal(link, ItemKind::Testimonial, title, saving, draft.error(), editing, body)
}
