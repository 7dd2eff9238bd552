//! The property editor: the largest dialog, covering identity, type and
//! availability, the count fields with digit normalization, the grouped
//! price display, media uploads, the feature tag list, and the description.

use common::model::property::PropertyType;
use yew::prelude::*;

use super::widgets::{self, MultiUploadField, TagInput, UploadField};
use super::{set_area, set_checkbox, set_field, set_select, set_with};
use crate::components::admin::messages::{EditMsg, Msg};
use crate::components::admin::state::AdminDashboard;
use crate::components::modal::Modal;
use crate::editor::inputs;
use crate::editor::{EditorId, Mode};

pub fn property_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.property;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let editing = draft.mode() == Some(Mode::Edit) && value.id.is_some();
    let link = ctx.link();
    let id = EditorId::Property;

    let count_text = |count: Option<u32>| count.map(|n| n.to_string()).unwrap_or_default();
    // The price input shows the grouped form of the stored integer; typing
    // goes through parse_count, so the separators are never stored.
    let price_text = value.price.map(inputs::format_grouped).unwrap_or_default();
    let rating_text = value.rating.map(|r| r.to_string()).unwrap_or_default();

    let type_select = html! {
        <select
            class="input"
            disabled={saving}
            onchange={set_select(link, EditMsg::Property, value, |v, s| {
                if let Some(kind) = PropertyType::parse(&s) {
                    v.kind = kind;
                }
            })}
        >
            { for PropertyType::ALL.iter().map(|t| html! {
                <option value={t.as_str()} selected={value.kind == *t}>{ t.label() }</option>
            }) }
        </select>
    };

    let availability = html! {
        <label class="switch-row">
            <input
                type="checkbox"
                checked={value.is_available}
                disabled={saving}
                onchange={set_checkbox(link, EditMsg::Property, value, |v, checked| {
                    v.is_available = checked;
                })}
            />
            <span>{ if value.is_available { "Tersedia" } else { "Tidak Tersedia" } }</span>
        </label>
    };

    let on_delete = editing.then(|| link.callback(move |_| Msg::RequestDelete(id)));
    let title = if editing { "Ubah Properti" } else { "Tambah Properti" };

    html! {
        <Modal title={title.to_string()} on_close={link.callback(move |_| Msg::CancelEdit(id))}>
            <h3 class="dialog-section-title">{"Informasi Dasar"}</h3>
            { widgets::field("Nama Properti *", widgets::text_input(
                &value.name, "Contoh: Villa Kaliurang Asri", saving,
                set_field(link, EditMsg::Property, value, |v, s| v.name = s))) }
            { widgets::field("Alamat *", widgets::text_input(
                &value.address, "Contoh: Jl. Kaliurang Km 7, Yogyakarta", saving,
                set_field(link, EditMsg::Property, value, |v, s| v.address = s))) }
            <div class="field-grid">
                { widgets::field("Tipe Properti *", type_select) }
                { widgets::field("Status Ketersediaan", availability) }
            </div>

            <h3 class="dialog-section-title">{"Spesifikasi Properti"}</h3>
            <div class="field-grid">
                { widgets::field("Jumlah Kamar *", widgets::text_input(
                    &count_text(value.room), "0", saving,
                    set_field(link, EditMsg::Property, value, |v, s| {
                        v.room = inputs::parse_count(&s).map(|n| n as u32);
                    }))) }
                { widgets::field("Jumlah Kamar Mandi *", widgets::text_input(
                    &count_text(value.bath), "0", saving,
                    set_field(link, EditMsg::Property, value, |v, s| {
                        v.bath = inputs::parse_count(&s).map(|n| n as u32);
                    }))) }
                { widgets::field("Luas (sqft)", widgets::text_input(
                    &count_text(value.sqft), "0", saving,
                    set_field(link, EditMsg::Property, value, |v, s| {
                        v.sqft = inputs::parse_count(&s).map(|n| n as u32);
                    }))) }
                { widgets::field("Rating (0\u{2013}5)", widgets::text_input(
                    &rating_text, "Contoh: 4.8", saving,
                    set_field(link, EditMsg::Property, value, |v, s| {
                        v.rating = inputs::parse_rating(&s);
                    }))) }
            </div>

            <h3 class="dialog-section-title">{"Informasi Harga"}</h3>
            { widgets::field("Harga (Rp) *", widgets::text_input(
                &price_text, "Contoh: 1.500.000", saving,
                set_field(link, EditMsg::Property, value, |v, s| {
                    v.price = inputs::parse_count(&s);
                }))) }

            <h3 class="dialog-section-title">{"Media & Dokumen"}</h3>
            { widgets::field("Katalog PDF *", html! {
                <UploadField
                    value={value.pdf.clone()}
                    accept="application/pdf"
                    disabled={saving}
                    onchange={set_with(link, EditMsg::Property, value, |v: &mut _, url: String| v.pdf = url)}
                />
            }) }
            { widgets::field("Galeri Gambar *", html! {
                <MultiUploadField
                    value={value.images.clone()}
                    accept="image/*"
                    disabled={saving}
                    onchange={set_with(link, EditMsg::Property, value, |v: &mut _, urls: Vec<String>| v.images = urls)}
                />
            }) }

            <h3 class="dialog-section-title">{"Fitur & Fasilitas"}</h3>
            { widgets::field("Fitur Properti", html! {
                <TagInput
                    value={value.features.clone()}
                    placeholder="Tulis fitur, tekan Enter atau koma untuk memisahkan"
                    disabled={saving}
                    onchange={set_with(link, EditMsg::Property, value, |v: &mut _, tags: Vec<String>| v.features = tags)}
                />
            }) }

            <h3 class="dialog-section-title">{"Deskripsi Detail"}</h3>
            { widgets::field("Deskripsi Properti *", widgets::textarea_input(
                &value.description, 6,
                "Jelaskan detail properti, lokasi strategis, dan keunggulan lainnya",
                saving,
                set_area(link, EditMsg::Property, value, |v, s| v.description = s))) }

            { widgets::actions(saving, draft.error(), link.callback(move |_| Msg::Save(id)), on_delete) }
        </Modal>
    }
}
