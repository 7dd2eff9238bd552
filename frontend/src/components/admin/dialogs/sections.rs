//! Dialogs for the scalar sections. Every dialog reads its draft slot,
//! renders nothing while closed, and submits the full section through the
//! generic save path. Sections are singletons, so none of them offers a
//! delete action.

use common::model::kind::SectionKind;
use yew::html::Scope;
use yew::prelude::*;

use super::widgets::{self, UploadField};
use super::{set_area, set_field, set_with};
use crate::components::admin::messages::{EditMsg, Msg};
use crate::components::admin::state::AdminDashboard;
use crate::components::modal::Modal;
use crate::editor::EditorId;

fn section_modal(
    link: &Scope<AdminDashboard>,
    kind: SectionKind,
    title: &str,
    saving: bool,
    error: Option<&str>,
    body: Html,
) -> Html {
    let id = EditorId::Section(kind);
    html! {
        <Modal title={title.to_string()} on_close={link.callback(move |_| Msg::CancelEdit(id))}>
            { body }
            { widgets::actions(saving, error, link.callback(move |_| Msg::Save(id)), None) }
        </Modal>
    }
}

pub fn hero_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.hero;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Sewa Villa di Jogja", saving,
                set_field(link, EditMsg::Hero, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::Hero, value, |v, s| v.subtitle = s))) }
            { widgets::field("Teks Tombol", widgets::text_input(
                &value.button_text, "Contoh: Lihat Properti", saving,
                set_field(link, EditMsg::Hero, value, |v, s| v.button_text = s))) }
            { widgets::field("Gambar", html! {
                <UploadField
                    value={value.image.clone()}
                    accept="image/*"
                    disabled={saving}
                    onchange={set_with(link, EditMsg::Hero, value, |v: &mut _, url: String| v.image = url)}
                />
            }) }
        </>
    };

    section_modal(link, SectionKind::Hero, "Ubah Bagian Hero", saving, draft.error(), body)
}

pub fn about_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.about;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Tentang Kami", saving,
                set_field(link, EditMsg::About, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::About, value, |v, s| v.subtitle = s))) }
            { widgets::field("Deskripsi", widgets::textarea_input(
                &value.description, 5, "Ceritakan bisnis Anda", saving,
                set_area(link, EditMsg::About, value, |v, s| v.description = s))) }
            { widgets::field("Gambar", html! {
                <UploadField
                    value={value.image.clone()}
                    accept="image/*"
                    disabled={saving}
                    onchange={set_with(link, EditMsg::About, value, |v: &mut _, url: String| v.image = url)}
                />
            }) }
        </>
    };

    section_modal(link, SectionKind::About, "Ubah Bagian Tentang", saving, draft.error(), body)
}

pub fn property_section_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.property_section;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Properti Unggulan", saving,
                set_field(link, EditMsg::PropertySection, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::PropertySection, value, |v, s| v.subtitle = s))) }
            { widgets::field("Teks Tombol", widgets::text_input(
                &value.button_text, "Contoh: Lihat Semua Properti", saving,
                set_field(link, EditMsg::PropertySection, value, |v, s| v.button_text = s))) }
        </>
    };

    section_modal(
        link,
        SectionKind::Property,
        "Ubah Bagian Properti",
        saving,
        draft.error(),
        body,
    )
}

pub fn why_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.why;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Kenapa Memilih Kami", saving,
                set_field(link, EditMsg::Why, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::Why, value, |v, s| v.subtitle = s))) }
            { widgets::field("Gambar", html! {
                <UploadField
                    value={value.image.clone()}
                    accept="image/*"
                    disabled={saving}
                    onchange={set_with(link, EditMsg::Why, value, |v: &mut _, url: String| v.image = url)}
                />
            }) }
        </>
    };

    section_modal(link, SectionKind::Why, "Ubah Bagian Alasan", saving, draft.error(), body)
}

pub fn cta_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.cta;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "", saving,
                set_field(link, EditMsg::Cta, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::Cta, value, |v, s| v.subtitle = s))) }
            { widgets::field("Teks Tombol", widgets::text_input(
                &value.button_text, "", saving,
                set_field(link, EditMsg::Cta, value, |v, s| v.button_text = s))) }
        </>
    };

    section_modal(link, SectionKind::Cta, "Ubah Bagian CTA", saving, draft.error(), body)
}

pub fn services_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.services;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Layanan Kami", saving,
                set_field(link, EditMsg::Services, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::Services, value, |v, s| v.subtitle = s))) }
        </>
    };

    section_modal(
        link,
        SectionKind::Services,
        "Ubah Bagian Layanan",
        saving,
        draft.error(),
        body,
    )
}

pub fn testimonials_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.testimonials;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Kata Mereka", saving,
                set_field(link, EditMsg::Testimonials, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::Testimonials, value, |v, s| v.subtitle = s))) }
        </>
    };

    section_modal(
        link,
        SectionKind::Testimonials,
        "Ubah Bagian Testimoni",
        saving,
        draft.error(),
        body,
    )
}

pub fn related_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.related;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Properti Terkait", saving,
                set_field(link, EditMsg::Related, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::Related, value, |v, s| v.subtitle = s))) }
        </>
    };

    section_modal(
        link,
        SectionKind::Related,
        "Ubah Bagian Properti Terkait",
        saving,
        draft.error(),
        body,
    )
}

pub fn final_cta_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.final_cta;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "", saving,
                set_field(link, EditMsg::FinalCta, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::FinalCta, value, |v, s| v.subtitle = s))) }
            { widgets::field("Tombol Utama", widgets::text_input(
                &value.primary_button_text, "", saving,
                set_field(link, EditMsg::FinalCta, value, |v, s| v.primary_button_text = s))) }
            { widgets::field("Tombol Sekunder", widgets::text_input(
                &value.secondary_button_text, "", saving,
                set_field(link, EditMsg::FinalCta, value, |v, s| v.secondary_button_text = s))) }
        </>
    };

    section_modal(
        link,
        SectionKind::FinalCta,
        "Ubah CTA Terakhir",
        saving,
        draft.error(),
        body,
    )
}

pub fn property_page_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.property_page;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Judul", widgets::text_input(
                &value.title, "Contoh: Semua Properti", saving,
                set_field(link, EditMsg::PropertyPage, value, |v, s| v.title = s))) }
            { widgets::field("Subjudul", widgets::text_input(
                &value.subtitle, "", saving,
                set_field(link, EditMsg::PropertyPage, value, |v, s| v.subtitle = s))) }
        </>
    };

    section_modal(
        link,
        SectionKind::PropertyPage,
        "Ubah Halaman Properti",
        saving,
        draft.error(),
        body,
    )
}

pub fn logo_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.logo;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Nama", widgets::text_input(
                &value.name, "Nama bisnis", saving,
                set_field(link, EditMsg::Logo, value, |v, s| v.name = s))) }
            { widgets::field("Logo", html! {
                <UploadField
                    value={value.image.clone()}
                    accept="image/*"
                    disabled={saving}
                    onchange={set_with(link, EditMsg::Logo, value, |v: &mut _, url: String| v.image = url)}
                />
            }) }
        </>
    };

    section_modal(link, SectionKind::Logo, "Ubah Logo", saving, draft.error(), body)
}

pub fn contact_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.contact;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        <>
            { widgets::field("Alamat", widgets::textarea_input(
                &value.address, 3, "Contoh: Jl. Kaliurang Km 7, Yogyakarta", saving,
                set_area(link, EditMsg::Contact, value, |v, s| v.address = s))) }
            { widgets::field("Telepon", widgets::filtered_input(
                &value.phone, "Contoh: 62812xxxxxxx", saving,
                crate::editor::inputs::is_digits,
                set_field(link, EditMsg::Contact, value, |v, s| {
                    // Digits only; anything else leaves the field unchanged.
                    if crate::editor::inputs::is_digits(&s) {
                        v.phone = s;
                    }
                }))) }
            { widgets::field("Email", widgets::text_input(
                &value.email, "info@contoh.com", saving,
                set_field(link, EditMsg::Contact, value, |v, s| v.email = s))) }
        </>
    };

    section_modal(link, SectionKind::Contact, "Ubah Kontak", saving, draft.error(), body)
}

pub fn copyright_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.copyright;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let link = ctx.link();

    let body = html! {
        { widgets::field("Teks", widgets::text_input(
            &value.text, "Contoh: © 2025 Villa Jogja", saving,
            set_field(link, EditMsg::Copyright, value, |v, s| v.text = s))) }
    };

    section_modal(
        link,
        SectionKind::Copyright,
        "Ubah Hak Cipta",
        saving,
        draft.error(),
        body,
    )
}
