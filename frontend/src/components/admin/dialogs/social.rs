use common::model::social::SocialIcon;
use yew::prelude::*;

use super::widgets;
use super::{set_field, set_select};
use crate::components::admin::messages::{EditMsg, Msg};
use crate::components::admin::state::AdminDashboard;
use crate::components::modal::Modal;
use crate::editor::{EditorId, Mode};

pub fn social_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let draft = &component.drafts.social;
    let Some(value) = draft.value() else {
        return html! {};
    };
    let saving = draft.is_saving();
    let editing = draft.mode() == Some(Mode::Edit) && value.id.is_some();
    let link = ctx.link();
    let id = EditorId::Social;

    let icon_select = html! {
        <select
            class="input"
            disabled={saving}
            onchange={set_select(link, EditMsg::Social, value, |v, s| {
                if let Some(icon) = SocialIcon::parse(&s) {
                    v.icon = icon;
                }
            })}
        >
            { for SocialIcon::ALL.iter().map(|icon| html! {
                <option value={icon.as_str()} selected={value.icon == *icon}>{ icon.label() }</option>
            }) }
        </select>
    };

    let on_delete = editing.then(|| link.callback(move |_| Msg::RequestDelete(id)));
    let title = if editing { "Ubah Tautan Sosial" } else { "Tambah Tautan Sosial" };

    html! {
        <Modal title={title.to_string()} on_close={link.callback(move |_| Msg::CancelEdit(id))}>
            { widgets::field("Ikon", icon_select) }
            { widgets::field("Label", widgets::text_input(
                &value.label, "Contoh: Instagram", saving,
                set_field(link, EditMsg::Social, value, |v, s| v.label = s))) }
            { widgets::field("URL", widgets::text_input(
                &value.url, "https://instagram.com/akun-anda", saving,
                set_field(link, EditMsg::Social, value, |v, s| v.url = s))) }
            { widgets::actions(saving, draft.error(), link.callback(move |_| Msg::Save(id)), on_delete) }
        </Modal>
    }
}
