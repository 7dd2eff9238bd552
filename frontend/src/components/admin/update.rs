//! Update function for the admin dashboard.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state and returns whether the view should re-render. All
//! network side effects are spawned here and report back as messages; the
//! draft state machines in `crate::editor::draft` decide what each outcome
//! means.

use common::model::property::PropertyDraft;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AdminDashboard;
use crate::api;
use crate::editor::EditorId;
use crate::helpers::{alert, confirm, show_toast};

pub fn update(component: &mut AdminDashboard, ctx: &Context<AdminDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::SiteLoaded(Ok(doc)) => {
            component.site = Some(doc);
            component.loading = false;
            component.load_error = None;
            true
        }
        Msg::SiteLoaded(Err(e)) => {
            gloo_console::error!("gagal memuat site document:", e.clone());
            component.loading = false;
            component.load_error = Some(e);
            true
        }
        Msg::ReloadSite => {
            // Keep showing the stale aggregate while the re-fetch runs; if
            // two writes race, the last response wins.
            component.loading = component.site.is_none();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::SiteLoaded(api::fetch_site().await));
            });
            true
        }
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::Edit(edit) => {
            component.drafts.apply(edit);
            true
        }
        Msg::Save(id) => {
            // begin_save is the double-submit guard: while a save is
            // pending it returns None and the click does nothing.
            if let Some(payload) = component.drafts.begin_save(id) {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::save_entity(&id.save_endpoint(), &payload).await;
                    link.send_message(Msg::Saved(id, result));
                });
            }
            true
        }
        Msg::Saved(id, result) => {
            let succeeded = result.is_ok();
            component.drafts.finish_save(id, result);
            if succeeded {
                show_toast("Perubahan tersimpan.");
                ctx.link().send_message(Msg::ReloadSite);
            }
            true
        }
        Msg::CancelEdit(id) => {
            component.drafts.close(id);
            true
        }
        Msg::RequestDelete(id) => {
            let Some(endpoint) = id.delete_endpoint() else {
                return false;
            };
            let Some(entity_id) = component.drafts.open_entity_id(id) else {
                return false;
            };
            if !confirm(id.delete_prompt()) {
                return false;
            }

            // Close right away; the outcome only decides whether the list
            // refreshes or a failure toast appears.
            component.drafts.close(id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::delete_entity(&endpoint, entity_id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            true
        }
        Msg::Deleted(_, Ok(())) => {
            show_toast("Item dihapus.");
            ctx.link().send_message(Msg::ReloadSite);
            false
        }
        Msg::Deleted(_, Err(e)) => {
            show_toast(&format!("Gagal menghapus: {}", e));
            false
        }
        Msg::ToggleAvailability { id, available } => {
            let Some(property) = component
                .site
                .as_ref()
                .and_then(|site| site.property_by_id(&id))
            else {
                return false;
            };

            let missing = property.missing_for_publish();
            if !missing.is_empty() {
                alert(&format!(
                    "Lengkapi data properti ({}) sebelum mengubah status.",
                    missing.join(", ")
                ));
                return false;
            }
            if component.pending_toggles.contains(&id) {
                return false;
            }

            // Full record re-sent with only the availability flag changed.
            let mut draft = PropertyDraft::from_property(property);
            draft.is_available = available;

            component.pending_toggles.insert(id.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::save_entity(&EditorId::Property.save_endpoint(), &draft).await;
                link.send_message(Msg::ToggleFinished { id, result });
            });
            true
        }
        Msg::ToggleFinished { id, result } => {
            component.pending_toggles.remove(&id);
            match result {
                Ok(()) => ctx.link().send_message(Msg::ReloadSite),
                Err(e) => show_toast(&format!("Gagal mengubah status: {}", e)),
            }
            true
        }
        Msg::SetPropertyPage(page) => {
            component.property_page = page;
            true
        }
    }
}
