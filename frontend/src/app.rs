use yew::{html, Component, Context, Html};

use crate::components::admin::AdminDashboard;
use crate::components::property::PropertyDetail;

/// Top-level views: the admin dashboard and the public property detail page.
/// The active view is mirrored into the location hash so a detail page can
/// be reloaded and linked to without a router.
pub enum View {
    Admin,
    Property(String),
}

pub enum Msg {
    ShowAdmin,
    ShowProperty(String),
}

pub struct App {
    view: View,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: view_from_hash(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowAdmin => {
                set_hash("");
                self.view = View::Admin;
                true
            }
            Msg::ShowProperty(id) => {
                set_hash(&format!("#/property/{}", id));
                self.view = View::Property(id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.view {
            View::Admin => html! {
                <AdminDashboard on_view_property={ctx.link().callback(Msg::ShowProperty)} />
            },
            View::Property(id) => html! {
                <PropertyDetail
                    id={id.clone()}
                    on_back={ctx.link().callback(|_| Msg::ShowAdmin)}
                    on_view_property={ctx.link().callback(Msg::ShowProperty)}
                />
            },
        }
    }
}

fn view_from_hash() -> View {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    match hash.strip_prefix("#/property/") {
        Some(id) if !id.is_empty() => View::Property(id.to_string()),
        _ => View::Admin,
    }
}

fn set_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(hash);
    }
}
