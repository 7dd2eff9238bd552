//! Admin dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and the editor
//! dialogs.
//!
//! Responsibilities
//! - Fetch the site aggregate once on first render; re-fetch after every
//!   successful write (`Msg::ReloadSite`).
//! - Hold one draft slot per content kind (see `state::Drafts`) and route
//!   all save/delete traffic through the generic editor model.

use yew::prelude::*;

mod dialogs;
mod messages;
mod pagination;
mod state;
mod update;
mod view;

pub use messages::{EditMsg, Msg};
pub use state::AdminDashboard;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminProps {
    /// Opens the public detail view for a property id.
    pub on_view_property: Callback<String>,
}

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::ReloadSite);
        }
    }
}
