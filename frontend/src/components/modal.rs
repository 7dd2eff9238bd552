use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Overlay dialog container used by every editor. Closing goes through the
/// `on_close` callback so the owning draft is the single source of truth.
pub struct Modal;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Modal
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{ ctx.props().title.clone() }</h2>
                        <button
                            class="modal-close"
                            title="Tutup"
                            onclick={ctx.props().on_close.clone()}
                        >
                            {"×"}
                        </button>
                    </div>
                    <div class="modal-body">
                        { ctx.props().children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
