//! Public property detail view.
//!
//! Fetches the site aggregate once, renders the selected listing with its
//! image gallery, and fills the "related properties" strip from the
//! recommendation scorer in `common::related`. An id that no longer exists
//! in the aggregate renders a dedicated not-found state with back
//! navigation instead of an error.

use common::model::property::Property;
use common::model::site::SiteDocument;
use common::related::{score_and_rank, RELATED_LIMIT};
use web_sys::MouseEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::format_idr;

pub struct PropertyDetail {
    site: Option<SiteDocument>,
    load_error: Option<String>,
    loading: bool,
    loaded: bool,
    selected_image: usize,
}

pub enum Msg {
    SiteLoaded(Result<SiteDocument, String>),
    SelectImage(usize),
}

#[derive(Properties, PartialEq, Clone)]
pub struct PropertyDetailProps {
    pub id: String,
    pub on_back: Callback<MouseEvent>,
    /// Navigates to another property (used by the related strip).
    pub on_view_property: Callback<String>,
}

impl Component for PropertyDetail {
    type Message = Msg;
    type Properties = PropertyDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            site: None,
            load_error: None,
            loading: true,
            loaded: false,
            selected_image: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SiteLoaded(Ok(doc)) => {
                self.site = Some(doc);
                self.loading = false;
                self.load_error = None;
                true
            }
            Msg::SiteLoaded(Err(e)) => {
                self.loading = false;
                self.load_error = Some(e);
                true
            }
            Msg::SelectImage(index) => {
                self.selected_image = index;
                true
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // Navigating between related properties keeps the aggregate; only
        // the gallery selection resets.
        self.selected_image = 0;
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::SiteLoaded(api::fetch_site().await));
            });
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        if self.loading {
            return html! { <div class="page-center"><div class="spinner" /></div> };
        }
        if let Some(error) = &self.load_error {
            return html! {
                <div class="page-center">
                    <p class="load-error">{ format!("Gagal memuat data: {}", error) }</p>
                    <button class="btn btn-outline" onclick={props.on_back.clone()}>{"Kembali"}</button>
                </div>
            };
        }

        let Some(site) = &self.site else {
            return html! {};
        };
        let Some(property) = site.property_by_id(&props.id) else {
            return not_found(props);
        };

        html! {
            <div class="detail-root">
                <nav class="breadcrumbs">
                    <button class="btn-link" onclick={props.on_back.clone()}>{"← Beranda"}</button>
                    <span>{" / "}</span>
                    <span>{"Detail Properti"}</span>
                </nav>

                <div class="detail-columns">
                    { self.gallery(property, ctx) }
                    { details_column(site, property) }
                </div>

                { related_strip(site, property, props) }
            </div>
        }
    }
}

fn not_found(props: &PropertyDetailProps) -> Html {
    html! {
        <div class="page-center not-found">
            <h1>{"Properti tidak ditemukan"}</h1>
            <p class="muted">{"Mohon maaf, properti yang Anda cari tidak ditemukan."}</p>
            <button class="btn btn-outline" onclick={props.on_back.clone()}>{"Kembali ke Beranda"}</button>
        </div>
    }
}

impl PropertyDetail {
    fn gallery(&self, property: &Property, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let selected = self.selected_image.min(property.images.len().saturating_sub(1));
        let main_image = property.images.get(selected).cloned().unwrap_or_default();

        html! {
            <div class="gallery">
                {
                    if main_image.is_empty() {
                        html! { <div class="gallery-main muted">{"Tidak ada gambar"}</div> }
                    } else {
                        html! { <img class="gallery-main" src={main_image} alt={property.name.clone()} /> }
                    }
                }
                <div class="gallery-thumbs">
                    { for property.images.iter().enumerate().map(|(index, image)| {
                        let onclick = link.callback(move |_| Msg::SelectImage(index));
                        html! {
                            <img
                                class={classes!("gallery-thumb", (index == selected).then_some("active"))}
                                src={image.clone()}
                                alt={format!("{} {}", property.name, index + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
        }
    }
}

fn details_column(site: &SiteDocument, property: &Property) -> Html {
    let contact_phone = site
        .contact
        .as_ref()
        .map(|c| c.phone.clone())
        .unwrap_or_default();
    let whatsapp = format!("https://wa.me/{}", contact_phone);

    html! {
        <div class="detail-info">
            <span class="badge">{ property.kind.label() }</span>
            <h1>{ property.name.clone() }</h1>
            <p class="muted">{ property.address.clone() }</p>

            <div class="detail-price-row">
                <span class="detail-price">{ format_idr(property.price) }</span>
                <span class={classes!("badge", if property.is_available { "badge-green" } else { "badge-orange" })}>
                    { if property.is_available { "Tersedia" } else { "Tidak Tersedia" } }
                </span>
            </div>

            <div class="detail-specs">
                <div><span class="muted">{"Luas"}</span><strong>{ format!("{} sqft", property.sqft) }</strong></div>
                <div><span class="muted">{"Kamar"}</span><strong>{ property.room }</strong></div>
                <div><span class="muted">{"Kamar Mandi"}</span><strong>{ property.bath }</strong></div>
                <div><span class="muted">{"Rating"}</span><strong>{ format!("★ {}", property.rating) }</strong></div>
            </div>

            <div class="detail-actions">
                <a class="btn btn-primary" href={whatsapp} target="_blank">{"Hubungi Agen"}</a>
                {
                    if property.pdf.is_empty() {
                        html! {}
                    } else {
                        html! { <a class="btn btn-outline" href={property.pdf.clone()} target="_blank">{"Lihat Katalog Lengkap"}</a> }
                    }
                }
            </div>

            <div class="detail-description">
                <h3>{"Deskripsi & Fitur"}</h3>
                <p>{ property.description.clone() }</p>
                <ul class="feature-list">
                    { for property.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
                </ul>
            </div>
        </div>
    }
}

fn related_strip(site: &SiteDocument, property: &Property, props: &PropertyDetailProps) -> Html {
    let related = score_and_rank(property, &site.properties, RELATED_LIMIT);
    let heading = site
        .related
        .as_ref()
        .map(|r| r.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Properti Terkait".to_string());

    html! {
        <div class="related">
            <h2>{ heading }</h2>
            {
                if related.is_empty() {
                    html! {
                        <p class="muted">
                            { format!("Tidak ada properti {} yang terkait", property.kind.label()) }
                        </p>
                    }
                } else {
                    html! {
                        <div class="related-strip">
                            { for related.iter().map(|candidate| related_card(candidate, props)) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn related_card(property: &Property, props: &PropertyDetailProps) -> Html {
    let onclick = {
        let on_view = props.on_view_property.clone();
        let id = property.id.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(id.clone()))
    };

    html! {
        <div class="related-card" {onclick}>
            {
                match property.images.first().filter(|i| !i.is_empty()) {
                    Some(image) => html! { <img class="related-thumb" src={image.clone()} alt={property.name.clone()} /> },
                    None => html! { <div class="related-thumb muted">{"Tidak ada gambar"}</div> },
                }
            }
            <div class="related-card-body">
                <h4>{ property.name.clone() }</h4>
                <p class="muted small">{ property.address.clone() }</p>
                <div class="badge-row small">
                    <span>{ format!("{} kmr", property.room) }</span>
                    <span>{ format!("{} km", property.bath) }</span>
                    <span>{ format!("{} sqft", property.sqft) }</span>
                    <span>{ format!("★ {}", property.rating) }</span>
                </div>
                <p class="related-price">{ format_idr(property.price) }</p>
            </div>
        </div>
    }
}
