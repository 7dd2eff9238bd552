//! View rendering for the admin dashboard.
//!
//! The dashboard is a set of cards showing the persisted content of every
//! section, with edit/add buttons that open the matching dialog. The
//! property tab adds the paginated listing manager with the guarded
//! availability toggle. All dialogs are emitted at the end so they overlay
//! whatever tab is active.

use common::model::about::AboutStat;
use common::model::property::Property;
use common::model::services::Service;
use common::model::site::SiteDocument;
use common::model::social::SocialLink;
use common::model::testimonials::Testimonial;
use common::model::why::WhyReason;
use web_sys::MouseEvent;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs;
use super::messages::{EditMsg, Msg};
use super::pagination;
use super::state::AdminDashboard;
use crate::editor::DraftAction;
use crate::helpers::format_idr;

const TABS: [(&str, &str); 5] = [
    ("home", "Beranda"),
    ("sections", "Bagian"),
    ("properties", "Properti"),
    ("branding", "Merek"),
    ("social", "Sosial"),
];

pub fn view(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let link = ctx.link();

    let Some(site) = &component.site else {
        if component.loading {
            return html! {
                <div class="page-center"><div class="spinner" /></div>
            };
        }
        let error = component.load_error.clone().unwrap_or_default();
        return html! {
            <div class="page-center">
                <p class="load-error">{ format!("Gagal memuat data: {}", error) }</p>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::ReloadSite)}>
                    {"Coba Lagi"}
                </button>
            </div>
        };
    };

    let tab_bar = html! {
        <div class="tab-bar">
            { for TABS.iter().map(|(key, label)| {
                let key = *key;
                html! {
                    <button
                        class={classes!("tab-btn", (component.active_tab == key).then_some("active"))}
                        onclick={link.callback(move |_| Msg::SetTab(key))}
                    >
                        { *label }
                    </button>
                }
            }) }
        </div>
    };

    let content = match component.active_tab {
        "sections" => sections_tab(site, link),
        "properties" => properties_tab(component, site, ctx),
        "branding" => branding_tab(site, link),
        "social" => social_tab(site, link),
        _ => home_tab(site, link),
    };

    html! {
        <div class="admin-root">
            <header class="admin-header">
                <div>
                    <h1>{"Dasbor Admin"}</h1>
                    <p>{"Kelola seluruh konten di website Anda"}</p>
                </div>
                { stats_row(site) }
            </header>
            { tab_bar }
            { content }
            { dialogs::render(component, ctx) }
        </div>
    }
}

fn stats_row(site: &SiteDocument) -> Html {
    let total = site.properties.len();
    let sold = site.properties.iter().filter(|p| !p.is_available).count();
    let available = total - sold;

    html! {
        <div class="stats-row">
            <div class="stat"><span class="stat-value">{ total }</span><span class="stat-label">{"Jumlah Properti"}</span></div>
            <div class="stat"><span class="stat-value">{ sold }</span><span class="stat-label">{"Terjual"}</span></div>
            <div class="stat"><span class="stat-value">{ available }</span><span class="stat-label">{"Tersedia"}</span></div>
        </div>
    }
}

/* ---------------------- shared card helpers ---------------------- */

fn card(title: &str, actions: Html, body: Html) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h3>{ title.to_string() }</h3>
                <div class="card-actions">{ actions }</div>
            </div>
            <div class="card-body">{ body }</div>
        </div>
    }
}

fn edit_button(onclick: Callback<MouseEvent>) -> Html {
    html! { <button class="btn btn-outline btn-icon" title="Ubah" {onclick}>{"✎"}</button> }
}

fn add_button(onclick: Callback<MouseEvent>) -> Html {
    html! { <button class="btn btn-primary btn-icon" title="Tambah" {onclick}>{"+"}</button> }
}

fn info_line(label: &str, value: &str) -> Html {
    html! { <p><strong>{ label.to_string() }{": "}</strong>{ value.to_string() }</p> }
}

/// Edit-or-create callback for a scalar section: opens the persisted values
/// or the kind's default template when the section was never saved.
fn open_section<T, W>(
    link: &Scope<AdminDashboard>,
    wrap: W,
    current: Option<T>,
) -> Callback<MouseEvent>
where
    T: Clone + Default + 'static,
    W: Fn(DraftAction<T>) -> EditMsg + 'static,
{
    link.callback(move |_| {
        Msg::Edit(match current.clone() {
            Some(value) => wrap(DraftAction::OpenEdit(value)),
            None => wrap(DraftAction::OpenCreate(T::default())),
        })
    })
}

fn open_item<T, W>(link: &Scope<AdminDashboard>, wrap: W, item: T) -> Callback<MouseEvent>
where
    T: Clone + 'static,
    W: Fn(DraftAction<T>) -> EditMsg + 'static,
{
    link.callback(move |_| Msg::Edit(wrap(DraftAction::OpenEdit(item.clone()))))
}

fn open_create<T, W>(link: &Scope<AdminDashboard>, wrap: W, template: T) -> Callback<MouseEvent>
where
    T: Clone + 'static,
    W: Fn(DraftAction<T>) -> EditMsg + 'static,
{
    link.callback(move |_| Msg::Edit(wrap(DraftAction::OpenCreate(template.clone()))))
}

/* ---------------------- tabs ---------------------- */

fn home_tab(site: &SiteDocument, link: &Scope<AdminDashboard>) -> Html {
    let hero = site.hero.as_ref();
    let final_cta = site.final_cta.as_ref();

    html! {
        <div class="tab-content">
            { card("Bagian Hero",
                edit_button(open_section(link, EditMsg::Hero, site.hero.clone())),
                html! {
                    <>
                        { info_line("Judul", hero.map(|h| h.title.as_str()).unwrap_or_default()) }
                        { info_line("Subjudul", hero.map(|h| h.subtitle.as_str()).unwrap_or_default()) }
                        { info_line("Teks Tombol", hero.map(|h| h.button_text.as_str()).unwrap_or_default()) }
                        {
                            match hero.map(|h| h.image.as_str()).filter(|i| !i.is_empty()) {
                                Some(image) => html! { <img class="card-preview" src={image.to_string()} alt="Pratinjau hero" /> },
                                None => html! { <p class="muted">{"Tidak ada gambar"}</p> },
                            }
                        }
                    </>
                }) }
            { card("CTA Terakhir",
                edit_button(open_section(link, EditMsg::FinalCta, site.final_cta.clone())),
                html! {
                    <>
                        { info_line("Judul", final_cta.map(|c| c.title.as_str()).unwrap_or_default()) }
                        { info_line("Subjudul", final_cta.map(|c| c.subtitle.as_str()).unwrap_or_default()) }
                        { info_line("Tombol Utama", final_cta.map(|c| c.primary_button_text.as_str()).unwrap_or_default()) }
                        { info_line("Tombol Sekunder", final_cta.map(|c| c.secondary_button_text.as_str()).unwrap_or_default()) }
                    </>
                }) }
        </div>
    }
}

fn sections_tab(site: &SiteDocument, link: &Scope<AdminDashboard>) -> Html {
    let about = site.about.as_ref();
    let why = site.why.as_ref();
    let services = site.services.as_ref();
    let testimonials = site.testimonials.as_ref();
    let property_section = site.property_section.as_ref();
    let cta = site.cta.as_ref();

    let about_id = about.and_then(|a| a.id.clone()).unwrap_or_default();
    let why_id = why.and_then(|w| w.id.clone()).unwrap_or_default();
    let services_id = services.and_then(|s| s.id.clone()).unwrap_or_default();
    let testimonials_id = testimonials.and_then(|t| t.id.clone()).unwrap_or_default();

    html! {
        <div class="tab-content">
            { card("Bagian Tentang",
                html! {
                    <>
                        { edit_button(open_section(link, EditMsg::About, site.about.clone())) }
                        { add_button(open_create(link, EditMsg::AboutStat, AboutStat::draft(about_id))) }
                    </>
                },
                html! {
                    <>
                        { info_line("Judul", about.map(|a| a.title.as_str()).unwrap_or_default()) }
                        { info_line("Deskripsi", about.map(|a| a.description.as_str()).unwrap_or_default()) }
                        <ul class="item-list">
                            { for site.about_stats.iter().map(|stat| html! {
                                <li>
                                    { format!("{} — {}", stat.label, stat.value) }
                                    { edit_button(open_item(link, EditMsg::AboutStat, stat.clone())) }
                                </li>
                            }) }
                        </ul>
                    </>
                }) }
            { card("Bagian Properti",
                edit_button(open_section(link, EditMsg::PropertySection, site.property_section.clone())),
                html! {
                    <>
                        { info_line("Judul", property_section.map(|p| p.title.as_str()).unwrap_or_default()) }
                        { info_line("Subjudul", property_section.map(|p| p.subtitle.as_str()).unwrap_or_default()) }
                        { info_line("Teks Tombol", property_section.map(|p| p.button_text.as_str()).unwrap_or_default()) }
                    </>
                }) }
            { card("Bagian Alasan",
                html! {
                    <>
                        { edit_button(open_section(link, EditMsg::Why, site.why.clone())) }
                        { add_button(open_create(link, EditMsg::WhyReason, WhyReason::draft(why_id))) }
                    </>
                },
                html! {
                    <>
                        { info_line("Judul", why.map(|w| w.title.as_str()).unwrap_or_default()) }
                        <ul class="item-list">
                            { for site.why_reasons.iter().map(|reason| html! {
                                <li>
                                    { format!("{} {} — {}", reason.icon, reason.title, reason.description) }
                                    { edit_button(open_item(link, EditMsg::WhyReason, reason.clone())) }
                                </li>
                            }) }
                        </ul>
                    </>
                }) }
            { card("Bagian CTA",
                edit_button(open_section(link, EditMsg::Cta, site.cta.clone())),
                html! {
                    <>
                        { info_line("Judul", cta.map(|c| c.title.as_str()).unwrap_or_default()) }
                        { info_line("Tombol", cta.map(|c| c.button_text.as_str()).unwrap_or_default()) }
                    </>
                }) }
            { card("Bagian Layanan",
                html! {
                    <>
                        { edit_button(open_section(link, EditMsg::Services, site.services.clone())) }
                        { add_button(open_create(link, EditMsg::ServiceItem, Service::draft(services_id))) }
                    </>
                },
                html! {
                    <>
                        { info_line("Judul", services.map(|s| s.title.as_str()).unwrap_or_default()) }
                        <ul class="item-list">
                            { for site.service_items.iter().map(|service| html! {
                                <li>
                                    { format!("{} {} — {}", service.icon, service.title, service.description) }
                                    { edit_button(open_item(link, EditMsg::ServiceItem, service.clone())) }
                                </li>
                            }) }
                        </ul>
                    </>
                }) }
            { card("Bagian Testimoni",
                html! {
                    <>
                        { edit_button(open_section(link, EditMsg::Testimonials, site.testimonials.clone())) }
                        { add_button(open_create(link, EditMsg::TestimonialItem, Testimonial::draft(testimonials_id))) }
                    </>
                },
                html! {
                    <>
                        { info_line("Judul", testimonials.map(|t| t.title.as_str()).unwrap_or_default()) }
                        <ul class="item-list">
                            { for site.testimonial_items.iter().map(|item| html! {
                                <li>
                                    { format!("{} ({}) ★{} — {}", item.name, item.role, item.rating, item.content) }
                                    { edit_button(open_item(link, EditMsg::TestimonialItem, item.clone())) }
                                </li>
                            }) }
                        </ul>
                    </>
                }) }
        </div>
    }
}

fn properties_tab(
    component: &AdminDashboard,
    site: &SiteDocument,
    ctx: &Context<AdminDashboard>,
) -> Html {
    let link = ctx.link();
    let property_page = site.property_page.as_ref();
    let related = site.related.as_ref();

    let page = pagination::paginate(&site.properties, component.property_page);
    let prev_page = page.current.saturating_sub(1).max(1);
    let next_page = (page.current + 1).min(page.total_pages);

    let add_property = open_create(
        link,
        EditMsg::Property,
        common::model::property::PropertyDraft::new(),
    );

    html! {
        <div class="tab-content">
            { card("Halaman Properti",
                edit_button(open_section(link, EditMsg::PropertyPage, site.property_page.clone())),
                html! {
                    <>
                        { info_line("Judul", property_page.map(|p| p.title.as_str()).unwrap_or_default()) }
                        { info_line("Subjudul", property_page.map(|p| p.subtitle.as_str()).unwrap_or_default()) }
                    </>
                }) }
            { card("Properti Terkait",
                edit_button(open_section(link, EditMsg::Related, site.related.clone())),
                html! {
                    <>
                        { info_line("Judul", related.map(|r| r.title.as_str()).unwrap_or_default()) }
                        { info_line("Subjudul", related.map(|r| r.subtitle.as_str()).unwrap_or_default()) }
                    </>
                }) }
            { card("Daftar Properti", add_button(add_property),
                html! {
                    <>
                        {
                            if page.items.is_empty() {
                                html! { <p class="muted">{"Belum ada properti."}</p> }
                            } else {
                                html! {
                                    <div class="property-grid">
                                        { for page.items.iter().map(|p| property_card(component, p, ctx)) }
                                    </div>
                                }
                            }
                        }
                        {
                            if page.total > 0 {
                                html! {
                                    <div class="pagination">
                                        <span>
                                            { format!("Menampilkan {}-{} dari {}", page.start + 1, page.end, page.total) }
                                        </span>
                                        <div class="pagination-controls">
                                            <button
                                                class="btn btn-outline"
                                                disabled={page.current == 1}
                                                onclick={link.callback(move |_| Msg::SetPropertyPage(prev_page))}
                                            >
                                                {"Sebelumnya"}
                                            </button>
                                            <span>{ format!("{} / {}", page.current, page.total_pages) }</span>
                                            <button
                                                class="btn btn-outline"
                                                disabled={page.current == page.total_pages}
                                                onclick={link.callback(move |_| Msg::SetPropertyPage(next_page))}
                                            >
                                                {"Berikutnya"}
                                            </button>
                                        </div>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </>
                }) }
        </div>
    }
}

fn property_card(
    component: &AdminDashboard,
    property: &Property,
    ctx: &Context<AdminDashboard>,
) -> Html {
    let link = ctx.link();
    let toggling = component.pending_toggles.contains(&property.id);

    let toggle = {
        let id = property.id.clone();
        let next = !property.is_available;
        link.callback(move |_| Msg::ToggleAvailability {
            id: id.clone(),
            available: next,
        })
    };
    let edit = open_item(
        link,
        EditMsg::Property,
        common::model::property::PropertyDraft::from_property(property),
    );
    let show = {
        let on_view = ctx.props().on_view_property.clone();
        let id = property.id.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(id.clone()))
    };

    html! {
        <div class="property-card">
            {
                match property.images.first().filter(|i| !i.is_empty()) {
                    Some(image) => html! { <img class="property-thumb" src={image.clone()} alt={property.name.clone()} /> },
                    None => html! { <div class="property-thumb muted">{"Tidak ada gambar"}</div> },
                }
            }
            <div class="property-card-body">
                <div class="property-card-top">
                    <h4>{ property.name.clone() }</h4>
                    <button
                        class={classes!("availability-toggle", property.is_available.then_some("on"))}
                        disabled={toggling}
                        onclick={toggle}
                        title="Ubah status ketersediaan"
                    >
                        { if property.is_available { "Tersedia" } else { "Tidak Tersedia" } }
                    </button>
                </div>
                <p class="muted">{ property.address.clone() }</p>
                <div class="badge-row">
                    <span class="badge">{ property.kind.label() }</span>
                    <span class="badge">{ format!("{} Kamar", property.room) }</span>
                    <span class="badge">{ format!("{} K. Mandi", property.bath) }</span>
                    <span class="badge">{ format!("{} sqft", property.sqft) }</span>
                    <span class="badge">{ format_idr(property.price) }</span>
                    <span class="badge">{ format!("★ {}", property.rating) }</span>
                </div>
                {
                    if property.features.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="muted small">{ format!("Fitur: {}", property.features.join(", ")) }</p> }
                    }
                }
                <div class="property-card-actions">
                    { edit_button(edit) }
                    <button class="btn btn-outline" onclick={show}>{"Lihat"}</button>
                </div>
            </div>
        </div>
    }
}

fn branding_tab(site: &SiteDocument, link: &Scope<AdminDashboard>) -> Html {
    let logo = site.logo.as_ref();
    let contact = site.contact.as_ref();
    let copyright = site.copyright.as_ref();

    html! {
        <div class="tab-content">
            { card("Logo",
                edit_button(open_section(link, EditMsg::Logo, site.logo.clone())),
                html! {
                    <>
                        { info_line("Nama", logo.map(|l| l.name.as_str()).unwrap_or_default()) }
                        {
                            match logo.map(|l| l.image.as_str()).filter(|i| !i.is_empty()) {
                                Some(image) => html! { <img class="card-preview" src={image.to_string()} alt="Logo" /> },
                                None => html! { <p class="muted">{"Tidak ada logo"}</p> },
                            }
                        }
                    </>
                }) }
            { card("Kontak",
                edit_button(open_section(link, EditMsg::Contact, site.contact.clone())),
                html! {
                    <>
                        { info_line("Alamat", contact.map(|c| c.address.as_str()).unwrap_or_default()) }
                        { info_line("Telepon", contact.map(|c| c.phone.as_str()).unwrap_or_default()) }
                        { info_line("Email", contact.map(|c| c.email.as_str()).unwrap_or_default()) }
                    </>
                }) }
            { card("Hak Cipta",
                edit_button(open_section(link, EditMsg::Copyright, site.copyright.clone())),
                info_line("Teks", copyright.map(|c| c.text.as_str()).unwrap_or_default())) }
        </div>
    }
}

fn social_tab(site: &SiteDocument, link: &Scope<AdminDashboard>) -> Html {
    html! {
        <div class="tab-content">
            { card("Tautan Sosial",
                add_button(open_create(link, EditMsg::Social, SocialLink::default())),
                html! {
                    <ul class="item-list">
                        { for site.social_links.iter().map(|social: &SocialLink| html! {
                            <li>
                                { format!("{} — {} ({})", social.icon.label(), social.label, social.url) }
                                { edit_button(open_item(link, EditMsg::Social, social.clone())) }
                            </li>
                        }) }
                    </ul>
                }) }
        </div>
    }
}
