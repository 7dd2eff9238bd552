use common::model::about::{About, AboutStat};
use common::model::contact::Contact;
use common::model::copyright::Copyright;
use common::model::cta::Cta;
use common::model::final_cta::FinalCta;
use common::model::hero::Hero;
use common::model::logo::Logo;
use common::model::property::PropertyDraft;
use common::model::property_page::{PropertyPage, RelatedSection};
use common::model::property_section::PropertySection;
use common::model::services::{Service, Services};
use common::model::site::SiteDocument;
use common::model::social::SocialLink;
use common::model::testimonials::{Testimonial, Testimonials};
use common::model::why::{Why, WhyReason};

use crate::editor::{DraftAction, EditorId};

/// Draft mutations, one variant per editor kind. This enum is the
/// instantiation table of the generic editor: every variant routes into the
/// same [`crate::editor::Draft`] logic, so adding a content kind is one
/// variant plus one dialog.
pub enum EditMsg {
    Hero(DraftAction<Hero>),
    About(DraftAction<About>),
    AboutStat(DraftAction<AboutStat>),
    PropertySection(DraftAction<PropertySection>),
    Why(DraftAction<Why>),
    WhyReason(DraftAction<WhyReason>),
    Cta(DraftAction<Cta>),
    Services(DraftAction<Services>),
    ServiceItem(DraftAction<Service>),
    Testimonials(DraftAction<Testimonials>),
    TestimonialItem(DraftAction<Testimonial>),
    Related(DraftAction<RelatedSection>),
    FinalCta(DraftAction<FinalCta>),
    PropertyPage(DraftAction<PropertyPage>),
    Logo(DraftAction<Logo>),
    Contact(DraftAction<Contact>),
    Copyright(DraftAction<Copyright>),
    Property(DraftAction<PropertyDraft>),
    Social(DraftAction<SocialLink>),
}

pub enum Msg {
    /// Aggregate fetch finished (initial load or post-save invalidation).
    SiteLoaded(Result<SiteDocument, String>),
    ReloadSite,
    SetTab(&'static str),
    Edit(EditMsg),
    Save(EditorId),
    Saved(EditorId, Result<(), String>),
    CancelEdit(EditorId),
    /// Delete button in an editor dialog; asks for confirmation first.
    RequestDelete(EditorId),
    Deleted(EditorId, Result<(), String>),
    /// Availability switch on a property card, without opening the editor.
    ToggleAvailability { id: String, available: bool },
    ToggleFinished { id: String, result: Result<(), String> },
    SetPropertyPage(usize),
}
