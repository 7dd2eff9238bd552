//! Dashboard state: the fetched aggregate plus one draft slot per editor
//! kind. Fields are `pub` because they are accessed by the `update`, `view`
//! and `dialogs` modules.

use std::collections::HashSet;

use common::model::about::{About, AboutStat};
use common::model::contact::Contact;
use common::model::copyright::Copyright;
use common::model::cta::Cta;
use common::model::final_cta::FinalCta;
use common::model::hero::Hero;
use common::model::kind::{ItemKind, SectionKind};
use common::model::logo::Logo;
use common::model::property::PropertyDraft;
use common::model::property_page::{PropertyPage, RelatedSection};
use common::model::property_section::PropertySection;
use common::model::services::{Service, Services};
use common::model::site::SiteDocument;
use common::model::social::SocialLink;
use common::model::testimonials::{Testimonial, Testimonials};
use common::model::why::{Why, WhyReason};
use serde::Serialize;
use serde_json::Value;

use super::messages::EditMsg;
use crate::editor::{Draft, EditorId};

pub struct AdminDashboard {
    pub site: Option<SiteDocument>,
    pub load_error: Option<String>,
    pub loading: bool,
    /// Guard so the first-render fetch runs once.
    pub loaded: bool,
    pub active_tab: &'static str,
    pub drafts: Drafts,
    /// Requested page of the property list; clamped on render.
    pub property_page: usize,
    /// Ids of properties with an availability toggle in flight. Each toggle
    /// owns its own pending flag; other rows stay operable.
    pub pending_toggles: HashSet<String>,
}

impl AdminDashboard {
    pub fn new() -> Self {
        Self {
            site: None,
            load_error: None,
            loading: true,
            loaded: false,
            active_tab: "home",
            drafts: Drafts::default(),
            property_page: 1,
            pending_toggles: HashSet::new(),
        }
    }
}

/// One draft slot per editor kind; at most one draft open per kind.
#[derive(Default)]
pub struct Drafts {
    pub hero: Draft<Hero>,
    pub about: Draft<About>,
    pub about_stat: Draft<AboutStat>,
    pub property_section: Draft<PropertySection>,
    pub why: Draft<Why>,
    pub why_reason: Draft<WhyReason>,
    pub cta: Draft<Cta>,
    pub services: Draft<Services>,
    pub service_item: Draft<Service>,
    pub testimonials: Draft<Testimonials>,
    pub testimonial_item: Draft<Testimonial>,
    pub related: Draft<RelatedSection>,
    pub final_cta: Draft<FinalCta>,
    pub property_page: Draft<PropertyPage>,
    pub logo: Draft<Logo>,
    pub contact: Draft<Contact>,
    pub copyright: Draft<Copyright>,
    pub property: Draft<PropertyDraft>,
    pub social: Draft<SocialLink>,
}

fn payload<T: Serialize + Clone>(draft: &mut Draft<T>) -> Option<Value> {
    draft.begin_save().and_then(|v| serde_json::to_value(v).ok())
}

impl Drafts {
    pub fn apply(&mut self, msg: EditMsg) {
        match msg {
            EditMsg::Hero(a) => self.hero.apply(a),
            EditMsg::About(a) => self.about.apply(a),
            EditMsg::AboutStat(a) => self.about_stat.apply(a),
            EditMsg::PropertySection(a) => self.property_section.apply(a),
            EditMsg::Why(a) => self.why.apply(a),
            EditMsg::WhyReason(a) => self.why_reason.apply(a),
            EditMsg::Cta(a) => self.cta.apply(a),
            EditMsg::Services(a) => self.services.apply(a),
            EditMsg::ServiceItem(a) => self.service_item.apply(a),
            EditMsg::Testimonials(a) => self.testimonials.apply(a),
            EditMsg::TestimonialItem(a) => self.testimonial_item.apply(a),
            EditMsg::Related(a) => self.related.apply(a),
            EditMsg::FinalCta(a) => self.final_cta.apply(a),
            EditMsg::PropertyPage(a) => self.property_page.apply(a),
            EditMsg::Logo(a) => self.logo.apply(a),
            EditMsg::Contact(a) => self.contact.apply(a),
            EditMsg::Copyright(a) => self.copyright.apply(a),
            EditMsg::Property(a) => self.property.apply(a),
            EditMsg::Social(a) => self.social.apply(a),
        }
    }

    /// Flags the draft as saving and serializes the full payload for its
    /// endpoint; `None` when no draft is open or a save is already pending.
    pub fn begin_save(&mut self, id: EditorId) -> Option<Value> {
        match id {
            EditorId::Section(SectionKind::Hero) => payload(&mut self.hero),
            EditorId::Section(SectionKind::About) => payload(&mut self.about),
            EditorId::Section(SectionKind::Property) => payload(&mut self.property_section),
            EditorId::Section(SectionKind::Why) => payload(&mut self.why),
            EditorId::Section(SectionKind::Cta) => payload(&mut self.cta),
            EditorId::Section(SectionKind::Services) => payload(&mut self.services),
            EditorId::Section(SectionKind::Testimonials) => payload(&mut self.testimonials),
            EditorId::Section(SectionKind::Related) => payload(&mut self.related),
            EditorId::Section(SectionKind::FinalCta) => payload(&mut self.final_cta),
            EditorId::Section(SectionKind::PropertyPage) => payload(&mut self.property_page),
            EditorId::Section(SectionKind::Logo) => payload(&mut self.logo),
            EditorId::Section(SectionKind::Contact) => payload(&mut self.contact),
            EditorId::Section(SectionKind::Copyright) => payload(&mut self.copyright),
            EditorId::Item(ItemKind::AboutStat) => payload(&mut self.about_stat),
            EditorId::Item(ItemKind::WhyReason) => payload(&mut self.why_reason),
            EditorId::Item(ItemKind::Service) => payload(&mut self.service_item),
            EditorId::Item(ItemKind::Testimonial) => payload(&mut self.testimonial_item),
            EditorId::Property => payload(&mut self.property),
            EditorId::Social => payload(&mut self.social),
        }
    }

    pub fn finish_save(&mut self, id: EditorId, result: Result<(), String>) {
        match id {
            EditorId::Section(SectionKind::Hero) => self.hero.finish_save(result),
            EditorId::Section(SectionKind::About) => self.about.finish_save(result),
            EditorId::Section(SectionKind::Property) => self.property_section.finish_save(result),
            EditorId::Section(SectionKind::Why) => self.why.finish_save(result),
            EditorId::Section(SectionKind::Cta) => self.cta.finish_save(result),
            EditorId::Section(SectionKind::Services) => self.services.finish_save(result),
            EditorId::Section(SectionKind::Testimonials) => self.testimonials.finish_save(result),
            EditorId::Section(SectionKind::Related) => self.related.finish_save(result),
            EditorId::Section(SectionKind::FinalCta) => self.final_cta.finish_save(result),
            EditorId::Section(SectionKind::PropertyPage) => self.property_page.finish_save(result),
            EditorId::Section(SectionKind::Logo) => self.logo.finish_save(result),
            EditorId::Section(SectionKind::Contact) => self.contact.finish_save(result),
            EditorId::Section(SectionKind::Copyright) => self.copyright.finish_save(result),
            EditorId::Item(ItemKind::AboutStat) => self.about_stat.finish_save(result),
            EditorId::Item(ItemKind::WhyReason) => self.why_reason.finish_save(result),
            EditorId::Item(ItemKind::Service) => self.service_item.finish_save(result),
            EditorId::Item(ItemKind::Testimonial) => self.testimonial_item.finish_save(result),
            EditorId::Property => self.property.finish_save(result),
            EditorId::Social => self.social.finish_save(result),
        }
    }

    pub fn close(&mut self, id: EditorId) {
        match id {
            EditorId::Section(SectionKind::Hero) => self.hero.close(),
            EditorId::Section(SectionKind::About) => self.about.close(),
            EditorId::Section(SectionKind::Property) => self.property_section.close(),
            EditorId::Section(SectionKind::Why) => self.why.close(),
            EditorId::Section(SectionKind::Cta) => self.cta.close(),
            EditorId::Section(SectionKind::Services) => self.services.close(),
            EditorId::Section(SectionKind::Testimonials) => self.testimonials.close(),
            EditorId::Section(SectionKind::Related) => self.related.close(),
            EditorId::Section(SectionKind::FinalCta) => self.final_cta.close(),
            EditorId::Section(SectionKind::PropertyPage) => self.property_page.close(),
            EditorId::Section(SectionKind::Logo) => self.logo.close(),
            EditorId::Section(SectionKind::Contact) => self.contact.close(),
            EditorId::Section(SectionKind::Copyright) => self.copyright.close(),
            EditorId::Item(ItemKind::AboutStat) => self.about_stat.close(),
            EditorId::Item(ItemKind::WhyReason) => self.why_reason.close(),
            EditorId::Item(ItemKind::Service) => self.service_item.close(),
            EditorId::Item(ItemKind::Testimonial) => self.testimonial_item.close(),
            EditorId::Property => self.property.close(),
            EditorId::Social => self.social.close(),
        }
    }

    /// Id of the entity in the open draft, for delete mutations. Sections
    /// have no delete action.
    pub fn open_entity_id(&self, id: EditorId) -> Option<String> {
        match id {
            EditorId::Section(_) => None,
            EditorId::Item(ItemKind::AboutStat) => {
                self.about_stat.value().and_then(|v| v.id.clone())
            }
            EditorId::Item(ItemKind::WhyReason) => {
                self.why_reason.value().and_then(|v| v.id.clone())
            }
            EditorId::Item(ItemKind::Service) => {
                self.service_item.value().and_then(|v| v.id.clone())
            }
            EditorId::Item(ItemKind::Testimonial) => {
                self.testimonial_item.value().and_then(|v| v.id.clone())
            }
            EditorId::Property => self.property.value().and_then(|v| v.id.clone()),
            EditorId::Social => self.social.value().and_then(|v| v.id.clone()),
        }
    }
}
