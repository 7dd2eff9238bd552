//! The aggregate document served by `GET /api/site`.

use serde::{Deserialize, Serialize};

use super::about::{About, AboutStat};
use super::contact::Contact;
use super::copyright::Copyright;
use super::cta::Cta;
use super::final_cta::FinalCta;
use super::hero::Hero;
use super::logo::Logo;
use super::property::Property;
use super::property_page::{PropertyPage, RelatedSection};
use super::property_section::PropertySection;
use super::services::{Service, Services};
use super::social::SocialLink;
use super::testimonials::{Testimonial, Testimonials};
use super::why::{Why, WhyReason};

/// Singleton root record: one per deployment, created on first read.
///
/// A section that has never been saved is `None`; the editor opens its
/// default template instead. Child items are flat lists referencing their
/// owning section by id, already filtered of soft-deleted rows and ordered
/// by insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteDocument {
    pub id: String,
    pub hero: Option<Hero>,
    pub about: Option<About>,
    #[serde(default)]
    pub about_stats: Vec<AboutStat>,
    pub property_section: Option<PropertySection>,
    pub why: Option<Why>,
    #[serde(default)]
    pub why_reasons: Vec<WhyReason>,
    pub cta: Option<Cta>,
    pub services: Option<Services>,
    #[serde(default)]
    pub service_items: Vec<Service>,
    pub testimonials: Option<Testimonials>,
    #[serde(default)]
    pub testimonial_items: Vec<Testimonial>,
    pub related: Option<RelatedSection>,
    pub final_cta: Option<FinalCta>,
    pub property_page: Option<PropertyPage>,
    pub logo: Option<Logo>,
    pub contact: Option<Contact>,
    pub copyright: Option<Copyright>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl SiteDocument {
    pub fn property_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}
