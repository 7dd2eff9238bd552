//! Entity-kind tables shared by the admin editor and the write endpoints.
//!
//! Every scalar section and every child-item kind is listed here once; both
//! sides of the wire derive their routing and storage keys from these enums
//! instead of hand-maintaining parallel string lists.

use serde::{Deserialize, Serialize};

use super::about::AboutStat;
use super::services::Service;
use super::testimonials::Testimonial;
use super::why::WhyReason;

/// Scalar content sections owned by the site root. One row each, upserted
/// through `POST /api/admin/sections/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    About,
    Property,
    Why,
    Cta,
    Services,
    Testimonials,
    Related,
    FinalCta,
    PropertyPage,
    Logo,
    Contact,
    Copyright,
}

impl SectionKind {
    pub const ALL: [SectionKind; 13] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Property,
        SectionKind::Why,
        SectionKind::Cta,
        SectionKind::Services,
        SectionKind::Testimonials,
        SectionKind::Related,
        SectionKind::FinalCta,
        SectionKind::PropertyPage,
        SectionKind::Logo,
        SectionKind::Contact,
        SectionKind::Copyright,
    ];

    /// Stable key used in both the route path and the sections table.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Property => "property",
            SectionKind::Why => "why",
            SectionKind::Cta => "cta",
            SectionKind::Services => "services",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Related => "related",
            SectionKind::FinalCta => "final-cta",
            SectionKind::PropertyPage => "property-page",
            SectionKind::Logo => "logo",
            SectionKind::Contact => "contact",
            SectionKind::Copyright => "copyright",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

/// Child items owned by one section each, upserted through
/// `POST /api/admin/items/{kind}` and soft-deleted through `PATCH` on the
/// same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    AboutStat,
    WhyReason,
    Service,
    Testimonial,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::AboutStat,
        ItemKind::WhyReason,
        ItemKind::Service,
        ItemKind::Testimonial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::AboutStat => "about-stat",
            ItemKind::WhyReason => "why-reason",
            ItemKind::Service => "service",
            ItemKind::Testimonial => "testimonial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

/// Uniform access to the per-kind plumbing of a child item: its kind tag,
/// its optional id, and the foreign key of the owning section.
pub trait SectionItem {
    const KIND: ItemKind;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
    fn parent_id(&self) -> &str;
}

impl SectionItem for AboutStat {
    const KIND: ItemKind = ItemKind::AboutStat;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn parent_id(&self) -> &str {
        &self.about_id
    }
}

impl SectionItem for WhyReason {
    const KIND: ItemKind = ItemKind::WhyReason;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn parent_id(&self) -> &str {
        &self.why_id
    }
}

impl SectionItem for Service {
    const KIND: ItemKind = ItemKind::Service;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn parent_id(&self) -> &str {
        &self.services_id
    }
}

impl SectionItem for Testimonial {
    const KIND: ItemKind = ItemKind::Testimonial;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn parent_id(&self) -> &str {
        &self.testimonials_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_kind_keys_are_unique_and_parseable() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SectionKind::parse("heroics"), None);
    }

    #[test]
    fn item_kind_keys_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn create_drafts_carry_parent_key() {
        let stat = AboutStat::draft("about-1".to_string());
        assert_eq!(stat.parent_id(), "about-1");
        assert!(stat.id().is_none());

        let reason = WhyReason::draft("why-1".to_string());
        assert_eq!(reason.icon, "🏠");
        assert_eq!(reason.parent_id(), "why-1");
    }
}
