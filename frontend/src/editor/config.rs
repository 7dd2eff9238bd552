//! The editor instantiation table.
//!
//! One `EditorId` per editable entity kind, mapping the kind to its upsert
//! endpoint, its optional delete endpoint, and the confirmation prompt shown
//! before a delete. The dashboard keys every generic message (`Save`,
//! `Saved`, `CancelEdit`, `RequestDelete`, `Deleted`) by this id.

use common::model::kind::{ItemKind, SectionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorId {
    Section(SectionKind),
    Item(ItemKind),
    Property,
    Social,
}

impl EditorId {
    pub fn save_endpoint(&self) -> String {
        match self {
            EditorId::Section(kind) => format!("/api/admin/sections/{}", kind.as_str()),
            EditorId::Item(kind) => format!("/api/admin/items/{}", kind.as_str()),
            EditorId::Property => "/api/admin/properties".to_string(),
            EditorId::Social => "/api/admin/social".to_string(),
        }
    }

    /// Sections are singletons and cannot be deleted; items, properties and
    /// social links soft-delete through `PATCH` on their save path.
    pub fn delete_endpoint(&self) -> Option<String> {
        match self {
            EditorId::Section(_) => None,
            other => Some(other.save_endpoint()),
        }
    }

    pub fn delete_prompt(&self) -> &'static str {
        match self {
            EditorId::Section(_) => "Hapus bagian ini?",
            EditorId::Item(ItemKind::AboutStat) => "Hapus item ini?",
            EditorId::Item(ItemKind::WhyReason) => "Hapus alasan ini?",
            EditorId::Item(ItemKind::Service) => "Hapus layanan ini?",
            EditorId::Item(ItemKind::Testimonial) => "Hapus testimoni ini?",
            EditorId::Property => "Hapus properti ini?",
            EditorId::Social => "Hapus tautan sosial ini?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_endpoints_carry_the_kind_key() {
        let id = EditorId::Section(SectionKind::FinalCta);
        assert_eq!(id.save_endpoint(), "/api/admin/sections/final-cta");
        assert_eq!(id.delete_endpoint(), None);
    }

    #[test]
    fn deletable_kinds_patch_their_save_path() {
        let id = EditorId::Item(ItemKind::Testimonial);
        assert_eq!(id.save_endpoint(), "/api/admin/items/testimonial");
        assert_eq!(id.delete_endpoint().as_deref(), Some("/api/admin/items/testimonial"));

        assert_eq!(
            EditorId::Property.delete_endpoint().as_deref(),
            Some("/api/admin/properties")
        );
    }
}
