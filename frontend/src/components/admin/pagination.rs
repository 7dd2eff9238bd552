//! Ordering and paging of the dashboard's property list.

use common::model::property::Property;

pub const PAGE_SIZE: usize = 6;

pub struct Page<'a> {
    pub items: Vec<&'a Property>,
    pub current: usize,
    pub total_pages: usize,
    pub total: usize,
    /// 0-based slice bounds, for the "showing X–Y of Z" line.
    pub start: usize,
    pub end: usize,
}

/// Sorts available listings first, then by name case-insensitively, and
/// slices out the requested page. The page index is clamped into the valid
/// range, so the view stays consistent when the list shrinks under the
/// current page (e.g. right after a delete).
pub fn paginate(properties: &[Property], requested_page: usize) -> Page<'_> {
    let mut sorted: Vec<&Property> = properties.iter().collect();
    sorted.sort_by(|a, b| {
        b.is_available
            .cmp(&a.is_available)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    let total = sorted.len();
    let total_pages = total.div_ceil(PAGE_SIZE).max(1);
    let current = requested_page.clamp(1, total_pages);
    let start = (current - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total);

    Page {
        items: sorted[start..end].to_vec(),
        current,
        total_pages,
        total,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::property::{PropertyDraft, PropertyType};

    fn property(name: &str, available: bool) -> Property {
        let mut draft = PropertyDraft {
            name: name.to_string(),
            address: "Yogyakarta".to_string(),
            kind: PropertyType::Villa,
            room: Some(2),
            bath: Some(1),
            sqft: Some(80),
            price: Some(500_000),
            rating: Some(4.0),
            description: "-".to_string(),
            images: vec!["/uploads/a.jpg".to_string()],
            pdf: "/uploads/a.pdf".to_string(),
            ..PropertyDraft::new()
        };
        draft.is_available = available;
        draft.into_property(name.to_string()).unwrap()
    }

    #[test]
    fn thirteen_properties_make_three_pages() {
        let list: Vec<Property> = (0..13)
            .map(|i| property(&format!("Villa {:02}", i), true))
            .collect();

        let first = paginate(&list, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 6);
        assert_eq!(first.start, 0);
        assert_eq!(first.end, 6);

        let last = paginate(&list, 3);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.start, 12);
        assert_eq!(last.end, 13);
    }

    #[test]
    fn page_clamps_when_the_list_shrinks() {
        let list: Vec<Property> = (0..13)
            .map(|i| property(&format!("Villa {:02}", i), true))
            .collect();
        // Page 4 does not exist for 13 items; stay on the last page.
        assert_eq!(paginate(&list, 4).current, 3);
        assert_eq!(paginate(&list, 0).current, 1);

        let shrunk: Vec<Property> = list.into_iter().take(5).collect();
        let page = paginate(&shrunk, 3);
        assert_eq!(page.current, 1);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn available_first_then_name_case_insensitive() {
        let list = vec![
            property("zebra", true),
            property("Anggrek", false),
            property("melati", true),
            property("Bougenville", true),
        ];
        let page = paginate(&list, 1);
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bougenville", "melati", "zebra", "Anggrek"]);
    }

    #[test]
    fn empty_list_is_one_empty_page() {
        let page = paginate(&[], 5);
        assert_eq!(page.current, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
