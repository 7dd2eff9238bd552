//! Property listing entity and its editing draft.
//!
//! `Property` is the persisted shape: every numeric field present, at least
//! one image expected before the listing may be published. `PropertyDraft` is
//! the shape exchanged with the admin editor and the upsert endpoint, where
//! count fields may still be unset while the user is typing. The server
//! accepts a draft and refuses to persist it until `missing_required` is
//! empty.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    House,
    Villa,
    Apartment,
    Guesthouse,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Apartment,
        PropertyType::Guesthouse,
        PropertyType::Land,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Apartment => "apartment",
            PropertyType::Guesthouse => "guesthouse",
            PropertyType::Land => "land",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// Display label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "Rumah",
            PropertyType::Villa => "Villa",
            PropertyType::Apartment => "Apartemen",
            PropertyType::Guesthouse => "Guest House",
            PropertyType::Land => "Tanah",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub room: u32,
    pub bath: u32,
    pub sqft: u32,
    pub price: u64,
    pub rating: f32,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    /// Reference to the uploaded catalog document.
    pub pdf: String,
    pub is_available: bool,
}

impl Property {
    /// Fields that must be filled before the availability flag may be
    /// toggled straight from the list view. Returns display labels for the
    /// warning dialog; empty means the toggle is permitted.
    pub fn missing_for_publish(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("nama");
        }
        if self.address.trim().is_empty() {
            missing.push("alamat");
        }
        if self.description.trim().is_empty() {
            missing.push("deskripsi");
        }
        if self.pdf.trim().is_empty() {
            missing.push("katalog PDF");
        }
        if self.images.is_empty() {
            missing.push("gambar");
        }
        missing
    }
}

/// Editor-side shape of a property: count fields stay unset until the user
/// has typed a digit, matching the empty state of the form inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub room: Option<u32>,
    pub bath: Option<u32>,
    pub sqft: Option<u32>,
    pub price: Option<u64>,
    pub rating: Option<f32>,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub pdf: String,
    pub is_available: bool,
}

impl PropertyDraft {
    /// Template for a create draft. New listings start available, matching
    /// the admin form defaults.
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            address: String::new(),
            kind: PropertyType::default(),
            room: None,
            bath: None,
            sqft: None,
            price: None,
            rating: None,
            description: String::new(),
            features: Vec::new(),
            images: Vec::new(),
            pdf: String::new(),
            is_available: true,
        }
    }

    pub fn from_property(p: &Property) -> Self {
        Self {
            id: Some(p.id.clone()),
            name: p.name.clone(),
            address: p.address.clone(),
            kind: p.kind,
            room: Some(p.room),
            bath: Some(p.bath),
            sqft: Some(p.sqft),
            price: Some(p.price),
            rating: Some(p.rating),
            description: p.description.clone(),
            features: p.features.clone(),
            images: p.images.clone(),
            pdf: p.pdf.clone(),
            is_available: p.is_available,
        }
    }

    /// Labels of the required fields that are still empty or unset.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("nama");
        }
        if self.address.trim().is_empty() {
            missing.push("alamat");
        }
        if self.description.trim().is_empty() {
            missing.push("deskripsi");
        }
        if self.pdf.trim().is_empty() {
            missing.push("katalog PDF");
        }
        if self.images.is_empty() {
            missing.push("gambar");
        }
        if self.room.is_none() {
            missing.push("jumlah kamar");
        }
        if self.bath.is_none() {
            missing.push("jumlah kamar mandi");
        }
        if self.sqft.is_none() {
            missing.push("luas");
        }
        if self.price.is_none() {
            missing.push("harga");
        }
        if self.rating.is_none() {
            missing.push("rating");
        }
        missing
    }

    /// Converts the draft into a persistable `Property` under the given id.
    /// Fails with the missing-field labels when any required field is unset.
    pub fn into_property(self, id: String) -> Result<Property, Vec<&'static str>> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(missing);
        }
        Ok(Property {
            id,
            name: self.name,
            address: self.address,
            kind: self.kind,
            room: self.room.unwrap_or(0),
            bath: self.bath.unwrap_or(0),
            sqft: self.sqft.unwrap_or(0),
            price: self.price.unwrap_or(0),
            rating: self.rating.unwrap_or(0.0),
            description: self.description,
            features: self.features,
            images: self.images,
            pdf: self.pdf,
            is_available: self.is_available,
        })
    }
}

impl Default for PropertyDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> PropertyDraft {
        PropertyDraft {
            name: "Villa Dago".to_string(),
            address: "Jl. Kaliurang Km 7, Yogyakarta".to_string(),
            kind: PropertyType::Villa,
            room: Some(3),
            bath: Some(2),
            sqft: Some(120),
            price: Some(1_500_000),
            rating: Some(4.8),
            description: "Villa dengan pemandangan Merapi.".to_string(),
            features: vec!["Kolam Renang".to_string()],
            images: vec!["/uploads/a.jpg".to_string()],
            pdf: "/uploads/katalog.pdf".to_string(),
            ..PropertyDraft::new()
        }
    }

    #[test]
    fn complete_draft_converts() {
        let property = complete_draft().into_property("p-1".to_string()).unwrap();
        assert_eq!(property.id, "p-1");
        assert_eq!(property.room, 3);
        assert!(property.is_available);
    }

    #[test]
    fn missing_fields_are_reported() {
        let mut draft = complete_draft();
        draft.pdf.clear();
        draft.price = None;
        let missing = draft.missing_required();
        assert!(missing.contains(&"katalog PDF"));
        assert!(missing.contains(&"harga"));
        assert!(draft.into_property("p-1".to_string()).is_err());
    }

    #[test]
    fn publish_guard_checks_persisted_record() {
        let mut property = complete_draft().into_property("p-1".to_string()).unwrap();
        assert!(property.missing_for_publish().is_empty());
        property.images.clear();
        property.pdf = "  ".to_string();
        let missing = property.missing_for_publish();
        assert_eq!(missing, vec!["katalog PDF", "gambar"]);
    }

    #[test]
    fn property_type_round_trips_through_as_str() {
        for t in PropertyType::ALL {
            assert_eq!(PropertyType::parse(t.as_str()), Some(t));
        }
        assert_eq!(PropertyType::parse("castle"), None);
    }
}
