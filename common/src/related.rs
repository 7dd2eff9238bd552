//! Related-property recommendation scoring.
//!
//! Pure ranking over the aggregate's property list: given the property being
//! viewed, every other property gets an additive integer score across
//! independent similarity signals, and the top entries are returned for the
//! "related properties" strip. The weights and proximity bands are policy
//! constants, not hidden logic; tune them here.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::model::property::Property;

/// Candidate has the same property type.
pub const TYPE_MATCH_WEIGHT: i64 = 10;
/// Per distinct address token shared with the target (no cap).
pub const ADDRESS_TOKEN_WEIGHT: i64 = 3;
/// Candidate price within [`PRICE_BAND_RATIO`] of the target price.
pub const PRICE_BAND_WEIGHT: i64 = 5;
pub const PRICE_BAND_RATIO: f64 = 0.2;
/// Candidate area within [`SIZE_BAND_RATIO`] of the target area.
pub const SIZE_BAND_WEIGHT: i64 = 3;
pub const SIZE_BAND_RATIO: f64 = 0.3;
pub const ROOM_MATCH_WEIGHT: i64 = 2;
pub const BATH_MATCH_WEIGHT: i64 = 2;

/// Number of related properties shown on the detail page.
pub const RELATED_LIMIT: usize = 6;

/// Lowercased address tokens longer than two characters. Addresses are split
/// on whitespace and the separator punctuation common in street addresses,
/// so "Jl. Kaliurang, Yogyakarta" and "Jl. Kaliurang Sleman" share the token
/// "kaliurang" but not the abbreviation "jl".
fn address_tokens(address: &str) -> BTreeSet<String> {
    address
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '-'))
        .filter(|token| token.chars().count() > 2)
        .map(|token| token.to_lowercase())
        .collect()
}

/// Similarity score between the viewed property and one candidate.
pub fn score(target: &Property, candidate: &Property) -> i64 {
    let mut score = 0;

    if candidate.kind == target.kind {
        score += TYPE_MATCH_WEIGHT;
    }

    let shared_tokens = address_tokens(&target.address)
        .intersection(&address_tokens(&candidate.address))
        .count() as i64;
    score += shared_tokens * ADDRESS_TOKEN_WEIGHT;

    let price_diff = (candidate.price as f64 - target.price as f64).abs();
    if price_diff <= PRICE_BAND_RATIO * target.price as f64 {
        score += PRICE_BAND_WEIGHT;
    }

    let size_diff = (candidate.sqft as f64 - target.sqft as f64).abs();
    if size_diff <= SIZE_BAND_RATIO * target.sqft as f64 {
        score += SIZE_BAND_WEIGHT;
    }

    if candidate.room == target.room {
        score += ROOM_MATCH_WEIGHT;
    }
    if candidate.bath == target.bath {
        score += BATH_MATCH_WEIGHT;
    }

    score
}

/// Ranks `candidates` by descending similarity to `target` and returns the
/// first `limit` entries. The target itself is excluded by id. Zero-score
/// candidates are kept, so a sparse catalog still fills the strip. The sort
/// is stable and no secondary key is applied: candidates with equal scores
/// keep their input order (assumption inherited from the original behavior,
/// which leaned on the runtime's stable sort).
pub fn score_and_rank(target: &Property, candidates: &[Property], limit: usize) -> Vec<Property> {
    let mut scored: Vec<(i64, &Property)> = candidates
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .map(|candidate| (score(target, candidate), candidate))
        .collect();

    scored.sort_by_key(|(score, _)| Reverse(*score));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::PropertyType;

    fn property(id: &str, kind: PropertyType, price: u64, sqft: u32, address: &str) -> Property {
        Property {
            id: id.to_string(),
            name: format!("Properti {id}"),
            address: address.to_string(),
            kind,
            room: 3,
            bath: 2,
            sqft,
            price,
            rating: 4.5,
            description: String::new(),
            features: Vec::new(),
            images: vec!["/uploads/a.jpg".to_string()],
            pdf: "/uploads/a.pdf".to_string(),
            is_available: true,
        }
    }

    #[test]
    fn target_is_never_included() {
        let target = property("t", PropertyType::Villa, 1_000_000, 100, "Jl. Kaliurang");
        let pool = vec![
            target.clone(),
            property("a", PropertyType::Villa, 1_000_000, 100, "Jl. Kaliurang"),
        ];
        let ranked = score_and_rank(&target, &pool, 6);
        assert!(ranked.iter().all(|p| p.id != "t"));
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn output_length_is_min_of_limit_and_candidates() {
        let target = property("t", PropertyType::Villa, 1_000_000, 100, "Jl. Kaliurang");
        let pool: Vec<Property> = (0..9)
            .map(|i| property(&format!("c{i}"), PropertyType::House, 500_000, 50, "Bandung"))
            .collect();
        assert_eq!(score_and_rank(&target, &pool, 6).len(), 6);
        assert_eq!(score_and_rank(&target, &pool[..3], 6).len(), 3);
        assert!(score_and_rank(&target, &[], 6).is_empty());
    }

    #[test]
    fn worked_example_scores_and_order() {
        let target = property(
            "t",
            PropertyType::Villa,
            1_000_000,
            100,
            "Jl. Kaliurang Yogyakarta",
        );
        // Type +10, "kaliurang" +3, price within 20% +5, area within 30% +3,
        // rooms +2, baths +2 = 25.
        let a = property(
            "a",
            PropertyType::Villa,
            1_050_000,
            110,
            "Jl. Kaliurang Sleman",
        );
        // Different type, no shared tokens, both bands missed, counts differ.
        let mut b = property("b", PropertyType::Apartment, 2_000_000, 400, "Surabaya");
        b.room = 1;
        b.bath = 1;

        assert_eq!(score(&target, &a), 25);
        assert_eq!(score(&target, &b), 0);

        // Zero-score candidates are still returned, after the scored one.
        let ranked = score_and_rank(&target, &[b, a], 6);
        assert_eq!(ranked[0].id, "a");
        assert_eq!(ranked[1].id, "b");
    }

    #[test]
    fn equal_scores_preserve_input_order() {
        let target = property("t", PropertyType::Villa, 1_000_000, 100, "Jl. Kaliurang");
        let pool: Vec<Property> = ["x", "y", "z"]
            .iter()
            .map(|id| property(id, PropertyType::Villa, 1_000_000, 100, "Jl. Kaliurang"))
            .collect();
        let ranked = score_and_rank(&target, &pool, 6);
        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn short_address_tokens_are_ignored() {
        let target = property("t", PropertyType::Land, 1, 1, "Jl. KM 7");
        let candidate = property("c", PropertyType::Villa, 900_000, 900, "Jl. KM 9");
        // "jl", "km" and the digits are all <= 2 chars; no token overlap.
        let mut expected = 0;
        if candidate.room == target.room {
            expected += ROOM_MATCH_WEIGHT;
        }
        if candidate.bath == target.bath {
            expected += BATH_MATCH_WEIGHT;
        }
        assert_eq!(score(&target, &candidate), expected);
    }
}
