//! Keyword-based reference table standing in for a food-composition database.
//!
//! Groups are tried in declaration order and the first group with any keyword
//! contained in the lower-cased food name wins. A name such as
//! "arroz integral" therefore resolves to the bread group, since "integral"
//! is listed there first. This is a coarse heuristic and the order is part of
//! the observable behaviour.

use strsim::jaro_winkler;
use tracing::debug;

use crate::estimator::constants::GENERIC_PROFILE;
use crate::models::NutrientProfile;

/// A set of alternative keywords mapped to one profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceGroup {
    pub keywords: &'static [&'static str],
    pub profile: NutrientProfile,
}

impl ReferenceGroup {
    const fn new(keywords: &'static [&'static str], kcal: f64, protein: f64, carb: f64, fat: f64) -> Self {
        Self {
            keywords,
            profile: NutrientProfile::new(kcal, protein, carb, fat),
        }
    }

    /// First keyword contained in an already lower-cased name.
    pub fn matching_keyword(&self, lowered: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|k| lowered.contains(k))
    }
}

/// Per-100 g reference values, in priority order.
pub static REFERENCE_TABLE: &[ReferenceGroup] = &[
    ReferenceGroup::new(&["pão", "integral", "torrada"], 265.0, 9.0, 49.0, 3.0),
    ReferenceGroup::new(&["queijo", "branco", "ricota"], 260.0, 18.0, 3.0, 20.0),
    ReferenceGroup::new(&["geleia"], 260.0, 0.0, 65.0, 0.0),
    ReferenceGroup::new(&["café", "chá", "leite"], 45.0, 3.0, 5.0, 2.0),
    ReferenceGroup::new(&["banana", "maçã", "fruta", "laranja"], 60.0, 1.0, 15.0, 0.0),
    ReferenceGroup::new(&["iogurte", "natural"], 60.0, 4.0, 7.0, 2.0),
    ReferenceGroup::new(&["castanha", "castanhas", "amendoim", "nozes"], 600.0, 15.0, 20.0, 55.0),
    ReferenceGroup::new(&["salada", "legumes", "vegetais", "verdura"], 25.0, 2.0, 4.0, 0.0),
    ReferenceGroup::new(&["frango", "peixe", "peito", "grelhado", "proteína"], 165.0, 31.0, 0.0, 4.0),
    ReferenceGroup::new(&["ovo", "ovos"], 155.0, 13.0, 1.0, 11.0),
    ReferenceGroup::new(&["arroz", "integral"], 130.0, 3.0, 28.0, 1.0),
    ReferenceGroup::new(&["feijão", "leguminosa"], 130.0, 9.0, 24.0, 0.0),
    ReferenceGroup::new(&["batata", "mandioca"], 90.0, 2.0, 21.0, 0.0),
    ReferenceGroup::new(&["massa", "macarrão"], 130.0, 5.0, 25.0, 1.0),
    ReferenceGroup::new(&["peru", "peito de peru"], 110.0, 22.0, 2.0, 1.0),
    ReferenceGroup::new(&["suco", "vitamina", "smoothie"], 45.0, 1.0, 11.0, 0.0),
    ReferenceGroup::new(&["sopa"], 35.0, 2.0, 5.0, 1.0),
];

/// The group a food name resolves to, if any.
pub fn match_reference(item_name: &str) -> Option<&'static ReferenceGroup> {
    let lowered = item_name.to_lowercase();
    REFERENCE_TABLE
        .iter()
        .find(|group| group.matching_keyword(&lowered).is_some())
}

/// Per-100 g profile for a food name. Falls back to [`GENERIC_PROFILE`].
pub fn lookup_nutrients(item_name: &str) -> NutrientProfile {
    match match_reference(item_name) {
        Some(group) => group.profile,
        None => {
            debug!(item = item_name, "no reference group matched, using generic profile");
            GENERIC_PROFILE
        }
    }
}

/// Closest reference keyword by Jaro-Winkler similarity.
///
/// Used for diagnostics only; estimation never calls this.
pub fn suggest_keyword(item_name: &str) -> Option<(&'static str, f64)> {
    let lowered = item_name.to_lowercase();
    REFERENCE_TABLE
        .iter()
        .flat_map(|group| group.keywords.iter().copied())
        .map(|k| (k, jaro_winkler(k, &lowered)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_substring() {
        let profile = lookup_nutrients("PÃO Francês");
        assert_eq!(profile.kcal, 265.0);

        let profile = lookup_nutrients("Banana prata");
        assert_eq!(profile, NutrientProfile::new(60.0, 1.0, 15.0, 0.0));
    }

    #[test]
    fn test_first_group_wins() {
        // "integral" sits in the bread group ahead of the rice group.
        assert_eq!(lookup_nutrients("Arroz integral").kcal, 265.0);
        // "frango" (group 9) beats "arroz" (group 11).
        assert_eq!(lookup_nutrients("frango grelhado com arroz").kcal, 165.0);
        // "peito" in the poultry group shadows "peito de peru".
        assert_eq!(lookup_nutrients("Peito de peru").kcal, 165.0);
        // "branco" puts this into the cheese group despite "arroz".
        assert_eq!(lookup_nutrients("arroz branco").kcal, 260.0);
    }

    #[test]
    fn test_unknown_food_is_generic() {
        assert_eq!(lookup_nutrients("xyz-unrecognized-food"), GENERIC_PROFILE);
        assert_eq!(lookup_nutrients(""), GENERIC_PROFILE);
        assert!(match_reference("xyz-unrecognized-food").is_none());
    }

    #[test]
    fn test_match_reference_reports_group() {
        let group = match_reference("Feijão carioca").unwrap();
        assert_eq!(group.matching_keyword("feijão carioca"), Some("feijão"));
        assert_eq!(group.profile.kcal, 130.0);
    }

    #[test]
    fn test_suggest_keyword() {
        let (keyword, score) = suggest_keyword("bananna").unwrap();
        assert_eq!(keyword, "banana");
        assert!(score > 0.9);

        assert!(suggest_keyword("qqqqqqqqqq").is_none());
    }
}
