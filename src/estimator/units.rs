//! Household-measure to grams conversion.

use tracing::trace;

use crate::estimator::constants::{
    DEFAULT_QUANTITY, FALLBACK_GRAMS_PER_UNIT, GRAMS_PER_ML, POT_170_GRAMS,
};

/// How a unit string is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMatcher {
    /// Unit ends with the suffix (covers the bare suffix too).
    Suffix(&'static str),
    /// Unit contains any of the fragments.
    ContainsAny(&'static [&'static str]),
    /// Unit contains every one of the fragments.
    ContainsAll(&'static [&'static str]),
}

impl UnitMatcher {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            UnitMatcher::Suffix(s) => lowered.ends_with(s),
            UnitMatcher::ContainsAny(parts) => parts.iter().any(|p| lowered.contains(p)),
            UnitMatcher::ContainsAll(parts) => parts.iter().all(|p| lowered.contains(p)),
        }
    }
}

/// What a matched unit contributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitRule {
    /// Grams per one unit of quantity.
    PerUnit(f64),
    /// A fixed mass that ignores the quantity.
    Fixed(f64),
}

impl UnitRule {
    pub fn grams(&self, quantity: f64) -> f64 {
        match self {
            UnitRule::PerUnit(g) => quantity * g,
            UnitRule::Fixed(g) => *g,
        }
    }
}

/// Ordered unit rules, first match wins.
///
/// The "g" and "ml" suffixes never overlap, so "ml" can go first. The fixed
/// pot rule sits between them: "pote 170g" must not hit the "g" suffix, while
/// "pote 170ml" stays a millilitre measure.
pub static UNIT_RULES: &[(UnitMatcher, UnitRule)] = &[
    (UnitMatcher::Suffix("ml"), UnitRule::PerUnit(GRAMS_PER_ML)),
    (UnitMatcher::ContainsAll(&["pote", "170"]), UnitRule::Fixed(POT_170_GRAMS)),
    (UnitMatcher::Suffix("g"), UnitRule::PerUnit(1.0)),
    (UnitMatcher::ContainsAny(&["colher de servir", "concha"]), UnitRule::PerUnit(55.0)),
    (UnitMatcher::ContainsAny(&["colher de sopa"]), UnitRule::PerUnit(15.0)),
    (UnitMatcher::ContainsAny(&["fatia"]), UnitRule::PerUnit(30.0)),
    (UnitMatcher::ContainsAny(&["xícara"]), UnitRule::PerUnit(150.0)),
    (UnitMatcher::ContainsAny(&["unidade"]), UnitRule::PerUnit(100.0)),
];

/// Rule applied to a unit string; unknown or absent units get the average serving.
pub fn resolve_unit(unit: Option<&str>) -> UnitRule {
    let lowered = unit.unwrap_or_default().to_lowercase();
    UNIT_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(&lowered))
        .map(|(_, rule)| *rule)
        .unwrap_or(UnitRule::PerUnit(FALLBACK_GRAMS_PER_UNIT))
}

/// Parse the leading decimal number of a quantity text.
///
/// Anything absent, unparsable or not strictly positive becomes 1. Positive
/// fractions such as "0.5" are kept as is and are not clamped up to 1.
pub fn parse_quantity(quantity: Option<&str>) -> f64 {
    quantity
        .and_then(leading_number)
        .filter(|q| q.is_finite() && *q > 0.0)
        .unwrap_or(DEFAULT_QUANTITY)
}

fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

/// Approximate grams for a quantity and unit pair.
pub fn grams_for(quantity: Option<&str>, unit: Option<&str>) -> f64 {
    let q = parse_quantity(quantity);
    let rule = resolve_unit(unit);
    let grams = rule.grams(q);
    trace!(?quantity, ?unit, ?rule, grams, "converted measure");
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_household_measures() {
        assert_eq!(grams_for(Some("2"), Some("fatia")), 60.0);
        assert_eq!(grams_for(Some("1"), Some("xícara")), 150.0);
        assert_eq!(grams_for(Some("2"), Some("colher de servir")), 110.0);
        assert_eq!(grams_for(Some("1"), Some("concha")), 55.0);
        assert_eq!(grams_for(Some("1"), Some("colher de sopa")), 15.0);
        assert_eq!(grams_for(Some("1"), Some("unidade média")), 100.0);
    }

    #[test]
    fn test_grams_and_millilitres() {
        assert_eq!(grams_for(Some("30"), Some("g")), 30.0);
        assert_eq!(grams_for(Some(""), Some("g")), 1.0);
        assert_eq!(grams_for(Some("500"), Some("kg")), 500.0);
        assert!((grams_for(Some("200"), Some("ml")) - 204.0).abs() < 1e-9);
        assert!((grams_for(Some("1"), Some("ML")) - 1.02).abs() < 1e-9);
    }

    #[test]
    fn test_pot_ignores_quantity() {
        assert_eq!(grams_for(Some("3"), Some("pote 170g")), 170.0);
        assert_eq!(grams_for(Some("1"), Some("Pote de 170 g")), 170.0);
        // Without "170" it is just a unit ending in "g".
        assert_eq!(grams_for(Some("2"), Some("pote 90g")), 2.0);
    }

    #[test]
    fn test_pot_in_millilitres_scales_with_quantity() {
        assert!((grams_for(Some("2"), Some("pote 170ml")) - 2.04).abs() < 1e-9);
        assert_eq!(resolve_unit(Some("pote 170ml")), UnitRule::PerUnit(GRAMS_PER_ML));
        assert_eq!(resolve_unit(Some("pote 170g")), UnitRule::Fixed(POT_170_GRAMS));
    }

    #[test]
    fn test_unknown_or_missing_unit_is_average_serving() {
        assert_eq!(grams_for(Some("2"), Some("punhado")), 100.0);
        assert_eq!(grams_for(Some("1"), None), 50.0);
        assert_eq!(grams_for(None, None), 50.0);
        assert_eq!(resolve_unit(Some("")), UnitRule::PerUnit(FALLBACK_GRAMS_PER_UNIT));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(Some("2")), 2.0);
        assert_eq!(parse_quantity(Some(" 1.5 ")), 1.5);
        assert_eq!(parse_quantity(Some("0.5")), 0.5);
        assert_eq!(parse_quantity(Some(".5")), 0.5);
        assert_eq!(grams_for(Some("0.5"), Some("xícara")), 75.0);
        assert_eq!(parse_quantity(Some("2 fatias")), 2.0);
        assert_eq!(parse_quantity(Some("1/2")), 1.0);
        assert_eq!(parse_quantity(Some("3.")), 3.0);
    }

    #[test]
    fn test_parse_quantity_defaults() {
        assert_eq!(parse_quantity(None), 1.0);
        assert_eq!(parse_quantity(Some("")), 1.0);
        assert_eq!(parse_quantity(Some("meia")), 1.0);
        assert_eq!(parse_quantity(Some("0")), 1.0);
        assert_eq!(parse_quantity(Some("-2")), 1.0);
        assert_eq!(parse_quantity(Some(".")), 1.0);
    }
}
