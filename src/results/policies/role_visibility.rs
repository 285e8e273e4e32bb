use crate::results::domain::CardId;

const EXECUTIVE_CARDS: &[CardId] = &[
    CardId::ApplicationVendor,
    CardId::TrustScore,
    CardId::Confidence,
    CardId::KeyTakeaways,
    CardId::Alternatives,
];

const SECURITY_CARDS: &[CardId] = &[
    CardId::Vulnerabilities,
    CardId::Incidents,
    CardId::RecentCves,
    CardId::RecentIncidents,
];

const COMPLIANCE_CARDS: &[CardId] = &[
    CardId::Compliance,
    CardId::Certifications,
];

const TECHNICAL_CARDS: &[CardId] = &[
    CardId::TrustBreakdown,
    CardId::Architecture,
    CardId::Vulnerabilities,
    CardId::RecentCves,
];

const GLOBAL_CARDS: &[CardId] = &CardId::ALL;

/// Role id → cards shown for it. `global` shows everything.
const ROLE_VISIBILITY: &[(&str, &[CardId])] = &[
    ("executive", EXECUTIVE_CARDS),
    ("security", SECURITY_CARDS),
    ("compliance", COMPLIANCE_CARDS),
    ("technical", TECHNICAL_CARDS),
    ("global", GLOBAL_CARDS),
];

/// Cards visible for a role id. Unknown roles get the `global` set.
pub fn get_visible_cards(role: &str) -> &'static [CardId] {
    ROLE_VISIBILITY
        .iter()
        .find(|(id, _)| *id == role)
        .map(|(_, cards)| *cards)
        .unwrap_or(GLOBAL_CARDS)
}

/// Same as [`get_visible_cards`], with a missing role treated as `global`.
pub fn visible_cards_for(role: Option<&str>) -> &'static [CardId] {
    role.map(get_visible_cards).unwrap_or(GLOBAL_CARDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(cards: &[CardId]) -> HashSet<CardId> {
        cards.iter().copied().collect()
    }

    #[test]
    fn test_security_cards() {
        let expected: HashSet<CardId> = [
            CardId::Vulnerabilities,
            CardId::Incidents,
            CardId::RecentCves,
            CardId::RecentIncidents,
        ]
        .into_iter()
        .collect();
        assert_eq!(as_set(get_visible_cards("security")), expected);
    }

    #[test]
    fn test_unknown_role_is_global() {
        assert_eq!(get_visible_cards("ciso"), get_visible_cards("global"));
        assert_eq!(get_visible_cards(""), GLOBAL_CARDS);
        assert_eq!(visible_cards_for(None), GLOBAL_CARDS);
    }

    #[test]
    fn test_global_shows_every_card() {
        assert_eq!(as_set(get_visible_cards("global")), as_set(&CardId::ALL));
    }

    #[test]
    fn test_every_role_has_cards() {
        for role in crate::intake::domain::Role::ALL {
            assert!(!get_visible_cards(role.id()).is_empty(), "{}", role);
        }
    }

    #[test]
    fn test_role_lookup_is_case_sensitive() {
        assert_eq!(get_visible_cards("Security"), GLOBAL_CARDS);
    }
}
