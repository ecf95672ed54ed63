use log::debug;

use crate::domain::enums::MatchStrategy;
use crate::domain::model::catalog::{CatalogEntry, PriceCatalog};

/// Finds the catalog entry for a free-form ingredient display name.
///
/// Candidates are tried in a fixed order and only exact key hits count:
/// the name as written, the name without its parenthetical qualifier, and
/// the first word of the name.
pub struct NameResolver;

impl NameResolver {
    pub fn resolve<'a>(name: &str, catalog: &'a PriceCatalog) -> Option<&'a CatalogEntry> {
        Self::resolve_with_strategy(name, catalog).map(|(_, entry)| entry)
    }

    /// Like `resolve`, but also reports which candidate hit
    pub fn resolve_with_strategy<'a>(
        name: &str,
        catalog: &'a PriceCatalog,
    ) -> Option<(MatchStrategy, &'a CatalogEntry)> {
        let found = Self::candidates(name)
            .into_iter()
            .find_map(|(strategy, candidate)| {
                catalog.get(candidate?).map(|entry| (strategy, entry))
            });

        match found {
            Some((strategy, _)) => debug!("Resolved '{}' via {:?}", name, strategy),
            None => debug!("No catalog entry for '{}'", name),
        }
        found
    }

    /// The lookup keys derived from a name, in the order they are tried
    pub fn candidates(name: &str) -> [(MatchStrategy, Option<&str>); 3] {
        let stripped = name.split_once('(').map_or(name, |(head, _)| head).trim();
        [
            (MatchStrategy::Exact, Some(name)),
            (MatchStrategy::StrippedQualifier, Some(stripped)),
            (MatchStrategy::FirstWord, name.split_whitespace().next()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::UnitClass;

    fn catalog() -> PriceCatalog {
        PriceCatalog::from_iter([
            ("Tomaten", CatalogEntry::new(3.0, UnitClass::Mass)),
            ("Ei", CatalogEntry::new(0.4, UnitClass::Piece)),
            ("Olivenöl", CatalogEntry::new(9.0, UnitClass::Volume)),
            ("Olivenöl extra", CatalogEntry::new(12.0, UnitClass::Volume)),
        ])
    }

    #[test]
    fn test_exact_match_wins() {
        let catalog = catalog();
        let (strategy, entry) = NameResolver::resolve_with_strategy("Olivenöl extra", &catalog).unwrap();
        assert_eq!(strategy, MatchStrategy::Exact);
        assert_eq!(entry.price_per_unit, 12.0);
    }

    #[test]
    fn test_parenthetical_is_stripped() {
        let catalog = catalog();
        let (strategy, entry) = NameResolver::resolve_with_strategy("Tomaten (gehackt)", &catalog).unwrap();
        assert_eq!(strategy, MatchStrategy::StrippedQualifier);
        assert_eq!(entry.unit, UnitClass::Mass);
    }

    #[test]
    fn test_first_word_fallback() {
        let catalog = catalog();
        let (strategy, entry) = NameResolver::resolve_with_strategy("Ei Größe M", &catalog).unwrap();
        assert_eq!(strategy, MatchStrategy::FirstWord);
        assert_eq!(entry.price_per_unit, 0.4);
    }

    #[test]
    fn test_miss() {
        let catalog = catalog();
        assert!(NameResolver::resolve("Frische Tomaten", &catalog).is_none());
        assert!(NameResolver::resolve("", &catalog).is_none());
        assert!(NameResolver::resolve("   ", &catalog).is_none());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let catalog = catalog();
        assert!(NameResolver::resolve("tomaten", &catalog).is_none());
    }

    #[test]
    fn test_candidates() {
        let candidates = NameResolver::candidates("Paprika rot (gewürfelt)");
        assert_eq!(candidates[0].1, Some("Paprika rot (gewürfelt)"));
        assert_eq!(candidates[1].1, Some("Paprika rot"));
        assert_eq!(candidates[2].1, Some("Paprika"));

        assert_eq!(NameResolver::candidates("")[2].1, None);
    }
}
