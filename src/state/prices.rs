use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::engine::PriceSource;
use crate::models::PriceEntry;

/// Minimum similarity score for fuzzy name matches.
const FUZZY_THRESHOLD: f64 = 0.7;

/// In-memory reference price cache, keyed by supply id.
pub struct PriceBook {
    entries: HashMap<u32, PriceEntry>,
}

impl PriceBook {
    /// Build a price book from a list of entries.
    ///
    /// Duplicate supply ids collapse, last occurrence wins.
    pub fn new(entries: Vec<PriceEntry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            map.insert(entry.supply_id, entry);
        }
        Self { entries: map }
    }

    pub fn get(&self, supply_id: u32) -> Option<&PriceEntry> {
        self.entries.get(&supply_id)
    }

    /// Display name for a supply, falling back to the raw id.
    pub fn name_of(&self, supply_id: u32) -> String {
        self.get(supply_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| format!("supply #{}", supply_id))
    }

    /// Exact name match, case-insensitive.
    pub fn find_by_name(&self, name: &str) -> Option<&PriceEntry> {
        let needle = name.to_lowercase();
        self.entries
            .values()
            .find(|e| e.name.to_lowercase() == needle)
    }

    /// Fuzzy name candidates scored by Jaro-Winkler similarity, best first.
    pub fn fuzzy_find(&self, name: &str) -> Vec<(&PriceEntry, f64)> {
        let needle = name.to_lowercase();
        let mut candidates: Vec<(&PriceEntry, f64)> = self
            .entries
            .values()
            .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    pub fn all(&self) -> Vec<&PriceEntry> {
        self.entries.values().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PriceSource for PriceBook {
    fn unit_price(&self, supply_id: u32) -> Option<f64> {
        self.entries.get(&supply_id).map(|e| e.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<PriceEntry> {
        vec![
            PriceEntry {
                supply_id: 1,
                name: "Cane Sugar".to_string(),
                unit_price: 0.8,
            },
            PriceEntry {
                supply_id: 2,
                name: "Citric Acid".to_string(),
                unit_price: 3.2,
            },
        ]
    }

    #[test]
    fn test_lookup_and_name() {
        let book = PriceBook::new(sample_entries());
        assert_eq!(book.unit_price(1), Some(0.8));
        assert_eq!(book.unit_price(9), None);
        assert_eq!(book.name_of(2), "Citric Acid");
        assert_eq!(book.name_of(9), "supply #9");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let mut entries = sample_entries();
        entries.push(PriceEntry {
            supply_id: 1,
            name: "Cane Sugar".to_string(),
            unit_price: 0.95,
        });

        let book = PriceBook::new(entries);
        assert_eq!(book.len(), 2);
        assert_eq!(book.unit_price(1), Some(0.95));
    }

    #[test]
    fn test_fuzzy_find() {
        let book = PriceBook::new(sample_entries());

        let hits = book.fuzzy_find("cane sugr");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].0.supply_id, 1);

        assert!(book.fuzzy_find("xylophone").is_empty());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let book = PriceBook::new(sample_entries());
        assert!(book.find_by_name("CITRIC ACID").is_some());
        assert!(book.find_by_name("bromine").is_none());
    }
}
