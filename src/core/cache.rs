use std::collections::HashMap;

use super::{
    OptionsBundle,
    Year,
};

/// Bundles kept per year for the whole session. Bundles for distinct years never merge.
#[derive(Debug, Default)]
pub struct OptionsCache {
    bundles: HashMap<Year, OptionsBundle>,
}

impl OptionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, year: Year) -> Option<&OptionsBundle> {
        self.bundles.get(&year)
    }

    pub fn contains(&self, year: Year) -> bool {
        self.bundles.contains_key(&year)
    }

    /// Replaces whatever was stored for `year` with the whole of `bundle`.
    pub fn insert(&mut self, year: Year, bundle: OptionsBundle) {
        self.bundles.insert(year, bundle);
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn bundle(university: &str, careers: &[&str]) -> OptionsBundle {
        let mut map = HashMap::new();
        map.insert(university.to_string(), careers.iter().map(|c| c.to_string()).collect());
        OptionsBundle::new(vec![university.to_string()], map)
    }

    #[test]
    fn test_years_are_kept_apart() {
        let a = Year::new(2020).unwrap();
        let b = Year::new(2021).unwrap();
        let mut cache = OptionsCache::new();

        cache.insert(a, bundle("U. A", &["Derecho"]));
        cache.insert(b, bundle("U. B", &["Medicina"]));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(a).unwrap().universities(), ["U. A"]);
        assert!(cache.get(a).unwrap().careers_for("U. B").is_empty());
        assert_eq!(cache.get(b).unwrap().careers_for("U. B"), ["Medicina"]);
    }

    #[test]
    fn test_insert_replaces_whole_bundle() {
        let year = Year::new(2020).unwrap();
        let mut cache = OptionsCache::new();

        cache.insert(year, bundle("U. A", &["Derecho"]));
        cache.insert(year, bundle("U. C", &["Química"]));

        assert_eq!(cache.len(), 1);
        assert!(!cache.get(year).unwrap().has_university("U. A"));
        assert!(cache.contains(year));
    }
}
