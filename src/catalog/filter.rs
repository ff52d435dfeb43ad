//! Consolidated catalog filtering
//!
//! One criteria struct and one pure predicate, instead of every page
//! re-implementing its own. All active criteria are ANDed; empty criteria
//! is the identity filter. Matching is a linear scan, which is fine for a
//! small fixed list and deliberately nothing more.

use thiserror::Error;

use crate::catalog::specialist::{Availability, Category, Language, Rating, Specialist};

/// Errors from building filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("inverted price range: min {min} exceeds max {max}")]
    InvertedRange { min: u32, max: u32 },
}

/// Inclusive price range with the min <= max guard the prototype lacked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, amount: u32) -> bool {
        (self.min..=self.max).contains(&amount)
    }
}

/// User-entered predicates narrowing the catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring over name, handle and skills
    pub search: Option<String>,

    /// Exact category
    pub category: Option<Category>,

    /// Every listed skill must be present (case-insensitive)
    pub skills: Vec<String>,

    /// Every listed language must be spoken at any level
    pub languages: Vec<Language>,

    /// Current availability
    pub availability: Option<Availability>,

    /// Minimum rating threshold
    pub min_rating: Option<Rating>,

    /// Price window over the comparable amount
    pub price_range: Option<PriceRange>,

    /// Only recently joined specialists
    pub only_new: bool,
}

impl FilterCriteria {
    /// No active criteria: matches everything
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.skills.is_empty()
            && self.languages.is_empty()
            && self.availability.is_none()
            && self.min_rating.is_none()
            && self.price_range.is_none()
            && !self.only_new
    }

    /// Logical AND of all active criteria
    pub fn matches(&self, specialist: &Specialist) -> bool {
        if let Some(ref needle) = self.search {
            if !search_matches(needle, specialist) {
                return false;
            }
        }

        if let Some(category) = self.category {
            if specialist.category != category {
                return false;
            }
        }

        for skill in &self.skills {
            let wanted = skill.to_lowercase();
            if !specialist
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(&wanted))
            {
                return false;
            }
        }

        for language in &self.languages {
            if !specialist
                .languages
                .iter()
                .any(|ls| ls.language == *language)
            {
                return false;
            }
        }

        if let Some(availability) = self.availability {
            if specialist.availability != availability {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if specialist.rating < min_rating {
                return false;
            }
        }

        if let Some(range) = self.price_range {
            if !range.contains(specialist.price.amount()) {
                return false;
            }
        }

        if self.only_new && !specialist.is_new {
            return false;
        }

        true
    }
}

/// Case-insensitive substring containment over name, handle and skills
fn search_matches(needle: &str, specialist: &Specialist) -> bool {
    let needle = needle.to_lowercase();
    specialist.name.to_lowercase().contains(&needle)
        || specialist.handle.to_lowercase().contains(&needle)
        || specialist
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(&needle))
}

/// Narrow a specialist list to the records matching the criteria
///
/// Preserves input order.
pub fn filter_specialists(list: &[Specialist], criteria: &FilterCriteria) -> Vec<Specialist> {
    list.iter()
        .filter(|s| criteria.matches(s))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock;

    #[test]
    fn test_empty_criteria_is_identity() {
        let list = mock::specialists();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());

        let filtered = filter_specialists(&list, &criteria);
        assert_eq!(filtered, list);
    }

    #[test]
    fn test_search_matches_exactly_one_name() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            search: Some("Tahmina".to_string()),
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].name.contains("Tahmina"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            search: Some("tahmina".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_specialists(&list, &criteria).len(), 1);
    }

    #[test]
    fn test_search_covers_skills() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            search: Some("figma".to_string()),
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Kamran Safarov");
    }

    #[test]
    fn test_category_equality() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            category: Some(Category::Design),
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.category == Category::Design));
    }

    #[test]
    fn test_min_rating_threshold() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            min_rating: Some("4.6".parse().unwrap()),
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert!(filtered.iter().all(|s| s.rating.tenths() >= 46));
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_price_range() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            price_range: Some(PriceRange::new(400, 900).unwrap()),
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert!(filtered
            .iter()
            .all(|s| (400..=900).contains(&s.price.amount())));
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let err = PriceRange::new(900, 400).unwrap_err();
        assert_eq!(err, FilterError::InvertedRange { min: 900, max: 400 });
    }

    #[test]
    fn test_language_and_availability() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            languages: vec![Language::En],
            availability: Some(Availability::Free),
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert!(!filtered.is_empty());
        for s in &filtered {
            assert_eq!(s.availability, Availability::Free);
            assert!(s.languages.iter().any(|l| l.language == Language::En));
        }
    }

    #[test]
    fn test_only_new() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            only_new: true,
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.is_new));
    }

    #[test]
    fn test_criteria_compose_with_and() {
        let list = mock::specialists();
        // Design + new narrows to one record
        let criteria = FilterCriteria {
            category: Some(Category::Design),
            only_new: true,
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Kamran Safarov");
    }

    #[test]
    fn test_skill_requirement_all_present() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            skills: vec!["logo".to_string(), "illustration".to_string()],
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].name.contains("Tahmina"));
    }

    #[test]
    fn test_clearing_search_restores_category_set() {
        let list = mock::specialists();
        let mut criteria = FilterCriteria {
            category: Some(Category::Design),
            search: Some("Tahmina".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_specialists(&list, &criteria).len(), 1);

        criteria.search = None;
        assert_eq!(filter_specialists(&list, &criteria).len(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let list = mock::specialists();
        let criteria = FilterCriteria {
            availability: Some(Availability::Free),
            ..Default::default()
        };

        let filtered = filter_specialists(&list, &criteria);
        let ids: Vec<_> = filtered.iter().map(|s| s.id.0).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
