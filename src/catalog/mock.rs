//! The hardcoded specialist list behind the mock source
//!
//! Six records, matching what the prototype seeded its catalog with. They
//! are the only data the application ever sees.

use crate::catalog::specialist::{
    Availability, Category, Language, LanguageSkill, Price, Rating, Specialist, SpecialistId,
};

fn lang(language: Language, level: u8) -> LanguageSkill {
    LanguageSkill { language, level }
}

/// The six seeded specialist records
pub fn specialists() -> Vec<Specialist> {
    vec![
        Specialist {
            id: SpecialistId(1),
            name: "Tahmina Aliyeva".to_string(),
            handle: "tahmina.design".to_string(),
            category: Category::Design,
            skills: vec![
                "Logo design".to_string(),
                "Brand identity".to_string(),
                "Illustration".to_string(),
            ],
            rating: Rating::clamped(48),
            review_count: 127,
            availability: Availability::Free,
            price: Price::Starting(800),
            languages: vec![lang(Language::Az, 5), lang(Language::Ru, 4)],
            experience_years: 6,
            is_new: false,
            avatar: Some("avatars/tahmina.png".to_string()),
        },
        Specialist {
            id: SpecialistId(2),
            name: "Rashad Mammadov".to_string(),
            handle: "rashad.dev".to_string(),
            category: Category::Development,
            skills: vec![
                "Web development".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
            ],
            rating: Rating::clamped(49),
            review_count: 89,
            availability: Availability::Busy,
            price: Price::Starting(1200),
            languages: vec![
                lang(Language::Az, 5),
                lang(Language::En, 4),
                lang(Language::Tr, 3),
            ],
            experience_years: 8,
            is_new: false,
            avatar: Some("avatars/rashad.png".to_string()),
        },
        Specialist {
            id: SpecialistId(3),
            name: "Nigar Hasanova".to_string(),
            handle: "nigar.writes".to_string(),
            category: Category::Writing,
            skills: vec![
                "Copywriting".to_string(),
                "Content strategy".to_string(),
            ],
            rating: Rating::clamped(46),
            review_count: 54,
            availability: Availability::Free,
            price: Price::Fixed(300),
            languages: vec![
                lang(Language::Az, 5),
                lang(Language::Ru, 5),
                lang(Language::En, 3),
            ],
            experience_years: 4,
            is_new: false,
            avatar: Some("avatars/nigar.png".to_string()),
        },
        Specialist {
            id: SpecialistId(4),
            name: "Elvin Guliyev".to_string(),
            handle: "elvin.marketing".to_string(),
            category: Category::Marketing,
            skills: vec![
                "SMM".to_string(),
                "Targeted ads".to_string(),
                "SEO".to_string(),
            ],
            rating: Rating::clamped(43),
            review_count: 31,
            availability: Availability::Free,
            price: Price::Starting(500),
            languages: vec![lang(Language::Az, 5), lang(Language::Ru, 4)],
            experience_years: 3,
            is_new: true,
            avatar: Some("avatars/elvin.png".to_string()),
        },
        Specialist {
            id: SpecialistId(5),
            name: "Leyla Ismayilova".to_string(),
            handle: "leyla.photo".to_string(),
            category: Category::Photography,
            skills: vec![
                "Wedding photography".to_string(),
                "Portraits".to_string(),
                "Photo editing".to_string(),
            ],
            rating: Rating::clamped(50),
            review_count: 203,
            availability: Availability::Busy,
            price: Price::Starting(900),
            languages: vec![lang(Language::Az, 5), lang(Language::En, 2)],
            experience_years: 10,
            is_new: false,
            avatar: Some("avatars/leyla.png".to_string()),
        },
        Specialist {
            id: SpecialistId(6),
            name: "Kamran Safarov".to_string(),
            handle: "kamran.design".to_string(),
            category: Category::Design,
            skills: vec![
                "UI/UX design".to_string(),
                "Figma".to_string(),
                "Prototyping".to_string(),
            ],
            rating: Rating::clamped(41),
            review_count: 12,
            availability: Availability::Free,
            price: Price::Fixed(450),
            languages: vec![
                lang(Language::Az, 5),
                lang(Language::En, 4),
                lang(Language::De, 2),
            ],
            experience_years: 2,
            is_new: true,
            avatar: Some("avatars/kamran.png".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_records_with_unique_ids() {
        let list = specialists();
        assert_eq!(list.len(), 6);

        let mut ids: Vec<_> = list.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_exactly_one_tahmina() {
        let list = specialists();
        let matches = list.iter().filter(|s| s.name.contains("Tahmina")).count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_language_levels_are_in_range() {
        for s in specialists() {
            for skill in &s.languages {
                assert!((1..=5).contains(&skill.level), "{}: {}", s.name, skill);
            }
        }
    }
}
