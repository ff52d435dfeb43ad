//! Specialist records and the structured field types behind them
//!
//! The original prototype carried ratings, prices, availability, languages
//! and experience as free-text strings ("4.8", "800$+", "AZ - 5, RU - 4").
//! Everything here is normalized into real types at the boundary; the
//! `FromStr` impls accept the legacy text forms and reject anything else.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors from normalizing the legacy free-text field forms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("rating '{value}' is not a number between 0 and 5")]
    Rating { value: String },

    #[error("price '{value}' is not of the form '500$' or '800$+'")]
    Price { value: String },

    #[error("unknown availability '{value}' (expected 'free' or 'busy')")]
    Availability { value: String },

    #[error("unknown language code '{value}'")]
    Language { value: String },

    #[error("language level {level} is out of range (1-5)")]
    LanguageLevel { level: u32 },

    #[error("'{value}' is not a 'CODE - LEVEL' language entry")]
    LanguageEntry { value: String },

    #[error("unknown category '{value}'")]
    Category { value: String },
}

/// Identifier of a specialist, unique within the in-memory list
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpecialistId(pub u32);

impl std::fmt::Display for SpecialistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strictly unsigned digits; the integer `from_str` impls also accept a
/// leading sign, which the legacy forms never carry
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Star rating in tenths: 0..=50 covers 0.0 through 5.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    const MAX_TENTHS: u8 = 50;

    /// Build from tenths of a star, rejecting out-of-range values
    pub fn from_tenths(tenths: u8) -> Result<Self, ParseError> {
        if tenths > Self::MAX_TENTHS {
            return Err(ParseError::Rating {
                value: format!("{}.{}", tenths / 10, tenths % 10),
            });
        }
        Ok(Self(tenths))
    }

    /// Build from tenths, clamping to the valid range (slider semantics)
    pub const fn clamped(tenths: u8) -> Self {
        if tenths > Self::MAX_TENTHS {
            Self(Self::MAX_TENTHS)
        } else {
            Self(tenths)
        }
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn stars(&self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl FromStr for Rating {
    type Err = ParseError;

    /// Parse the one-decimal form, e.g. "4.8" or "5"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Rating {
            value: s.to_string(),
        };
        let trimmed = s.trim();
        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, "0"),
        };
        if !is_digits(whole) || !is_digits(frac) {
            return Err(err());
        }
        let whole: u8 = whole.parse().map_err(|_| err())?;
        if whole > 5 || frac.len() != 1 {
            return Err(err());
        }
        let frac: u8 = frac.parse().map_err(|_| err())?;
        Self::from_tenths(whole * 10 + frac).map_err(|_| err())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(f64::from(self.0) / 10.0)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stars = f64::deserialize(deserializer)?;
        let tenths = (stars * 10.0).round();
        if !(0.0..=50.0).contains(&tenths) {
            return Err(serde::de::Error::custom(format!(
                "rating {stars} is out of range (0-5)"
            )));
        }
        Ok(Self(tenths as u8))
    }
}

/// Quoted price, replacing the legacy "800$+" strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    /// Exact quote, e.g. "500$"
    Fixed(u32),
    /// Open-ended minimum, e.g. "800$+"
    Starting(u32),
}

impl Price {
    /// The comparable amount (the minimum, for open-ended prices)
    pub fn amount(&self) -> u32 {
        match self {
            Price::Fixed(n) | Price::Starting(n) => *n,
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Fixed(n) => write!(f, "{n}$"),
            Price::Starting(n) => write!(f, "{n}$+"),
        }
    }
}

impl FromStr for Price {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Price {
            value: s.to_string(),
        };
        let trimmed = s.trim();
        let (body, open_ended) = match trimmed.strip_suffix('+') {
            Some(body) => (body, true),
            None => (trimmed, false),
        };
        let digits = body.strip_suffix('$').ok_or_else(err)?;
        if !is_digits(digits) {
            return Err(err());
        }
        let amount: u32 = digits.parse().map_err(|_| err())?;
        Ok(if open_ended {
            Price::Starting(amount)
        } else {
            Price::Fixed(amount)
        })
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Availability, replacing the ad hoc "Free"/"Busy" strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Free,
    Busy,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Free => write!(f, "free"),
            Availability::Busy => write!(f, "busy"),
        }
    }
}

impl FromStr for Availability {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Availability::Free),
            "busy" => Ok(Availability::Busy),
            _ => Err(ParseError::Availability {
                value: s.to_string(),
            }),
        }
    }
}

/// Language codes seen in the prototype's profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Az,
    Ru,
    En,
    Tr,
    De,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Az => write!(f, "AZ"),
            Language::Ru => write!(f, "RU"),
            Language::En => write!(f, "EN"),
            Language::Tr => write!(f, "TR"),
            Language::De => write!(f, "DE"),
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AZ" => Ok(Language::Az),
            "RU" => Ok(Language::Ru),
            "EN" => Ok(Language::En),
            "TR" => Ok(Language::Tr),
            "DE" => Ok(Language::De),
            _ => Err(ParseError::Language {
                value: s.to_string(),
            }),
        }
    }
}

/// A language plus a self-assessed 1-5 proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: Language,
    pub level: u8,
}

impl LanguageSkill {
    /// Build a language skill, rejecting levels outside 1..=5
    pub fn new(language: Language, level: u8) -> Result<Self, ParseError> {
        if !(1..=5).contains(&level) {
            return Err(ParseError::LanguageLevel {
                level: u32::from(level),
            });
        }
        Ok(Self { language, level })
    }
}

impl std::fmt::Display for LanguageSkill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.language, self.level)
    }
}

impl FromStr for LanguageSkill {
    type Err = ParseError;

    /// Parse one legacy entry, e.g. "AZ - 5"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, level) = s.split_once('-').ok_or_else(|| ParseError::LanguageEntry {
            value: s.to_string(),
        })?;
        let language = code.parse()?;
        let level = level.trim();
        if !is_digits(level) {
            return Err(ParseError::LanguageEntry {
                value: s.to_string(),
            });
        }
        let level: u32 = level.parse().map_err(|_| ParseError::LanguageEntry {
            value: s.to_string(),
        })?;
        if !(1..=5).contains(&level) {
            return Err(ParseError::LanguageLevel { level });
        }
        Ok(Self {
            language,
            level: level as u8,
        })
    }
}

/// Parse the legacy comma-separated form, e.g. "AZ - 5, RU - 4"
pub fn parse_language_list(s: &str) -> Result<Vec<LanguageSkill>, ParseError> {
    s.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse)
        .collect()
}

/// Service category a specialist belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Design,
    Development,
    Marketing,
    Writing,
    Photography,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Design => write!(f, "design"),
            Category::Development => write!(f, "development"),
            Category::Marketing => write!(f, "marketing"),
            Category::Writing => write!(f, "writing"),
            Category::Photography => write!(f, "photography"),
        }
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "design" => Ok(Category::Design),
            "development" => Ok(Category::Development),
            "marketing" => Ok(Category::Marketing),
            "writing" => Ok(Category::Writing),
            "photography" => Ok(Category::Photography),
            _ => Err(ParseError::Category {
                value: s.to_string(),
            }),
        }
    }
}

/// A service-provider entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    /// Unique identifier within the in-memory list
    pub id: SpecialistId,

    /// Display name
    pub name: String,

    /// Handle/username
    pub handle: String,

    /// Service category
    pub category: Category,

    /// Offered skills (structured, replacing the comma-separated string)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    /// Star rating, one decimal
    pub rating: Rating,

    /// Number of reviews behind the rating
    pub review_count: u32,

    /// Current availability
    pub availability: Availability,

    /// Quoted price
    pub price: Price,

    /// Spoken languages with proficiency levels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageSkill>,

    /// Years of experience
    pub experience_years: u8,

    /// Recently joined the platform
    #[serde(default)]
    pub is_new: bool,

    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
