//! Catalog module - specialist records, the mock data source, and filtering

pub mod filter;
pub mod mock;
pub mod source;
pub mod specialist;

pub use filter::{filter_specialists, FilterCriteria, FilterError, PriceRange};
pub use source::{CatalogLoader, FetchError, FetchState, MockSource, SpecialistSource};
pub use specialist::{
    Availability, Category, Language, LanguageSkill, ParseError, Price, Rating, Specialist,
    SpecialistId,
};
