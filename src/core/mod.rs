//! Core module - shared application state and fundamental types

pub mod config;
pub mod favorites;
pub mod lead;
pub mod role;
pub mod route;

pub use config::{Config, ConfigError};
pub use favorites::{FavoriteAction, Favorites};
pub use lead::{Lead, LeadError, LeadStage};
pub use role::{FileStorage, MemoryStorage, RoleAction, RoleError, RoleStorage, RoleStore, UserType};
pub use route::Route;
