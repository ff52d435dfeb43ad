//! Workr: a terminal front end for a freelance-marketplace prototype
//!
//! Browse a catalog of specialists, filter it, favorite entries for the
//! session, and pick the role (customer or contractor) that gates the UI.
//! Catalog data comes from an in-memory mock source behind a simulated
//! network delay; the only persisted state is the selected role.

pub mod catalog;
pub mod cli;
pub mod core;
