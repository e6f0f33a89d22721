//! Data preparation for the congressional district dataset.
//!
//! Two transforms mutate the district JSON in place: merging Cook PVI
//! lean values from a CSV source, and dropping non-state territory
//! entries. A read-only audit reports on dataset composition.

pub mod district_id;
pub mod error;
pub mod filter;
pub mod lean;
pub mod merge;
pub mod pvi;
pub mod states;
pub mod types;
pub mod validate;

pub use district_id::district_id;
pub use error::{Error, Result};
pub use filter::{composition_note, is_territory, remove_territories};
pub use lean::{load_lean_csv, LeanTable, DEFAULT_PVI_COLUMN};
pub use merge::{merge_pvi, MergeReport};
pub use pvi::{numeric_to_pvi, pvi_to_numeric};
pub use states::{state_abbrev, AT_LARGE_STATES, TERRITORY_PREFIXES};
pub use types::{District, DistrictFile};
pub use validate::{audit, AuditReport};
