//! Version discovery layer
//!
//! This module turns the tags of a Git repository into the latest released
//! version of the project.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TagSource  │────▶│ TagMatcher  │────▶│  Selector   │
//! │ (ls-remote) │     │ (prefix re) │     │  (maximum)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Version   │
//!                                         │  (compare)  │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`value`]: Dotted-numeric `Version` type
//! - [`compare`]: Zero-padded component ordering
//! - [`matcher`]: `<prefix><version>` tag filtering
//! - [`selector`]: Latest version selection from literals or tags
//! - [`source`]: `TagSource` trait and `git ls-remote` output parsing
//! - [`sources`]: Concrete tag sources (git, in-memory)
//! - [`error`]: Error types for parsing, selection and transport

pub mod compare;
pub mod error;
pub mod matcher;
pub mod selector;
pub mod source;
pub mod sources;
pub mod value;

pub use compare::compare;
pub use error::{LatestError, MatchError, ParseError, SelectionError, TransportError};
pub use matcher::{TagMatcher, filter_and_strip};
pub use selector::{LatestSelector, latest_version, select_latest, select_latest_from_tags};
pub use source::{TagSource, parse_ls_remote};
pub use value::Version;
