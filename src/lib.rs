//! Find the latest released version of a project from its Git tags.
//!
//! ```no_run
//! use latest_tag::version::select_latest_from_tags;
//! use latest_tag::version::sources::GitTagSource;
//!
//! let source = GitTagSource::default();
//! let latest =
//!     select_latest_from_tags(&source, "https://go.googlesource.com/go", "refs/tags/go")?;
//! println!("{}", latest.unwrap_or_default());
//! # Ok::<(), latest_tag::version::LatestError>(())
//! ```

pub mod config;
pub mod logging;
pub mod version;
