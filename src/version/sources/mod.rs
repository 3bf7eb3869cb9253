//! Tag source implementations

pub mod fixed;
pub mod git;

pub use fixed::FixedTagSource;
pub use git::GitTagSource;
