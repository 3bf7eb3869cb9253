//! Shared test utilities

#![allow(dead_code)]

pub mod git;
pub mod source;
