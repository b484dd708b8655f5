//! This module collects data structures and operations on individual columns.

pub mod boolean_column;
pub mod column;
pub mod encoding;
pub mod text_column;
