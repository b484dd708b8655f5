//! This crate defines typed, in-memory columns of text values.
//! A column stores its values either as a plain vector or dictionary-compressed,
//! while exposing the same behavior for missing values, selection-driven
//! bulk updates, membership queries, windowing and sorting.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod bytesized;
pub mod columnar;
pub mod datatypes;
pub mod dictionary;
pub mod error;
pub mod parser;
pub mod permutator;
pub mod selection;
pub mod tabular;

pub use columnar::{
    boolean_column::BooleanColumn, column::Column, encoding::Encoding, text_column::TextColumn,
};
pub use selection::Selection;
