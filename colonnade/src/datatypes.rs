//! This module collects the type descriptors of columns and the values that can be offered to them.

/// Module for defining [ColumnType]
pub mod column_type;
pub use column_type::ColumnType;
/// Module for defining [CellValue]
pub mod cell_value;
pub use cell_value::CellValue;
