//! Shifting the rows of a [TextColumn].

use crate::{
    columnar::{column::Column, encoding::TextEncoding},
    error::Error,
};

use super::TextColumn;

impl TextColumn {
    /// Return a column named "<name> lag(n)" where row `i` holds the value of row `i - n`.
    ///
    /// For positive `n` the result starts with `n` missing rows,
    /// for negative `n` it ends with `|n|` missing rows.
    /// The result has `max(size, |n|)` rows,
    /// so shifting by more than the size of the column yields `|n|` missing rows.
    ///
    /// Returns [Error::CapacityExceeded] if that many rows cannot be allocated.
    pub fn lag(&self, n: isize) -> Result<TextColumn, Error> {
        let size = self.size();
        let shift = n.unsigned_abs();
        let rows = size.max(shift);

        let mut result = self.empty_copy();
        result.set_name(format!("{} lag({n})", self.name));
        result
            .encoding
            .try_reserve(rows)
            .map_err(|source| Error::CapacityExceeded {
                column: result.name.clone(),
                rows,
                source,
            })?;

        if n >= 0 {
            for _ in 0..shift {
                result.append_missing()?;
            }
            for value in self.iter().take(size.saturating_sub(shift)) {
                result.append(value)?;
            }
        } else {
            for value in self.iter().skip(shift) {
                result.append(value)?;
            }
            for _ in 0..shift {
                result.append_missing()?;
            }
        }

        log::debug!("column {}: shifted {size} rows by {n}", self.name);
        Ok(result)
    }

    /// Return a column named "<name> lead(n)" where row `i` holds the value of row `i + n`.
    ///
    /// This is [TextColumn::lag] with `-n`, only the name differs.
    pub fn lead(&self, n: isize) -> Result<TextColumn, Error> {
        let mut result = self.lag(n.saturating_neg())?;
        result.set_name(format!("{} lead({n})", self.name));
        Ok(result)
    }
}
