//! Membership queries on [TextColumn]s and the bulk operations that consume their [Selection]s.

use hashbrown::HashSet;

use crate::{
    columnar::{
        boolean_column::BooleanColumn,
        column::Column,
        encoding::{EncodingEnum, TextEncoding},
    },
    datatypes::ColumnType,
    error::Error,
    selection::Selection,
};

use super::TextColumn;

impl TextColumn {
    /// Select all rows whose value satisfies `predicate`.
    pub fn eval<P>(&self, predicate: P) -> Selection
    where
        P: Fn(&str) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|&(_, value)| predicate(value))
            .map(|(index, _)| index)
            .collect()
    }

    /// Select all rows whose value is one of `values`.
    pub fn is_in<I, S>(&self, values: I) -> Selection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match &self.encoding {
            EncodingEnum::DictionaryEncoding(encoding) => {
                // Values that are not in the dictionary cannot occur in any row
                let dictionary = encoding.dictionary();
                let codes = values
                    .into_iter()
                    .filter_map(|value| dictionary.and_then(|dict| dict.fetch_id(value.as_ref())))
                    .collect::<HashSet<u32>>();

                encoding
                    .codes()
                    .iter()
                    .enumerate()
                    .filter(|(_, code)| codes.contains(*code))
                    .map(|(index, _)| index)
                    .collect()
            }
            EncodingEnum::PlainEncoding(_) => {
                let strings = values
                    .into_iter()
                    .map(|value| value.as_ref().to_string())
                    .collect::<HashSet<String>>();

                self.eval(|value| strings.contains(value))
            }
        }
    }

    /// Select all rows whose value is none of `values`.
    pub fn is_not_in<I, S>(&self, values: I) -> Selection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = Selection::with_range(0..self.size());
        result.and_not(&self.is_in(values));
        result
    }

    /// Select all rows holding `value`.
    pub fn is_equal_to(&self, value: &str) -> Selection {
        self.is_in([value])
    }

    /// Select all rows not holding `value`.
    pub fn is_not_equal_to(&self, value: &str) -> Selection {
        self.is_not_in([value])
    }

    /// Select all rows with a missing value.
    pub fn select_missing(&self) -> Selection {
        self.is_equal_to(Self::MISSING_VALUE)
    }

    /// Select all rows with a value that is not missing.
    pub fn select_not_missing(&self) -> Selection {
        self.is_not_equal_to(Self::MISSING_VALUE)
    }

    /// Select all rows whose value starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> Selection {
        self.eval(|value| value.starts_with(prefix))
    }

    /// Select all rows whose value ends with `suffix`.
    pub fn ends_with(&self, suffix: &str) -> Selection {
        self.eval(|value| value.ends_with(suffix))
    }

    /// Select all rows whose value contains `pattern`.
    pub fn contains_string(&self, pattern: &str) -> Selection {
        self.eval(|value| value.contains(pattern))
    }

    /// Return true if some row holds `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|candidate| candidate == value)
    }

    /// Return the first row holding `value`.
    pub fn first_index_of(&self, value: &str) -> Option<usize> {
        self.iter().position(|candidate| candidate == value)
    }

    /// Return the number of rows holding `value`.
    pub fn count_occurrences(&self, value: &str) -> usize {
        self.is_equal_to(value).len()
    }

    /// Return the set of distinct values, including the missing value if present.
    pub fn as_set(&self) -> HashSet<&str> {
        self.iter().collect()
    }

    /// Return the number of distinct values.
    pub fn count_unique(&self) -> usize {
        self.as_set().len()
    }

    /// Return a column named "<name> Unique values" holding every distinct value once.
    /// The order of the rows is unspecified.
    pub fn unique(&self) -> Result<TextColumn, Error> {
        let mut result = self.empty_copy();
        result.set_name(format!("{} Unique values", self.name()));
        result.add_all(self.as_set())?;
        Ok(result)
    }

    /// Overwrite every selected row with `value`, in ascending row order.
    /// Passing `None` stores the missing value.
    ///
    /// This is not atomic: if a selected row does not exist, [Error::IndexOutOfRange]
    /// is returned and all rows before it have already been overwritten.
    pub fn set_selected<'v>(
        &mut self,
        selection: &Selection,
        value: impl Into<Option<&'v str>>,
    ) -> Result<&mut Self, Error> {
        let value = value.into();
        log::trace!(
            "column {}: setting {} selected rows to {value:?}",
            self.name,
            selection.len()
        );

        for index in selection.iter() {
            self.set(index, value)?;
        }
        Ok(self)
    }

    /// Return a new column holding the given rows, in the given order.
    pub fn subset<I>(&self, rows: I) -> Result<TextColumn, Error>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut result = self.empty_copy();
        for index in rows {
            result.append(self.get(index)?)?;
        }
        Ok(result)
    }

    /// Return a new column holding only the selected rows.
    pub fn where_rows(&self, selection: &Selection) -> Result<TextColumn, Error> {
        self.subset(selection.iter())
    }

    /// Return a new column holding all rows that are not missing, in their original order.
    pub fn remove_missing(&self) -> Result<TextColumn, Error> {
        let mut result = self.empty_copy();
        for value in self.iter().filter(|value| !Self::value_is_missing(value)) {
            result.append(value)?;
        }

        log::debug!(
            "column {}: removed {} missing rows",
            self.name,
            self.size() - result.size()
        );
        Ok(result)
    }

    /// One-hot encode the column: one [BooleanColumn] per distinct value,
    /// named after that value and true exactly in the rows holding it.
    ///
    /// Only categorical ([ColumnType::String]) columns support this;
    /// free-form text fails with [Error::UnsupportedOperation].
    pub fn get_dummies(&self) -> Result<Vec<BooleanColumn>, Error> {
        let EncodingEnum::DictionaryEncoding(encoding) = &self.encoding else {
            return Err(Error::UnsupportedOperation {
                operation: "get_dummies",
                reason: format!(
                    "column \"{}\" of type {} holds free-form text, which would produce an excessive number of columns",
                    self.name,
                    ColumnType::Text
                ),
            });
        };

        let size = self.size();
        let mut rows_per_code = Vec::<Selection>::new();
        for (index, &code) in encoding.codes().iter().enumerate() {
            let code = code as usize;
            if code >= rows_per_code.len() {
                rows_per_code.resize_with(code + 1, Selection::new);
            }
            rows_per_code[code].add(index);
        }

        let Some(dictionary) = encoding.dictionary() else {
            return Ok(Vec::new());
        };

        Ok(dictionary
            .iter()
            .filter_map(|(code, value)| {
                let rows = rows_per_code.get(code as usize)?;
                (!rows.is_empty()).then(|| BooleanColumn::from_selection(value, rows, size))
            })
            .collect())
    }
}
