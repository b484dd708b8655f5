//! This module defines [TextColumn].

mod ordering;
mod queries;
mod window;

use std::{
    collections::hash_map::DefaultHasher,
    fmt::Display,
    hash::{Hash, Hasher},
    mem::size_of,
};

use crate::{
    bytesized::ByteSized,
    columnar::{
        column::Column,
        encoding::{Encoding, EncodingEnum, TextEncoding, TextIter},
    },
    datatypes::{CellValue, ColumnType},
    dictionary::DictionaryMap,
    error::Error,
    parser::{ColumnParser, TextParser},
};

/// A column of strings.
///
/// Values are stored either plainly or in a dictionary, depending on the
/// [Encoding] chosen at construction. Both encodings behave the same;
/// plain columns are declared as [ColumnType::Text] and dictionary columns
/// as [ColumnType::String].
///
/// Missing values are represented by [TextColumn::MISSING_VALUE].
#[derive(Debug)]
pub struct TextColumn {
    name: String,
    encoding: EncodingEnum,
    parser: TextParser,
}

impl TextColumn {
    /// The value that marks a row as missing.
    pub const MISSING_VALUE: &'static str = "";

    /// Returns true if `value` is the missing value.
    pub fn value_is_missing(value: &str) -> bool {
        value == Self::MISSING_VALUE
    }

    /// Create an empty, plainly stored column.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_encoding(name, Encoding::Plain)
    }

    /// Create an empty, dictionary-encoded column.
    pub fn categorical(name: impl Into<String>) -> Self {
        Self::with_encoding(name, Encoding::Dictionary)
    }

    /// Create an empty column with the given [Encoding].
    pub fn with_encoding(name: impl Into<String>, encoding: Encoding) -> Self {
        Self {
            name: name.into(),
            encoding: encoding.create(),
            parser: TextParser::default(),
        }
    }

    /// Create a plainly stored column with `size` missing rows.
    pub fn with_size(name: impl Into<String>, size: usize) -> Result<Self, Error> {
        Self::with_size_and_encoding(name, size, Encoding::Plain)
    }

    /// Create a column with the given [Encoding] and `size` missing rows.
    pub fn with_size_and_encoding(
        name: impl Into<String>,
        size: usize,
        encoding: Encoding,
    ) -> Result<Self, Error> {
        let mut column = Self::with_encoding(name, encoding);
        column.encoding.reserve(size);
        for _ in 0..size {
            column.append_missing()?;
        }
        Ok(column)
    }

    /// Create a plainly stored column holding the given values.
    pub fn from_values<I, S>(name: impl Into<String>, values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_values_with_encoding(name, values, Encoding::Plain)
    }

    /// Create a column with the given [Encoding] holding the given values.
    pub fn from_values_with_encoding<I, S>(
        name: impl Into<String>,
        values: I,
        encoding: Encoding,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut column = Self::with_encoding(name, encoding);
        column.add_all(values)?;
        Ok(column)
    }

    /// Rename the column.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Return the [Encoding] of this column.
    pub fn encoding(&self) -> Encoding {
        self.encoding.kind()
    }

    /// Return the dictionary backing this column.
    ///
    /// Returns `None` for plainly stored columns.
    pub fn dictionary(&self) -> Option<&DictionaryMap> {
        self.encoding.dictionary()
    }

    /// Return the parser used by [TextColumn::append_cell].
    pub fn parser(&self) -> &TextParser {
        &self.parser
    }

    /// Replace the parser used by [TextColumn::append_cell].
    pub fn set_parser(&mut self, parser: TextParser) -> &mut Self {
        self.parser = parser;
        self
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            column: self.name.clone(),
            index,
            size: self.encoding.len(),
        }
    }

    fn overflow(&self) -> Error {
        Error::DictionaryOverflow {
            column: self.name.clone(),
        }
    }

    /// Return the value at the given row.
    ///
    /// Returns [Error::IndexOutOfRange] if the row does not exist.
    pub fn get(&self, index: usize) -> Result<&str, Error> {
        self.encoding
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Overwrite the value at the given row.
    /// Passing `None` stores the missing value.
    ///
    /// Returns [Error::IndexOutOfRange] if the row does not exist.
    pub fn set<'v>(
        &mut self,
        index: usize,
        value: impl Into<Option<&'v str>>,
    ) -> Result<&mut Self, Error> {
        if index >= self.encoding.len() {
            return Err(self.out_of_range(index));
        }

        let value = value.into().unwrap_or(Self::MISSING_VALUE);
        self.encoding
            .set(index, value)
            .map_err(|_| self.overflow())?;
        Ok(self)
    }

    /// Mark the value at the given row as missing.
    pub fn set_missing(&mut self, index: usize) -> Result<&mut Self, Error> {
        self.set(index, Self::MISSING_VALUE)
    }

    /// Append a value as a new row.
    /// Passing `None` appends the missing value.
    pub fn append<'v>(&mut self, value: impl Into<Option<&'v str>>) -> Result<&mut Self, Error> {
        match value.into() {
            Some(value) => {
                self.encoding.push(value).map_err(|_| self.overflow())?;
                Ok(self)
            }
            None => self.append_missing(),
        }
    }

    /// Append a missing value as a new row.
    pub fn append_missing(&mut self) -> Result<&mut Self, Error> {
        self.append(Self::MISSING_VALUE)
    }

    /// Append a value whose type is only known at runtime.
    ///
    /// `None` appends the missing value. Values that are not text are rejected
    /// with [Error::TypeMismatch] and the column is left unchanged.
    pub fn append_obj(&mut self, value: Option<CellValue>) -> Result<&mut Self, Error> {
        match value {
            None => self.append_missing(),
            Some(CellValue::Text(value)) => self.append(value.as_str()),
            Some(other) => Err(Error::TypeMismatch {
                column: self.name.clone(),
                expected: self.column_type(),
                actual: other.value_type(),
            }),
        }
    }

    /// Parse a raw string with this column's parser and append the result.
    pub fn append_cell(&mut self, raw: &str) -> Result<&mut Self, Error> {
        let value = self.parser.parse(raw)?;
        self.append(value.as_str())
    }

    /// Parse a raw string with the given parser and append the string form of the result.
    pub fn append_cell_with<P>(&mut self, raw: &str, parser: &P) -> Result<&mut Self, Error>
    where
        P: ColumnParser,
        P::Value: Display,
    {
        let value = parser.parse(raw)?;
        self.append(value.to_string().as_str())
    }

    /// Append every row of another column.
    ///
    /// Only columns of type [ColumnType::Text] or [ColumnType::String] are accepted.
    /// Other columns are rejected with [Error::ColumnTypeMismatch] before anything is appended.
    pub fn append_column(&mut self, other: &dyn Column) -> Result<&mut Self, Error> {
        if !other.column_type().is_string_compatible() {
            return Err(Error::ColumnTypeMismatch {
                column: self.name.clone(),
                column_type: self.column_type(),
                other: other.name().to_string(),
                other_type: other.column_type(),
            });
        }

        let size = other.size();
        self.encoding.reserve(size);
        for index in 0..size {
            let value = other.get_string(index)?;
            self.append(value.as_str())?;
        }
        Ok(self)
    }

    /// Append all given values in order.
    pub fn add_all<I, S>(&mut self, values: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.append(value.as_ref())?;
        }
        Ok(self)
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.encoding.clear();
    }

    /// Create an empty column with the same name, encoding and parser.
    pub fn empty_copy(&self) -> TextColumn {
        TextColumn {
            name: self.name.clone(),
            encoding: self.encoding.kind().create(),
            parser: self.parser.clone(),
        }
    }

    /// Create a column with the same name, encoding and parser, holding `size` missing rows.
    pub fn empty_copy_sized(&self, size: usize) -> Result<TextColumn, Error> {
        let mut copy = self.empty_copy();
        copy.encoding.reserve(size);
        for _ in 0..size {
            copy.append_missing()?;
        }
        Ok(copy)
    }

    /// Create an independent column with the same name, encoding, parser and values.
    pub fn copy(&self) -> Result<TextColumn, Error> {
        let mut copy = self.empty_copy_sized(self.size())?;
        for (index, value) in self.iter().enumerate() {
            copy.set(index, value)?;
        }
        Ok(copy)
    }

    fn convert(&self, encoding: Encoding) -> Result<TextColumn, Error> {
        let mut converted = TextColumn::with_encoding(self.name.clone(), encoding);
        converted.parser = self.parser.clone();
        converted.encoding.reserve(self.size());
        converted.add_all(self.iter())?;
        Ok(converted)
    }

    /// Return a dictionary-encoded copy of this column.
    pub fn as_string_column(&self) -> Result<TextColumn, Error> {
        self.convert(Encoding::Dictionary)
    }

    /// Return a plainly stored copy of this column.
    pub fn as_text_column(&self) -> Result<TextColumn, Error> {
        self.convert(Encoding::Plain)
    }

    /// Iterate over all values in row order.
    pub fn iter(&self) -> TextIter<'_> {
        self.encoding.iter()
    }

    /// Return all values as a new vector.
    pub fn as_list(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Return all values as a new boxed slice.
    pub fn as_object_array(&self) -> Box<[String]> {
        self.as_list().into_boxed_slice()
    }

    /// Return the bytes of the value at the given row.
    pub fn as_bytes(&self, index: usize) -> Result<Vec<u8>, Error> {
        Ok(self.get(index)?.as_bytes().to_vec())
    }

    /// Return a hash of the value at the given row.
    /// Equal values have equal hashes, regardless of the encoding.
    pub fn value_hash(&self, index: usize) -> Result<u64, Error> {
        let mut hasher = DefaultHasher::new();
        self.get(index)?.hash(&mut hasher);
        Ok(hasher.finish())
    }

    /// Return a numeric stand-in for the value at the given row.
    ///
    /// The number is derived from [TextColumn::value_hash] and carries no meaning
    /// beyond grouping: equal values map to equal numbers.
    pub fn get_double(&self, index: usize) -> Result<f64, Error> {
        Ok(self.value_hash(index)? as f64)
    }

    /// Return the numeric stand-in of every row, see [TextColumn::get_double].
    pub fn as_double_array(&self) -> Vec<f64> {
        self.iter()
            .map(|value| {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish() as f64
            })
            .collect()
    }

    /// Return true if the two rows hold equal values.
    pub fn rows_equal(&self, first: usize, second: usize) -> Result<bool, Error> {
        Ok(self.get(first)? == self.get(second)?)
    }
}

impl Column for TextColumn {
    fn name(&self) -> &str {
        &self.name
    }

    fn column_type(&self) -> ColumnType {
        self.encoding.kind().column_type()
    }

    fn size(&self) -> usize {
        self.encoding.len()
    }

    fn get_string(&self, index: usize) -> Result<String, Error> {
        self.get(index).map(str::to_string)
    }

    fn is_missing(&self, index: usize) -> Result<bool, Error> {
        self.get(index).map(Self::value_is_missing)
    }

    fn count_missing(&self) -> usize {
        self.iter()
            .filter(|value| Self::value_is_missing(value))
            .count()
    }
}

impl<'a> IntoIterator for &'a TextColumn {
    type Item = &'a str;
    type IntoIter = TextIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ByteSized for TextColumn {
    fn size_bytes(&self) -> u64 {
        size_of::<Self>() as u64 + self.name.capacity() as u64 + self.encoding.size_bytes()
    }
}
