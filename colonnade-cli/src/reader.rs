//! Loading a single field of a delimited file into a [TextColumn]

use std::io::Read;

use colonnade::{parser::TextParser, Column, TextColumn};
use csv::{Reader, ReaderBuilder};

use crate::{cli::InputArgs, error::CliError};

/// Wraps an arbitrary [`Reader`][Read] into a [`Reader`][csv::Reader] for delimited input
fn reader<R>(rdr: R, args: &InputArgs) -> Result<Reader<R>, CliError>
where
    R: Read,
{
    let delimiter =
        u8::try_from(args.delimiter).map_err(|_| CliError::InvalidDelimiter(args.delimiter))?;

    Ok(ReaderBuilder::new()
        .delimiter(delimiter)
        .escape(Some(b'\\'))
        .has_headers(!args.no_headers)
        .double_quote(true)
        .flexible(true)
        .from_reader(rdr))
}

/// Find the index and the name of the requested field
fn resolve_field<R>(reader: &mut Reader<R>, args: &InputArgs) -> Result<(usize, String), CliError>
where
    R: Read,
{
    let not_found = || CliError::ColumnNotFound {
        column: args.column.clone(),
        filename: args.file.display().to_string(),
    };

    if args.no_headers {
        let index = args.column.parse::<usize>().map_err(|_| not_found())?;
        return Ok((index, format!("column {index}")));
    }

    let headers = reader.headers()?;
    if let Some(index) = headers.iter().position(|header| header == args.column) {
        return Ok((index, args.column.clone()));
    }

    match args.column.parse::<usize>() {
        Ok(index) => headers
            .get(index)
            .map(|header| (index, header.to_string()))
            .ok_or_else(not_found),
        Err(_) => Err(not_found()),
    }
}

/// Reads the requested field of every record through a [TextParser] into a new column
pub(crate) fn read_column_from<R>(rdr: R, args: &InputArgs) -> Result<TextColumn, CliError>
where
    R: Read,
{
    let mut reader = reader(rdr, args)?;
    let (index, name) = resolve_field(&mut reader, args)?;

    let mut column = TextColumn::with_encoding(name, args.encoding.into());
    column.set_parser(TextParser::new(args.parser_options()));

    for record in reader.records() {
        let record = record?;
        match record.get(index) {
            Some(field) => {
                column.append_cell(field)?;
            }
            None => log::info!("Ignoring record {record:?}, it has no field {index}"),
        }
    }

    log::info!("Read {} rows into column `{}`", column.size(), column.name());
    Ok(column)
}

/// Reads the column described by `args` from its file
pub(crate) fn read_column(args: &InputArgs) -> Result<TextColumn, CliError> {
    let file = std::fs::File::open(&args.file)?;
    read_column_from(file, args)
}
