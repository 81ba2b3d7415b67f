// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Problem instance loader for the truck loading domain.
//!
//! This module turns the CSV dataset pair the surrounding tooling produces
//! into a validated `Model`. A dataset consists of two files:
//!
//! * the **truck file**: one header line, then a single record
//!   `capacity,numItems`;
//! * the **items file**: one header line, then one record `id,weight,profit`
//!   per item.
//!
//! The `InstanceLoader` emphasizes clarity and robustness. Records are read
//! line by line with blank lines skipped and fields trimmed, and every token
//! that fails to parse is reported with the offending text and the target
//! type name. The declared item count in the truck file is checked against
//! the number of item records actually read; the check can be relaxed for
//! datasets whose counter is known to be unreliable. Range validation
//! (positive weights, non-negative profits, unique ids) is delegated to
//! `ModelBuilder` and surfaces as a `Validation` error, so solvers never see
//! a malformed instance.
//!
//! The parser accepts any `BufRead`, file path, or string slice, making it
//! convenient to integrate with benchmarks, tests, and tooling.

use crate::model::{Model, ModelBuilder, ModelBuildError};
use num_traits::{PrimInt, Signed};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// An I/O error occurred while reading one of the input streams.
    Io(std::io::Error),
    /// An input stream ended before the expected record (e.g., a truck file
    /// with a header but no data line).
    UnexpectedEof,
    /// A field could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The truck file declares a different item count than the items file
    /// provides.
    DeclaredCountMismatch {
        /// The count announced by the truck file.
        declared: usize,
        /// The number of item records actually read.
        actual: usize,
    },
    /// The parsed instance failed model validation.
    Validation(ModelBuildError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::DeclaredCountMismatch { declared, actual } => write!(
                f,
                "Truck file declares {} items but the items file contains {}",
                declared, actual
            ),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for InstanceLoadError {}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for InstanceLoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ModelBuildError> for InstanceLoadError {
    fn from(e: ModelBuildError) -> Self {
        Self::Validation(e)
    }
}

/// A configurable loader for truck loading instances.
///
/// # Configuration
///
/// * `enforce_declared_count`: If true (the default), the item count declared
///   in the truck file must match the number of item records read; a mismatch
///   is reported as an error instead of being silently ignored.
///
/// # Examples
///
/// ```rust
/// use stevedore_model::loading::InstanceLoader;
/// use stevedore_model::model::Model;
///
/// let truck = "Capacity,Pallets\n10,2\n";
/// let items = "Pallet,Weight,Profit\n1,5,10\n2,4,40\n";
///
/// let loader = InstanceLoader::new();
/// let model: Model<i64> = loader.from_strs(truck, items).expect("loads");
/// assert_eq!(model.capacity(), 10);
/// assert_eq!(model.num_items(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader {
    enforce_declared_count: bool,
}

impl Default for InstanceLoader {
    fn default() -> Self {
        Self {
            enforce_declared_count: true,
        }
    }
}

impl InstanceLoader {
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether a mismatch between the declared and the actual item
    /// count is an error.
    #[inline]
    pub fn enforce_declared_count(mut self, yes: bool) -> Self {
        self.enforce_declared_count = yes;
        self
    }

    /// Loads an instance from two types implementing `BufRead`.
    pub fn from_bufread<T, RT, RI>(
        &self,
        truck: RT,
        items: RI,
    ) -> Result<Model<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
        RT: BufRead,
        RI: BufRead,
    {
        let (capacity, declared) = read_truck_record(truck)?;

        let mut builder = ModelBuilder::new(capacity);
        let mut records = RecordReader::new(items);

        // Items file: header line first, data records after.
        records.next_record()?.ok_or(InstanceLoadError::UnexpectedEof)?;

        while let Some(line) = records.next_record()? {
            let mut fields = Fields::new(&line);
            let id = fields.next_parsed::<u32>()?;
            let weight = fields.next_parsed::<T>()?;
            let profit = fields.next_parsed::<T>()?;
            builder.add_item(id, weight, profit);
        }

        if self.enforce_declared_count && builder.num_items() != declared {
            return Err(InstanceLoadError::DeclaredCountMismatch {
                declared,
                actual: builder.num_items(),
            });
        }

        Ok(builder.build()?)
    }

    /// Loads an instance from two file paths.
    #[inline]
    pub fn from_paths<T, PT, PI>(&self, truck: PT, items: PI) -> Result<Model<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
        PT: AsRef<Path>,
        PI: AsRef<Path>,
    {
        let truck_file = File::open(truck)?;
        let items_file = File::open(items)?;
        self.from_bufread(BufReader::new(truck_file), BufReader::new(items_file))
    }

    /// Loads an instance from two string slices.
    #[inline]
    pub fn from_strs<T>(&self, truck: &str, items: &str) -> Result<Model<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
    {
        self.from_bufread(truck.as_bytes(), items.as_bytes())
    }
}

/// Reads the truck file: skips the header record, then parses the single
/// `capacity,numItems` record.
fn read_truck_record<T, R>(rdr: R) -> Result<(T, usize), InstanceLoadError>
where
    T: FromStr,
    R: BufRead,
{
    let mut records = RecordReader::new(rdr);

    // Header line.
    records.next_record()?.ok_or(InstanceLoadError::UnexpectedEof)?;

    // Data line.
    let line = records.next_record()?.ok_or(InstanceLoadError::UnexpectedEof)?;

    let mut fields = Fields::new(&line);
    let capacity = fields.next_parsed::<T>()?;
    let declared = fields.next_parsed::<usize>()?;

    Ok((capacity, declared))
}

/// A helper to read non-blank lines from a generic reader.
struct RecordReader<R> {
    rdr: R,
    buf: String,
}

impl<R: BufRead> RecordReader<R> {
    /// Creates a new `RecordReader` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
        }
    }

    /// Returns the next non-blank line with surrounding whitespace removed,
    /// or `None` at end of input.
    fn next_record(&mut self) -> Result<Option<String>, InstanceLoadError> {
        loop {
            self.buf.clear();
            let n = self.rdr.read_line(&mut self.buf).map_err(InstanceLoadError::Io)?;
            if n == 0 {
                return Ok(None);
            }

            let trimmed = self.buf.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_owned()));
            }
        }
    }
}

/// A helper to walk the comma-separated fields of one record.
struct Fields<'a> {
    inner: std::str::Split<'a, char>,
}

impl<'a> Fields<'a> {
    #[inline]
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split(','),
        }
    }

    /// Returns the next field parsed into `F`. A missing field is reported as
    /// `UnexpectedEof`; an unparsable one as `Parse` with the offending token.
    fn next_parsed<F>(&mut self) -> Result<F, InstanceLoadError>
    where
        F: FromStr,
    {
        let token = self
            .inner
            .next()
            .ok_or(InstanceLoadError::UnexpectedEof)?
            .trim();

        token.parse::<F>().map_err(|_| {
            InstanceLoadError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<F>(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRUCK: &str = "Capacity,Pallets\n10,3\n";
    const ITEMS: &str = "Pallet,Weight,Profit\n1,5,10\n2,4,40\n3,6,30\n";

    #[test]
    fn test_loads_and_maps_correctly() {
        let loader = InstanceLoader::new();
        let model: Model<i64> = loader.from_strs(TRUCK, ITEMS).expect("Failed to load");

        assert_eq!(model.capacity(), 10);
        assert_eq!(model.num_items(), 3);
        assert_eq!(model.ids(), &[1, 2, 3]);
        assert_eq!(model.weights(), &[5, 4, 6]);
        assert_eq!(model.profits(), &[10, 40, 30]);
    }

    #[test]
    fn test_blank_lines_and_crlf_are_tolerated() {
        let truck = "Capacity,Pallets\r\n\r\n10,1\r\n";
        let items = "Pallet,Weight,Profit\r\n\r\n7, 2 , 9\r\n\r\n";

        let loader = InstanceLoader::new();
        let model: Model<i64> = loader.from_strs(truck, items).expect("Failed to load");

        assert_eq!(model.capacity(), 10);
        assert_eq!(model.ids(), &[7]);
        assert_eq!(model.weights(), &[2]);
        assert_eq!(model.profits(), &[9]);
    }

    #[test]
    fn test_parse_error_structure() {
        let items = "Pallet,Weight,Profit\n1,garbage,10\n";
        let loader = InstanceLoader::new().enforce_declared_count(false);
        let res: Result<Model<i64>, _> = loader.from_strs(TRUCK, items);

        match res {
            Err(InstanceLoadError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("i64"));
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_declared_count_mismatch() {
        let items = "Pallet,Weight,Profit\n1,5,10\n";
        let loader = InstanceLoader::new();
        let res: Result<Model<i64>, _> = loader.from_strs(TRUCK, items);

        match res {
            Err(InstanceLoadError::DeclaredCountMismatch { declared, actual }) => {
                assert_eq!(declared, 3);
                assert_eq!(actual, 1);
            }
            _ => panic!("Expected DeclaredCountMismatch"),
        }

        // The relaxed loader accepts the same input.
        let loader = InstanceLoader::new().enforce_declared_count(false);
        let model: Model<i64> = loader.from_strs(TRUCK, items).expect("Failed to load");
        assert_eq!(model.num_items(), 1);
    }

    #[test]
    fn test_validation_error_surfaces() {
        // Zero weight must be rejected before any solver can divide by it.
        let truck = "Capacity,Pallets\n10,1\n";
        let items = "Pallet,Weight,Profit\n1,0,10\n";
        let loader = InstanceLoader::new();
        let res: Result<Model<i64>, _> = loader.from_strs(truck, items);

        match res {
            Err(InstanceLoadError::Validation(ModelBuildError::NonPositiveWeight { id })) => {
                assert_eq!(id, 1);
            }
            _ => panic!("Expected Validation(NonPositiveWeight)"),
        }
    }

    #[test]
    fn test_truncated_truck_file_is_eof() {
        let truck = "Capacity,Pallets\n";
        let loader = InstanceLoader::new();
        let res: Result<Model<i64>, _> = loader.from_strs(truck, ITEMS);
        assert!(matches!(res, Err(InstanceLoadError::UnexpectedEof)));
    }

    #[test]
    fn test_missing_field_is_eof() {
        let truck = "Capacity,Pallets\n10\n";
        let loader = InstanceLoader::new();
        let res: Result<Model<i64>, _> = loader.from_strs(truck, ITEMS);
        assert!(matches!(res, Err(InstanceLoadError::UnexpectedEof)));
    }
}
