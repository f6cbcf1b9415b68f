//! Input series + whitespace/comma record loader with zero-allocation float parsing.

use std::io::{BufReader, Read};

use thiserror::Error;
use tracing::debug;

// --- Public data model ---

/// Which of the two input series a value (or a painted cell) belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
    Primary,
    Auxiliary,
}

impl Lane {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Auxiliary => 1,
        }
    }
}

/// Borrowed render input: one required series, one optional, optional X coordinates.
///
/// The renderer never mutates these slices; it works on its own copy.
#[derive(Clone, Copy, Debug)]
pub struct Series<'a> {
    pub primary: &'a [f64],
    pub auxiliary: Option<&'a [f64]>,
    /// Positions `0..len` when absent.
    pub x: Option<&'a [f64]>,
}

impl<'a> Series<'a> {
    #[must_use]
    pub const fn single(primary: &'a [f64]) -> Self {
        Self {
            primary,
            auxiliary: None,
            x: None,
        }
    }

    #[must_use]
    pub const fn dual(primary: &'a [f64], auxiliary: &'a [f64]) -> Self {
        Self {
            primary,
            auxiliary: Some(auxiliary),
            x: None,
        }
    }

    #[must_use]
    pub const fn with_x(mut self, x: &'a [f64]) -> Self {
        self.x = Some(x);
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_dual(&self) -> bool {
        self.auxiliary.is_some()
    }
}

/// Owned result of parsing a text source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub primary: Vec<f64>,
    pub auxiliary: Option<Vec<f64>>,
    pub x_labels: Option<Vec<String>>,
}

impl Dataset {
    #[must_use]
    pub fn series(&self) -> Series<'_> {
        Series {
            primary: &self.primary,
            auxiliary: self.auxiliary.as_deref(),
            x: None,
        }
    }

    /// Keep at most `n` records in every column.
    pub fn truncate(&mut self, n: usize) {
        self.primary.truncate(n);
        if let Some(aux) = &mut self.auxiliary {
            aux.truncate(n);
        }
        if let Some(labels) = &mut self.x_labels {
            labels.truncate(n);
        }
    }
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("record {record}: {kind}")]
pub struct ParseDataError {
    /// 1-based record number, 0 when not tied to a record.
    pub record: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid number '{0}'")]
    BadFloat(String),
    #[error("expected {expected} comma-separated columns, got {got}")]
    MissingColumn { expected: usize, got: usize },
    #[error("x labels need comma-separated records")]
    LabelsWithoutColumns,
    #[error("no records found")]
    Empty,
}

impl ParseDataError {
    fn at(record: usize, kind: ParseErrorKind) -> Self {
        Self { record, kind }
    }
}

// --- Helpers ---

/// Replace U+2212 MINUS SIGN with an ASCII hyphen.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], record: usize) -> Result<f64, ParseDataError> {
    let bad = || {
        ParseDataError::at(
            record,
            ParseErrorKind::BadFloat(String::from_utf8_lossy(bytes).into_owned()),
        )
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

/// How the first record told us to read the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Layout {
    labels: bool,
    dual: bool,
}

impl Layout {
    fn columns(self) -> usize {
        1 + usize::from(self.labels) + usize::from(self.dual)
    }
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 16;

/// Parse whitespace-separated records.
///
/// A record is either one number, or comma-separated columns
/// (`[label,]value[,value]`) when the first record contains a comma.
///
/// # Errors
/// I/O failures, unparsable numbers, short records and empty input.
pub fn read_records<R: Read>(src: R, x_labels: bool) -> Result<Dataset, ParseDataError> {
    let mut raw = Vec::<u8>::with_capacity(BUF_CAP);
    BufReader::with_capacity(BUF_CAP, src)
        .read_to_end(&mut raw)
        .map_err(|e| ParseDataError::at(0, e.into()))?;
    normalize_unicode_minus(&mut raw);

    let mut records = raw
        .split(u8::is_ascii_whitespace)
        .filter(|r| !r.is_empty())
        .peekable();

    let Some(first) = records.peek() else {
        return Err(ParseDataError::at(0, ParseErrorKind::Empty));
    };
    let commas = first.iter().filter(|&&b| b == b',').count();
    if commas == 0 && x_labels {
        return Err(ParseDataError::at(1, ParseErrorKind::LabelsWithoutColumns));
    }
    let layout = Layout {
        labels: x_labels,
        dual: commas == 1 + usize::from(x_labels),
    };

    let mut data = Dataset {
        auxiliary: layout.dual.then(Vec::new),
        x_labels: layout.labels.then(Vec::new),
        ..Dataset::default()
    };

    for (n, record) in records.enumerate() {
        let record_no = n + 1;
        let mut cols = record.split(|&b| b == b',');
        let mut next_col = |got: usize| {
            cols.next().ok_or_else(|| {
                ParseDataError::at(
                    record_no,
                    ParseErrorKind::MissingColumn {
                        expected: layout.columns(),
                        got,
                    },
                )
            })
        };

        if let Some(labels) = &mut data.x_labels {
            labels.push(String::from_utf8_lossy(next_col(0)?).into_owned());
        }
        let primary_col = next_col(usize::from(layout.labels))?;
        data.primary.push(parse_f64(primary_col, record_no)?);
        if let Some(aux) = &mut data.auxiliary {
            let aux_col = next_col(layout.columns() - 1)?;
            aux.push(parse_f64(aux_col, record_no)?);
        }
    }

    debug!(
        records = data.primary.len(),
        dual = layout.dual,
        labels = layout.labels,
        "parsed input"
    );
    Ok(data)
}

/// Read records from `path`, or from stdin when `path` is `None`.
///
/// # Errors
/// See [`read_records`]; also fails when the file cannot be opened.
pub fn read_records_from(path: Option<&str>, x_labels: bool) -> Result<Dataset, ParseDataError> {
    match path {
        None => read_records(std::io::stdin().lock(), x_labels),
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|e| ParseDataError::at(0, e.into()))?;
            read_records(file, x_labels)
        }
    }
}
