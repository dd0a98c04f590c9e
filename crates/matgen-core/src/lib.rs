#![no_std]
#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
use alloc::string::String;

/// Width of one serialized cell (i32).
pub const CELL_SIZE: usize = 4;

/// On-disk representation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Text,
    #[default]
    Binary,
}

impl core::str::FromStr for Format {
    type Err = MatgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "binary" | "bin" => Ok(Format::Binary),
            _ => Err(MatgenError::UnknownFormat(String::from(s))),
        }
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Binary => f.write_str("binary"),
        }
    }
}

/// Fixed binary file header: rows then cols, little-endian u32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryHeader {
    pub rows: u32,
    pub cols: u32,
}

impl BinaryHeader {
    pub const SIZE: usize = 8;

    /// Fails if either dimension does not fit the u32 header fields.
    pub fn for_shape(rows: usize, cols: usize) -> Result<Self> {
        match (u32::try_from(rows), u32::try_from(cols)) {
            (Ok(r), Ok(c)) => Ok(Self { rows: r, cols: c }),
            _ => Err(FormatError::DimensionTooLarge { rows, cols }.into()),
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.rows.to_le_bytes());
        buf[4..8].copy_from_slice(&self.cols.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() < Self::SIZE {
            return Err(FormatError::TruncatedHeader { len: buf.len() }.into());
        }
        let mut rows = [0u8; 4];
        let mut cols = [0u8; 4];
        rows.copy_from_slice(&buf[0..4]);
        cols.copy_from_slice(&buf[4..8]);
        Ok(Self {
            rows: u32::from_le_bytes(rows),
            cols: u32::from_le_bytes(cols),
        })
    }

    /// Bytes of cell data the header declares.
    pub fn payload_len(&self) -> Result<usize> {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        rows.checked_mul(cols)
            .and_then(|cells| cells.checked_mul(CELL_SIZE))
            .ok_or(MatgenError::Format(FormatError::SizeOverflow { rows, cols }))
    }

    /// Header plus payload.
    pub fn file_len(&self) -> Result<usize> {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        self.payload_len()?
            .checked_add(Self::SIZE)
            .ok_or(MatgenError::Format(FormatError::SizeOverflow { rows, cols }))
    }
}

pub type Result<T, E = MatgenError> = core::result::Result<T, E>;

/// Malformed file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Text file holds no data rows.
    Empty,
    RaggedRow { line: usize, expected: usize, found: usize },
    BadToken { line: usize, token: String },
    NotUtf8 { line: usize },
    /// Text cannot represent a matrix without cells.
    NoCells { rows: usize, cols: usize },
    TruncatedHeader { len: usize },
    TruncatedPayload { expected: usize, found: usize },
    TrailingBytes { expected: usize, found: usize },
    SizeOverflow { rows: usize, cols: usize },
    DimensionTooLarge { rows: usize, cols: usize },
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::Empty => write!(f, "no matrix rows found"),
            FormatError::RaggedRow { line, expected, found } => write!(
                f,
                "line {}: expected {} values, found {}",
                line, expected, found
            ),
            FormatError::BadToken { line, token } => {
                write!(f, "line {}: '{}' is not a 32-bit integer", line, token)
            }
            FormatError::NotUtf8 { line } => write!(f, "line {}: not valid UTF-8 text", line),
            FormatError::NoCells { rows, cols } => {
                write!(f, "a {}x{} matrix has no cells to write as text", rows, cols)
            }
            FormatError::TruncatedHeader { len } => write!(
                f,
                "file is {} bytes, shorter than the {}-byte header",
                len,
                BinaryHeader::SIZE
            ),
            FormatError::TruncatedPayload { expected, found } => write!(
                f,
                "truncated file: header declares {} bytes, found {}",
                expected, found
            ),
            FormatError::TrailingBytes { expected, found } => write!(
                f,
                "corrupt file: header declares {} bytes, found {}",
                expected, found
            ),
            FormatError::SizeOverflow { rows, cols } => {
                write!(f, "header dimensions {}x{} overflow the file size", rows, cols)
            }
            FormatError::DimensionTooLarge { rows, cols } => write!(
                f,
                "matrix {}x{} does not fit a 32-bit dimension header",
                rows, cols
            ),
        }
    }
}

#[derive(Debug)]
pub enum MatgenError {
    Allocation { rows: usize, cols: usize },
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
    Format(FormatError),
    UnknownFormat(String),
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl From<FormatError> for MatgenError {
    fn from(e: FormatError) -> Self {
        MatgenError::Format(e)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for MatgenError {
    fn from(e: std::io::Error) -> Self {
        MatgenError::Io(e)
    }
}

impl core::fmt::Display for MatgenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatgenError::Allocation { rows, cols } => {
                write!(f, "cannot allocate a {}x{} matrix", rows, cols)
            }
            MatgenError::OutOfBounds { row, col, rows, cols } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, rows, cols
            ),
            MatgenError::Format(e) => write!(f, "format error: {}", e),
            MatgenError::UnknownFormat(s) => {
                write!(f, "unknown format '{}' (expected text or binary)", s)
            }
            #[cfg(feature = "std")]
            MatgenError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatgenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatgenError::Io(e) => Some(e),
            _ => None,
        }
    }
}
