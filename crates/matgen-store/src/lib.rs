#![forbid(unsafe_code)]

pub mod binary;
pub mod codec;
pub mod text;

pub use binary::{read_bin, write_bin, BinaryCodec};
pub use codec::MatrixCodec;
pub use text::{read_text, write_text, TextCodec};

use log::warn;
use matgen_core::{Format, Result};
use matgen_math::Matrix;
use std::path::Path;

static TEXT: TextCodec = TextCodec;
static BINARY: BinaryCodec = BinaryCodec;

pub fn codec_for(format: Format) -> &'static dyn MatrixCodec {
    match format {
        Format::Text => &TEXT,
        Format::Binary => &BINARY,
    }
}

/// Write `matrix` to `path` in `format`.
pub fn save(path: &Path, format: Format, matrix: &Matrix) -> Result<()> {
    codec_for(format).write(path, matrix).map_err(|e| {
        warn!("failed to write {} matrix to {}: {}", format, path.display(), e);
        e
    })
}

/// Load `path` in `format` into `out`. `out` is untouched on failure.
pub fn load(path: &Path, format: Format, out: &mut Matrix) -> Result<()> {
    codec_for(format).read(path, out).map_err(|e| {
        warn!("rejected {} matrix {}: {}", format, path.display(), e);
        e
    })
}
