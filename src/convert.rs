use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::decode::{gbk_to_utf8, DecodePolicy, UndecodableByte};

/// Why a conversion failed, tagged by the stage that failed.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: UndecodableByte,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Summary of a completed conversion.
#[derive(Clone, Debug)]
pub struct ConvertReport {
    pub output: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
    pub invalid_bytes: usize,
}

/// Convert the GBK-encoded file at `input` into a UTF-8 file at `output`.
///
/// The whole input is read into memory, decoded under `policy`, and written
/// back in one pass; `output` is created if absent and truncated otherwise.
/// Nothing is written unless reading and decoding both succeed, so a
/// missing or undecodable input leaves no output file behind. A write
/// failure partway through may leave a partial file; no cleanup is
/// attempted.
pub fn convert_file(
    input: &Path,
    output: &Path,
    policy: DecodePolicy,
) -> Result<ConvertReport, ConvertError> {
    let bytes = fs::read(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let decoded = gbk_to_utf8(&bytes, policy).map_err(|source| {
        ConvertError::Decode {
            path: input.to_path_buf(),
            source,
        }
    })?;
    log::debug!(
        "decoded {} bytes from {} into {} chars of text",
        bytes.len(),
        input.display(),
        decoded.text.chars().count()
    );
    if decoded.invalid_bytes > 0 {
        log::warn!(
            "{}: {} undecodable byte(s)",
            input.display(),
            decoded.invalid_bytes
        );
    }
    fs::write(output, decoded.text.as_bytes()).map_err(|source| {
        ConvertError::Write {
            path: output.to_path_buf(),
            source,
        }
    })?;
    Ok(ConvertReport {
        output: output.to_path_buf(),
        bytes_read: bytes.len(),
        bytes_written: decoded.text.len(),
        invalid_bytes: decoded.invalid_bytes,
    })
}
