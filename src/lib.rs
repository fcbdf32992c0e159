//! Best-effort conversion of GBK-encoded text files to UTF-8.

pub mod convert;
pub mod decode;

pub use convert::{convert_file, ConvertError, ConvertReport};
pub use decode::{gbk_to_utf8, DecodePolicy, Decoded, UndecodableByte};
