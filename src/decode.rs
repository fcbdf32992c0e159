use encoding_rs::GBK;
use thiserror::Error;

/// What to do with bytes that do not decode as GBK.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DecodePolicy {
    /// Stop at the first undecodable byte and return an error.
    Fail,
    /// Drop the offending byte and resume at the next one.
    #[default]
    Skip,
    /// Substitute U+FFFD for the offending byte and resume at the next one.
    Replace,
}

/// Decoded text plus a count of input bytes that were undecodable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Decoded {
    pub text: String,
    pub invalid_bytes: usize,
}

/// First undecodable byte, reported under [`DecodePolicy::Fail`].
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("undecodable byte 0x{byte:02X} at offset {offset}")]
pub struct UndecodableByte {
    pub offset: usize,
    pub byte: u8,
}

/// Decode GBK-encoded `bytes` into a string.
///
/// An undecodable sequence consumes exactly one byte (its first) and
/// decoding resumes at the next; `policy` decides whether that byte is
/// fatal, dropped, or replaced. A trail byte that failed to complete a pair
/// is re-examined as a potential sequence start of its own, so valid text
/// around a corrupt byte survives.
pub fn gbk_to_utf8(
    bytes: &[u8],
    policy: DecodePolicy,
) -> Result<Decoded, UndecodableByte> {
    let mut text = String::with_capacity(bytes.len());
    let mut invalid_bytes = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        let run = valid_prefix_len(&bytes[pos..]);
        if run > 0 {
            let span = &bytes[pos..pos + run];
            match GBK.decode_without_bom_handling_and_without_replacement(span)
            {
                Some(decoded) => text.push_str(&decoded),
                // The scanner only passes spans covered by the two-byte
                // table, so a refusal means scanner and table disagree.
                None => {
                    return Err(UndecodableByte {
                        offset: pos,
                        byte: span[0],
                    });
                }
            }
            pos += run;
        }
        if pos >= bytes.len() {
            break;
        }
        match policy {
            DecodePolicy::Fail => {
                return Err(UndecodableByte {
                    offset: pos,
                    byte: bytes[pos],
                });
            }
            DecodePolicy::Skip => invalid_bytes += 1,
            DecodePolicy::Replace => {
                text.push('\u{FFFD}');
                invalid_bytes += 1;
            }
        }
        pos += 1;
    }
    Ok(Decoded {
        text,
        invalid_bytes,
    })
}

/// Length of the longest prefix made of decodable units (ASCII bytes and
/// two-byte pairs).
fn valid_prefix_len(bytes: &[u8]) -> usize {
    let mut len = 0;
    while len < bytes.len() {
        match unit_len(&bytes[len..]) {
            Some(n) => len += n,
            None => break,
        }
    }
    len
}

/// Length of the decodable unit at the start of `bytes`, if any.
fn unit_len(bytes: &[u8]) -> Option<usize> {
    let lead = *bytes.first()?;
    if lead.is_ascii() {
        return Some(1);
    }
    // Leads are 0x81-0xFE; 0x80 and 0xFF never start a sequence.
    if !(0x81..=0xFE).contains(&lead) {
        return None;
    }
    let trail = *bytes.get(1)?;
    let structural = matches!(trail, 0x40..=0xFE) && trail != 0x7F;
    if structural && !is_user_defined(lead, trail) {
        Some(2)
    } else {
        None
    }
}

/// Two-byte zones the GBK standard reserves for user definition. No
/// characters are assigned there, so they count as undecodable.
fn is_user_defined(lead: u8, trail: u8) -> bool {
    matches!(
        (lead, trail),
        (0xAA..=0xAF, 0xA1..=0xFE)
            | (0xF8..=0xFE, 0xA1..=0xFE)
            | (0xA1..=0xA7, 0x40..=0xA0)
    )
}
