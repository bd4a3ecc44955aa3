const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Share of zero bytes above which an unmarked buffer is taken to be UTF-16LE.
/// Some terminal builds export reports that way without a byte-order mark.
const NUL_RATIO_UTF16: f64 = 0.05;

/// Decode a report buffer of unknown encoding. Never fails: invalid sequences
/// are dropped and residual NULs removed.
pub fn decode_report(raw: &[u8]) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = if let Some(rest) = raw.strip_prefix(UTF16_LE_BOM) {
        decode_utf16(rest, u16::from_le_bytes)
    } else if let Some(rest) = raw.strip_prefix(UTF16_BE_BOM) {
        decode_utf16(rest, u16::from_be_bytes)
    } else if let Some(rest) = raw.strip_prefix(UTF8_BOM) {
        decode_utf8(rest)
    } else if nul_ratio(raw) > NUL_RATIO_UTF16 {
        decode_utf16(raw, u16::from_le_bytes)
    } else {
        decode_utf8(raw)
    };

    text.replace('\0', "")
}

fn nul_ratio(raw: &[u8]) -> f64 {
    let nuls = raw.iter().filter(|&&b| b == 0).count();
    nuls as f64 / raw.len().max(1) as f64
}

fn decode_utf16(raw: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let units = raw.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units).filter_map(Result::ok).collect()
}

fn decode_utf8(raw: &[u8]) -> String {
    raw.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
