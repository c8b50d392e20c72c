/// Splits a log line into its level tag and the remaining payload.
///
/// The tag is what stands between the first `[` and the first `]` after it.
/// The payload starts one byte after the `]` (the separator), with further leading
/// spaces removed. Everything in front of the `[` is dropped, e.g. a timestamp.
///
/// Without such a bracket pair, the tag is empty and the payload is the complete line.
#[must_use]
pub fn extract_level_tag(line: &[u8]) -> (&[u8], &[u8]) {
    let Some(open) = line.iter().position(|&b| b == b'[') else {
        return (&[], line);
    };
    let Some(close) = line[open..].iter().position(|&b| b == b']').map(|i| open + i) else {
        return (&[], line);
    };
    let tag = &line[open + 1..close];
    let rest = line.get(close + 2..).unwrap_or_default();
    let skip = rest.iter().take_while(|&&b| b == b' ').count();
    (tag, &rest[skip..])
}
