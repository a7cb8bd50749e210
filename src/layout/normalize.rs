//! Directory name normalization

/// Character reserved by the authoring tool; never allowed through to output names
pub const RESERVED_MARKER: char = '@';

/// Replacement for [`RESERVED_MARKER`]
pub const MARKER_REPLACEMENT: &str = "_";

/// Normalize a raw directory name into an output identifier
///
/// Steps, in order:
/// 1. every `@` becomes `_`
/// 2. leading `'0'` characters are stripped (`"003_Intro"` -> `"3_Intro"`)
/// 3. the result is lower-cased
///
/// A name made only of zeros would otherwise come out empty and produce a
/// hidden `.lib`/`.sng`/`.prt` directory, so it normalizes to `"0"`.
///
/// The slot suffix (`.lib`, `.sng`, `.prt`) is appended by the caller.
pub fn normalize(name: &str) -> String {
    let replaced = name.replace(RESERVED_MARKER, MARKER_REPLACEMENT);

    let stripped = replaced.trim_start_matches('0');
    let stripped = if stripped.is_empty() && !replaced.is_empty() {
        "0"
    } else {
        stripped
    };

    stripped.to_lowercase()
}
