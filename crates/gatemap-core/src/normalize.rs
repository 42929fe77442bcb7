//! Lexical normalization of instruction names.

/// Reduce an instruction name to its canonical-table key.
///
/// Underscores and hyphens are removed, every `measure` substring becomes
/// `meas`, then the result is lowercased. The replacement is a plain
/// substring rewrite and runs before lowercasing, so `MEASURE_X` comes out
/// as `measurex`.
pub fn normalize(name: &str) -> String {
    name.replace(['_', '-'], "")
        .replace("measure", "meas")
        .to_lowercase()
}
