//! Display titles derived from a document's first line.

use super::lines::first_line;

const DEF_PREFIX: &str = "def ";
const DEF_SUFFIX: &str = ":";

/// A function definition shows its signature, an empty line shows
/// `untitled`, anything else shows the line itself.
pub fn derive_title(text: &str, untitled: &str) -> String {
    let line = first_line(text);
    if let Some(signature) = line
        .strip_prefix(DEF_PREFIX)
        .and_then(|rest| rest.strip_suffix(DEF_SUFFIX))
    {
        if !signature.trim().is_empty() {
            return signature.to_string();
        }
        return untitled.to_string();
    }

    if line.is_empty() {
        return untitled.to_string();
    }
    line.to_string()
}
