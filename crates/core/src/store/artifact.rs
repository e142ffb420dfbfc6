//! Structural validity check for cached collection artifacts.
//!
//! A collection page rendered to completion always carries a `<section>`
//! element around its listing. A cached artifact missing the marker was
//! written partially (or predates the current template) and must not be
//! served; the caller treats it as a miss and overwrites it.

const OPEN_MARKER: &str = "<section>";
const CLOSE_MARKER: &str = "</section>";

/// Checks whether a cached collection artifact is structurally complete.
///
/// # Examples
///
/// ```
/// use pokecache_core::store::is_complete_artifact;
///
/// assert!(is_complete_artifact("<html><section><ul></ul></section></html>"));
/// assert!(!is_complete_artifact("<html><section><ul>"));
/// ```
pub fn is_complete_artifact(html: &str) -> bool {
    html.contains(OPEN_MARKER) && html.contains(CLOSE_MARKER)
}
