//! Removal of the background gradient and the outer glow stages from
//! converted tiles.

use crate::error::Result;
use crate::types::StripOutcome;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Patterns removed from a converted tile, each applied independently
static REMOVED_ELEMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"(?s)<radialGradient[^>]*id="bgGradient"[^>]*>.*?</radialGradient>"#,
        r#"<feGaussianBlur[^>]*result="tinyBlur"[^>]*/>"#,
        r#"<feGaussianBlur[^>]*result="hugeBlur"[^>]*/>"#,
        r#"<feMergeNode[^>]*in="tinyBlur"[^>]*/>"#,
        r#"<feMergeNode[^>]*in="hugeBlur"[^>]*/>"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid strip pattern"))
    .collect()
});

/// Strip the background gradient and the tiny/huge blur stages from a tile
///
/// The removals are repeated until none of them matches, since taking one
/// element out of malformed markup can complete another. After removal only
/// non-blank lines are kept. This also drops blank lines that were already
/// present in the document. Applying it twice gives the same text as
/// applying it once.
///
/// # Examples
/// ```
/// use tileglow::strip::strip_document;
///
/// let svg = "<filter>\n    <feGaussianBlur stdDeviation=\"8\" result=\"tinyBlur\"/>\n</filter>";
/// assert_eq!(strip_document(svg), "<filter>\n</filter>");
/// ```
pub fn strip_document(svg: &str) -> String {
    let mut content = svg.to_string();

    loop {
        let before = content.len();
        for pattern in REMOVED_ELEMENTS.iter() {
            content = pattern.replace_all(&content, "").into_owned();
        }
        if content.len() == before {
            break;
        }
    }

    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip one file in place
///
/// The file is only rewritten when stripping changed its content. With
/// `dry_run` nothing is ever written, but the outcome is reported the same way.
///
/// # Returns
/// * `Ok(StripOutcome::Cleaned)` - Content changed (and was written unless dry run)
/// * `Ok(StripOutcome::Unchanged)` - Nothing to remove
/// * `Err(TileError)` - If the file cannot be read, decoded or written
pub fn strip_file(path: &Path, dry_run: bool) -> Result<StripOutcome> {
    let original = fs::read_to_string(path)?;
    let cleaned = strip_document(&original);

    if cleaned == original {
        return Ok(StripOutcome::Unchanged);
    }

    debug!(
        "{}: {} -> {} bytes",
        path.display(),
        original.len(),
        cleaned.len()
    );

    if !dry_run {
        fs::write(path, cleaned)?;
    }

    Ok(StripOutcome::Cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TileError;
    use tempfile::TempDir;

    const CONVERTED: &str = r##"<svg xmlns="http://www.w3.org/2000/svg">
    <defs>
        <radialGradient id="bgGradient" cx="50%" cy="66%" r="50%">
            <stop offset="0%" style="stop-color:#ffffff;stop-opacity:1"/>
        </radialGradient>
        <filter id="glow">
            <feGaussianBlur stdDeviation="8" result="tinyBlur"/>
            <feGaussianBlur stdDeviation="16" result="smallBlur"/>
            <feGaussianBlur stdDeviation="128" result="hugeBlur"/>
            <feMerge>
                <feMergeNode in="hugeBlur"/>
                <feMergeNode in="smallBlur"/>
                <feMergeNode in="tinyBlur"/>
                <feMergeNode in="SourceGraphic"/>
            </feMerge>
        </filter>
        <radialGradient id="redGradient" cx="50%" cy="50%" r="100%">
            <stop id="gradientStop1" offset="7%"/>
        </radialGradient>
    </defs>
</svg>"##;

    #[test]
    fn test_strip_document() {
        let stripped = strip_document(CONVERTED);

        assert!(!stripped.contains("bgGradient"));
        assert!(!stripped.contains("tinyBlur"));
        assert!(!stripped.contains("hugeBlur"));

        assert!(stripped.contains(r#"<feGaussianBlur stdDeviation="16" result="smallBlur"/>"#));
        assert!(stripped.contains(r#"<feMergeNode in="smallBlur"/>"#));
        assert!(stripped.contains(r#"<feMergeNode in="SourceGraphic"/>"#));
        assert!(stripped.contains(r#"<radialGradient id="redGradient""#));
        assert!(stripped.contains(r#"<stop id="gradientStop1" offset="7%"/>"#));

        assert_eq!(stripped.lines().count(), CONVERTED.lines().count() - 7);
    }

    #[test]
    fn test_strip_is_idempotent() {
        let once = strip_document(CONVERTED);
        assert_eq!(strip_document(&once), once);
    }

    #[test]
    fn test_strip_removes_all_blank_lines() {
        let svg = "<svg>\n\n    <rect/>\n   \n\t\n</svg>\n";
        assert_eq!(strip_document(svg), "<svg>\n    <rect/>\n</svg>");
    }

    #[test]
    fn test_strip_removes_elements_completed_by_earlier_removal() {
        let svg = r#"<filter><feGaussianBlur result="huge<feMergeNode in="tinyBlur"/>Blur"/></filter>"#;
        let once = strip_document(svg);
        assert_eq!(once, "<filter></filter>");
        assert_eq!(strip_document(&once), once);
    }

    #[test]
    fn test_strip_keeps_other_gradients() {
        let svg = "<radialGradient id=\"other\">\n<stop/>\n</radialGradient>";
        assert_eq!(strip_document(svg), svg);
    }

    #[test]
    fn test_strip_file_cleaned_then_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tile.svg");
        fs::write(&path, CONVERTED).unwrap();

        assert_eq!(strip_file(&path, false).unwrap(), StripOutcome::Cleaned);
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, strip_document(CONVERTED));

        assert_eq!(strip_file(&path, false).unwrap(), StripOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), written);
    }

    #[test]
    fn test_strip_file_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tile.svg");
        fs::write(&path, CONVERTED).unwrap();

        assert_eq!(strip_file(&path, true).unwrap(), StripOutcome::Cleaned);
        assert_eq!(fs::read_to_string(&path).unwrap(), CONVERTED);
    }

    #[test]
    fn test_strip_file_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.svg");
        fs::write(&path, [0x3c, 0xff, 0xfe, 0x3e]).unwrap();

        assert!(matches!(strip_file(&path, false), Err(TileError::IoError(_))));
    }

    #[test]
    fn test_strip_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(strip_file(&dir.path().join("nope.svg"), false).is_err());
    }
}
