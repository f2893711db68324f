use crate::error::{Result, TileError};
use crate::types::VertexList;
use regex::Regex;
use std::sync::LazyLock;

/// First `<polygon>` carrying a `points` attribute
///
/// `[^>]*` keeps the match inside a single tag, so a polygon without
/// `points` is skipped rather than borrowing the attribute of a later one.
static POLYGON_POINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<polygon\b[^>]*?\spoints="([^"]*)""#).expect("valid polygon pattern")
});

/// Extract the border polygon's vertex list
///
/// Only the first polygon with a `points` attribute is considered. Its value
/// is returned verbatim.
///
/// # Arguments
/// * `svg` - Source SVG text
///
/// # Returns
/// * `Ok(VertexList)` - The border polygon vertices
/// * `Err(TileError::MissingBorderPolygon)` - If no polygon has a non-blank `points` attribute
///
/// # Examples
/// ```
/// use tileglow::parser::extract_polygon_points;
///
/// let svg = r#"<svg><polygon points="0,0 10,0 5,10"/></svg>"#;
/// let vertices = extract_polygon_points(svg).unwrap();
/// assert_eq!(vertices.sides(), 3);
/// ```
pub fn extract_polygon_points(svg: &str) -> Result<VertexList> {
    let points = POLYGON_POINTS
        .captures(svg)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(TileError::MissingBorderPolygon)?;

    if points.trim().is_empty() {
        return Err(TileError::MissingBorderPolygon);
    }

    Ok(VertexList::new(points))
}
