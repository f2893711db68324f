pub mod groups;
pub mod outline;

use crate::error::Result;
use crate::types::SourceTile;

// Re-export commonly used items
pub use groups::{clipped_group_bodies, extract_internal_elements, rewrite_for_mask};
pub use outline::extract_polygon_points;

/// Parse a simple polygon tile into its border vertices and mask fragment
///
/// Fails with `MissingBorderPolygon` before looking at the clipped groups, so
/// a tile without an outline never yields a partial result.
pub fn parse_tile(svg: &str) -> Result<SourceTile> {
    let vertices = extract_polygon_points(svg)?;
    let mask = extract_internal_elements(svg);

    Ok(SourceTile { vertices, mask })
}
