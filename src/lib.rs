//! # tileglow
//!
//! A library for converting simple polygon SVG tiles to the glowing border
//! format, and for stripping the background gradient and outer glow stages
//! from converted tiles.
//!
//! ## Example
//!
//! ```
//! use tileglow::strip::strip_document;
//!
//! let source = r##"<svg viewBox="0 0 600 600">
//!     <polygon points="300,0 600,600 0,600" fill="#ccc"/>
//!     <g clip-path="url(#polygon-clip-3)">
//!         <path d="M300 0 L300 600" stroke="#00ff00" fill="#123456"/>
//!     </g>
//! </svg>"##;
//!
//! let tile = tileglow::convert(source).unwrap();
//! assert_eq!(tile.sides, 3);
//! assert!(tile.document.contains(r#"<clipPath id="polygon-clip-3""#));
//! assert!(tile.document.contains(r#"stroke="white""#));
//!
//! let slim = strip_document(&tile.document);
//! assert!(!slim.contains("bgGradient"));
//! ```

pub mod batch;
pub mod error;
pub mod parser;
pub mod render;
pub mod strip;
pub mod types;

use std::fs;
use std::path::Path;
use tracing::debug;

// Re-export commonly used items
pub use error::{Result, TileError};
pub use types::{BatchSummary, GlowTile, Operation, SourceTile, StripOutcome, VertexList};

/// Convert a simple polygon tile to the glowing border format
///
/// # Arguments
/// * `svg` - Source SVG text
///
/// # Returns
/// * `Ok(GlowTile)` - The converted document and its detected side count
/// * `Err(TileError::MissingBorderPolygon)` - If the tile has no border polygon
pub fn convert(svg: &str) -> Result<GlowTile> {
    let tile = parser::parse_tile(svg)?;

    debug!(
        "Parsed {}-sided tile, mask fragment of {} bytes",
        tile.sides(),
        tile.mask.as_str().len()
    );

    Ok(render::render_tile(&tile))
}

/// Convert a tile file, writing the result to `output`
///
/// Nothing is written when the conversion fails.
pub fn convert_file(input: &Path, output: &Path) -> Result<GlowTile> {
    let svg = fs::read_to_string(input)?;
    let tile = convert(&svg)?;
    fs::write(output, &tile.document)?;
    Ok(tile)
}
