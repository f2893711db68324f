pub mod pretty;
pub mod template;

use crate::types::{GlowTile, SourceTile};
use tracing::warn;

// Re-export commonly used items
pub use pretty::pretty_print;
pub use template::{clip_id, render_glow_svg};

/// Build the final glowing border document for a parsed tile
///
/// The filled template is re-serialized with stable indentation. If that
/// fails the raw template text is kept as is; the conversion still succeeds
/// and `formatted` is false.
pub fn render_tile(tile: &SourceTile) -> GlowTile {
    let raw = render_glow_svg(tile);

    let (document, formatted) = match pretty_print(&raw) {
        Ok(pretty) => (pretty, true),
        Err(e) => {
            warn!("Falling back to unformatted output: {}", e);
            (raw, false)
        }
    };

    GlowTile {
        document,
        sides: tile.sides(),
        formatted,
    }
}
