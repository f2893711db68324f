use crate::types::SourceTile;

/// Class attribute carried by the structural elements of every tile
pub const TILE_CLASS: &str = "s-BgHh72J5KvB0";

/// Identifier of the removable background gradient
pub const BACKGROUND_GRADIENT_ID: &str = "bgGradient";

/// Blur stages of the glow filter as (stdDeviation, result name), smallest first
pub const GLOW_STAGES: [(u32, &str); 5] = [
    (8, "tinyBlur"),
    (16, "smallBlur"),
    (32, "mediumBlur"),
    (64, "largeBlur"),
    (128, "hugeBlur"),
];

/// Clip path id for a polygon with the given number of sides
pub fn clip_id(sides: usize) -> String {
    format!("polygon-clip-{}", sides)
}

/// Fill the glowing border template with a parsed tile
///
/// The vertex list is inserted verbatim three times: in the clip path
/// definition, the base polygon and the glowing border polygon. Both clipped
/// layers reference the same clip id.
pub fn render_glow_svg(tile: &SourceTile) -> String {
    let points = tile.vertices.as_str();
    let clip = clip_id(tile.sides());
    let class = TILE_CLASS;

    let blurs = GLOW_STAGES
        .iter()
        .map(|(deviation, result)| {
            format!(r#"            <feGaussianBlur stdDeviation="{deviation}" result="{result}"/>"#)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let merge_nodes = GLOW_STAGES
        .iter()
        .rev()
        .map(|(_, result)| format!(r#"                <feMergeNode in="{result}"/>"#))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" viewBox="0 0 600 600" width="600" height="600">
    <defs class="{class}">
        <clipPath id="{clip}" class="{class}">
            <polygon class="{class}" points="{points}"/>
        </clipPath>
        <radialGradient id="{BACKGROUND_GRADIENT_ID}" cx="50%" cy="66%" r="50%">
            <stop offset="0%" style="stop-color:#ffffff;stop-opacity:1"/>
            <stop offset="30%" style="stop-color:#ffffff;stop-opacity:1"/>
            <stop offset="100%" style="stop-color:#ffcccc;stop-opacity:1"/>
        </radialGradient>
        <filter id="glow" x="-50%" y="-50%" width="200%" height="200%">
{blurs}
            <feMerge>
{merge_nodes}
                <feMergeNode in="SourceGraphic"/>
            </feMerge>
        </filter>
        <radialGradient id="redGradient" cx="50%" cy="50%" r="100%">
            <stop id="gradientStop1" offset="7%" style="stop-color:#1e293b;stop-opacity:1"/>
            <stop id="gradientStop2" offset="20%" style="stop-color:#1e293b;stop-opacity:1"/>
        </radialGradient>
        <mask id="pathMask">
            <rect width="100%" height="100%" fill="black"/>
            {mask}
        </mask>
    </defs>

    <polygon fill="white" id="base-polygon" stroke="none" class="{class}" points="{points}"/>

    <g clip-path="url(#{clip})" class="{class}">
        <polygon id="border-polygon" fill="none" stroke="#ff0000" stroke-width="0" filter="url(#glow)" class="{class}" points="{points}"/>
    </g>

    <g clip-path="url(#{clip})" class="{class}">
        <rect width="100%" height="100%" fill="url(#redGradient)" mask="url(#pathMask)" class="{class}"/>
    </g>
</svg>"##,
        mask = tile.mask.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MaskFragment, VertexList};

    fn triangle(mask: &str) -> SourceTile {
        SourceTile {
            vertices: VertexList::new("0,0 10,0 5,10"),
            mask: MaskFragment::new(mask),
        }
    }

    #[test]
    fn test_clip_id() {
        assert_eq!(clip_id(6), "polygon-clip-6");
    }

    #[test]
    fn test_points_copied_three_times() {
        let svg = render_glow_svg(&triangle(""));
        assert_eq!(svg.matches(r#"points="0,0 10,0 5,10""#).count(), 3);
    }

    #[test]
    fn test_clip_id_definition_and_uses() {
        let svg = render_glow_svg(&triangle(""));
        assert_eq!(svg.matches(r#"id="polygon-clip-3""#).count(), 1);
        assert_eq!(svg.matches(r#"clip-path="url(#polygon-clip-3)""#).count(), 2);
    }

    #[test]
    fn test_glow_filter_stages() {
        let svg = render_glow_svg(&triangle(""));
        assert!(svg.contains(r#"<feGaussianBlur stdDeviation="8" result="tinyBlur"/>"#));
        assert!(svg.contains(r#"<feGaussianBlur stdDeviation="128" result="hugeBlur"/>"#));

        let huge = svg.find(r#"<feMergeNode in="hugeBlur"/>"#).unwrap();
        let tiny = svg.find(r#"<feMergeNode in="tinyBlur"/>"#).unwrap();
        let source = svg.find(r#"<feMergeNode in="SourceGraphic"/>"#).unwrap();
        assert!(huge < tiny);
        assert!(tiny < source);
    }

    #[test]
    fn test_mask_inserted() {
        let svg = render_glow_svg(&triangle(r#"<path d="M0 0" stroke="white" fill="none"/>"#));
        let mask_start = svg.find(r#"<mask id="pathMask">"#).unwrap();
        let mask_end = svg.find("</mask>").unwrap();
        assert!(svg[mask_start..mask_end].contains(r#"<path d="M0 0" stroke="white" fill="none"/>"#));
    }
}
