use crate::types::MaskFragment;
use regex::Regex;
use std::sync::LazyLock;

/// Opening tag of a group clipped to the tile outline
static CLIP_GROUP_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<g\b[^>]*\sclip-path="url\(#polygon-clip-\d+\)"[^>]*>"#)
        .expect("valid clip group pattern")
});

/// Any `<g>` open tag (group 1 is the self-closing slash) or close tag
static GROUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<g\b[^>]*?(/?)>|</g\s*>").expect("valid group tag pattern"));

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));

static BORDER_POLYGON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<polygon\b[^>]*\sid="border-polygon"[^>]*/?>"#)
        .expect("valid border polygon pattern")
});

static DRAWING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:path|line|circle|rect)\b").expect("valid drawing tag pattern")
});

static STROKE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s)stroke="([^"]*)""#).expect("valid stroke pattern")
});

static FILL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)fill="[^"]*""#).expect("valid fill pattern"));

/// Collect the bodies of every clipped group, in document order
///
/// The matching `</g>` is found by tracking `<g>` depth, so nested groups
/// stay inside their parent's body. A group that is never closed yields
/// nothing. Groups nested inside an already collected group are not
/// reported a second time.
pub fn clipped_group_bodies(svg: &str) -> Vec<&str> {
    let mut bodies = Vec::new();
    let mut pos = 0;

    while let Some(open) = CLIP_GROUP_OPEN.find_at(svg, pos) {
        pos = open.end();

        if open.as_str().ends_with("/>") {
            continue;
        }

        if let Some(close_start) = find_group_close(svg, open.end()) {
            bodies.push(&svg[open.end()..close_start]);
            pos = close_start;
        }
    }

    bodies
}

/// Byte offset of the `</g>` that closes a group whose body starts at `from`
fn find_group_close(svg: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;

    for tag in GROUP_TAG.captures_iter(&svg[from..]) {
        let whole = tag.get(0)?;

        if whole.as_str().starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return Some(from + whole.start());
            }
        } else if tag.get(1).is_some_and(|slash| slash.as_str().is_empty()) {
            depth += 1;
        }
    }

    None
}

/// Clean one group body, keeping it only if real drawing elements remain
fn clean_group_body(body: &str) -> Option<String> {
    let without_comments = COMMENT.replace_all(body.trim(), "");
    let content = BORDER_POLYGON.replace_all(&without_comments, "");

    if content.trim().is_empty() || !DRAWING_TAG.is_match(&content) {
        return None;
    }

    Some(content.into_owned())
}

/// Rewrite drawing attributes so the markup works as a luminance mask
///
/// Every stroke color becomes white and every fill becomes `none`. An
/// explicit `stroke="none"` is kept. Strokes are rewritten before fills.
pub fn rewrite_for_mask(markup: &str) -> String {
    let stroked = STROKE_ATTR.replace_all(markup, |caps: &regex::Captures| {
        if &caps[2] == "none" {
            caps[0].to_string()
        } else {
            format!(r#"{}stroke="white""#, &caps[1])
        }
    });

    FILL_ATTR
        .replace_all(&stroked, r#"${1}fill="none""#)
        .into_owned()
}

/// Extract the internal drawing elements of a tile as a mask fragment
///
/// # Arguments
/// * `svg` - Source SVG text
///
/// # Returns
/// The concatenated, rewritten drawing elements of every clipped group. Empty
/// when the tile has no clipped group with drawing elements.
///
/// # Examples
/// ```
/// use tileglow::parser::extract_internal_elements;
///
/// let svg = r##"<g clip-path="url(#polygon-clip-4)">
///     <path d="M0 0 L10 10" stroke="#00ff00" fill="#123456"/>
/// </g>"##;
/// let mask = extract_internal_elements(svg);
/// assert_eq!(mask.as_str(), r#"<path d="M0 0 L10 10" stroke="white" fill="none"/>"#);
/// ```
pub fn extract_internal_elements(svg: &str) -> MaskFragment {
    let combined = clipped_group_bodies(svg)
        .into_iter()
        .filter_map(clean_group_body)
        .collect::<Vec<_>>()
        .join("\n");

    if combined.trim().is_empty() {
        return MaskFragment::default();
    }

    MaskFragment::new(rewrite_for_mask(&combined).trim())
}
