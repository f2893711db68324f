/// Vertex list of the tile's border polygon
///
/// Holds the `points` attribute value exactly as it appears in the source
/// document. Coordinates are never parsed or normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexList(String);

impl VertexList {
    /// Create a new VertexList from a raw `points` attribute value
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The verbatim attribute value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated coordinate tokens, in document order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Number of polygon sides (one per coordinate token)
    pub fn sides(&self) -> usize {
        self.tokens().count()
    }
}

/// Drawing elements prepared for use inside the luminance mask
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskFragment(String);

impl MaskFragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parsed form of a simple polygon tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTile {
    /// Border polygon vertices
    pub vertices: VertexList,
    /// Internal decoration, rewritten for the mask
    pub mask: MaskFragment,
}

impl SourceTile {
    pub fn sides(&self) -> usize {
        self.vertices.sides()
    }
}

/// A converted glowing border document
#[derive(Debug, Clone)]
pub struct GlowTile {
    /// Final SVG text
    pub document: String,
    /// Side count embedded in the clip-path id
    pub sides: usize,
    /// False when re-serialization failed and the raw template was kept
    pub formatted: bool,
}

/// Result of stripping one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// Content changed and the file was (or, in a dry run, would be) rewritten
    Cleaned,
    /// Nothing to remove, file left untouched
    Unchanged,
}

/// Operation applied by the batch driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Convert each tile in place through a temporary sibling file
    Convert,
    /// Strip generated artifacts in place
    Strip,
}

impl Operation {
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Convert => "convert",
            Operation::Strip => "clean",
        }
    }

    /// Line announcing the start of a batch run
    pub fn start_message(&self) -> &'static str {
        match self {
            Operation::Convert => "Starting batch conversion...",
            Operation::Strip => "Starting cleanup...",
        }
    }
}

/// Aggregate counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// True when no file failed (an empty batch counts as success)
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_list_sides() {
        let vertices = VertexList::new("0,0 10,0 5,10");
        assert_eq!(vertices.sides(), 3);
        assert_eq!(vertices.as_str(), "0,0 10,0 5,10");
    }

    #[test]
    fn test_vertex_list_irregular_whitespace() {
        let vertices = VertexList::new("  0,0\n\t10,0   10,10  0,10 ");
        assert_eq!(vertices.sides(), 4);
        assert_eq!(
            vertices.tokens().collect::<Vec<_>>(),
            vec!["0,0", "10,0", "10,10", "0,10"]
        );
    }

    #[test]
    fn test_operation_messages() {
        assert_eq!(Operation::Convert.start_message(), "Starting batch conversion...");
        assert_eq!(Operation::Strip.start_message(), "Starting cleanup...");
        assert_eq!(Operation::Strip.verb(), "clean");
    }

    #[test]
    fn test_batch_summary() {
        let mut summary = BatchSummary::default();
        assert!(summary.is_success());

        summary.record(true);
        summary.record(true);
        summary.record(false);

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 3);
        assert!(!summary.is_success());
    }
}
