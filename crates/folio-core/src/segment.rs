pub type SegmentSeq = Vec<Segment>;

/// One typed, ordered unit of formatter output.
///
/// A segmentation re-annotates substrings of the input with semantic type
/// and never alters content: concatenating [`Segment::source`] over a
/// sequence, in order, reproduces the input string exactly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    /// Literal text, displayed verbatim.
    Text(String),
    /// A bare URL recognized inline, rendered as a hyperlink whose visible
    /// label is the URL itself.
    Link { url: String },
    /// An inline `![alt](src)` image reference.
    Image { alt: String, src: String },
}

impl Segment {
    /// The exact substring of the input this segment was produced from.
    pub fn source(&self) -> String {
        match self {
            Segment::Text(value) => value.clone(),
            Segment::Link { url } => url.clone(),
            Segment::Image { alt, src } => format!("![{}]({})", alt, src),
        }
    }
}

/// Reassembles the original input from a segmentation.
pub fn reconstruct(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(value) => out.push_str(value),
            Segment::Link { url } => out.push_str(url),
            Segment::Image { alt, src } => {
                out.push_str("![");
                out.push_str(alt);
                out.push_str("](");
                out.push_str(src);
                out.push(')');
            }
        }
    }
    out
}
