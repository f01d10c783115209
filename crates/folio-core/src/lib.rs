mod emit;
mod frontmatter;
mod readtime;
mod segment;
mod segmenter;

pub use emit::{
    HtmlWriter, escape_attr, escape_html, escape_url_attr, render_prose, render_segments,
    render_text,
};
pub use frontmatter::split_front_matter;
pub use readtime::estimate_read_time;
pub use segment::{Segment, SegmentSeq, reconstruct};
pub use segmenter::segment;
