use crate::segment::{Segment, SegmentSeq};

/// Splits `text` into an ordered sequence of [`Segment`]s.
///
/// Image references are extracted first, over the whole input; the leftover
/// text runs are then scanned independently for bare URLs, so a URL inside
/// an image's alt or src is never recognized as a separate link. The
/// function is total: malformed syntax falls through to plain text, the
/// empty string yields an empty sequence, and empty text sub-runs (two
/// matches with nothing between them) are dropped.
pub fn segment(text: &str) -> SegmentSeq {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;
    let mut last = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'!' {
            if let Some(image) = match_image(text, i) {
                split_urls(&text[last..i], &mut out);
                out.push(Segment::Image {
                    alt: image.alt,
                    src: image.src,
                });
                i = image.end;
                last = image.end;
                continue;
            }
        }
        i += 1;
    }
    split_urls(&text[last..], &mut out);
    out
}

struct ImageMatch {
    alt: String,
    src: String,
    end: usize,
}

/// Matches `![alt](src)` starting at `start`. The alt text is any run of
/// characters excluding `]`, the source any run excluding `)`; both may be
/// empty. The delimiters are ASCII, so every slice boundary here is a char
/// boundary.
fn match_image(text: &str, start: usize) -> Option<ImageMatch> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'!') || bytes.get(start + 1) != Some(&b'[') {
        return None;
    }
    let alt_start = start + 2;
    let alt_end = find_byte(bytes, alt_start, b']')?;
    if bytes.get(alt_end + 1) != Some(&b'(') {
        return None;
    }
    let src_start = alt_end + 2;
    let src_end = find_byte(bytes, src_start, b')')?;
    Some(ImageMatch {
        alt: text[alt_start..alt_end].to_string(),
        src: text[src_start..src_end].to_string(),
        end: src_end + 1,
    })
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|b| *b == needle)
        .map(|offset| from + offset)
}

/// Scans one text run for bare URLs and pushes the resulting text and link
/// segments in order. Empty runs contribute nothing.
fn split_urls(run: &str, out: &mut Vec<Segment>) {
    let bytes = run.as_bytes();
    let mut i = 0usize;
    let mut last = 0usize;
    while i < bytes.len() {
        if !run.is_char_boundary(i) {
            i += 1;
            continue;
        }
        if at_token_start(bytes, i) {
            if let Some(end) = match_url(run, i) {
                if i > last {
                    out.push(Segment::Text(run[last..i].to_string()));
                }
                out.push(Segment::Link {
                    url: run[i..end].to_string(),
                });
                i = end;
                last = end;
                continue;
            }
        }
        i += 1;
    }
    if last < run.len() {
        out.push(Segment::Text(run[last..].to_string()));
    }
}

// A bare URL must begin its token: at the start of the run, after
// whitespace, or after an opening bracket or quote.
fn at_token_start(bytes: &[u8], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    let prev = bytes[i - 1];
    prev.is_ascii_whitespace() || matches!(prev, b'(' | b'[' | b'{' | b'"' | b'\'')
}

/// Matches a bare URL at `start` and returns its end offset. The span is
/// delimited by whitespace, then trailing sentence punctuation and
/// unbalanced closing brackets are given back to the surrounding text. A
/// token that is nothing but scheme is not a link.
fn match_url(run: &str, start: usize) -> Option<usize> {
    let bytes = run.as_bytes();
    let scheme_len = if run[start..].starts_with("https://") {
        "https://".len()
    } else if run[start..].starts_with("http://") {
        "http://".len()
    } else {
        return None;
    };
    let mut end = start + scheme_len;
    while end < bytes.len() && !bytes[end].is_ascii_whitespace() {
        end += 1;
    }
    let end = trim_trailing(bytes, start, end);
    if end <= start + scheme_len {
        return None;
    }
    Some(end)
}

fn trim_trailing(bytes: &[u8], start: usize, mut end: usize) -> usize {
    while end > start {
        match bytes[end - 1] {
            b'.' | b',' | b';' | b':' | b'!' | b'?' => end -= 1,
            _ => break,
        }
    }
    for (open, close) in [(b'(', b')'), (b'[', b']'), (b'{', b'}')] {
        if end > start && bytes[end - 1] == close {
            end = trim_unbalanced(bytes, start, end, open, close);
        }
    }
    end
}

fn trim_unbalanced(bytes: &[u8], start: usize, mut end: usize, open: u8, close: u8) -> usize {
    let mut opens = 0usize;
    let mut closes = 0usize;
    for b in &bytes[start..end] {
        if *b == open {
            opens += 1;
        } else if *b == close {
            closes += 1;
        }
    }
    while end > start && bytes[end - 1] == close && closes > opens {
        end -= 1;
        closes -= 1;
    }
    end
}
