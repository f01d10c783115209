use crate::segment::Segment;
use crate::segmenter::segment;

const WORDS_PER_MINUTE: usize = 200;

/// Estimates the reading time of a markdown body, e.g. `"3 min read"`.
///
/// Markdown syntax is stripped before counting so decoration does not
/// inflate the estimate: fenced code blocks and inline code are removed,
/// image references are removed, link syntax keeps only its text, and the
/// remaining markdown symbol characters are ignored. The count is taken at
/// 200 words per minute, rounded up, never below one minute.
pub fn estimate_read_time(content: &str) -> String {
    let text = strip_fenced_code(content);
    let text = strip_inline_code(&text);
    let text = strip_images(&text);
    let text = unwrap_links(&text);
    let text = strip_symbols(&text);
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

fn strip_fenced_code(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    loop {
        match rest.find("```") {
            Some(open) => {
                out.push_str(&rest[..open]);
                let after_open = &rest[open + 3..];
                match after_open.find("```") {
                    Some(close) => rest = &after_open[close + 3..],
                    None => {
                        // Unterminated fence: keep it, the author will see it.
                        out.push_str(&rest[open..]);
                        break;
                    }
                }
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}

fn strip_inline_code(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    loop {
        match rest.find('`') {
            Some(open) => {
                out.push_str(&rest[..open]);
                let after_open = &rest[open + 1..];
                match after_open.find('`') {
                    Some(close) => rest = &after_open[close + 1..],
                    None => {
                        out.push_str(&rest[open..]);
                        break;
                    }
                }
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}

// The segmenter already knows the image syntax; drop its image matches and
// keep everything else verbatim.
fn strip_images(text: &str) -> String {
    segment(text)
        .into_iter()
        .filter(|item| !matches!(item, Segment::Image { .. }))
        .map(|item| item.source())
        .collect()
}

/// Replaces `[text](url)` with `text`. Runs after image stripping, so any
/// remaining bracket pair is a plain link.
fn unwrap_links(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut i = 0usize;
    let mut last = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some(link) = match_link(text, i) {
                out.push_str(&text[last..i]);
                out.push_str(link.text);
                i = link.end;
                last = link.end;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[last..]);
    out
}

struct LinkMatch<'a> {
    text: &'a str,
    end: usize,
}

fn match_link(text: &str, start: usize) -> Option<LinkMatch<'_>> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'[') {
        return None;
    }
    let text_start = start + 1;
    let text_end = find_byte(bytes, text_start, b']')?;
    if bytes.get(text_end + 1) != Some(&b'(') {
        return None;
    }
    let url_end = find_byte(bytes, text_end + 2, b')')?;
    Some(LinkMatch {
        text: &text[text_start..text_end],
        end: url_end + 1,
    })
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|b| *b == needle)
        .map(|offset| from + offset)
}

fn strip_symbols(text: &str) -> String {
    text.chars()
        .filter(|ch| !matches!(ch, '#' | '*' | '_' | '~' | '>' | '`' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_reads_in_one_minute() {
        assert_eq!(estimate_read_time("a few words here"), "1 min read");
    }

    #[test]
    fn word_count_rounds_up() {
        let body = "word ".repeat(201);
        assert_eq!(estimate_read_time(&body), "2 min read");
    }

    #[test]
    fn fenced_code_does_not_count() {
        let mut body = String::from("intro words\n\n```\n");
        body.push_str(&"code ".repeat(400));
        body.push_str("\n```\n\noutro words");
        assert_eq!(estimate_read_time(&body), "1 min read");
    }

    #[test]
    fn inline_code_does_not_count() {
        let body = format!("run `{}` to start", "flag ".repeat(300));
        assert_eq!(estimate_read_time(&body), "1 min read");
    }

    #[test]
    fn image_references_do_not_count() {
        let body = format!("caption test ![{}](shot.png) done", "alt ".repeat(400));
        assert_eq!(estimate_read_time(&body), "1 min read");
    }

    #[test]
    fn link_text_counts_but_url_does_not() {
        let body = format!("see [the docs]({}) today", "x".repeat(2000));
        assert_eq!(estimate_read_time(&body), "1 min read");
    }

    #[test]
    fn markdown_symbols_alone_are_not_words() {
        let body = format!("# Heading\n\n{}\n\nreal words", "- \n".repeat(300));
        assert_eq!(estimate_read_time(&body), "1 min read");
    }

    #[test]
    fn empty_body_still_reports_a_minute() {
        assert_eq!(estimate_read_time(""), "1 min read");
    }
}
