use folio_core::{Segment, reconstruct, segment};

fn text(value: &str) -> Segment {
    Segment::Text(value.to_string())
}

fn link(url: &str) -> Segment {
    Segment::Link {
        url: url.to_string(),
    }
}

fn image(alt: &str, src: &str) -> Segment {
    Segment::Image {
        alt: alt.to_string(),
        src: src.to_string(),
    }
}

#[test]
fn empty_input_yields_empty_sequence() {
    assert_eq!(segment(""), Vec::<Segment>::new());
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(segment("hello world"), vec![text("hello world")]);
}

#[test]
fn single_image() {
    assert_eq!(
        segment("![a caption](img.png)"),
        vec![image("a caption", "img.png")]
    );
}

#[test]
fn single_url_with_surrounding_text() {
    assert_eq!(
        segment("see https://example.com for details"),
        vec![
            text("see "),
            link("https://example.com"),
            text(" for details"),
        ]
    );
}

#[test]
fn mixed_segments_preserve_order() {
    assert_eq!(
        segment("Look ![x](y.png) then visit https://a.com now"),
        vec![
            text("Look "),
            image("x", "y.png"),
            text(" then visit "),
            link("https://a.com"),
            text(" now"),
        ]
    );
}

#[test]
fn adjacent_images_produce_no_empty_text() {
    assert_eq!(
        segment("![a](b.png)![c](d.png)"),
        vec![image("a", "b.png"), image("c", "d.png")]
    );
}

#[test]
fn url_inside_image_alt_is_not_a_link() {
    assert_eq!(
        segment("![see https://x.com](img.png)"),
        vec![image("see https://x.com", "img.png")]
    );
}

#[test]
fn url_inside_image_src_is_not_a_link() {
    assert_eq!(
        segment("go ![x](https://a.com/i.png) now"),
        vec![text("go "), image("x", "https://a.com/i.png"), text(" now")]
    );
}

#[test]
fn alt_and_src_may_be_empty() {
    assert_eq!(segment("![]()"), vec![image("", "")]);
}

#[test]
fn alt_may_span_lines() {
    assert_eq!(
        segment("![two\nlines](x.png)"),
        vec![image("two\nlines", "x.png")]
    );
}

#[test]
fn unclosed_bracket_falls_through_to_text() {
    assert_eq!(segment("![unclosed(img.png"), vec![text("![unclosed(img.png")]);
}

#[test]
fn missing_parens_fall_through_to_text() {
    assert_eq!(segment("an ![alt] alone"), vec![text("an ![alt] alone")]);
}

#[test]
fn unclosed_src_falls_through_to_text() {
    assert_eq!(segment("![alt](oops"), vec![text("![alt](oops")]);
}

#[test]
fn url_recognized_immediately_after_image() {
    assert_eq!(
        segment("![a](b.png)https://x.com/y"),
        vec![image("a", "b.png"), link("https://x.com/y")]
    );
}

#[test]
fn http_scheme_is_recognized() {
    assert_eq!(
        segment("plain http://old.example works"),
        vec![text("plain "), link("http://old.example"), text(" works")]
    );
}

#[test]
fn url_must_begin_its_token() {
    assert_eq!(segment("xhttps://a.com"), vec![text("xhttps://a.com")]);
}

#[test]
fn scheme_only_token_is_text() {
    assert_eq!(
        segment("http:// is a prefix"),
        vec![text("http:// is a prefix")]
    );
}

#[test]
fn trailing_sentence_punctuation_stays_text() {
    assert_eq!(
        segment("read https://a.com/docs."),
        vec![text("read "), link("https://a.com/docs"), text(".")]
    );
}

#[test]
fn parenthesized_url_gives_back_the_closing_paren() {
    assert_eq!(
        segment("(https://a.com)"),
        vec![text("("), link("https://a.com"), text(")")]
    );
}

#[test]
fn balanced_parens_inside_a_url_are_kept() {
    assert_eq!(
        segment("see https://en.example/wiki/Rust_(language) here"),
        vec![
            text("see "),
            link("https://en.example/wiki/Rust_(language)"),
            text(" here"),
        ]
    );
}

#[test]
fn punctuation_then_paren_are_both_given_back() {
    assert_eq!(
        segment("(try https://a.com)."),
        vec![text("(try "), link("https://a.com"), text(").")]
    );
}

#[test]
fn consecutive_urls_keep_their_separator() {
    assert_eq!(
        segment("https://a.com https://b.com"),
        vec![link("https://a.com"), text(" "), link("https://b.com")]
    );
}

#[test]
fn reconstruction_round_trips() {
    let inputs = [
        "",
        "hello world",
        "![a caption](img.png)",
        "see https://example.com for details",
        "Look ![x](y.png) then visit https://a.com now",
        "![a](b.png)![c](d.png)",
        "![see https://x.com](img.png)",
        "read https://a.com/docs.",
        "(https://a.com)",
        "![unclosed(img.png",
        "http:// is a prefix",
        "café ![crème](façade.png) voilà https://é.example/π now",
        "!![double](bang.png)",
    ];
    for input in inputs {
        assert_eq!(reconstruct(&segment(input)), input, "input: {:?}", input);
    }
}

#[test]
fn no_empty_text_segments_are_emitted() {
    let inputs = [
        "![a](b)![c](d)",
        "https://a.com![x](y)",
        "![x](y)https://a.com",
        "",
    ];
    for input in inputs {
        for item in segment(input) {
            if let Segment::Text(value) = item {
                assert!(!value.is_empty(), "empty text segment for {:?}", input);
            }
        }
    }
}
