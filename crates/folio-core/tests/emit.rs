use folio_core::{render_prose, render_text};

fn parse(fragment: &str) -> roxmltree::Document<'_> {
    roxmltree::Document::parse(fragment).expect("fragment parses as XML")
}

#[test]
fn link_markup_carries_the_contract_attributes() {
    let wrapped = format!("<root>{}</root>", render_text("see https://a.com now"));
    let doc = parse(&wrapped);
    let anchor = doc
        .descendants()
        .find(|node| node.has_tag_name("a"))
        .expect("anchor rendered");
    assert_eq!(anchor.attribute("href"), Some("https://a.com"));
    assert_eq!(anchor.attribute("target"), Some("_blank"));
    assert_eq!(anchor.attribute("rel"), Some("noopener noreferrer"));
    assert_eq!(anchor.attribute("class"), Some("Folio-inline-link"));
    // The visible label is the URL itself.
    assert_eq!(anchor.text(), Some("https://a.com"));
}

#[test]
fn image_markup_carries_alt_and_source() {
    let wrapped = format!("<root>{}</root>", render_text("![a caption](img.png)"));
    let doc = parse(&wrapped);
    let img = doc
        .descendants()
        .find(|node| node.has_tag_name("img"))
        .expect("image rendered");
    assert_eq!(img.attribute("src"), Some("img.png"));
    assert_eq!(img.attribute("alt"), Some("a caption"));
    assert_eq!(img.attribute("class"), Some("Folio-inline-image"));
}

#[test]
fn text_is_escaped_and_round_trips_through_the_parser() {
    let rendered = render_text("1 < 2 & \"two\" > one");
    assert!(rendered.contains("&lt;"));
    assert!(rendered.contains("&amp;"));
    let wrapped = format!("<root>{}</root>", rendered);
    let doc = parse(&wrapped);
    let decoded: String = doc
        .root_element()
        .children()
        .filter_map(|node| node.text())
        .collect();
    assert_eq!(decoded, "1 < 2 & \"two\" > one");
}

#[test]
fn image_source_spaces_are_percent_encoded() {
    let wrapped = format!("<root>{}</root>", render_text("![shot](my file.png)"));
    let doc = parse(&wrapped);
    let img = doc
        .descendants()
        .find(|node| node.has_tag_name("img"))
        .expect("image rendered");
    assert_eq!(img.attribute("src"), Some("my%20file.png"));
}

#[test]
fn prose_renders_paragraphs_and_line_breaks() {
    let rendered = render_prose("one\ntwo\n\nthree");
    let wrapped = format!("<root>{}</root>", rendered);
    let doc = parse(&wrapped);
    let paragraphs: Vec<_> = doc
        .descendants()
        .filter(|node| node.has_tag_name("p"))
        .collect();
    assert_eq!(paragraphs.len(), 2);
    assert!(
        paragraphs[0]
            .descendants()
            .any(|node| node.has_tag_name("br"))
    );
    assert_eq!(paragraphs[1].text(), Some("three"));
}

#[test]
fn prose_skips_blank_paragraphs() {
    let rendered = render_prose("one\n\n\n\ntwo");
    assert_eq!(rendered.matches("<p>").count(), 2);
}

#[test]
fn prose_segments_each_line() {
    let rendered = render_prose("caption ![x](y.png)\n\nvisit https://a.com today");
    assert!(rendered.contains("<img class=\"Folio-inline-image\""));
    assert!(rendered.contains("<a class=\"Folio-inline-link\""));
}
