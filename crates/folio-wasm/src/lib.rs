use folio_core::{Segment, render_text, segment};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum JsSegment {
    #[serde(rename_all = "camelCase")]
    Text { value: String },
    #[serde(rename_all = "camelCase")]
    Link { url: String },
    #[serde(rename_all = "camelCase")]
    Image { alt_text: String, source: String },
}

impl From<Segment> for JsSegment {
    fn from(item: Segment) -> Self {
        match item {
            Segment::Text(value) => JsSegment::Text { value },
            Segment::Link { url } => JsSegment::Link { url },
            Segment::Image { alt, src } => JsSegment::Image {
                alt_text: alt,
                source: src,
            },
        }
    }
}

/// Segments `text` and returns an array of typed segment objects.
#[wasm_bindgen]
pub fn segment_text(text: &str) -> Result<JsValue, JsValue> {
    let segments: Vec<JsSegment> = segment(text).into_iter().map(JsSegment::from).collect();
    serde_wasm_bindgen::to_value(&segments).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Segments `text` and renders it as an inline HTML fragment.
#[wasm_bindgen]
pub fn render_fragment(text: &str) -> String {
    render_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_segments_serialize_with_camel_case_tags() {
        let segments: Vec<JsSegment> = segment("Look ![x](y.png) at https://a.com")
            .into_iter()
            .map(JsSegment::from)
            .collect();
        let value = serde_json::to_value(&segments).expect("serialize");
        assert_eq!(value[0]["kind"], "text");
        assert_eq!(value[1]["kind"], "image");
        assert_eq!(value[1]["altText"], "x");
        assert_eq!(value[1]["source"], "y.png");
        assert_eq!(value[3]["kind"], "link");
        assert_eq!(value[3]["url"], "https://a.com");
    }

    #[test]
    fn fragment_matches_the_core_renderer() {
        let text = "caption with https://a.com";
        assert_eq!(render_fragment(text), folio_core::render_text(text));
    }
}
