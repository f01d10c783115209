/// Splits a leading `---` fenced header from a document.
///
/// Returns the raw header text and the body after the closing fence. The
/// opening fence must be the very first line; without a well-formed fence
/// pair the result is `None` and callers treat the whole input as body.
/// The body split is byte-exact: no bytes are dropped or duplicated.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let header = if let Some(rest) = content.strip_prefix("---\n") {
        rest
    } else if let Some(rest) = content.strip_prefix("---\r\n") {
        rest
    } else {
        return None;
    };

    let close_unix = header.find("\n---\n");
    let close_crlf = header.find("\n---\r\n");
    let (end, fence_len) = match (close_unix, close_crlf) {
        (Some(u), Some(c)) if u <= c => (u, "\n---\n".len()),
        (_, Some(c)) => (c, "\n---\r\n".len()),
        (Some(u), None) => (u, "\n---\n".len()),
        (None, None) => return None,
    };

    Some((&header[..end], &header[end + fence_len..]))
}
