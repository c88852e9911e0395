use crate::domain::search::match_spans;

/// Wraps every match of `query` in `text` with `open` / `close` markers.
pub fn highlight(text: &str, query: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for span in match_spans(text, query) {
        out.push_str(&text[last..span.start]);
        out.push_str(open);
        out.push_str(&text[span.clone()]);
        out.push_str(close);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

pub fn results_line(count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("Showing {count} {noun}")
}
