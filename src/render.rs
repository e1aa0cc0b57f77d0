use crate::types::PredictionRecord;

pub const INPUT_PLACEHOLDER: &str = "Start typing to generate images...";

/// Generation time as shown in the caption, e.g. `1.234` -> `1234ms`.
pub fn format_predict_time(seconds: f64) -> String {
    format!("{}ms", (seconds * 1000.0).round() as i64)
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_cell(out: &mut String, index: usize, record: &PredictionRecord, image_size: u32) {
    let key = record.primary_output().unwrap_or_default();
    out.push_str(&format!(
        r#"<div class="grid-item" data-key="{}">"#,
        html_escape(key)
    ));

    // non-succeeded records are never appended today; they still get a cell
    if let (true, Some(src)) = (record.is_succeeded(), record.primary_output()) {
        out.push_str(&format!(
            r#"<img src="{}" alt="Generated image {}" width="{image_size}" height="{image_size}">"#,
            html_escape(src),
            index + 1
        ));
        if let Some(seconds) = record.predict_time() {
            out.push_str(&format!(
                r#"<div class="caption">{}</div>"#,
                format_predict_time(seconds)
            ));
        }
    }

    out.push_str("</div>");
}

/// Renders the result grid. One cell per record, in list order.
pub fn render_grid(results: &[PredictionRecord], image_size: u32) -> String {
    let mut out = String::from(r#"<div class="grid">"#);
    for (index, record) in results.iter().enumerate() {
        render_cell(&mut out, index, record, image_size);
    }
    out.push_str("</div>");
    out
}

const PAGE_STYLE: &str = r#"
body { margin: 0; min-height: 100vh; background: #111827; display: flex; flex-direction: column; font-family: sans-serif; }
header { background: #1f2937; padding: 1rem; position: sticky; top: 0; z-index: 10; box-shadow: 0 2px 4px rgba(0,0,0,.4); }
textarea { width: 100%; box-sizing: border-box; padding: .5rem; background: transparent; color: #fff; border: none; font-size: 1.25rem; overflow: hidden; resize: none; }
textarea::placeholder { color: #9ca3af; }
.grid { columns: 1; column-gap: 0; }
@media (min-width: 640px) { .grid { columns: 2; } }
@media (min-width: 768px) { .grid { columns: 3; } }
.grid-item { position: relative; overflow: hidden; break-inside: avoid; }
.grid-item img { display: block; width: 100%; height: auto; object-fit: cover; }
.caption { position: absolute; bottom: 0; left: 0; background: rgba(0,0,0,.7); color: #d1d5db; font-size: .75rem; padding: .25rem .5rem; pointer-events: none; }
"#;

const PAGE_SCRIPT: &str = r#"
const input = document.getElementById('prompt');
const grid = document.getElementById('results');
// requests may reach the server out of order; seq lets it drop stale ones
input.addEventListener('input', () => {
  seq += 1;
  fetch('/input', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ text: input.value, seq })
  });
});
async function refresh() {
  try {
    const res = await fetch('/grid');
    if (res.ok) grid.innerHTML = await res.text();
  } catch (_) {}
}
setInterval(refresh, 1000);
"#;

/// Full page: the text field on top, the grid below. `seq_base` is the last
/// input sequence number the server applied, so a reloaded page keeps
/// counting upwards.
pub fn render_page(
    input_text: &str,
    seq_base: u64,
    results: &[PredictionRecord],
    image_size: u32,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>promptgrid</title>
<style>{PAGE_STYLE}</style>
</head>
<body>
<header><textarea id="prompt" placeholder="{placeholder}">{text}</textarea></header>
<main id="results">{grid}</main>
<script>let seq = {seq_base};</script>
<script>{PAGE_SCRIPT}</script>
</body>
</html>
"#,
        placeholder = INPUT_PLACEHOLDER,
        text = html_escape(input_text),
        grid = render_grid(results, image_size),
    )
}
