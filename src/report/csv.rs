use std::borrow::Cow;

use crate::pipeline::Analysis;

const HEADER: [&str; 5] = ["File A", "File B", "Cosine", "Jaccard", "Levenshtein"];

/// One row per result, then a blank row, a `=== STATISTICS ===` marker and
/// one `Key,Value` row per statistics entry.
pub fn render_csv(analysis: &Analysis) -> String {
    let mut out = String::new();
    push_row(&mut out, HEADER);

    for r in &analysis.results {
        push_row(
            &mut out,
            [
                r.file_a.as_str(),
                r.file_b.as_str(),
                &format!("{:.4}", r.cosine),
                &format!("{:.4}", r.jaccard),
                &format!("{:.4}", r.levenshtein),
            ],
        );
    }

    out.push_str("\r\n");
    push_row(&mut out, ["=== STATISTICS ==="]);
    if let Some(stats) = &analysis.statistics {
        for (key, value) in stats.entries() {
            push_row(&mut out, [title_case(key).as_str(), &format!("{value:.4}")]);
        }
    }
    out
}

fn push_row<const N: usize>(out: &mut String, fields: [&str; N]) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(field));
    }
    out.push_str("\r\n");
}

/// RFC 4180 quoting: fields containing a delimiter, quote or line break are
/// wrapped in quotes with inner quotes doubled.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// `cosine_mean` → `Cosine Mean`.
fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
