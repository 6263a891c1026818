use super::RawRow;
use regex::Regex;
use std::sync::OnceLock;

fn separators() -> &'static Regex {
    static SEP: OnceLock<Regex> = OnceLock::new();
    SEP.get_or_init(|| Regex::new(r"[;,\s]+").expect("static separator pattern"))
}

/// Read header-less text where each line is `easting northing [name]`.
///
/// Fields may be separated by commas, semicolons or whitespace. Missing names
/// default to `P<n>` with `n` counting non-empty lines from 1. The returned
/// rows use the canonical `name`/`easting`/`northing` keys and still go
/// through [`normalize_rows`](super::normalize_rows), which drops lines whose
/// coordinates do not parse.
pub fn rows_from_plain_text(text: &str) -> Vec<RawRow> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, line)| {
            let mut parts = separators().split(line).filter(|p| !p.is_empty());
            let easting = parts.next().unwrap_or_default();
            let northing = parts.next().unwrap_or_default();
            let name = parts
                .next()
                .map(str::to_owned)
                .unwrap_or_else(|| format!("P{}", idx + 1));
            let mut row = RawRow::new();
            row.insert("easting".to_owned(), easting.to_owned());
            row.insert("northing".to_owned(), northing.to_owned());
            row.insert("name".to_owned(), name);
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::normalize_rows;

    #[test]
    fn parses_mixed_separators_and_defaults_names() {
        let text = "100.0, 200.0, BM1\n\n101.5;201.5\n102 202   corner\nbad line\n";
        let rows = rows_from_plain_text(text);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1]["name"], "P2");

        let pts = normalize_rows(&rows);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0].name, "BM1");
        assert_eq!(pts[2].name, "corner");
        assert_eq!(pts[2].id, 2);
    }
}
