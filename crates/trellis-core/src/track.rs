//! Track model and delimited-text row parsing
//!
//! A track is one named sequence of token rows, immutable once loaded. Rows
//! come from comma-delimited text, one row per line. A row with zero present
//! tokens is not a valid step and is filtered out during parsing.

/// One cell's content for a given row. The empty string means "absent".
pub type Token = String;

/// One decoding step's worth of tokens.
pub type Row = Vec<Token>;

/// Display sentinel for end-of-text control tokens.
pub const EOT_SENTINEL: &str = "[EoT]";

/// Display sentinel for a literal newline inside a token.
pub const NEWLINE_SENTINEL: &str = "\\n";

/// Control-token literals rewritten to display sentinels at parse time.
const LITERAL_REWRITES: [(&str, &str); 3] = [
    ("<|endoftext|>", EOT_SENTINEL),
    ("<|eot_id|>", EOT_SENTINEL),
    ("\n", NEWLINE_SENTINEL),
];

/// One named sequence of token rows, animated against the shared step cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Stable identifier (the source file path).
    pub id: String,
    /// Display title from the manifest, or the file stem.
    pub title: String,
    /// Ordered rows; may be empty for a degenerate track.
    pub rows: Vec<Row>,
}

impl Track {
    pub fn new(id: impl Into<String>, title: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rows,
        }
    }

    /// Row at `step`, reading out-of-range indices as an empty row.
    pub fn row_at(&self, step: usize) -> &[Token] {
        self.rows.get(step).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The final row, if the track has any rows at all.
    pub fn final_row(&self) -> Option<&[Token]> {
        self.rows.last().map(Vec::as_slice)
    }

    /// Length of the longest row ever seen in this track.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse delimited track text into rows of tokens.
///
/// Splits on newlines, then commas. Control-token literals are rewritten to
/// their display sentinels. Rows whose tokens are all absent are dropped.
pub fn parse_track_rows(text: &str) -> Vec<Row> {
    text.lines()
        .filter_map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let tokens: Row = line.split(',').map(normalize_token).collect();
            if tokens.iter().all(|t| t.is_empty()) {
                None
            } else {
                Some(tokens)
            }
        })
        .collect()
}

fn normalize_token(raw: &str) -> Token {
    let mut token = raw.to_string();
    for (literal, sentinel) in LITERAL_REWRITES {
        if token.contains(literal) {
            token = token.replace(literal, sentinel);
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_rows() {
        let rows = parse_track_rows("a,b,c\nd,e\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b", "c"]);
        assert_eq!(rows[1], vec!["d", "e"]);
    }

    #[test]
    fn test_all_absent_rows_dropped() {
        // Blank lines and comma-only lines carry zero present tokens
        let rows = parse_track_rows("a,b\n\n,,,\nc\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b"]);
        assert_eq!(rows[1], vec!["c"]);
    }

    #[test]
    fn test_missing_fields_collapse_to_absent() {
        let rows = parse_track_rows("a,,c\n");
        assert_eq!(rows[0], vec!["a", "", "c"]);
    }

    #[test]
    fn test_control_literal_rewrites() {
        let rows = parse_track_rows("<|endoftext|>,<|eot_id|>,x\n");
        assert_eq!(rows[0], vec![EOT_SENTINEL, EOT_SENTINEL, "x"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = parse_track_rows("a,b\r\nc\r\n");
        assert_eq!(rows[0], vec!["a", "b"]);
        assert_eq!(rows[1], vec!["c"]);
    }

    #[test]
    fn test_row_at_out_of_range_reads_empty() {
        let track = Track::new("t", "T", vec![vec!["a".to_string()]]);
        assert_eq!(track.row_at(0), ["a".to_string()]);
        assert!(track.row_at(5).is_empty());
    }

    #[test]
    fn test_max_row_len() {
        let track = Track::new(
            "t",
            "T",
            vec![vec!["a".into()], vec!["a".into(), "b".into(), "c".into()]],
        );
        assert_eq!(track.max_row_len(), 3);
        assert_eq!(Track::new("e", "E", vec![]).max_row_len(), 0);
    }
}
