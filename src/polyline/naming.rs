//! Point-name grammars that encode line membership.

use regex::Regex;
use std::sync::OnceLock;

/// `<base>-L<line#>-P<1|2>`: one end of a two-point surveyed segment.
fn line_endpoint_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<base>.+)-L(?P<line>\d+)-P(?P<end>[12])$").expect("static line pattern")
    })
}

/// `<base>-P<seq>`: one vertex of an open chain.
fn chain_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?P<base>.+)-P(?P<seq>\d+)$").expect("static chain pattern"))
}

/// Which grammar a name matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineGrammar {
    Segment,
    Chain,
}

/// Group key and position decoded from a point name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineName {
    pub grammar: LineGrammar,
    /// `<base>-L<line#>` for segments, `<base>` for chains.
    pub line_id: String,
    pub sequence: u64,
}

/// Decode a point name. The segment grammar is tried first, so a name such as
/// `Lot-L3-P2` is never read as vertex 2 of chain `Lot-L3`.
pub fn parse_line_name(name: &str) -> Option<LineName> {
    let name = name.trim();
    if let Some(caps) = line_endpoint_pattern().captures(name) {
        let sequence = caps["end"].parse().ok()?;
        return Some(LineName {
            grammar: LineGrammar::Segment,
            line_id: format!("{}-L{}", &caps["base"], &caps["line"]),
            sequence,
        });
    }
    let caps = chain_pattern().captures(name)?;
    let sequence = caps["seq"].parse().ok()?;
    Some(LineName {
        grammar: LineGrammar::Chain,
        line_id: caps["base"].to_owned(),
        sequence,
    })
}

/// `true` when `name` follows the two-point segment grammar.
pub fn is_line_endpoint_name(name: &str) -> bool {
    line_endpoint_pattern().is_match(name.trim())
}

/// Trailing ASCII digits of `name` as an integer (`"P12"` → 12).
pub fn numeric_suffix(name: &str) -> Option<u64> {
    let name = name.trim_end();
    let digits = name
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    name[name.len() - digits..].parse().ok()
}
