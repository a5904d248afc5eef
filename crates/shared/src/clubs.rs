/// Fallback logo shown when no marker-table entry matches a club name.
pub const DEFAULT_LOGO: &str = "/static/images/teams/default_logo.png";

/// Substrings stripped from club names before matching, applied in order.
const STRIP_PATTERNS: [&str; 7] = ["football club", "fc", "afc", "city", "united", ".", "-"];

/// Normalize a club name for fuzzy lookup: lowercase, strip the common
/// suffix words, then discard whitespace so "Man United" and
/// "Manchester United FC" reduce to comparable stems.
pub fn normalize_club_name(name: &str) -> String {
    let mut s = name.to_lowercase();
    for pattern in STRIP_PATTERNS {
        s = s.replace(pattern, "");
    }
    s.split_whitespace().collect()
}

/// Whether two club names refer to the same club: either normalized
/// stem contains the other. Names that normalize to nothing never match.
pub fn clubs_match(a: &str, b: &str) -> bool {
    let a = normalize_club_name(a);
    let b = normalize_club_name(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}
