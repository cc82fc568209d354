//! Display-name helpers.
//!
//! Raw names in the game data are sometimes wrapped in a localization
//! marker, `NSLOCTEXT(namespace, key, "literal text")`. Only the literal
//! text is meant for display.

const LOCTEXT_MARKER: &str = "NSLOCTEXT(";

/// Extract the literal text from the first well-formed localization marker.
///
/// The marker is `NSLOCTEXT(<arg>, <arg>, "<text>")` where neither
/// argument contains a comma and the text is non-empty and contains no
/// quote. Strings without a well-formed marker are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use codex_stats::display::decode_display_name;
///
/// let raw = r#"NSLOCTEXT("", "5C1A7A1B4D", "Warlord's Regalia")"#;
/// assert_eq!(decode_display_name(raw), "Warlord's Regalia");
/// assert_eq!(decode_display_name("Plain Name"), "Plain Name");
/// ```
pub fn decode_display_name(raw: &str) -> &str {
    let mut search_from = 0;
    while let Some(offset) = raw[search_from..].find(LOCTEXT_MARKER) {
        let args_start = search_from + offset + LOCTEXT_MARKER.len();
        if let Some(text) = parse_loctext_args(&raw[args_start..]) {
            return text;
        }
        search_from = args_start;
    }
    raw
}

/// Parse `<arg>, <arg>, "<text>")` and return `<text>`.
fn parse_loctext_args(rest: &str) -> Option<&str> {
    let rest = skip_argument(rest)?;
    let rest = skip_argument(rest)?;
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;
    if end == 0 || !rest[end + 1..].starts_with(')') {
        return None;
    }
    Some(&rest[..end])
}

/// Skip one non-empty comma-free argument and the `", "` after it.
fn skip_argument(rest: &str) -> Option<&str> {
    let comma = rest.find(',')?;
    if comma == 0 {
        return None;
    }
    rest[comma..].strip_prefix(", ")
}

/// Space out a CamelCase stat name.
///
/// # Examples
///
/// ```rust
/// use codex_stats::display::format_stat_name;
///
/// assert_eq!(format_stat_name("MagicalPowerRating"), "Magical Power Rating");
/// assert_eq!(format_stat_name("MaxHP"), "Max H P");
/// ```
pub fn format_stat_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_string()
}
