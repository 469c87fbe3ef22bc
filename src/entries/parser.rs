/// One weighted participant line, parsed.
///
/// Entries keep their source order; duplicates are allowed. The raw line is
/// preserved because rigging queues may reference either the bare display
/// name or the exact weighted line.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParticipantEntry {
    /// Original line, trimmed, non-empty.
    pub raw_text: String,
    /// Line text with any trailing weight suffix stripped.
    pub display_name: String,
    /// Positive selection weight; defaults to 1.
    pub weight: u32,
}

/// Parse a free-text participant block into ordered weighted entries.
///
/// Lines are split on `\n`, trimmed, and dropped when empty. A trailing
/// `<name> * <int>` or `<name> x <int>` suffix (case-insensitive separator,
/// whitespace optional) sets the weight. Parsing is deliberately
/// permissive: malformed weight syntax degrades to weight 1 and never
/// blocks a draw.
pub fn parse_entries(text: &str) -> Vec<ParticipantEntry> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse one raw line; `None` when the line is empty after trimming.
pub fn parse_line(line: &str) -> Option<ParticipantEntry> {
    let raw = line.trim();
    if raw.is_empty() {
        return None;
    }

    let (display_name, weight) = match split_weight_suffix(raw) {
        Some((name, weight)) => (name.to_owned(), weight),
        None => (raw.to_owned(), 1),
    };

    Some(ParticipantEntry {
        raw_text: raw.to_owned(),
        display_name,
        weight,
    })
}

/// Match a trailing `* <digits>` / `x <digits>` annotation.
///
/// Scanning from the end is equivalent to the anchored pattern
/// `^(.*?)\s*[*x]\s*(\d+)$`: the digits must terminate the line and the
/// separator is the last `*`/`x` before them. A digit run that fails to
/// parse (overflow) or parses to zero falls back to weight 1 while still
/// stripping the suffix.
fn split_weight_suffix(raw: &str) -> Option<(&str, u32)> {
    let before_digits = raw.trim_end_matches(|c: char| c.is_ascii_digit());
    if before_digits.len() == raw.len() {
        return None;
    }
    let digits = &raw[before_digits.len()..];

    let before_sep = before_digits.trim_end();
    let name = before_sep
        .strip_suffix('*')
        .or_else(|| before_sep.strip_suffix(['x', 'X']))?;

    let weight = match digits.parse::<u32>() {
        Ok(w) if w >= 1 => w,
        _ => 1,
    };
    Some((name.trim_end(), weight))
}

#[cfg(test)]
#[path = "../../tests/unit/entries/parser.rs"]
mod tests;
