/// Words carrying no mood signal, dropped before encoding
pub const STOP_WORDS: [&str; 16] = [
    "i", "am", "the", "is", "and", "a", "to", "of", "in", "for", "on", "with", "as", "by", "at",
    "an",
];

/// Cleans raw mood text into the token stream the classifier was trained on.
///
/// Keeps ASCII letters only, lowercases, and removes [`STOP_WORDS`].
/// Apostrophes are dropped rather than split, so "I'm" becomes "im".
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    cleaned
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
