use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Normalized, deduplicated words of a text. Compared as a set, never by order.
pub type TokenSet = HashSet<String>;

/// Whitespace and punctuation that always stands alone. Hyphens, dots and
/// apostrophes are not here, so `action-packed` or `u.s.` stay one word and
/// are later rejected as non-alphanumeric.
static SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\s,;:!?()\[\]{}"“”<>@#$%&]+|--+"#).unwrap());

/// Contraction suffixes split off a word and discarded (`hero's` -> `hero`).
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Standard English stop words: articles, pronouns, prepositions, auxiliaries
/// and the fragments left over from splitting contractions.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(token: &str) -> bool {
    STOP_SET.contains(token)
}

/// Drops a trailing contraction suffix, keeping the word it was attached to.
fn strip_clitic(word: &str) -> &str {
    if let Some(stem) = word.strip_suffix("n't") {
        return stem;
    }
    match word.rfind('\'') {
        Some(idx) if CLITICS.contains(&&word[idx..]) => &word[..idx],
        _ => word,
    }
}

/// Splits lowercased text into words: separated by whitespace and standalone
/// punctuation, with sentence-final dots, surrounding quotes and contraction
/// suffixes removed. Compound words keep their inner `-`, `.` and `'`.
fn words(text: &str) -> impl Iterator<Item = &str> {
    SPLIT_RE
        .split(text)
        .map(|piece| {
            piece
                .trim_start_matches(['\'', '`'])
                .trim_end_matches(['.', '\''])
        })
        .map(strip_clitic)
        .filter(|word| !word.is_empty())
}

/// Converts text into its [`TokenSet`].
///
/// Lowercases, splits into words, keeps only fully alphanumeric words and
/// drops stop words. `None` (an absent value) yields an empty set.
pub fn normalize(text: Option<&str>) -> TokenSet {
    let Some(text) = text else {
        return TokenSet::new();
    };

    let lowered = text.to_lowercase().replace('’', "'");
    words(&lowered)
        .filter(|word| word.chars().all(char::is_alphanumeric))
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
