// src/domain/content/analyzer.rs
use std::collections::{HashMap, HashSet};

/// Words that reject a whole content block when any token matches one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannedWords(HashSet<String>);

impl BannedWords {
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        )
    }

    /// `token` must already be lower-cased.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BannedWords {
    fn default() -> Self {
        Self::new(["badword", "badword2"])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentAnalysis {
    pub is_banned: bool,
    pub keywords: Vec<String>,
}

impl ContentAnalysis {
    const fn banned() -> Self {
        Self {
            is_banned: true,
            keywords: Vec::new(),
        }
    }
}

/// Extracts the most frequent words of a text and enforces the banned-word
/// policy. Immutable once built, so one instance is shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct ContentAnalyzer {
    banned: BannedWords,
}

impl ContentAnalyzer {
    #[must_use]
    pub const fn new(banned: BannedWords) -> Self {
        Self { banned }
    }

    #[must_use]
    pub const fn banned_words(&self) -> &BannedWords {
        &self.banned
    }

    /// Lower-cases `text`, splits it on single spaces and returns up to
    /// `max_keywords` tokens ordered by descending frequency. Equal counts keep
    /// the order in which the tokens first appear. Content containing a banned
    /// token yields `is_banned` and no keywords.
    #[must_use]
    pub fn analyze(&self, text: &str, max_keywords: usize) -> ContentAnalysis {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = tokenize(&lowered).collect();

        if tokens.iter().any(|token| self.banned.contains(token)) {
            return ContentAnalysis::banned();
        }

        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for token in tokens {
            let next = counts.len();
            let index = *positions.entry(token).or_insert(next);
            if index == next {
                counts.push((token, 0));
            }
            counts[index].1 += 1;
        }

        // stable: ties stay in first-occurrence order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        ContentAnalysis {
            is_banned: false,
            keywords: counts
                .into_iter()
                .take(max_keywords)
                .map(|(token, _)| token.to_string())
                .collect(),
        }
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

    const VOCABULARY: &[&str] = &[
        "rust", "borrow", "Checker", "async", "await", "TOKIO", "axum", "sqlx", "trait", "impl",
        "the", "a", "of", "badword-ish", "bad", "word",
    ];

    fn analyzer() -> ContentAnalyzer {
        ContentAnalyzer::default()
    }

    fn random_text(rng: &mut StdRng, banned: Option<&str>) -> String {
        let len = rng.gen_range(0..40);
        let mut words: Vec<String> = (0..len)
            .map(|_| (*VOCABULARY.choose(rng).unwrap()).to_string())
            .collect();
        if let Some(word) = banned {
            let at = rng.gen_range(0..=words.len());
            words.insert(at, word.to_string());
        }
        words.join(" ")
    }

    fn frequency(text: &str, token: &str) -> usize {
        let lowered = text.to_lowercase();
        tokenize(&lowered).filter(|t| *t == token).count()
    }

    #[test]
    fn ranks_by_frequency_with_first_occurrence_tie_break() {
        let result = analyzer().analyze("the quick brown fox the quick the", 3);
        assert_eq!(
            result,
            ContentAnalysis {
                is_banned: false,
                keywords: vec!["the".into(), "quick".into(), "brown".into()],
            }
        );
    }

    #[test]
    fn rejects_banned_content() {
        let result = analyzer().analyze("this contains badword here", 3);
        assert!(result.is_banned);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn empty_text_yields_no_keywords() {
        assert_eq!(analyzer().analyze("", 3), ContentAnalysis::default());
    }

    #[test]
    fn zero_limit_yields_no_keywords() {
        let result = analyzer().analyze("one two three", 0);
        assert!(!result.is_banned);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn banned_match_ignores_case() {
        let result = analyzer().analyze("BadWord in caps", 3);
        assert!(result.is_banned);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn punctuation_is_part_of_the_token() {
        let result = analyzer().analyze("badword, again", 3);
        assert!(!result.is_banned);
        assert_eq!(result.keywords, vec!["badword,", "again"]);
    }

    #[test]
    fn repeated_spaces_do_not_produce_empty_keywords() {
        let result = analyzer().analyze("  alpha   beta  alpha ", 5);
        assert_eq!(result.keywords, vec!["alpha", "beta"]);
    }

    #[test]
    fn newlines_are_not_separators() {
        let result = analyzer().analyze("alpha\nbeta alpha\nbeta", 5);
        assert_eq!(result.keywords, vec!["alpha\nbeta"]);
    }

    #[test]
    fn injected_banned_set_replaces_default() {
        let analyzer = ContentAnalyzer::new(BannedWords::new(["Spoiler"]));
        assert!(analyzer.analyze("contains a SPOILER", 3).is_banned);
        assert!(!analyzer.analyze("contains badword", 3).is_banned);
    }

    #[test]
    fn banned_words_are_normalised() {
        let banned = BannedWords::new([" Foo ", "", "BAR"]);
        assert_eq!(banned.len(), 2);
        assert!(banned.contains("foo"));
        assert!(banned.contains("bar"));
    }

    #[test]
    fn clean_text_is_never_banned_and_respects_limit() {
        let analyzer = analyzer();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let text = random_text(&mut rng, None);
            let limit = rng.gen_range(0..6);
            let result = analyzer.analyze(&text, limit);
            assert!(!result.is_banned, "{text:?}");
            assert!(result.keywords.len() <= limit);
        }
    }

    #[test]
    fn any_banned_token_rejects_everything() {
        let analyzer = analyzer();
        let mut rng = StdRng::seed_from_u64(42);
        for word in ["badword", "BADWORD2", "BadWord"] {
            for _ in 0..200 {
                let text = random_text(&mut rng, Some(word));
                let result = analyzer.analyze(&text, 3);
                assert!(result.is_banned, "{text:?}");
                assert!(result.keywords.is_empty());
            }
        }
    }

    #[test]
    fn keywords_are_the_true_top_tokens() {
        let analyzer = analyzer();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let text = random_text(&mut rng, None);
            let limit = rng.gen_range(1..5);
            let result = analyzer.analyze(&text, limit);

            let lowered = text.to_lowercase();
            let distinct: HashSet<&str> = tokenize(&lowered).collect();
            assert_eq!(result.keywords.len(), limit.min(distinct.len()));

            let weakest = result
                .keywords
                .iter()
                .map(|k| frequency(&text, k))
                .min()
                .unwrap_or(usize::MAX);
            for token in distinct {
                if !result.keywords.iter().any(|k| k == token) {
                    assert!(frequency(&text, token) <= weakest, "{text:?} {token:?}");
                }
            }

            let counts: Vec<usize> = result.keywords.iter().map(|k| frequency(&text, k)).collect();
            assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let analyzer = analyzer();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let text = random_text(&mut rng, None);
            assert_eq!(analyzer.analyze(&text, 4), analyzer.analyze(&text, 4));
        }
    }
}
