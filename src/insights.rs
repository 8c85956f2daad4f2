//! Derived text statistics for generated content
//!
//! A pure function over an output string: word, character, sentence, and
//! paragraph counts plus estimated reading time and density. Recomputed on
//! every display; nothing here is cached or persisted.

use serde::Serialize;

/// Words per minute used for the reading time estimate
const READING_WORDS_PER_MINUTE: usize = 200;

/// Derived statistics over a text blob
///
/// Identical input text always yields identical statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextInsights {
    /// Count of maximal whitespace-delimited non-empty tokens
    pub word_count: usize,
    /// Total character count
    pub char_count: usize,
    /// Count of non-blank lines
    pub paragraph_count: usize,
    /// Count of non-empty segments split on runs of `.`, `!`, `?`
    pub sentence_count: usize,
    /// Estimated reading time, `ceil(words / 200)` minutes
    pub read_time_minutes: usize,
    /// `round(words / sentences)`, 0 when there are no sentences
    pub words_per_sentence: usize,
    /// `round(words / chars * 100)`, 0 when the text is empty
    pub density_percent: usize,
}

impl TextInsights {
    /// Compute statistics for a text blob
    ///
    /// # Examples
    ///
    /// ```
    /// use draftgen::insights::TextInsights;
    ///
    /// let insights = TextInsights::from_text("One. Two. Three.");
    /// assert_eq!(insights.word_count, 3);
    /// assert_eq!(insights.sentence_count, 3);
    /// assert_eq!(insights.words_per_sentence, 1);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let word_count = text.split_whitespace().count();
        let char_count = text.chars().count();
        let paragraph_count = text.lines().filter(|l| !l.trim().is_empty()).count();
        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();

        let read_time_minutes = word_count.div_ceil(READING_WORDS_PER_MINUTE);

        let words_per_sentence = if sentence_count > 0 {
            (word_count as f64 / sentence_count as f64).round() as usize
        } else {
            0
        };

        let density_percent = if char_count > 0 {
            (word_count as f64 / char_count as f64 * 100.0).round() as usize
        } else {
            0
        };

        Self {
            word_count,
            char_count,
            paragraph_count,
            sentence_count,
            read_time_minutes,
            words_per_sentence,
            density_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_simple_sentences() {
        let insights = TextInsights::from_text("One. Two. Three.");
        assert_eq!(insights.word_count, 3);
        assert_eq!(insights.sentence_count, 3);
        assert_eq!(insights.words_per_sentence, 1);
        assert_eq!(insights.read_time_minutes, 1);
    }

    #[test]
    fn test_insights_empty_text_has_no_divisions_by_zero() {
        let insights = TextInsights::from_text("");
        assert_eq!(insights.word_count, 0);
        assert_eq!(insights.char_count, 0);
        assert_eq!(insights.paragraph_count, 0);
        assert_eq!(insights.sentence_count, 0);
        assert_eq!(insights.read_time_minutes, 0);
        assert_eq!(insights.words_per_sentence, 0);
        assert_eq!(insights.density_percent, 0);
    }

    #[test]
    fn test_insights_whitespace_only() {
        let insights = TextInsights::from_text("   \n\t  \n");
        assert_eq!(insights.word_count, 0);
        assert_eq!(insights.paragraph_count, 0);
        assert_eq!(insights.sentence_count, 0);
        // Whitespace still counts as characters
        assert!(insights.char_count > 0);
        assert_eq!(insights.density_percent, 0);
    }

    #[test]
    fn test_insights_paragraphs_skip_blank_lines() {
        let text = "First paragraph.\n\nSecond paragraph.\n   \nThird.";
        let insights = TextInsights::from_text(text);
        assert_eq!(insights.paragraph_count, 3);
    }

    #[test]
    fn test_insights_sentence_punctuation_runs_collapse() {
        // "Wait... what?!" splits into two non-empty segments
        let insights = TextInsights::from_text("Wait... what?!");
        assert_eq!(insights.sentence_count, 2);
    }

    #[test]
    fn test_insights_read_time_rounds_up() {
        let text = "word ".repeat(201);
        let insights = TextInsights::from_text(&text);
        assert_eq!(insights.word_count, 201);
        assert_eq!(insights.read_time_minutes, 2);
    }

    #[test]
    fn test_insights_read_time_exact_boundary() {
        let text = "word ".repeat(200);
        let insights = TextInsights::from_text(&text);
        assert_eq!(insights.read_time_minutes, 1);
    }

    #[test]
    fn test_insights_deterministic() {
        let text = "The quick brown fox jumps over the lazy dog. Again!";
        assert_eq!(TextInsights::from_text(text), TextInsights::from_text(text));
    }

    #[test]
    fn test_insights_char_count_uses_chars_not_bytes() {
        let insights = TextInsights::from_text("héllo");
        assert_eq!(insights.char_count, 5);
    }

    #[test]
    fn test_insights_density_percent() {
        // 2 words, 11 chars -> round(2/11*100) = 18
        let insights = TextInsights::from_text("hello world");
        assert_eq!(insights.word_count, 2);
        assert_eq!(insights.char_count, 11);
        assert_eq!(insights.density_percent, 18);
    }
}
