//! Sentence-level placeholder segmentation.
//!
//! Splits paragraph text into lossless sentence spans that downstream
//! consumers use as translation-unit anchors. The split never modifies the
//! input; concatenating the returned span texts reproduces it byte for byte.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum trimmed length (in chars) a segment must have to stand alone.
/// Shorter segments merge into the previous one to avoid fragments.
const MIN_SEGMENT_CHARS: usize = 12;

/// Runs of terminal punctuation that close a sentence. Covers CJK sentence
/// enders, their ASCII counterparts, semicolons, and both the full-width and
/// ASCII periods.
static TERMINAL_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。！？!?；;．.]+").unwrap());

/// A sentence-level span of a paragraph's plain text.
///
/// Spans are contiguous, non-overlapping, and partition the paragraph text
/// exactly: `text[start..end]` equals `text` verbatim, and span `N + 1`
/// starts where span `N` ends. Offsets are byte offsets into the paragraph
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderSpan {
    /// Contiguous span index, 0..N-1.
    pub index: usize,

    /// The span text, exactly as it appears in the paragraph.
    pub text: String,

    /// Byte offset of the span start in the paragraph text.
    pub start: usize,

    /// Byte offset one past the span end.
    pub end: usize,
}

/// Split paragraph text into sentence placeholder spans.
///
/// Each run of terminal punctuation closes a segment reaching back to the
/// previous boundary; a remainder after the last match becomes the final
/// segment. Segments whose trimmed length is under [`MIN_SEGMENT_CHARS`]
/// merge into the segment before them (the first segment has no previous and
/// stays as-is), and indices are reassigned contiguously afterwards.
///
/// Returns an empty vector for empty input. For any non-empty input the
/// returned spans partition it exactly.
///
/// # Example
///
/// ```
/// use undocx::segment::build_sentence_placeholders;
///
/// let spans = build_sentence_placeholders("Hello world. Second sentence!");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].text, "Hello world.");
/// assert_eq!(spans[1].text, " Second sentence!");
/// ```
pub fn build_sentence_placeholders(input: &str) -> Vec<PlaceholderSpan> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut parts: Vec<PlaceholderSpan> = Vec::new();
    let mut last = 0usize;
    for m in TERMINAL_PUNCT.find_iter(input) {
        let end = m.end();
        push_span(&mut parts, input, last, end);
        last = end;
    }
    if last < input.len() {
        push_span(&mut parts, input, last, input.len());
    }

    // Merge fragments into their predecessor, then renumber.
    let mut merged: Vec<PlaceholderSpan> = Vec::with_capacity(parts.len());
    for span in parts {
        let too_short = span.text.trim().chars().count() < MIN_SEGMENT_CHARS;
        match merged.last_mut() {
            Some(prev) if too_short => {
                prev.text.push_str(&span.text);
                prev.end = span.end;
            }
            _ => merged.push(span),
        }
    }
    for (i, span) in merged.iter_mut().enumerate() {
        span.index = i;
    }
    merged
}

fn push_span(parts: &mut Vec<PlaceholderSpan>, input: &str, start: usize, end: usize) {
    if end > start {
        parts.push(PlaceholderSpan {
            index: parts.len(),
            text: input[start..end].to_string(),
            start,
            end,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(spans: &[PlaceholderSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(build_sentence_placeholders("").is_empty());
    }

    #[test]
    fn test_single_sentence() {
        let spans = build_sentence_placeholders("Just one sentence here.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].index, 0);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, "Just one sentence here.".len());
    }

    #[test]
    fn test_two_sentences() {
        let spans = build_sentence_placeholders("Hello world. Second sentence!");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Hello world.");
        assert_eq!(spans[1].text, " Second sentence!");
        assert_eq!(spans[0].end, spans[1].start);
    }

    #[test]
    fn test_cjk_punctuation() {
        let input = "这是第一句非常长的话。这是第二句同样很长的话！短。";
        let spans = build_sentence_placeholders(input);
        assert_eq!(reassemble(&spans), input);
        // The trailing two-char fragment merges into the previous span.
        assert!(spans.last().unwrap().text.ends_with("短。"));
    }

    #[test]
    fn test_short_segments_merge() {
        let spans = build_sentence_placeholders("This is a long first sentence. Ok! No. Fine?");
        assert_eq!(spans.len(), 1);
        assert_eq!(
            spans[0].text,
            "This is a long first sentence. Ok! No. Fine?"
        );
    }

    #[test]
    fn test_round_trip_exact_partition() {
        let inputs = [
            "Hello world. Second sentence!",
            "no punctuation at all",
            "trailing spaces after stop.   ",
            "！leading punct？mixed 句子。tail",
            "a.b.c.d.e.f.",
            "   ",
        ];
        for input in inputs {
            let spans = build_sentence_placeholders(input);
            assert_eq!(reassemble(&spans), input, "round trip for {input:?}");
            let mut cursor = 0;
            for (i, span) in spans.iter().enumerate() {
                assert_eq!(span.index, i);
                assert_eq!(span.start, cursor);
                assert_eq!(&input[span.start..span.end], span.text);
                cursor = span.end;
            }
            assert_eq!(cursor, input.len());
        }
    }

    #[test]
    fn test_merge_law() {
        // After a long opener, no later segment stays under the minimum.
        let spans =
            build_sentence_placeholders("A first sentence well over the minimum. Hi! Also no. Ok?");
        for span in &spans[1..] {
            assert!(span.text.trim().chars().count() >= MIN_SEGMENT_CHARS);
        }
    }

    #[test]
    fn test_punctuation_runs_stay_together() {
        let spans = build_sentence_placeholders("Is this really the question here?!?!");
        assert_eq!(spans.len(), 1);
        assert!(spans[0].text.ends_with("?!?!"));
    }
}
