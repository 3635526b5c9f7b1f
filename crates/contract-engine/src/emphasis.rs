//! Selective-bold partition
//!
//! Splits rendered paragraph text into bold and plain fragments based on a
//! fixed phrase set. The phrase set is constant for a whole document pass,
//! so the alternation pattern is compiled once per document.

use regex::Regex;
use shared_types::{EmphasisSpan, FirmConfig};

/// The phrases that must render bold, compiled into one alternation.
///
/// Phrases are sorted by descending length before compilation so a longer
/// phrase always beats any shorter phrase that is its substring: the regex
/// engine tries alternatives in order at each position.
#[derive(Debug, Clone)]
pub struct EmphasisSet {
    pattern: Option<Regex>,
}

impl EmphasisSet {
    /// Active set for one document: the firm's fixed bold phrases, the
    /// firm name, the signatory names, and the subject's full name when
    /// non-empty.
    pub fn for_document(firm: &FirmConfig, subject_name: &str) -> Self {
        let mut phrases: Vec<String> = firm.bold_phrases.clone();
        phrases.push(firm.name.clone());
        phrases.extend(firm.signatories.iter().map(|s| s.name.clone()));
        if !subject_name.trim().is_empty() {
            phrases.push(subject_name.to_string());
        }
        Self::from_phrases(phrases)
    }

    pub fn from_phrases(mut phrases: Vec<String>) -> Self {
        phrases.retain(|p| !p.is_empty());
        phrases.sort_unstable();
        phrases.dedup();
        // Longest first, so substring phrases never shadow a longer match.
        phrases.sort_by(|a, b| b.len().cmp(&a.len()));

        if phrases.is_empty() {
            return Self { pattern: None };
        }

        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        Self {
            pattern: Some(Regex::new(&alternation).unwrap()),
        }
    }

    /// Partition `text` into spans, keeping matched phrases as bold spans
    /// and the gaps as plain spans. Empty fragments are dropped, so the
    /// concatenation of the result always equals `text`.
    pub fn partition(&self, text: &str) -> Vec<EmphasisSpan> {
        let pattern = match &self.pattern {
            Some(pattern) => pattern,
            None => return vec![EmphasisSpan::plain(text)],
        };

        let mut spans = Vec::new();
        let mut last = 0;

        for hit in pattern.find_iter(text) {
            if hit.start() > last {
                spans.push(EmphasisSpan::plain(&text[last..hit.start()]));
            }
            spans.push(EmphasisSpan::bold(hit.as_str()));
            last = hit.end();
        }

        if last < text.len() {
            spans.push(EmphasisSpan::plain(&text[last..]));
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn set(phrases: &[&str]) -> EmphasisSet {
        EmphasisSet::from_phrases(phrases.iter().map(|p| p.to_string()).collect())
    }

    fn rebuild(spans: &[EmphasisSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_partition_bolds_phrases_in_place() {
        let spans = set(&["PROCURAÇÃO", "JOÃO SILVA"])
            .partition("PROCURAÇÃO outorgada por JOÃO SILVA hoje");

        assert_eq!(
            spans,
            vec![
                EmphasisSpan::bold("PROCURAÇÃO"),
                EmphasisSpan::plain(" outorgada por "),
                EmphasisSpan::bold("JOÃO SILVA"),
                EmphasisSpan::plain(" hoje"),
            ]
        );
    }

    #[test]
    fn test_no_phrase_yields_one_plain_span() {
        let spans = set(&["PROCURAÇÃO"]).partition("texto sem destaque");
        assert_eq!(spans, vec![EmphasisSpan::plain("texto sem destaque")]);
    }

    #[test]
    fn test_longer_phrase_beats_its_substring() {
        let spans = set(&["ADVOGADOS", "SILVEIRO ADVOGADOS"])
            .partition("perante a SILVEIRO ADVOGADOS, nesta data");

        assert_eq!(
            spans,
            vec![
                EmphasisSpan::plain("perante a "),
                EmphasisSpan::bold("SILVEIRO ADVOGADOS"),
                EmphasisSpan::plain(", nesta data"),
            ]
        );
    }

    #[test]
    fn test_adjacent_phrases_stay_separate_spans() {
        let spans = set(&["OUTORGANTE:", "PROCURAÇÃO"]).partition("PROCURAÇÃOOUTORGANTE:");
        assert_eq!(
            spans,
            vec![
                EmphasisSpan::bold("PROCURAÇÃO"),
                EmphasisSpan::bold("OUTORGANTE:"),
            ]
        );
    }

    #[test]
    fn test_empty_phrase_set_is_all_plain() {
        let spans = set(&[]).partition("qualquer texto");
        assert_eq!(spans, vec![EmphasisSpan::plain("qualquer texto")]);
    }

    #[test]
    fn test_for_document_includes_subject_name() {
        let firm = shared_types::FirmConfig::default();
        let spans = EmphasisSet::for_document(&firm, "JOÃO DA SILVA")
            .partition("OUTORGANTE: JOÃO DA SILVA, brasileiro");

        assert_eq!(
            spans,
            vec![
                EmphasisSpan::bold("OUTORGANTE:"),
                EmphasisSpan::plain(" "),
                EmphasisSpan::bold("JOÃO DA SILVA"),
                EmphasisSpan::plain(", brasileiro"),
            ]
        );
    }

    #[test]
    fn test_for_document_skips_blank_subject_name() {
        let firm = shared_types::FirmConfig::default();
        let spans = EmphasisSet::for_document(&firm, "   ").partition("texto comum");
        assert_eq!(spans, vec![EmphasisSpan::plain("texto comum")]);
    }

    proptest! {
        #[test]
        fn partition_concatenation_reproduces_the_text(
            text in r"[A-Za-zÀ-ÿ0-9 ,.:;]{0,120}"
        ) {
            let spans = set(&["PROCURAÇÃO", "OUTORGANTE:", "SILVEIRO ADVOGADOS"])
                .partition(&text);
            prop_assert_eq!(rebuild(&spans), text);
        }
    }
}
