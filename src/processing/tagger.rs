//! Rule-based part-of-speech tagger and lemmatizer
//!
//! Tags are assigned from closed-class word lists, a verb lexicon with
//! inflection handling, and suffix heuristics. Words that match nothing are
//! nouns, which is the right default for skill tags and tool names.

use crate::error::{AnalystError, Result};
use crate::processing::lexicon;
use crate::processing::text_pipeline::{Annotator, PosTag, Token};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

pub struct RuleTagger {
    verbs: HashSet<&'static str>,
    ambiguous: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    determiners: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    irregular_verbs: HashMap<&'static str, &'static str>,
    irregular_nouns: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
    number_regex: Regex,
}

impl RuleTagger {
    pub fn new() -> Result<Self> {
        let number_regex = Regex::new(r"^[+-]?\d[\d.,%]*[kKmM+]?$")
            .map_err(|e| AnalystError::PipelineInit(format!("Invalid number pattern: {}", e)))?;

        let tagger = Self {
            verbs: lexicon::VERBS.iter().copied().collect(),
            ambiguous: lexicon::NOUN_VERB_AMBIGUOUS.iter().copied().collect(),
            adjectives: lexicon::ADJECTIVES.iter().copied().collect(),
            adverbs: lexicon::ADVERBS.iter().copied().collect(),
            determiners: lexicon::DETERMINERS.iter().copied().collect(),
            prepositions: lexicon::PREPOSITIONS.iter().copied().collect(),
            pronouns: lexicon::PRONOUNS.iter().copied().collect(),
            conjunctions: lexicon::CONJUNCTIONS.iter().copied().collect(),
            auxiliaries: lexicon::AUXILIARIES.iter().copied().collect(),
            irregular_verbs: lexicon::IRREGULAR_VERBS.iter().copied().collect(),
            irregular_nouns: lexicon::IRREGULAR_NOUNS.iter().copied().collect(),
            invariant: lexicon::INVARIANT_TERMS.iter().copied().collect(),
            number_regex,
        };

        if let Some(word) = tagger.ambiguous.iter().find(|w| !tagger.verbs.contains(*w)) {
            return Err(AnalystError::PipelineInit(format!(
                "Ambiguous word '{}' is missing from the verb lexicon",
                word
            )));
        }
        if tagger.verbs.is_empty() {
            return Err(AnalystError::PipelineInit("Verb lexicon is empty".to_string()));
        }

        Ok(tagger)
    }

    /// Split text into word and punctuation tokens, dropping whitespace.
    ///
    /// Trailing `+`/`#` runs stay on their word ("c++", "c#") and a dot that
    /// opens a word stays on it (".net").
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut at_boundary = true;
        let mut leading_dot = false;

        for (start, segment) in text.split_word_bound_indices() {
            if segment.trim().is_empty() {
                at_boundary = true;
                leading_dot = false;
                continue;
            }

            let is_word = segment.chars().any(char::is_alphanumeric);
            let glued = match spans.last() {
                Some(&(from, to)) if to == start => {
                    let suffix_run = segment.chars().all(|c| c == '+' || c == '#')
                        && text[from..to].chars().any(char::is_alphanumeric);
                    suffix_run || (leading_dot && is_word)
                }
                _ => false,
            };
            leading_dot = at_boundary && segment == ".";
            at_boundary = false;

            let end = start + segment.len();
            match spans.last_mut() {
                Some(last) if glued => last.1 = end,
                _ => spans.push((start, end)),
            }
        }

        spans.into_iter().map(|(from, to)| &text[from..to]).collect()
    }

    fn tag_word(&self, word: &str, previous: Option<PosTag>) -> (PosTag, String) {
        if is_punctuation(word) {
            return (PosTag::Punct, word.to_string());
        }
        if self.number_regex.is_match(word) {
            return (PosTag::Num, word.to_string());
        }
        if word == "to" {
            return (PosTag::Part, word.to_string());
        }
        if self.auxiliaries.contains(word) {
            let lemma = self.irregular_verbs.get(word).copied().unwrap_or(word);
            return (PosTag::Aux, lemma.to_string());
        }
        if self.determiners.contains(word) {
            return (PosTag::Det, word.to_string());
        }
        if self.pronouns.contains(word) {
            return (PosTag::Pron, word.to_string());
        }
        if self.conjunctions.contains(word) {
            return (PosTag::Conj, word.to_string());
        }
        if self.prepositions.contains(word) {
            return (PosTag::Adp, word.to_string());
        }
        if self.adverbs.contains(word) {
            return (PosTag::Adv, word.to_string());
        }

        // "secure" opens an imperative but modifies a noun mid-phrase
        if self.adjectives.contains(word) && !clause_start(previous) {
            return (PosTag::Adj, adjective_lemma(word).to_string());
        }
        if let Some(base) = self.verb_base(word) {
            return self.resolve_verb(word, base, previous);
        }

        if self.adjectives.contains(word) {
            return (PosTag::Adj, adjective_lemma(word).to_string());
        }
        if self.looks_adverbial(word) {
            return (PosTag::Adv, word.to_string());
        }
        if looks_adjectival(word) {
            return (PosTag::Adj, word.to_string());
        }
        // Clause-initial "-ize"/"-ify"/"-ate" words are imperatives ("modernize", "consolidate")
        if clause_start(previous) && looks_verbal(word) {
            return (PosTag::Verb, word.to_string());
        }

        (PosTag::Noun, self.noun_lemma(word))
    }

    fn resolve_verb(&self, word: &str, base: &str, previous: Option<PosTag>) -> (PosTag, String) {
        let nominal_context = matches!(
            previous,
            Some(PosTag::Det) | Some(PosTag::Adj) | Some(PosTag::Adp) | Some(PosTag::Num)
        );

        // Gerunds after a noun phrase read as nouns ("data engineering")
        if word.ends_with("ing") && (nominal_context || previous == Some(PosTag::Noun)) {
            return (PosTag::Noun, word.to_string());
        }

        // Participles inside a phrase modify the next noun ("build automated pipelines")
        if word.ends_with("ed") && word != base && !clause_start(previous) {
            return (PosTag::Adj, word.to_string());
        }

        // Objects of a verb and heads of a compound are nouns ("write code", "code review")
        if self.ambiguous.contains(base)
            && (nominal_context || matches!(previous, Some(PosTag::Noun) | Some(PosTag::Verb)))
        {
            return (PosTag::Noun, self.noun_lemma(word));
        }
        if matches!(previous, Some(PosTag::Det) | Some(PosTag::Adj)) {
            return (PosTag::Noun, self.noun_lemma(word));
        }

        (PosTag::Verb, base.to_string())
    }

    /// Base form of `word` if it is an inflection of a known verb
    fn verb_base(&self, word: &str) -> Option<&'static str> {
        if let Some(&base) = self.verbs.get(word) {
            return Some(base);
        }
        if let Some(&base) = self.irregular_verbs.get(word) {
            if self.verbs.contains(base) {
                return Some(base);
            }
        }

        let mut candidates = Vec::new();
        if let Some(stem) = word.strip_suffix("ies") {
            candidates.push(format!("{}y", stem));
        }
        if let Some(stem) = word.strip_suffix("ied") {
            candidates.push(format!("{}y", stem));
        }
        if let Some(stem) = word.strip_suffix("es") {
            candidates.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix('s') {
            candidates.push(stem.to_string());
        }
        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                candidates.push(stem.to_string());
                candidates.push(format!("{}e", stem));
                if let Some(single) = undouble(stem) {
                    candidates.push(single);
                }
            }
        }

        candidates
            .iter()
            .find_map(|candidate| self.verbs.get(candidate.as_str()).copied())
    }

    fn noun_lemma(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular_nouns.get(word) {
            return lemma.to_string();
        }
        if self.invariant.contains(word)
            || word.len() <= 3
            || word.chars().any(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '#'))
        {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        for suffix in ["sses", "xes", "ches", "shes", "zes"] {
            if word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }
        if ["ss", "us", "sis", "xis"].iter().any(|suffix| word.ends_with(suffix)) {
            return word.to_string();
        }
        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word.to_string(),
        }
    }

    fn looks_adverbial(&self, word: &str) -> bool {
        match word.strip_suffix("ly") {
            Some(stem) if stem.len() >= 3 => {
                self.adjectives.contains(stem)
                    || ["al", "ive", "ous", "ent", "ant", "ate", "ful", "ic", "ib", "ab"]
                        .iter()
                        .any(|suffix| stem.ends_with(suffix))
            }
            _ => false,
        }
    }
}

impl Annotator for RuleTagger {
    fn annotate(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut previous = None;

        for word in self.tokenize(text) {
            let (pos, lemma) = self.tag_word(word, previous);
            previous = Some(pos);
            tokens.push(Token {
                text: word.to_string(),
                lemma,
                pos,
            });
        }

        tokens
    }
}

/// True when every character is ASCII or typographic punctuation
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_punctuation() || lexicon::EXTRA_PUNCTUATION.contains(&c))
}

fn clause_start(previous: Option<PosTag>) -> bool {
    matches!(
        previous,
        None | Some(PosTag::Punct) | Some(PosTag::Conj) | Some(PosTag::Part)
    )
}

fn looks_verbal(word: &str) -> bool {
    word.len() > 5 && ["ize", "yse", "ify", "ate"].iter().any(|suffix| word.ends_with(suffix))
}

fn looks_adjectival(word: &str) -> bool {
    word.len() > 5
        && ["able", "ible", "ful", "ous", "ive", "less", "ical", "ional", "ish"]
            .iter()
            .any(|suffix| word.ends_with(suffix))
}

fn adjective_lemma(word: &str) -> &str {
    match word {
        "better" | "best" => "good",
        other => other,
    }
}

/// "runn" -> "run", "shipp" -> "ship"
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), Some(before)) if last == before && !"aeiouls".contains(last) => {
            Some(stem[..stem.len() - last.len_utf8()].to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        let tagger = RuleTagger::new().unwrap();
        tagger
            .annotate(text)
            .into_iter()
            .map(|t| (t.lemma, t.pos))
            .collect()
    }

    #[test]
    fn test_imperative_responsibilities() {
        let result = tags("build apis deploy services");

        assert_eq!(
            result,
            vec![
                ("build".to_string(), PosTag::Verb),
                ("api".to_string(), PosTag::Noun),
                ("deploy".to_string(), PosTag::Verb),
                ("service".to_string(), PosTag::Noun),
            ]
        );
    }

    #[test]
    fn test_ambiguous_words_follow_context() {
        let result = tags("design the design");
        assert_eq!(result[0].1, PosTag::Verb);
        assert_eq!(result[1].1, PosTag::Det);
        assert_eq!(result[2].1, PosTag::Noun);
    }

    #[test]
    fn test_inflected_verbs_are_lemmatized() {
        let result: Vec<(String, PosTag)> = ["running", "shipped", "writes", "built"]
            .iter()
            .flat_map(|word| tags(word))
            .collect();
        let lemmas: Vec<&str> = result.iter().map(|(l, _)| l.as_str()).collect();

        assert_eq!(lemmas, vec!["run", "ship", "write", "build"]);
        assert!(result.iter().all(|(_, pos)| *pos == PosTag::Verb));
    }

    #[test]
    fn test_modifiers_inside_a_phrase_are_adjectives() {
        let phrases = [
            "build secure apis",
            "build automated pipelines",
            "design distributed systems",
        ];
        for phrase in phrases {
            let result = tags(phrase);
            assert_eq!(result[0].1, PosTag::Verb, "{}", phrase);
            assert_eq!(result[1].1, PosTag::Adj, "{}", phrase);
            assert_eq!(result[2].1, PosTag::Noun, "{}", phrase);
        }
        assert_eq!(tags("secure the platform")[0].1, PosTag::Verb);
        assert_eq!(tags("the automated tests")[1].1, PosTag::Adj);
    }

    #[test]
    fn test_tool_names_stay_intact() {
        let result = tags("kubernetes aws postgres node.js");
        let lemmas: Vec<&str> = result.iter().map(|(l, _)| l.as_str()).collect();

        assert_eq!(lemmas, vec!["kubernetes", "aws", "postgres", "node.js"]);
        assert!(result.iter().all(|(_, pos)| *pos == PosTag::Noun));
    }

    #[test]
    fn test_adjectives_and_punctuation() {
        let result = tags("scalable, reliable systems");

        assert_eq!(result[0].1, PosTag::Adj);
        assert_eq!(result[1].1, PosTag::Punct);
        assert_eq!(result[2].1, PosTag::Adj);
        assert_eq!(result[3], ("system".to_string(), PosTag::Noun));
    }

    #[test]
    fn test_verbs_beyond_the_core_list() {
        let phrases = [
            "oversee cloud migrations",
            "take ownership",
            "bring clarity",
            "grew revenue",
        ];
        for phrase in phrases {
            assert_eq!(tags(phrase)[0].1, PosTag::Verb, "{}", phrase);
        }
        assert_eq!(tags("took ownership")[0].0, "take");
        assert_eq!(tags("consolidate dashboards")[0], ("consolidate".to_string(), PosTag::Verb));
    }

    #[test]
    fn test_objects_and_compounds_are_nouns() {
        let result = tags("run code review");
        assert_eq!(
            result.iter().map(|(_, pos)| *pos).collect::<Vec<_>>(),
            vec![PosTag::Verb, PosTag::Noun, PosTag::Noun]
        );

        let result = tags("drive design decisions");
        assert_eq!(result[1], ("design".to_string(), PosTag::Noun));

        let result = tags("maintain the build");
        assert_eq!(result[2], ("build".to_string(), PosTag::Noun));
    }

    #[test]
    fn test_coordinated_verbs_stay_verbs() {
        let result = tags("design and run services");

        assert_eq!(result[0].1, PosTag::Verb);
        assert_eq!(result[2].1, PosTag::Verb);
        assert_eq!(result[3], ("service".to_string(), PosTag::Noun));
    }

    #[test]
    fn test_tokenizer_keeps_language_suffixes() {
        let tagger = RuleTagger::new().unwrap();

        assert_eq!(tagger.tokenize("c++ c# .net"), vec!["c++", "c#", ".net"]);
        assert_eq!(tagger.tokenize("f#, c++."), vec!["f#", ",", "c++", "."]);
        assert_eq!(tagger.tokenize("5+ years"), vec!["5+", "years"]);
        assert_eq!(tagger.tokenize("done. next"), vec!["done", ".", "next"]);
    }

    #[test]
    fn test_punctuation_detection() {
        assert!(is_punctuation("\u{2014}"));
        assert!(is_punctuation("..."));
        assert!(!is_punctuation("c++"));
        assert!(!is_punctuation(""));
    }
}
