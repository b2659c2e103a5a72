//! Text normalization: tokenization, tagging, stop-word filtering and lemmatization

use crate::error::{AnalystError, Result};
use crate::processing::lexicon;
use crate::processing::tagger::{is_punctuation, RuleTagger};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Coarse part-of-speech classes emitted by an [`Annotator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Verb,
    Noun,
    Adj,
    Adv,
    Adp,
    Aux,
    Conj,
    Det,
    Num,
    Part,
    Pron,
    Punct,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
}

/// Tokenizer + tagger + lemmatizer seam. Implementations must be deterministic.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Vec<Token>;
}

/// Shared, read-only text pipeline injected into every analysis
#[derive(Clone)]
pub struct TextPipeline {
    annotator: Arc<dyn Annotator>,
    stop_words: Arc<HashSet<String>>,
}

impl TextPipeline {
    /// Build a pipeline around `annotator`, extending the stop-word list with `extra_stop_words`
    pub fn new(annotator: Arc<dyn Annotator>, extra_stop_words: &[String]) -> Result<Self> {
        let mut stop_words: HashSet<String> = lexicon::ENGLISH_STOP_WORDS
            .iter()
            .chain(lexicon::DOMAIN_STOP_WORDS)
            .map(|w| w.to_string())
            .collect();

        for word in extra_stop_words {
            let word = word.trim().to_lowercase();
            if word.is_empty() {
                return Err(AnalystError::PipelineInit(
                    "Extra stop words must not be blank".to_string(),
                ));
            }
            stop_words.insert(word);
        }

        // Annotate once so a broken annotator fails here, not mid-run
        if annotator.annotate("build systems").is_empty() {
            return Err(AnalystError::PipelineInit(
                "Annotator produced no tokens for a sample sentence".to_string(),
            ));
        }

        Ok(Self {
            annotator,
            stop_words: Arc::new(stop_words),
        })
    }

    /// Pipeline backed by the built-in rule tagger
    pub fn with_defaults(extra_stop_words: &[String]) -> Result<Self> {
        Self::new(Arc::new(RuleTagger::new()?), extra_stop_words)
    }

    /// Lower-case and turn tag-like underscores into spaces
    pub fn prepare(text: &str) -> String {
        text.to_lowercase().replace('_', " ")
    }

    /// Tagged tokens, nothing filtered
    pub fn annotate(&self, text: &str) -> Vec<Token> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.annotator.annotate(&Self::prepare(text))
    }

    /// Tagged tokens with stop words and punctuation removed
    pub fn content_tokens(&self, text: &str) -> Vec<Token> {
        self.annotate(text)
            .into_iter()
            .filter(|token| self.keeps(token))
            .map(|mut token| {
                token.lemma = token.lemma.to_lowercase();
                token
            })
            .collect()
    }

    /// Cleaned lemma sequence, in input order, duplicates preserved
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.content_tokens(text)
            .into_iter()
            .map(|token| token.lemma)
            .collect()
    }

    /// Verb-tagged tokens in `text`, stop words included
    pub fn count_verbs(&self, text: &str) -> usize {
        self.annotate(text)
            .iter()
            .filter(|token| token.pos == PosTag::Verb)
            .count()
    }

    /// Verb count over a list column, each phrase tagged on its own so one
    /// phrase's tail never becomes context for the next phrase's head
    pub fn count_phrase_verbs(&self, phrases: &[String]) -> usize {
        phrases.iter().map(|phrase| self.count_verbs(phrase)).sum()
    }

    fn keeps(&self, token: &Token) -> bool {
        let text = token.text.to_lowercase();
        token.pos != PosTag::Punct && !is_punctuation(&text) && !self.stop_words.contains(&text)
    }
}

impl std::fmt::Debug for TextPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPipeline")
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}
