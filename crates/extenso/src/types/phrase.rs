use std::fmt::{Display, Formatter, Result as FmtResult};

/// A single element of a spelled-out amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A lexicon word such as "vinte" or "milhões".
    Word(&'static str),

    /// The "e" connective.
    And,

    /// A comma separating higher-order scale groups.
    Comma,
}

impl Token {
    /// Get the text of this token.
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Word(word) => word,
            Token::And => "e",
            Token::Comma => ",",
        }
    }
}

/// An ordered sequence of word and connective tokens.
///
/// Phrases are built bottom-up by the speller and rendered with single
/// spaces between tokens, except that a comma attaches to the word before
/// it.
///
/// # Example
///
/// ```
/// use extenso::WordPhrase;
///
/// let mut phrase = WordPhrase::word("dois");
/// phrase.push_word("milhões");
/// phrase.push_comma();
/// phrase.push_word("mil");
/// phrase.push_and();
/// phrase.push_word("um");
///
/// assert_eq!(phrase.to_string(), "dois milhões, mil e um");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPhrase {
    tokens: Vec<Token>,
}

impl WordPhrase {
    /// Returns an empty phrase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a phrase holding a single word.
    pub fn word(word: &'static str) -> Self {
        Self {
            tokens: vec![Token::Word(word)],
        }
    }

    pub fn push_word(&mut self, word: &'static str) {
        self.tokens.push(Token::Word(word));
    }

    pub fn push_and(&mut self) {
        self.tokens.push(Token::And);
    }

    pub fn push_comma(&mut self) {
        self.tokens.push(Token::Comma);
    }

    /// Moves all tokens of `other` to the end of this phrase.
    pub fn append(&mut self, other: WordPhrase) {
        self.tokens.extend(other.tokens);
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of "e" connectives in the phrase.
    pub fn and_count(&self) -> usize {
        self.tokens.iter().filter(|t| **t == Token::And).count()
    }
}

impl Display for WordPhrase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, token) in self.tokens.iter().enumerate() {
            // " , " collapses to ", "
            if i > 0 && *token != Token::Comma {
                f.write_str(" ")?;
            }
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}

impl From<WordPhrase> for String {
    fn from(phrase: WordPhrase) -> Self {
        phrase.to_string()
    }
}
