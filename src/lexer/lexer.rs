use regex::Regex;
use tracing::{debug, trace};

use crate::{Span, MK_TOKEN};

use super::tokens::{Category, Token, RESERVED_LOOKUP};

/// Decides how much of the remainder a rule consumes, given the rule's anchored regex.
pub type MatchHandler = fn(&Regex, &str) -> Option<usize>;

#[derive(Clone)]
pub struct Rule {
    regex: Regex,
    category: Category,
    handler: MatchHandler,
}

impl Rule {
    pub fn new(pattern: &str, category: Category, handler: MatchHandler) -> Rule {
        let anchored = format!("^(?:{})", pattern);

        Rule {
            regex: Regex::new(&anchored)
                .unwrap_or_else(|err| panic!("invalid {} pattern {:?}: {}", category, pattern, err)),
            category,
            handler,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Length in bytes of this rule's match at the start of `remainder`.
    /// Empty matches are reported as no match.
    pub fn match_len(&self, remainder: &str) -> Option<usize> {
        (self.handler)(&self.regex, remainder).filter(|len| *len > 0)
    }
}

/// An ordered rule table. Earlier rules win over later ones at the same offset,
/// whatever the length of their matches.
#[derive(Clone)]
pub struct Tokenizer {
    rules: Vec<Rule>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Tokenizer {
            rules: vec![
                Rule::new("[0-9]+(\\.[0-9]+)?", Category::Number, number_handler),
                Rule::new("\"[^\"\\n]*\"", Category::StringLiteral, default_handler),
                Rule::new("#[^ \\t\\n\\r\\x0B\\x0C]+", Category::PreprocessorDirective, default_handler),
                Rule::new("//[^\\n]*|/\\*(?s:.*?)(?:\\*/|\\z)", Category::Comment, default_handler),
                Rule::new("[a-zA-Z0-9_]{1,10}", Category::ReservedWord, reserved_handler),
                Rule::new("%|\\+\\+|\\+|-|/|\\*|<|>|=|&|\\||\\^|\\?", Category::Operator, default_handler),
                Rule::new("[.,;:{}\\[\\]()]", Category::Punctuation, default_handler),
                Rule::new("[_a-zA-Z][_a-zA-Z0-9]*", Category::Identifier, default_handler),
                Rule::new("\\n", Category::NewLine, default_handler),
                Rule::new(" ", Category::Space, default_handler),
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn scan(&self, source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(source);

        while !scanner.at_eof() {
            let remainder = scanner.remainder();

            if let Some((kind, len)) = self.match_rules(&mut scanner) {
                scanner.push(kind, len);
                continue;
            }

            let Some(ch) = remainder.chars().next() else {
                break;
            };

            if ch == ' ' {
                scanner.advance_n(1);
            } else {
                trace!(offset = scanner.pos, character = ?ch, "unrecognised character");
                scanner.push(Category::Error, ch.len_utf8());
            }
        }

        debug!(bytes = source.len(), tokens = scanner.tokens.len(), "scanned source");
        scanner.tokens
    }

    fn match_rules(&self, scanner: &mut Scanner) -> Option<(Category, usize)> {
        let remainder = scanner.remainder();

        for rule in &self.rules {
            // Every suffix of a digit run ends where the run does, so once a
            // number fails its boundary it fails for the rest of that run.
            if rule.category == Category::Number && scanner.pos < scanner.rejected_digits_end {
                continue;
            }

            if let Some(len) = rule.match_len(remainder) {
                return Some((rule.category, len));
            }

            if rule.category == Category::Number {
                scanner.reject_digits();
            }
        }

        None
    }
}

/// Cursor over one input. Lives for a single scan.
struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    rejected_digits_end: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            tokens: vec![],
            pos: 0,
            rejected_digits_end: 0,
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn push(&mut self, kind: Category, len: usize) {
        let span = Span {
            start: self.pos,
            end: self.pos + len,
        };
        let value = String::from(&self.source[span.start..span.end]);

        self.tokens.push(MK_TOKEN!(kind, value, span));
        self.advance_n(len);
    }

    /// Marks the digit run at the cursor as unable to start a number.
    fn reject_digits(&mut self) {
        let run = self
            .remainder()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        self.rejected_digits_end = self.pos + run;
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn at_word_boundary(remainder: &str, end: usize) -> bool {
    let before = remainder[..end].chars().next_back().is_some_and(is_word_char);
    let after = remainder[end..].chars().next().is_some_and(is_word_char);

    before != after
}

fn default_handler(regex: &Regex, remainder: &str) -> Option<usize> {
    regex.find(remainder).map(|matched| matched.end())
}

// A number must end on a word boundary. When the fraction runs into a word
// character, the integer part alone is tried; `.` always bounds it.
fn number_handler(regex: &Regex, remainder: &str) -> Option<usize> {
    let captures = regex.captures(remainder)?;
    let end = captures.get(0)?.end();

    if at_word_boundary(remainder, end) {
        return Some(end);
    }

    captures
        .get(1)
        .map(|fraction| fraction.start())
        .filter(|end| at_word_boundary(remainder, *end))
}

// The regex stops after ten word characters, past the longest reserved word;
// a word that keeps going is not reserved.
fn reserved_handler(regex: &Regex, remainder: &str) -> Option<usize> {
    let word = regex.find(remainder)?;

    if at_word_boundary(remainder, word.end()) && RESERVED_LOOKUP.contains(word.as_str()) {
        Some(word.end())
    } else {
        None
    }
}

pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new().scan(source)
}

pub fn first_error(tokens: &[Token]) -> Option<&Token> {
    tokens.iter().find(|token| token.is_error())
}
