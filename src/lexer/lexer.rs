use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{
    is_quote, is_symbol_prefix, Token, TokenContents, TokenKind, TokenizedLine,
};

lazy_static! {
    static ref HEX_INTEGER: Regex = Regex::new("^0x([0-9a-fA-F]*)").unwrap();
    static ref DECIMAL_INTEGER: Regex = Regex::new("^[0-9]+").unwrap();
}

pub type LexHandler = fn(&mut Lexer) -> Result<(), ErrorImpl>;

/// Cursor over a single source line.
#[derive(Clone)]
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(%token, "token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Consumes and returns the current character.
    pub fn read(&mut self) -> Option<char> {
        let c = self.at()?;
        self.advance_n(c.len_utf8());
        Some(c)
    }

    pub fn remainder(&self) -> &'a str {
        let source: &'a str = self.source;
        &source[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.at() {
            if !c.is_whitespace() {
                break;
            }
            self.advance_n(c.len_utf8());
        }
    }

    /// Picks the handler for the token starting at the current character,
    /// or `None` when the rest of the line is a comment.
    fn handler_for(c: char) -> Option<LexHandler> {
        if c == '#' {
            None
        } else if c.is_ascii_digit() {
            Some(number_handler)
        } else if is_quote(c) {
            Some(string_handler)
        } else if is_symbol_char(c) {
            Some(symbol_handler)
        } else {
            Some(identifier_handler)
        }
    }
}

fn is_symbol_char(c: char) -> bool {
    let mut buffer = [0u8; 4];
    is_symbol_prefix(c.encode_utf8(&mut buffer))
}

fn is_identifier_char(c: char) -> bool {
    !c.is_whitespace() && !is_symbol_char(c) && !is_quote(c)
}

fn parse_integer(literal: &str, digits: &str, radix: u32) -> Result<u64, ErrorImpl> {
    if digits.is_empty() {
        return Err(ErrorImpl::InvalidInteger {
            literal: literal.to_string(),
        });
    }

    // Digits are already validated by the pattern, so overflow is the only failure left
    u64::from_str_radix(digits, radix).map_err(|_| ErrorImpl::IntegerOverflow {
        literal: literal.to_string(),
    })
}

fn number_handler(lexer: &mut Lexer) -> Result<(), ErrorImpl> {
    let remaining = lexer.remainder();

    let (literal, value) = if let Some(captures) = HEX_INTEGER.captures(remaining) {
        let literal = captures.get(0).map_or("", |m| m.as_str());
        let digits = captures.get(1).map_or("", |m| m.as_str());
        (literal, parse_integer(literal, digits, 16)?)
    } else {
        let literal = DECIMAL_INTEGER.find(remaining).map_or("", |m| m.as_str());
        (literal, parse_integer(literal, literal, 10)?)
    };

    lexer.advance_n(literal.len());
    lexer.push(MK_TOKEN!(TokenKind::Integer, TokenContents::Integer(value)));
    Ok(())
}

fn string_handler(lexer: &mut Lexer) -> Result<(), ErrorImpl> {
    let quote = lexer.read().ok_or(ErrorImpl::UnmatchedQuote)?;
    let mut string = String::new();

    loop {
        let c = lexer.read().ok_or(ErrorImpl::UnmatchedQuote)?;

        if c != quote {
            string.push(c);
            continue;
        }

        // A doubled quote stands for the quote character itself
        if lexer.at() == Some(quote) {
            lexer.read();
            string.push(quote);
        } else {
            break;
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, TokenContents::Text(string)));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer) -> Result<(), ErrorImpl> {
    let mut symbol = String::new();
    if let Some(c) = lexer.read() {
        symbol.push(c);
    }

    while let Some(c) = lexer.at() {
        symbol.push(c);
        if !is_symbol_prefix(&symbol) {
            symbol.pop();
            break;
        }
        lexer.advance_n(c.len_utf8());
    }

    lexer.push(MK_TOKEN!(TokenKind::Symbol, TokenContents::Text(symbol)));
    Ok(())
}

fn identifier_handler(lexer: &mut Lexer) -> Result<(), ErrorImpl> {
    let mut identifier = String::new();
    if let Some(c) = lexer.read() {
        identifier.push(c);
    }

    while let Some(c) = lexer.at() {
        if !is_identifier_char(c) {
            break;
        }
        identifier.push(c);
        lexer.advance_n(c.len_utf8());
    }

    lexer.push(MK_TOKEN!(TokenKind::Identifier, TokenContents::Text(identifier)));
    Ok(())
}

/// Splits one line of source text into tokens.
pub fn tokenize_line(line: &str) -> Result<TokenizedLine, ErrorImpl> {
    let mut lex = Lexer::new(line);

    lex.skip_whitespace();
    while let Some(c) = lex.at() {
        let Some(handler) = Lexer::handler_for(c) else {
            break;
        };

        handler(&mut lex)?;

        lex.skip_whitespace();
    }

    Ok(lex.tokens)
}

/// Tokenizes a whole source text, one entry per `\n`-separated line.
///
/// The result stays index-aligned with the source lines so that the parser
/// can report accurate line numbers. The first failing line aborts the pass.
#[instrument(skip(source), fields(lines = source.split('\n').count()))]
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<TokenizedLine>, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    let mut tokenized_lines = Vec::new();

    for (line_index, line) in source.split('\n').enumerate() {
        let tokenized_line = tokenize_line(line)
            .map_err(|error| Error::new(error, Position::from_index(line_index, &file)))?;

        debug!(line = line_index + 1, tokens = tokenized_line.len(), "line tokenized");
        tokenized_lines.push(tokenized_line);
    }

    Ok(tokenized_lines)
}

/// Renders tokenized lines as a dump: each 1-indexed line number, then its
/// tokens indented by a tab. Line numbers match the ones errors report.
pub fn render_tokens(lines: &[TokenizedLine]) -> String {
    let mut rendered = String::new();

    for (line_index, line) in lines.iter().enumerate() {
        rendered.push_str(&format!("{}\n", line_index + 1));
        for token in line {
            rendered.push_str(&format!("\t{}\n", token));
        }
    }

    rendered
}
