//! A small C lexer for query strings.
//!
//! Classifies input into identifiers, punctuation, operators, literals and
//! comments. Never fails: bytes it cannot classify come back as
//! [`TokenKind::Residue`] and lexing carries on after them.

/// Operators longer than one character, longest first so `<<=` wins over `<<`.
const MULTI_CHAR_OPERATORS: &[&str] = &[
    "<<=", ">>=", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "<<", ">>", "->",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[A-Za-z_$][A-Za-z0-9_$]*`, plus any non-ASCII character.
    Identifier,
    /// A single ASCII punctuation character such as `(` or `*`.
    Punct,
    /// A multi-character operator such as `->` or `<<=`.
    Operator,
    Number,
    Str,
    Char,
    Comment,
    /// Unterminated literals and control bytes.
    Residue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Iterator over the tokens of one input string. Whitespace is skipped.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek_at(0) {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance while `pred` holds for the current byte.
    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek_at(0).is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn line_comment(&mut self) -> TokenKind {
        self.eat_while(|b| b != b'\n');
        TokenKind::Comment
    }

    /// An unterminated block comment runs to the end of input.
    fn block_comment(&mut self) -> TokenKind {
        self.pos = self.src[self.pos + 2..]
            .find("*/")
            .map_or(self.src.len(), |end| self.pos + 2 + end + 2);
        TokenKind::Comment
    }

    /// pp-number: digits, letters, `_`, `.` and a sign right after an exponent.
    fn number(&mut self) -> TokenKind {
        let bytes = self.bytes();
        self.pos += 1;
        while let Some(b) = self.peek_at(0) {
            let signed_exponent =
                matches!(b, b'+' | b'-') && matches!(bytes[self.pos - 1], b'e' | b'E' | b'p' | b'P');
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || signed_exponent {
                self.pos += 1;
            } else {
                break;
            }
        }
        TokenKind::Number
    }

    /// String or character literal. Without a closing quote on the same line
    /// the consumed text is residue.
    fn quoted(&mut self, quote: u8) -> TokenKind {
        let bytes = self.bytes();
        let mut p = self.pos + 1;
        loop {
            match bytes.get(p) {
                None | Some(b'\n') => {
                    self.pos = p;
                    return TokenKind::Residue;
                }
                Some(b'\\') => p = (p + 2).min(bytes.len()),
                Some(&b) if b == quote => {
                    self.pos = p + 1;
                    return if quote == b'"' {
                        TokenKind::Str
                    } else {
                        TokenKind::Char
                    };
                }
                Some(_) => p += 1,
            }
        }
    }

    fn punctuation(&mut self) -> TokenKind {
        let rest = &self.src[self.pos..];
        if let Some(op) = MULTI_CHAR_OPERATORS.iter().find(|op| rest.starts_with(*op)) {
            self.pos += op.len();
            TokenKind::Operator
        } else {
            self.pos += 1;
            TokenKind::Punct
        }
    }

    /// Skip one whole character so positions stay on UTF-8 boundaries.
    fn residue(&mut self) -> TokenKind {
        let width = self.src[self.pos..].chars().next().map_or(1, char::len_utf8);
        self.pos += width;
        TokenKind::Residue
    }
}

/// Bytes of multi-byte UTF-8 characters count as identifier bytes. Every byte
/// of such a character is `>= 0x80`, so a token always ends on a char boundary.
const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

const fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let start = self.pos;
        let first = self.peek_at(0)?;

        let kind = match (first, self.peek_at(1)) {
            (b'/', Some(b'/')) => self.line_comment(),
            (b'/', Some(b'*')) => self.block_comment(),
            (b'.', Some(next)) if next.is_ascii_digit() => self.number(),
            (b, _) if b.is_ascii_digit() => self.number(),
            (b, _) if is_ident_start(b) => {
                self.eat_while(is_ident_continue);
                TokenKind::Identifier
            }
            (b'"' | b'\'', _) => self.quoted(first),
            (b, _) if b.is_ascii_punctuation() => self.punctuation(),
            _ => self.residue(),
        };

        Some(Token {
            kind,
            text: &self.src[start..self.pos],
        })
    }
}
