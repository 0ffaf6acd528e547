//! Query normalization: C tokens in, one comparable string out.

use super::lexer::{Lexer, TokenKind};

/// Tokenizes a raw query, keeping only identifiers and single-character
/// punctuation.
///
/// Literals, comments, multi-character operators and unlexable residue are
/// dropped, so `int  foo(char*)` and `int foo ( char * )` produce the same
/// tokens.
pub fn tokenize(raw_query: &str) -> Vec<String> {
    Lexer::new(raw_query)
        .filter_map(|token| match token.kind {
            TokenKind::Identifier | TokenKind::Punct => Some(token.text.to_owned()),
            TokenKind::Residue => {
                tracing::trace!("Dropping unlexable query residue {:?}", token.text);
                None
            }
            _ => None,
        })
        .collect()
}

/// Joins tokens with a space after each one, the last included.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut normalized = String::with_capacity(tokens.iter().map(|t| t.as_ref().len() + 1).sum());
    for token in tokens {
        normalized.push_str(token.as_ref());
        normalized.push(' ');
    }
    normalized
}

/// `normalize(tokenize(raw_query))`
pub fn normalize_query(raw_query: &str) -> String {
    normalize(&tokenize(raw_query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn test_call_shape() {
        check!(tokenize("foo(int)") == vec!["foo", "(", "int", ")"]);
        check!(normalize_query("foo(int)") == "foo ( int ) ");
    }

    #[rstest]
    #[case("int  foo(char*)", "int foo ( char * ) ")]
    #[case("int foo ( char * )", "int foo ( char * ) ")]
    #[case("void f(int x = 42)", "void f ( int x = ) ")]
    #[case("char *p = \"text\"; // note", "char * p = ; ")]
    #[case("node->next", "node next ")]
    #[case("a /* skip */ b", "a b ")]
    #[case("size_t café", "size_t café ")]
    #[case("size_t\u{7}x", "size_t x ")]
    fn test_discarded_classes(#[case] input: &str, #[case] expected: &str) {
        check!(normalize_query(input) == expected);
    }

    #[test]
    fn test_case_is_preserved() {
        check!(tokenize("HashMap hashmap") == vec!["HashMap", "hashmap"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        check!(tokenize("").is_empty());
        check!(normalize_query("").is_empty());
        check!(normalize_query("   \n\t").is_empty());
        check!(normalize_query("42 \"str\" /* c */").is_empty());
    }

    #[rstest]
    #[case("foo(int)")]
    #[case("int  foo(char*, unsigned long)")]
    #[case("a->b <<= 3 && !c")]
    #[case("x . 5 .5 'q' \"unterminated")]
    #[case("/* only a comment")]
    #[case("日本 🦀 Москва")]
    #[case("# define X 1")]
    #[case("")]
    fn test_normalization_is_idempotent(#[case] input: &str) {
        let once = normalize_query(input);
        check!(normalize_query(&once) == once);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let query = "struct point *make(int, int)";
        check!(tokenize(query) == tokenize(query));
    }
}
