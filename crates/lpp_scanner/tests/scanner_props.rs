//! Property tests for the scanner.

use lpp_scanner::{Scanner, Token, TokenKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn whitespace_only_is_eof(source in "[ \t\r\n]{0,64}") {
        let mut scanner = Scanner::new(&source);
        prop_assert_eq!(scanner.next_token(), Token::eof());
        prop_assert_eq!(scanner.next_token(), Token::eof());
    }

    #[test]
    fn letter_run_is_one_identifier(
        word in "[A-Za-z_]{1,24}",
        lead in "[ \t\n]{0,4}",
        trail in "[ \t\n;]{0,4}",
    ) {
        prop_assume!(TokenKind::from_keyword(&word).is_none());
        let source = format!("{lead}{word}{trail}");
        let mut scanner = Scanner::new(&source);
        prop_assert_eq!(scanner.next_token(), Token::new(TokenKind::Ident, word));
    }

    #[test]
    fn digit_run_is_one_integer(
        digits in "[0-9]{1,24}",
        lead in "[ \t\n]{0,4}",
        trail in "[ \t\n+;]{0,4}",
    ) {
        let source = format!("{lead}{digits}{trail}");
        let mut scanner = Scanner::new(&source);
        prop_assert_eq!(scanner.next_token(), Token::new(TokenKind::Int, digits));
    }

    #[test]
    fn literals_cover_all_non_whitespace(source in any::<String>()) {
        let tokens: Vec<Token> = Scanner::new(&source).collect();
        let joined: String = tokens.iter().map(|t| t.literal.as_str()).collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
        prop_assert!(tokens.iter().all(|t| !t.literal.is_empty()));
    }

    #[test]
    fn eof_is_sticky(source in "[a-z0-9=<>!+*/(){},; ]{0,48}", extra in 1usize..8) {
        let mut scanner = Scanner::new(&source);
        while !scanner.next_token().is_eof() {}
        for _ in 0..extra {
            prop_assert_eq!(scanner.next_token(), Token::eof());
        }
    }

    #[test]
    fn peek_never_moves_cursor(source in any::<String>(), steps in 0usize..16) {
        let mut scanner = Scanner::new(&source);
        for _ in 0..steps {
            scanner.next_token();
        }
        let before = (scanner.position(), scanner.read_position(), scanner.current_char());
        let _ = scanner.peek();
        let after = (scanner.position(), scanner.read_position(), scanner.current_char());
        prop_assert_eq!(before, after);
        prop_assert_eq!(scanner.read_position(), scanner.position() + 1);
    }

    #[test]
    fn one_diagnostic_per_illegal_token(source in any::<String>()) {
        let mut scanner = Scanner::new(&source);
        let illegal = scanner.by_ref().filter(|t| t.kind == TokenKind::Illegal).count();
        prop_assert_eq!(scanner.diagnostics().len(), illegal);
    }
}
