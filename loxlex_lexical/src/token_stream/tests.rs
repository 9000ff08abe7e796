use std::{sync::mpsc, thread};

use loxlex_base::source_file::SourceFile;
use proptest::{prop_assert_eq, proptest};

use super::{spawn, Handoff, TokenStream};
use crate::token::{KeywordKind, Token, TokenKind};

#[test]
fn tokenize_source_file() {
    let source_file = SourceFile::temp("fun f(a, b) { return a >= b; }").unwrap();
    let token_stream = TokenStream::tokenize(source_file.content());

    let kinds = token_stream
        .iter()
        .map(|token| token.kind())
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(KeywordKind::Fun),
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Keyword(KeywordKind::Return),
            TokenKind::Identifier,
            TokenKind::GreaterEqual,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::EndOfInput,
        ]
    );
    assert!(token_stream.error().is_none());
    assert_eq!(token_stream[10].text(), ">=");
}

#[test]
fn tokenize_error() {
    let token_stream = TokenStream::tokenize("x = \"oops");

    assert_eq!(token_stream.len(), 3);
    assert_eq!(
        token_stream.error().map(|token| token.text()),
        Some("unclosed string")
    );
}

#[test]
fn handoff_delivers_every_token() {
    let tokens = spawn("print 1 + 2;").collect::<Vec<_>>();

    let listing = tokens
        .iter()
        .map(|token| format!("{:<10} {}", token.kind(), token.text()))
        .collect::<Vec<_>>();

    assert_eq!(
        listing,
        vec![
            "Print      print",
            "Number     1",
            "Plus       +",
            "Number     2",
            "Semicolon  ;",
            "EOF        ",
        ]
    );
}

#[test]
fn handoff_stops_when_dropped() {
    let source = "a ".repeat(10_000);

    let mut handoff = spawn(source);
    assert_eq!(handoff.next().map(|token| token.kind()), Some(TokenKind::Identifier));

    // joins the scanning thread, which must notice the receiver is gone
    drop(handoff);
}

#[test]
fn handoff_ends_after_error() {
    let mut handoff = spawn("1 ~ 2");

    assert_eq!(handoff.next().map(|token| token.kind()), Some(TokenKind::Number));
    assert_eq!(
        handoff.next().map(|token| token.text().to_string()),
        Some("unexpected character: ~".to_string())
    );
    assert!(handoff.next().is_none());
    assert!(handoff.next().is_none());
}

#[test]
#[should_panic(expected = "scanning thread failed")]
fn handoff_forwards_a_producer_panic() {
    let (sender, receiver) = mpsc::sync_channel::<Token<'static>>(0);
    let producer = thread::spawn(move || {
        drop(sender);
        panic!("scanning thread failed");
    });

    let mut handoff = Handoff {
        receiver: Some(receiver),
        producer: Some(producer),
    };
    assert!(handoff.next().is_none());

    drop(handoff);
}

proptest! {
    #[test]
    fn handoff_matches_tokenize_test(
        source in "[a-z0-9 ()<=!/\"\n.]{0,64}"
    ) {
        let collected = TokenStream::tokenize(&source).dissolve();
        let handed_off = spawn(source.as_str()).collect::<Vec<_>>();

        prop_assert_eq!(collected, handed_off);
    }
}
