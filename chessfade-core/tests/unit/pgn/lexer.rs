use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_tags_move_numbers_and_results() {
    let k = kinds("[Event \"Casual\"]\n1. e4 e5 2.Nf3 1-0");
    assert_eq!(
        k,
        vec![
            TokenKind::Tag {
                name: "Event".to_owned(),
                value: "Casual".to_owned()
            },
            TokenKind::MoveNumber(1),
            TokenKind::San("e4".to_owned()),
            TokenKind::San("e5".to_owned()),
            TokenKind::MoveNumber(2),
            TokenKind::San("Nf3".to_owned()),
            TokenKind::Result(GameResult::WhiteWins),
        ]
    );
}

#[test]
fn tag_values_unescape_quotes_and_backslashes() {
    let k = kinds(r#"[Annotator "The \"Doc\" \\ Smith"]"#);
    assert_eq!(
        k,
        vec![TokenKind::Tag {
            name: "Annotator".to_owned(),
            value: r#"The "Doc" \ Smith"#.to_owned()
        }]
    );
}

#[test]
fn comments_nags_variations_and_annotations() {
    let k = kinds("1. e4 {best by test} $1 (1. d4 d5) 1... c5?! ; sharp\n*");
    assert_eq!(
        k,
        vec![
            TokenKind::MoveNumber(1),
            TokenKind::San("e4".to_owned()),
            TokenKind::Comment("best by test".to_owned()),
            TokenKind::Nag(1),
            TokenKind::VariationStart,
            TokenKind::MoveNumber(1),
            TokenKind::San("d4".to_owned()),
            TokenKind::San("d5".to_owned()),
            TokenKind::VariationEnd,
            TokenKind::MoveNumber(1),
            TokenKind::San("c5".to_owned()),
            TokenKind::Comment("sharp".to_owned()),
            TokenKind::Result(GameResult::Ongoing),
        ]
    );
}

#[test]
fn draw_marker_and_castling_symbols() {
    let k = kinds("30. O-O-O e8=Q+ 1/2-1/2");
    assert_eq!(
        k,
        vec![
            TokenKind::MoveNumber(30),
            TokenKind::San("O-O-O".to_owned()),
            TokenKind::San("e8=Q+".to_owned()),
            TokenKind::Result(GameResult::Draw),
        ]
    );
}

#[test]
fn escape_lines_are_skipped() {
    let k = kinds("% exported by a tool\n1. e4 *");
    assert_eq!(k.len(), 3);
}

#[test]
fn spans_cover_token_text() {
    let input = "12... Nf6";
    let toks = lex(input).unwrap();
    assert_eq!(toks[0].span, Span { start: 0, end: 5 });
    assert_eq!(&input[toks[1].span.start..toks[1].span.end], "Nf6");
}

#[test]
fn malformed_input_reports_offset() {
    let err = lex("1. e4 {never closed").unwrap_err();
    assert!(err.to_string().contains("unterminated comment"));
    assert!(err.to_string().contains("at byte 6"));

    assert!(lex("[Event \"x\"").is_err());
    assert!(lex("[Event x]").is_err());
    assert!(lex("1. e4 @").is_err());
}
