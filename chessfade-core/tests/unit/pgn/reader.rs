use super::*;
use shakmaty::{Color, Piece, Position, Role, Square};

const TWO_GAMES: &str = r#"[Event "First"]
[White "A"]
[Black "B"]

1. e4 e5 2. Nf3 Nc6 1-0

[Event "Second"]

1. d4 {queen pawn} d5 (1... Nf6 2. c4) 2. c4 $2 dxc4 0-1
"#;

#[test]
fn split_games_on_headers_after_movetext() {
    let games = split_games(TWO_GAMES);
    assert_eq!(games.len(), 2);
    assert!(games[0].contains("First"));
    assert!(!games[0].contains("Second"));
    assert!(games[1].starts_with("[Event \"Second\"]"));
}

#[test]
fn split_games_on_results_without_headers() {
    let src = "1. e4 e5 1-0\n1. d4 d5 0-1\n\n1. c4 *\n";
    let games = split_games(src);
    assert_eq!(games.len(), 3);
    assert_eq!(games[1].trim(), "1. d4 d5 0-1");
}

#[test]
fn braces_in_line_comments_and_escapes_do_not_open_comments() {
    let src = "[Event \"One\"]\n\n1. e4 e5 ; opening {idea\n2. Nf3 1-0\n\n\
               % exported {by tool\n[Event \"Two\"]\n\n1. d4 d5 0-1\n\n\
               [Event \"Three\"]\n\n1. c4 { real comment } e5 *\n";
    let games = split_games(src);
    assert_eq!(games.len(), 3);
    assert!(games[0].contains("One"));
    assert!(games[1].contains("Two"));
    assert!(games[2].contains("Three"));
    assert_eq!(parse_game(games[0]).unwrap().moves, ["e4", "e5", "Nf3"]);
}

#[test]
fn split_games_of_blank_source_is_empty() {
    assert!(split_games("").is_empty());
    assert!(split_games("\n  \n").is_empty());
}

#[test]
fn split_games_keeps_headers_with_their_moves() {
    let src = "[Event \"x\"]\n[Site \"y\"]\n\n1. e4 *\n";
    let games = split_games(src);
    assert_eq!(games.len(), 1);
    assert!(games[0].contains("Site"));
    assert!(games[0].contains("1. e4"));
}

#[test]
fn parse_game_collects_headers_and_mainline_only() {
    let games = split_games(TWO_GAMES);
    let g = parse_game(games[1]).unwrap();
    assert_eq!(g.header("Event"), Some("Second"));
    assert_eq!(g.moves, vec!["d4", "d5", "c4", "dxc4"]);
    assert_eq!(g.result, Some(GameResult::BlackWins));
}

#[test]
fn parse_game_stops_at_first_game() {
    let g = parse_game(TWO_GAMES).unwrap();
    assert_eq!(g.header("White"), Some("A"));
    assert_eq!(g.moves.len(), 4);
    assert_eq!(g.result, Some(GameResult::WhiteWins));
}

#[test]
fn parse_game_without_result_is_accepted() {
    let g = parse_game("1. e4 e5 2. Nf3").unwrap();
    assert_eq!(g.moves.len(), 3);
    assert_eq!(g.result, None);
}

#[test]
fn parse_game_errors() {
    assert!(matches!(
        parse_game("   "),
        Err(ChessfadeError::ParseFailure(_))
    ));
    assert!(matches!(
        parse_game("1. e4 (1. d4"),
        Err(ChessfadeError::ParseFailure(_))
    ));
    assert!(matches!(
        parse_game("1. e4 ) e5"),
        Err(ChessfadeError::ParseFailure(_))
    ));
}

#[test]
fn starting_position_honors_fen_tag() {
    let g = parse_game(
        "[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/4P3/4K3 w - - 0 1\"]\n\n1. e4 *",
    )
    .unwrap();
    let pos = g.starting_position().unwrap();
    assert_eq!(
        pos.board().piece_at(Square::E2),
        Some(Piece {
            color: Color::White,
            role: Role::Pawn
        })
    );
    assert_eq!(pos.board().piece_at(Square::D1), None);
}

#[test]
fn starting_position_rejects_bad_fen() {
    let g = parse_game("[FEN \"not a fen\"]\n1. e4 *").unwrap();
    assert!(matches!(
        g.starting_position(),
        Err(ChessfadeError::ParseFailure(_))
    ));
}

#[test]
fn default_starting_position_is_standard() {
    let g = parse_game("1. e4 *").unwrap();
    assert_eq!(
        g.starting_position().unwrap().board(),
        Chess::default().board()
    );
}
