use pretty_assertions::assert_eq;
use rookery::chess::board::Board;
use rookery::chess::core::{CastleRights, Player, Square};
use rookery::chess::fen::{self, FenError};

fn round_trip(input: &str, expected: &str) {
    let board = fen::decode(input).unwrap_or_else(|e| panic!("parsing {input}: {e}"));
    assert_eq!(fen::encode(&board), expected);
    // Encoding is stable.
    assert_eq!(fen::decode(expected).unwrap(), board);
}

#[test]
fn basic_positions() {
    for input in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "2r3r1/p3k3/1p3pp1/1B5p/5P2/2P1p1P1/PP4KP/3R4 w - - 0 34",
        "rnbqk1nr/p3bppp/1p2p3/2ppP3/3P4/P7/1PP1NPPP/R1BQKBNR w KQkq c6 0 7",
        "r2qkb1r/1pp1pp1p/p1np1np1/1B6/3PP1b1/2N1BN2/PPP2PPP/R2QK2R w KQkq - 0 7",
        "r3k3/5p2/2p5/p7/P3r3/2N2n2/1PP2P2/2K2B2 w q - 0 24",
        "r1b1qrk1/ppp2pbp/n2p1np1/4p1B1/2PPP3/2NB1N1P/PP3PP1/R2QK2R w KQ e6 0 9",
        "8/8/8/8/2P5/3k4/8/KB6 b - c3 0 1",
        "rnbq1rk1/pp4pp/1b1ppn2/2p2p2/2PP4/1P2PN2/PB2BPPP/RN1Q1RK1 w - c6 0 9",
    ] {
        round_trip(input, input);
    }
}

#[test]
fn trimmed_positions() {
    round_trip(
        "rnbqkb1r/pp2pppp/3p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq -",
        "rnbqkb1r/pp2pppp/3p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq - 0 1",
    );
    round_trip(
        "r3k2r/8/8/8/8/8/8/R3K2R",
        "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
    );
}

#[test]
fn unusual_but_well_formed_positions() {
    // Only the syntax is checked: kings and pawn counts are not validated.
    round_trip("8/8/8/8/8/8/8/8 w - - 0 1", "8/8/8/8/8/8/8/8 w - - 0 1");
    round_trip(
        "1kkk4/8/8/8/8/8/8/1KKK4 w - - 0 1",
        "1kkk4/8/8/8/8/8/8/1KKK4 w - - 0 1",
    );
    round_trip(
        "3kr3/8/8/8/8/5Q2/8/1KP5 w - - 0 1",
        "3kr3/8/8/8/8/5Q2/8/1KP5 w - - 0 1",
    );
}

#[test]
fn fields() {
    let board = fen::decode("r3k3/5p2/2p5/p7/P3r3/2N2n2/1PP2P2/2K2B2 b q - 17 24").unwrap();
    assert_eq!(board.side_to_move(), Player::Black);
    assert_eq!(board.castling(), CastleRights::BLACK_LONG);
    assert_eq!(board.en_passant(), None);
    assert_eq!(board.halfmove_clock(), 17);
    assert_eq!(board.fullmove_number(), 24);
    assert_eq!(board.pieces().len(), 14);
    assert_eq!(board.king_square(Player::White), Some(Square::C1));
}

#[test]
fn clean_board_str() {
    // Prefix with "fen".
    assert!(Board::try_from(
        "fen rn1qkb1r/pp3ppp/2p1pn2/3p1b2/2PP4/5NP1/PP2PPBP/RNBQK2R w KQkq - 0 1"
    )
    .is_ok());
    // Prefix with "epd".
    assert!(Board::try_from(
        "epd rnbqkb1r/ppp1pp1p/5np1/3p4/3P1B2/5N2/PPP1PPPP/RN1QKB1R w KQkq -"
    )
    .is_ok());
    // No prefix: infer EPD.
    assert!(Board::try_from("rnbqkbnr/pp2pppp/8/3p4/3P4/3B4/PPP2PPP/RNBQK1NR b KQkq -").is_ok());
    // No prefix: infer FEN.
    assert!(
        Board::try_from("rnbqkbnr/pp2pppp/8/3p4/3P4/3B4/PPP2PPP/RNBQK1NR b KQkq - 0 1").is_ok()
    );
    // Don't crash on unicode symbols.
    assert!(Board::try_from("8/8/8/8/8/8/8/8 b 88 🔠 🔠 ").is_err());
    assert!(Board::try_from("8/8/8/8/8/8/8/7🔠 w - - 0 1").is_err());
    // Whitespaces at the start/end of the input are cleaned up by try_from.
    assert!(Board::try_from(
        "rnbqkb1r/ppp1pp1p/5np1/3p4/3P1B2/5N2/PPP1PPPP/RN1QKB1R w KQkq -\n"
    )
    .is_ok());
    assert!(Board::try_from(
        "\n epd rnbqkb1r/ppp1pp1p/5np1/3p4/3P1B2/5N2/PPP1PPPP/RN1QKB1R w KQkq -"
    )
    .is_ok());
}

#[test]
fn no_crash() {
    assert!(Board::try_from("3k2p1N/82/8/8/7B/6K1/3R4/8 b - - 0 1").is_err());
    assert!(Board::try_from("3kn3/R2p1N2/8/8/70000000000000000B/6K1/3R4/8 b - - 0 1").is_err());
    assert!(Board::try_from("3kn3/R4N2/8/8/7B/6K1/3R4/8 b - - 0 48 b - - 0 4/8 b").is_err());
    assert!(Board::try_from("\tfen3kn3/R2p1N2/8/8/7B/6K1/3R4/8 b - - 0 23").is_err());
    assert!(Board::try_from("fen3kn3/R2p1N2/8/8/7B/6K1/3R4/8 b - - 0 23").is_err());
    assert!(Board::try_from("3kn3/R4N2/8/8/7B/6K1/3r4/8 b - - +8 1").is_err());
    // Strict parsing does not accept the prefixes.
    assert!(
        "\n epd rnbqkb1r/ppp1pp1p/5np1/3p4/3P1B2/5N2/PPP1PPPP/RN1QKB1R w KQkq -\n"
            .parse::<Board>()
            .is_err()
    );
}

#[test]
fn en_passant_rank_depends_on_side_to_move() {
    assert_eq!(
        fen::decode("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 1")
            .unwrap_err(),
        FenError::InvalidEnPassant("e3 is not on rank 6 while w is to move".to_string())
    );
    assert!(matches!(
        fen::decode("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq e4 0 1"),
        Err(FenError::InvalidEnPassant(_))
    ));
    assert!(
        fen::decode("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").is_ok()
    );
}
