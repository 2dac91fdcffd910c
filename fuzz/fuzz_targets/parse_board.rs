#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use rookery::chess::fen;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(board) = fen::decode(input) {
        let encoded = fen::encode(&board);
        assert_eq!(fen::decode(&encoded).unwrap(), board);
    }
});
