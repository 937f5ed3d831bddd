#![no_main]
use draughts::checkers::board::Board;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(board) = Board::try_from(input) {
        assert_eq!(Board::try_from(board.layout().as_str()).ok(), Some(board));
    }
});
