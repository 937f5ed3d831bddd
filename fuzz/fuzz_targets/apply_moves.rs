#![no_main]
use draughts::checkers::core::{Move, Square};
use draughts::checkers::game::Game;
use libfuzzer_sys::fuzz_target;

// Every pair of bytes is a move: the low and high nibbles of each byte are a
// row and a column. The board invariants must survive any sequence of moves.
fuzz_target!(|data: &[u8]| {
    let mut game = Game::new();
    for chunk in data.chunks_exact(2) {
        let square = |byte: u8| Square::try_from((byte & 0x0F, byte >> 4)).ok();
        let (Some(from), Some(to)) = (square(chunk[0]), square(chunk[1])) else {
            continue;
        };
        let before = game.clone();
        if !game.make_move(Move::new(from, to)) {
            assert_eq!(game, before);
        }
        for (square, _) in game.board().pieces() {
            assert!(square.is_dark());
        }
        let _ = game.winner();
    }
});
