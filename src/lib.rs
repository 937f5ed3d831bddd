//! Rules engine for two-player checkers (draughts) on an 8×8 board: move
//! legality, capture chaining, promotion and the end of the game live in
//! [`checkers`]. [`Engine`] is a line-oriented console shell on top of it.

pub mod checkers;

mod engine;
pub use engine::Engine;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the engine version on startup.
pub fn print_engine_info() {
    println!("Checkers engine {}", engine_version());
    println!();
}
