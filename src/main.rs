use std::io;

use draughts::Engine;

fn main() -> anyhow::Result<()> {
    draughts::print_engine_info();
    let mut engine = Engine::new(io::stdin().lock(), io::stdout().lock());
    engine.run()
}
