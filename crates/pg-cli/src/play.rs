use std::io;

use tracing::debug;

use pg_core::{Game, GameConfig};

/// Play one session on stdin/stdout.
pub fn run(config: &GameConfig) -> Result<(), String> {
    debug!(seed = ?config.seed, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(stdin.lock(), stdout.lock(), config);

    game.run().map_err(|e| e.to_string())
}
