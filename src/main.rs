use std::io::Write;

use anyhow::{Context, Result};

use catchball::engine::{self, core::EngineConfig};
use catchball::game::CatchGame;
use catchball::game::score::ScoreStore;
use catchball::ui::Rect;

fn main() -> Result<()> {
    init_tracing();

    let config = EngineConfig::default();
    let player_name = prompt_player_name()?;

    let bounds = Rect::new(
        0.0,
        config.hud_margin,
        config.window_width as f32,
        config.window_height as f32 - config.hud_margin,
    );
    let game = CatchGame::new(
        player_name,
        config.target_radius,
        bounds,
        ScoreStore::default(),
    );

    engine::run(config, game)
}

/// One-shot display name prompt; empty input falls back to "Player". The name
/// is never persisted.
fn prompt_player_name() -> Result<String> {
    print!("Enter your name: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut name = String::new();
    std::io::stdin()
        .read_line(&mut name)
        .context("failed to read player name")?;

    let name = name.trim();
    if name.is_empty() {
        Ok("Player".to_string())
    } else {
        Ok(name.to_string())
    }
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
