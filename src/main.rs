#![warn(clippy::all, clippy::pedantic)]

use std::thread;

use anyhow::{Context, Result};
use blockfall::config::{self, Config};
use blockfall::engine::{Command, Game};
use blockfall::events::LogListener;
use blockfall::game::gravity_interval;
use blockfall::highscores::{FileStore, HighScores};
use blockfall::sound::AudioState;
use log::{debug, error, info};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting blockfall demo");

    let config = match config::loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            Config::default()
        }
    };

    let mut game = Game::from_config(&config.game);
    game.set_listener(LogListener::new());
    if config.sound.enabled {
        game.set_assist(AudioState::spawn(|effect| debug!("Sound: {effect:?}")));
    }

    let ticks = run_demo(&mut game, &config);
    let (score, level) = (game.score(), game.level());
    if game.is_game_over() {
        println!("Game over: score {score}, level {level} after {ticks} ticks");
    } else {
        println!("Stopped after {ticks} ticks: score {score}, level {level}");
    }

    let scores_path = config::loader::get_scores_file_path(&config);
    let store = FileStore::open(&scores_path)
        .with_context(|| format!("opening high scores at {}", scores_path.display()))?;
    let mut table = HighScores::new(store);
    if table.is_high_score(score) {
        let rank = table.rank(score);
        table
            .add_score(score, level)
            .context("saving high score")?;
        println!("New high score! Rank #{rank}");
    }

    Ok(())
}

// Drive the game the way a UI would: a few inputs, then one gravity tick
fn run_demo(game: &mut Game, config: &Config) -> u64 {
    let mut rng = match config.game.seed {
        Some(seed) => fastrand::Rng::with_seed(seed.wrapping_add(1)),
        None => fastrand::Rng::new(),
    };
    let inputs = config.demo.inputs_per_tick.max(1);
    let frame = gravity_interval(game.speed()) / inputs;

    let mut ticks = 0;
    while !game.is_game_over() && ticks < config.demo.max_ticks {
        for _ in 0..inputs {
            if let Some(command) = autoplay_command(&mut rng) {
                game.apply(command);
            }
            if config.demo.realtime {
                thread::sleep(frame);
            }
        }
        game.tick();
        ticks += 1;
    }
    ticks
}

fn autoplay_command(rng: &mut fastrand::Rng) -> Option<Command> {
    match rng.u8(0..10) {
        0 | 1 => Some(Command::MoveLeft),
        2 | 3 => Some(Command::MoveRight),
        4 | 5 => Some(Command::Rotate),
        6 => Some(Command::SoftDrop),
        7 => Some(Command::Drop),
        _ => None,
    }
}
