//! sal_sim: play a bot-only match and optionally save the final board.
//!
//! Usage:
//!   cargo run --bin sal_sim -- --players 4 --seed 7 --output final.jpg
//!   cargo run --bin sal_sim -- --config sal.yaml --board classic

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use image::{Rgb, RgbImage};
use log::info;
use snakes_ladders::render::{cell_of, BOARD_SIZE};
use snakes_ladders::{AppConfig, BoardCatalog, BoardDefinition, Dice, Match, PlayerId, Renderer, TransitionKind};

#[derive(Parser, Debug)]
#[command(name = "sal_sim")]
#[command(about = "Simulate a snakes and ladders match between bots")]
struct Cli {
    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board catalog directory (overrides the config)
    #[arg(long)]
    boards: Option<PathBuf>,

    /// Board name; random if omitted
    #[arg(long)]
    board: Option<String>,

    /// Number of bot players
    #[arg(long, default_value_t = 2)]
    players: u8,

    /// Dice seed; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Grant another turn on a maximum roll
    #[arg(long)]
    bonus: bool,

    /// Stop after this many rolls
    #[arg(long, default_value_t = 10_000)]
    max_rolls: u32,

    /// Write the final board image here
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path).with_context(|| format!("load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(dir) = &cli.boards {
        config.boards_dir = dir.clone();
    }
    if cli.bonus {
        config.game.bonus_turn_on_max = true;
    }
    if cli.players == 0 {
        bail!("need at least one player");
    }

    let catalog = if config.boards_dir.is_dir() {
        BoardCatalog::load(&config.boards_dir)
            .with_context(|| format!("load boards from {}", config.boards_dir.display()))?
    } else {
        info!("{} not found; using the built-in demo board", config.boards_dir.display());
        BoardCatalog::from_boards([demo_board()?])
    };

    let mut dice = match cli.seed {
        Some(seed) => Dice::with_faces(seed, config.game.max_roll),
        None => Dice::from_entropy(config.game.max_roll),
    };
    info!("dice seed {}", dice.seed());

    let board = match &cli.board {
        Some(name) => catalog
            .get(name)
            .cloned()
            .with_context(|| format!("no board named '{}'", name))?,
        None => catalog.choose(&mut dice).context("board catalog is empty")?,
    };

    let admin = PlayerId::new(1);
    let mut game = Match::new(board, admin, config.game.clone());
    for i in 1..=i64::from(cli.players) {
        let identity = game.join(PlayerId::new(i), format!("bot-{}", i))?;
        info!("bot-{} joined as {}", i, identity);
    }
    game.begin()?;

    let mut rolls = 0;
    let mut winner = None;
    while rolls < cli.max_rolls {
        let current = game.game().turn().context("no player holds the turn")?;
        let steps = dice.roll();
        let outcome = game.play_roll(current.id(), steps)?;
        rolls += 1;

        let what = match outcome.result.transition {
            TransitionKind::Ladder => "grabbed a ladder to",
            TransitionKind::Snake => "was dragged down by a snake to",
            TransitionKind::None if outcome.result.voided => "overshot and stays on",
            TransitionKind::None => "reached",
        };
        info!("{} rolled {} and {} {}", outcome.mover.name(), steps, what, outcome.result.position);

        if outcome.is_win() {
            winner = Some(outcome.mover);
            break;
        }
    }

    match &winner {
        Some(player) => println!("{} won after {} rolls", player, rolls),
        None => println!("no winner after {} rolls", rolls),
    }
    for line in game.status() {
        println!("{}", line);
    }

    if let Some(path) = &cli.output {
        let renderer = Renderer::new(config.render.clone());
        let bytes = game.render(&renderer).context("render final board")?;
        std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

/// Checkerboard background with a handful of snakes and ladders.
fn demo_board() -> Result<BoardDefinition> {
    let light = Rgb([0xf2, 0xe6, 0xc9]);
    let dark = Rgb([0xd9, 0xc0, 0x8c]);
    let mut canvas = RgbImage::from_pixel(BOARD_SIZE, BOARD_SIZE, light);
    for square in (2..=100u8).step_by(2) {
        let cell = cell_of(square);
        for y in cell.y0..cell.y1 {
            for x in cell.x0..cell.x1 {
                canvas.put_pixel(x, y, dark);
            }
        }
    }

    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .context("encode demo background")?;

    Ok(BoardDefinition::new("demo")
        .with_transitions([(4, 14), (9, 31), (21, 42), (28, 84), (51, 67), (72, 91), (80, 99)])
        .with_transitions([(17, 7), (54, 34), (62, 19), (64, 60), (87, 36), (93, 73), (95, 75), (98, 79)])
        .with_background(png))
}
