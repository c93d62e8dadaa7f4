use std::{fs, thread, time::Instant};

use lifers::{Controller, Coord, Flow, LifeBoard, Result, Settings, pattern};
use tracing::{info, warn};

mod console;
mod logging;
mod options;
mod stats;

use console::{ConsoleEvent, ConsoleRender};
use stats::Recorder;

fn args_to_board(args: &options::Args) -> Result<LifeBoard> {
    if let Some(file_name) = args.input_file() {
        let encoded_str = fs::read_to_string(&file_name)?;
        let alive = pattern::decode_rle(&encoded_str)?;
        info!(file = %file_name.display(), cells = alive.len(), "loaded pattern");
        return Ok(LifeBoard::from_cells(alive));
    }

    // setup the alive cells based on args
    let seed = args.seed()?;
    let (grid_w, grid_h) = args.fill_size()?;
    let alive = seed.create_alive(grid_w, grid_h);
    info!(?seed, cells = alive.len(), "seeded board");
    Ok(LifeBoard::from_cells(alive))
}

/// Widest or tallest board printed by `--print`
const MAX_PRINT: u64 = 256;

/// Text picture of the box around every live cell, if it is small enough
fn board_text(board: &LifeBoard) -> Option<String> {
    let (tl, br) = board.live_cells().bounds()?;
    if tl.x.abs_diff(br.x) >= MAX_PRINT || tl.y.abs_diff(br.y) >= MAX_PRINT {
        return None;
    }
    Some(board.window(tl, br + Coord::one()).to_string())
}

fn run_headless(
    args: &options::Args,
    mut game: Controller,
    stats: &mut dyn Recorder,
) -> Result<Controller> {
    let sleep = args.headless_sleep()?;
    for _ in 0..args.generations()? {
        if game.board().is_empty() {
            info!(generation = game.generation(), "population died out");
            break;
        }
        if let Some(step) = game.tick() {
            stats.record(step);
        }

        // report metrics every 500ms
        if stats.due() {
            println!("{}", stats.summary());
        }
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    println!("{}", stats.summary());

    if args.print_board() {
        match board_text(game.board()) {
            Some(text) => println!("{text}"),
            None if game.board().is_empty() => println!("(empty)"),
            None => warn!(
                alive = game.board().population(),
                "board too large to print"
            ),
        }
    }
    Ok(game)
}

fn run_console(mut game: Controller, stats: &mut dyn Recorder) -> Result<Controller> {
    let mut console = ConsoleRender::new()?;
    console.render(&game)?;

    let mut next_frame = Instant::now() + game.frame_interval();
    'frames: loop {
        let mut dirty = false;

        // handle input until the next frame is due
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if let Some(event) = console.poll_event(&game, timeout)? {
            match event {
                ConsoleEvent::Command(cmd) => {
                    if game.apply(cmd) == Flow::Exit {
                        break 'frames;
                    }
                    dirty = true;
                }
                ConsoleEvent::Redraw => dirty = true,
                ConsoleEvent::Ignored => {}
            }
        }

        // compute the next generation when running
        if Instant::now() >= next_frame {
            if let Some(step) = game.tick() {
                stats.record(step);
                dirty = true;
            }
            next_frame = Instant::now() + game.frame_interval();
        }

        if stats.due() {
            console.set_report(stats.summary().to_string());
            dirty = true;
        }
        if dirty {
            console.render(&game)?;
        }
    }
    Ok(game)
}

fn main() -> Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    let log_file = args.log_file();
    logging::init(log_file.as_deref(), args.headless())?;

    let board = args_to_board(&args)?;
    let mut settings: Settings = args.settings()?;
    // headless runs have nobody to unpause them
    settings.paused &= !args.headless();
    info!(
        alive = board.population(),
        scale = settings.scale,
        fps = settings.running_fps,
        parallel = settings.parallel,
        "starting"
    );

    let mut recorder = stats::recorder(board.population(), args.stats_file().is_some());
    let started = Instant::now();
    let game = Controller::new(board, settings);
    let game = if args.headless() {
        run_headless(&args, game, recorder.as_mut())?
    } else {
        run_console(game, recorder.as_mut())?
    };

    let elapsed = started.elapsed();
    info!(
        generations = recorder.generations(),
        alive = game.board().population(),
        elapsed_ms = elapsed.as_millis() as u64,
        "finished"
    );
    if let Some(file_name) = args.stats_file() {
        recorder.save(&file_name)?;
        info!(file = %file_name.display(), "wrote stats");
    }

    Ok(())
}
