//! Terminal Game of Life runner (default binary).
//!
//! This loop is the frame clock: it owns the engine, asks it for one generation
//! per frame, and presents the result through the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info, warn};

use tui_life::config::RunConfig;
use tui_life::core::{LifeEngine, SimpleRng, Surface};
use tui_life::input::{handle_key_event, should_quit};
use tui_life::logging;
use tui_life::term::{FrameBuffer, FrameClock, Glyph, LifeView, StatusLine, TerminalRenderer, Viewport};
use tui_life::types::LifeAction;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let viewport = Viewport::new(w, h);
    let view = LifeView::default();
    let area = view.board_area(viewport);
    let engine_config = config.engine_config(view.fitted_grid(viewport));

    let seed = config.seed.unwrap_or_else(time_seed);
    let mut rng = SimpleRng::new(seed);

    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let board = view.board(&mut fb, area);
    let mut engine = match (config.pattern.as_deref(), config.pattern()) {
        (_, Some(pattern)) => {
            let cells = pattern.centered(engine_config.width, engine_config.height);
            LifeEngine::from_pattern(engine_config, board.size(), &cells)?
        }
        (Some(name), None) => {
            warn!("unknown pattern {:?}, starting from random cells", name);
            LifeEngine::for_surface(engine_config, &board, &mut rng)?
        }
        (None, None) => LifeEngine::for_surface(engine_config, &board, &mut rng)?,
    };
    info!(
        "starting {}x{} grid, seed {}, rules {:?}, {}ms frames",
        engine_config.width, engine_config.height, seed, engine_config.rules, config.frame_ms
    );

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let mut clock = FrameClock::new(config.frame_ms, now_ms());
    let mut step_requested = false;

    loop {
        // Frame.
        let (w, h) = crossterm::terminal::size().unwrap_or((fb.width(), fb.height()));
        fb.resize(w, h);
        fb.clear(Glyph::default());

        let advance = clock.poll_tick(now_ms()) || std::mem::take(&mut step_requested);
        let status = StatusLine {
            paused: clock.is_paused(),
            frame_ms: clock.interval_ms(),
        };
        view.draw_status(&mut fb, &engine, status);
        {
            let mut board = view.board(&mut fb, area);
            if advance {
                engine.step(&mut board);
            } else {
                engine.render(&mut board);
            }
        }
        term.present(&mut fb)?;

        // Input until the next frame is due.
        let timeout = Duration::from_millis(clock.timeout_ms(now_ms()));
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit at generation {}", engine.generation());
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(LifeAction::TogglePause) => clock.toggle_pause(now_ms()),
                    Some(LifeAction::Step) => step_requested = true,
                    Some(LifeAction::Reseed) => {
                        engine.reseed(&mut rng);
                        info!("reseeded, {} live cells", engine.live_count());
                    }
                    Some(LifeAction::Faster) => clock.faster(),
                    Some(LifeAction::Slower) => clock.slower(),
                    None => {}
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
