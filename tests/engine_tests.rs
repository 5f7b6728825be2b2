//! Generation semantics: still lifes, oscillators, determinism

use tui_life::core::patterns::{BEACON, BLINKER, BLOCK, GLIDER, TOAD};
use tui_life::core::{EngineConfig, LifeEngine, RecordingSurface, Rules};
use tui_life::types::{PixelRect, Position, Rgb};

const SURFACE: (f32, f32) = (100.0, 100.0);

fn engine_with(cells: &[Position]) -> LifeEngine {
    LifeEngine::from_pattern(EngineConfig::new(10, 10), SURFACE, cells).unwrap()
}

fn alive(engine: &LifeEngine) -> Vec<Position> {
    engine.grid().alive_positions().collect()
}

fn sorted(mut cells: Vec<Position>) -> Vec<Position> {
    cells.sort();
    cells
}

#[test]
fn test_block_is_still() {
    let start = BLOCK.at(Position::new(4, 4));
    let mut engine = engine_with(&start);

    for _ in 0..5 {
        engine.advance();
        assert_eq!(alive(&engine), sorted(start.clone()));
    }
}

#[test]
fn test_block_cells_each_have_three_live_neighbors() {
    let engine = engine_with(&BLOCK.at(Position::new(4, 4)));
    for p in BLOCK.at(Position::new(4, 4)) {
        assert_eq!(engine.grid().live_neighbors(p.row, p.col), Some(3));
    }
    // Orthogonally bordering dead cells see exactly 2.
    assert_eq!(engine.grid().live_neighbors(3, 4), Some(2));
    assert_eq!(engine.grid().live_neighbors(4, 6), Some(2));
}

#[test]
fn test_blinker_has_period_two() {
    let start = BLINKER.at(Position::new(5, 4));
    let mut engine = engine_with(&start);

    engine.advance();
    let vertical = vec![Position::new(4, 5), Position::new(5, 5), Position::new(6, 5)];
    assert_eq!(alive(&engine), vertical);

    engine.advance();
    assert_eq!(alive(&engine), sorted(start));
}

#[test]
fn test_period_two_oscillators_return() {
    for pattern in [&TOAD, &BEACON] {
        let start = sorted(pattern.at(Position::new(3, 3)));
        let mut engine = engine_with(&start);

        engine.advance();
        assert_ne!(alive(&engine), start, "{} should change", pattern.name);
        engine.advance();
        assert_eq!(alive(&engine), start, "{} should return", pattern.name);
    }
}

#[test]
fn test_glider_translates_diagonally() {
    let mut engine = LifeEngine::from_pattern(
        EngineConfig::new(12, 12),
        SURFACE,
        &GLIDER.at(Position::new(1, 1)),
    )
    .unwrap();

    for _ in 0..GLIDER.period {
        engine.advance();
    }

    assert_eq!(alive(&engine), sorted(GLIDER.at(Position::new(2, 2))));
}

#[test]
fn test_blinker_on_edge_loses_cells() {
    // Against the top edge the vertical phase has no row above.
    let mut engine = engine_with(&BLINKER.at(Position::new(0, 3)));
    engine.advance();
    assert_eq!(alive(&engine), vec![Position::new(0, 4), Position::new(1, 4)]);
}

#[test]
fn test_dead_grid_stays_dead() {
    let mut engine = engine_with(&[]);
    for _ in 0..20 {
        engine.advance();
    }
    assert_eq!(engine.live_count(), 0);
    assert_eq!(engine.generation(), 20);
}

#[test]
fn test_dead_grid_with_zero_reproduction_fills() {
    let config = EngineConfig::new(4, 4).with_rules(Rules::new(2, 3, 0));
    let mut engine = LifeEngine::from_pattern(config, SURFACE, &[]).unwrap();
    engine.advance();
    assert_eq!(engine.live_count(), 16);
}

#[test]
fn test_zero_steps_leave_initial_state() {
    let config = EngineConfig::new(25, 25);
    let engine = LifeEngine::with_seed(config, SURFACE, 77).unwrap();
    let again = LifeEngine::with_seed(config, SURFACE, 77).unwrap();

    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.grid(), again.grid());
}

#[test]
fn test_same_seed_same_history() {
    let config = EngineConfig::new(32, 24);
    let mut a = LifeEngine::with_seed(config, SURFACE, 2024).unwrap();
    let mut b = LifeEngine::with_seed(config, SURFACE, 2024).unwrap();

    for _ in 0..50 {
        assert_eq!(a.fingerprint(), b.fingerprint());
        a.advance();
        b.advance();
    }
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn test_step_and_advance_agree() {
    let config = EngineConfig::new(16, 16);
    let mut drawn = LifeEngine::with_seed(config, SURFACE, 9).unwrap();
    let mut headless = LifeEngine::with_seed(config, SURFACE, 9).unwrap();
    let mut surface = RecordingSurface::new(SURFACE.0, SURFACE.1);

    for _ in 0..10 {
        drawn.step(&mut surface);
        headless.advance();
        assert_eq!(drawn.fingerprint(), headless.fingerprint());
    }
    assert_eq!(surface.calls().len(), 10 * 256);
}

#[test]
fn test_step_draws_every_cell_once_with_pixel_boxes() {
    let config = EngineConfig::new(4, 2);
    let mut engine =
        LifeEngine::from_pattern(config, (80.0, 30.0), &[Position::new(1, 3)]).unwrap();
    let mut surface = RecordingSurface::new(80.0, 30.0);

    engine.step(&mut surface);

    let calls = surface.calls();
    assert_eq!(calls.len(), 8);
    for (i, call) in calls.iter().enumerate() {
        let (row, col) = (i / 4, i % 4);
        assert_eq!(
            call.rect,
            PixelRect::new(col as f32 * 20.0, row as f32 * 15.0, 20.0, 15.0)
        );
        assert_eq!(call.border, Some(Rgb::BLACK));
    }
    // The lone cell dies this generation but is drawn in its current state.
    assert_eq!(calls[7].fill, Some(Rgb::BLACK));
    assert_eq!(calls[0].fill, Some(Rgb::WHITE));
    assert_eq!(engine.live_count(), 0);
}

#[test]
fn test_invalid_configurations_fail_fast() {
    assert!(LifeEngine::with_seed(EngineConfig::new(0, 10), SURFACE, 1).is_err());
    assert!(LifeEngine::with_seed(EngineConfig::new(10, 0), SURFACE, 1).is_err());
    assert!(LifeEngine::with_seed(
        EngineConfig::new(10, 10).with_rules(Rules::new(9, 3, 3)),
        SURFACE,
        1
    )
    .is_err());
    assert!(LifeEngine::with_seed(EngineConfig::new(10, 10), (100.0, 0.0), 1).is_err());
}

#[test]
fn test_default_config_is_fifty_square_conway() {
    let config = EngineConfig::default();
    assert_eq!((config.width, config.height), (50, 50));
    assert_eq!(config.rules, Rules::new(2, 3, 3));
    // Over-population and reproduction share a default but not a field.
    let decoupled = config.rules.with_reproduction(4);
    assert_eq!(decoupled.over_population, 3);
}
