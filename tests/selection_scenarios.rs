// tests/selection_scenarios.rs

//! End-to-end selection scenarios over the tile engine.

use gridpick::config::TileModeConfig;
use gridpick::keys::{KeyEvent, KeySymbol};
use gridpick::mode::KeyOutcome;
use gridpick::tile::{Grid, TileController};
use gridpick::{Rect, TileError};
use test_log::test;

fn key(c: char) -> KeyEvent {
    KeyEvent::from_char(c)
}

#[test]
fn test_reference_area_two_keys_complete() {
    let outer = Rect::new(0, 0, 1000, 500);
    let config = TileModeConfig::default();
    let mut tile = TileController::enter(outer, &config).unwrap();

    let grid = *tile.grid();
    assert!(grid.cell_count() <= 676);
    assert!(grid.cell_width as i64 * grid.cell_height as i64 >= 1250);
    assert_eq!(tile.cursor().addressing().digits(), 2);

    assert_eq!(tile.handle_key(&key('k')), KeyOutcome::Consumed);
    match tile.handle_key(&key('e')) {
        KeyOutcome::Selected { area, .. } => assert!(outer.contains_rect(&area)),
        other => panic!("expected a selection, got {:?}", other),
    }
}

#[test]
fn test_every_label_selects_its_own_cell() {
    let outer = Rect::new(17, 9, 640, 480);
    let config = TileModeConfig {
        label_symbols: "asdfghjkl".into(),
        ..TileModeConfig::default()
    };
    let probe = TileController::enter(outer, &config).unwrap();
    let labels: Vec<(usize, String, Rect)> = probe
        .view()
        .cells()
        .map(|cell| (cell.index, cell.label.unwrap().rest, cell.rect))
        .collect();

    let mut seen = Vec::new();
    for (index, label, rect) in labels {
        let mut tile = TileController::enter(outer, &config).unwrap();
        let mut outcome = KeyOutcome::Ignored;
        for c in label.chars() {
            outcome = tile.handle_key(&key(c));
        }
        match outcome {
            KeyOutcome::Selected { area, .. } => {
                assert_eq!(area, rect, "label {} for cell {}", label, index);
                assert!(!seen.iter().any(|r: &Rect| r.intersects(&area)));
                seen.push(area);
            }
            other => panic!("label {} did not complete: {:?}", label, other),
        }
    }
    let covered: i64 = seen.iter().map(Rect::area).sum();
    assert_eq!(covered, outer.area());
}

#[test]
fn test_zero_width_area_is_a_geometry_error() {
    let err = TileController::enter(Rect::new(0, 0, 0, 500), &TileModeConfig::default())
        .unwrap_err();
    assert_eq!(
        err,
        TileError::Geometry {
            width: 0,
            height: 500
        }
    );
    assert_eq!(err.to_string(), "area (0x500) is too small");
}

#[test]
fn test_duplicate_alphabet_aborts_enter() {
    let config = TileModeConfig {
        label_symbols: "abcb".into(),
        ..TileModeConfig::default()
    };
    assert_eq!(
        TileController::enter(Rect::new(0, 0, 100, 100), &config).unwrap_err(),
        TileError::DuplicateSymbol("b".into())
    );
}

#[test]
fn test_reenter_matches_state_after_first_key() {
    let config = TileModeConfig::default();
    let mut tile = TileController::enter(Rect::new(0, 0, 1920, 1080), &config).unwrap();
    tile.handle_key(&key('f'));
    let first_view: Vec<_> = tile.view().cells().collect();
    let first_cursor = tile.cursor().clone();

    let KeyOutcome::Selected { history, .. } = tile.handle_key(&key('g')) else {
        panic!("expected a selection");
    };
    let mut resumed = TileController::reenter(history);
    assert_eq!(resumed.cursor(), &first_cursor);
    assert_eq!(resumed.view().cells().collect::<Vec<_>>(), first_view);

    // Backing out of the restored level lands on the empty cursor.
    assert_eq!(
        resumed.handle_key(&KeyEvent::named(KeySymbol::Backspace)),
        KeyOutcome::Consumed
    );
    assert_eq!(resumed.cursor().depth(), 0);
    assert_eq!(
        resumed.handle_key(&KeyEvent::named(KeySymbol::Backspace)),
        KeyOutcome::Ignored
    );
}

#[test]
fn test_single_cell_grid() {
    let mut tile =
        TileController::enter(Rect::new(5, 5, 20, 10), &TileModeConfig::default()).unwrap();
    assert_eq!(tile.grid(), &Grid::partition(20, 10, 676, 1250).unwrap());
    assert_eq!(tile.cursor().addressing().digits(), 1);
    assert!(matches!(
        tile.handle_key(&key('a')),
        KeyOutcome::Selected { area, .. } if area == Rect::new(5, 5, 20, 10)
    ));
}
