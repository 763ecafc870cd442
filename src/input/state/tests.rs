use super::*;
use crate::draw::{PaletteColor, Point, RevealBasis, Stroke, StrokeStore};
use crate::input::{HoldAction, HoldSettings, PointerEvent, Tool};
use std::time::{Duration, Instant};

fn create_test_input_state() -> InputState {
    let mut state = InputState::with_defaults(
        StrokeStyle::new(PaletteColor::Black, 4.0),
        2.0,                     // eraser_radius
        0,                       // max_strokes (unlimited)
        RevealBasis::Centerline, // reveal_basis
        HoldSettings::default(), // hold_settings
    );
    state.update_canvas_dimensions(400, 150);
    state
}

fn draw_line(state: &mut InputState, y: f64, from: i32, to: i32) {
    state.on_pointer_down(from as f64, y);
    for x in (from + 1)..=to {
        state.on_pointer_move(x as f64, y, true);
    }
    state.on_pointer_up();
}

fn erase_vertical(state: &mut InputState, x: f64) {
    state.select_tool(Tool::Eraser);
    state.on_pointer_down(x, -10.0);
    state.on_pointer_move(x, 0.0, true);
    state.on_pointer_move(x, 60.0, true);
    state.on_pointer_up();
}

fn ctx(store: &StrokeStore, tool: Tool) -> CaptureContext<'_> {
    CaptureContext {
        tool,
        style: StrokeStyle::default(),
        eraser_radius: 2.0,
        store,
    }
}

#[test]
fn test_step_down_starts_drawing_with_pen() {
    let store = StrokeStore::new();
    let (next, effects) =
        CaptureState::Idle.step(PointerEvent::Down { x: 3.0, y: 4.0 }, &ctx(&store, Tool::Pen));
    assert_eq!(
        next,
        CaptureState::Drawing {
            points: vec![Point::new(3.0, 4.0)]
        }
    );
    assert_eq!(effects, vec![CaptureEffect::Redraw]);
}

#[test]
fn test_step_down_starts_erasing_with_base_snapshot() {
    let store = StrokeStore::new().commit(
        Stroke::new(
            vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)],
            PaletteColor::Red,
            3.0,
        )
        .unwrap(),
    );
    let (next, _) =
        CaptureState::Idle.step(PointerEvent::Down { x: 1.0, y: 1.0 }, &ctx(&store, Tool::Eraser));
    match next {
        CaptureState::Erasing { path, base } => {
            assert_eq!(path, vec![Point::new(1.0, 1.0)]);
            assert!(base.same_snapshot(&store));
        }
        other => panic!("expected erasing, got {other:?}"),
    }
}

#[test]
fn test_step_move_without_primary_is_ignored() {
    let store = StrokeStore::new();
    let drawing = CaptureState::Drawing {
        points: vec![Point::new(0.0, 0.0)],
    };
    let (next, effects) = drawing.clone().step(
        PointerEvent::Move {
            x: 9.0,
            y: 9.0,
            primary: false,
        },
        &ctx(&store, Tool::Pen),
    );
    assert_eq!(next, drawing);
    assert!(effects.is_empty());

    let (idle, effects) = CaptureState::Idle.step(
        PointerEvent::Move {
            x: 9.0,
            y: 9.0,
            primary: true,
        },
        &ctx(&store, Tool::Pen),
    );
    assert!(idle.is_idle());
    assert!(effects.is_empty());
}

#[test]
fn test_step_up_with_single_point_commits_nothing() {
    let store = StrokeStore::new();
    let drawing = CaptureState::Drawing {
        points: vec![Point::new(2.0, 2.0)],
    };
    let (next, effects) = drawing.step(PointerEvent::Up, &ctx(&store, Tool::Pen));
    assert!(next.is_idle());
    assert_eq!(effects, vec![CaptureEffect::Redraw]);
}

#[test]
fn test_step_up_when_idle_is_noop() {
    let store = StrokeStore::new();
    let (next, effects) = CaptureState::Idle.step(PointerEvent::Up, &ctx(&store, Tool::Pen));
    assert!(next.is_idle());
    assert!(effects.is_empty());
}

#[test]
fn test_stroke_commit_uses_style_at_release() {
    let mut state = create_test_input_state();
    state.on_pointer_down(0.0, 0.0);
    state.on_pointer_move(5.0, 0.0, true);
    state.set_color(PaletteColor::Blue);
    state.set_width(7.5);
    state.on_pointer_move(10.0, 0.0, true);
    state.on_pointer_up();

    assert_eq!(state.strokes().len(), 1);
    let stroke = &state.strokes()[0];
    assert_eq!(stroke.points().len(), 3);
    assert_eq!(stroke.color, PaletteColor::Blue);
    assert_eq!(stroke.width, 7.5);
    assert!(state.state.is_idle());
}

#[test]
fn test_corner_stroke_commits_exact_points() {
    let mut state = create_test_input_state();
    state.on_pointer_down(0.0, 0.0);
    state.on_pointer_move(10.0, 0.0, true);
    state.on_pointer_move(10.0, 10.0, true);
    state.on_pointer_up();

    assert_eq!(state.strokes().len(), 1);
    let stroke = &state.strokes()[0];
    assert_eq!(
        stroke.points(),
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0)
        ]
    );
    assert_eq!(stroke.color, PaletteColor::Black);
    assert_eq!(stroke.width, 4.0);
}

#[test]
fn test_style_change_does_not_touch_committed_strokes() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 10);
    state.set_color(PaletteColor::Green);
    state.set_width(9.0);
    draw_line(&mut state, 30.0, 0, 10);

    assert_eq!(state.strokes()[0].color, PaletteColor::Black);
    assert_eq!(state.strokes()[0].width, 4.0);
    assert_eq!(state.strokes()[1].color, PaletteColor::Green);
    assert_eq!(state.strokes()[1].width, 9.0);
}

#[test]
fn test_tap_without_motion_commits_nothing() {
    let mut state = create_test_input_state();
    state.on_pointer_down(4.0, 4.0);
    state.on_pointer_up();
    assert!(state.strokes().is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_hover_motion_does_not_draw() {
    let mut state = create_test_input_state();
    state.on_pointer_move(1.0, 1.0, false);
    state.on_pointer_down(0.0, 0.0);
    state.on_pointer_move(3.0, 0.0, false);
    assert_eq!(state.provisional_points().map(|p| p.len()), Some(1));
}

#[test]
fn test_eraser_splits_stroke_in_two() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 20);
    erase_vertical(&mut state, 10.0);

    assert_eq!(state.strokes().len(), 2);
    assert!(state.strokes()[0].points().iter().all(|p| p.x < 10.0));
    assert!(state.strokes()[1].points().iter().all(|p| p.x > 10.0));
    assert!(state.eraser_path().is_none());
}

#[test]
fn test_eraser_recomputes_from_base_snapshot() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 20);
    let base = state.store().clone();

    state.select_tool(Tool::Eraser);
    state.on_pointer_down(10.0, -10.0);
    state.on_pointer_move(10.0, 30.0, true);
    let after_first = state.store().clone();
    state.on_pointer_move(10.0, 40.0, true);

    assert_eq!(after_first.len(), 2);
    assert_eq!(*state.store(), base.erase(state.eraser_path().unwrap(), 2.0));
}

#[test]
fn test_eraser_cancel_reverts_to_base() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 20);
    let before = state.store().clone();

    state.select_tool(Tool::Eraser);
    state.on_pointer_down(10.0, -10.0);
    state.on_pointer_move(10.0, 30.0, true);
    assert_eq!(state.strokes().len(), 2);

    state.on_pointer_cancel();
    assert_eq!(*state.store(), before);
    assert!(state.state.is_idle());
}

#[test]
fn test_pen_cancel_discards_stroke() {
    let mut state = create_test_input_state();
    state.on_pointer_down(0.0, 0.0);
    state.on_pointer_move(10.0, 0.0, true);
    state.on_pointer_cancel();
    assert!(state.strokes().is_empty());
    assert!(state.provisional_points().is_none());
}

#[test]
fn test_undo_after_commit_restores_previous_store() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 10);
    let one = state.store().clone();
    draw_line(&mut state, 20.0, 0, 10);
    assert_eq!(state.strokes().len(), 2);

    assert!(state.undo());
    assert_eq!(*state.store(), one);
    assert!(state.undo());
    assert!(state.strokes().is_empty());
    assert!(!state.undo());
}

#[test]
fn test_undo_reverts_erase_gesture() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 20);
    let before = state.store().clone();
    erase_vertical(&mut state, 10.0);
    assert_eq!(state.strokes().len(), 2);

    assert!(state.undo());
    assert_eq!(*state.store(), before);
}

#[test]
fn test_step_restarted_erase_checkpoints_previous_base() {
    let base = StrokeStore::new();
    let erased = base.commit(
        Stroke::new(
            vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)],
            PaletteColor::Black,
            4.0,
        )
        .unwrap(),
    );
    let erasing = CaptureState::Erasing {
        path: vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
        base: base.clone(),
    };
    let (next, effects) =
        erasing.step(PointerEvent::Down { x: 7.0, y: 7.0 }, &ctx(&erased, Tool::Eraser));

    assert_eq!(
        effects,
        vec![CaptureEffect::Checkpoint(base), CaptureEffect::Redraw]
    );
    assert_eq!(
        next,
        CaptureState::Erasing {
            path: vec![Point::new(7.0, 7.0)],
            base: erased,
        }
    );
}

#[test]
fn test_undo_reverts_erase_restarted_without_release() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 20);
    let original = state.store().clone();

    state.select_tool(Tool::Eraser);
    state.on_pointer_down(10.5, -10.0);
    state.on_pointer_move(10.5, 60.0, true);
    let first_erase = state.store().clone();
    assert_eq!(first_erase.len(), 2);

    // Second press arrives without a release for the first gesture.
    state.on_pointer_down(15.5, -10.0);
    state.on_pointer_move(15.5, 60.0, true);
    state.on_pointer_up();
    assert_eq!(state.strokes().len(), 3);

    assert!(state.undo());
    assert_eq!(*state.store(), first_erase);
    assert!(state.undo());
    assert_eq!(*state.store(), original);
}

#[test]
fn test_eraser_miss_records_no_history() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 20);
    assert!(state.undo());
    draw_line(&mut state, 10.0, 0, 20);
    erase_vertical(&mut state, 100.0);
    assert!(state.undo());
    assert!(state.strokes().is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_max_strokes_discards_extra_strokes() {
    let mut state = create_test_input_state();
    state.max_strokes = 2;
    for y in [10.0, 20.0, 30.0] {
        draw_line(&mut state, y, 0, 10);
    }
    assert_eq!(state.strokes().len(), 2);
    assert_eq!(state.strokes()[1].points()[0].y, 20.0);
}

#[test]
fn test_reset_clears_strokes_and_gesture() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 10);
    state.set_color(PaletteColor::Red);
    state.on_pointer_down(0.0, 40.0);
    state.on_pointer_move(5.0, 40.0, true);

    state.reset();
    assert!(state.strokes().is_empty());
    assert!(state.state.is_idle());
    assert_eq!(state.style.color, PaletteColor::Red);

    // The cleared drawing can be brought back.
    assert!(state.undo());
    assert_eq!(state.strokes().len(), 1);
}

#[test]
fn test_reset_all_restores_default_style() {
    let mut state = create_test_input_state();
    state.set_color(PaletteColor::Yellow);
    state.set_width(8.0);
    state.select_tool(Tool::Eraser);

    state.reset_all();
    assert_eq!(state.style, StrokeStyle::new(PaletteColor::Black, 4.0));
    assert_eq!(state.tool(), Tool::Pen);
}

#[test]
fn test_set_width_clamps_and_rounds() {
    let mut state = create_test_input_state();
    assert_eq!(state.set_width(0.2), 1.0);
    assert_eq!(state.set_width(42.0), 10.0);
    assert_eq!(state.set_width(3.14159), 3.14);
    assert_eq!(state.set_width(f64::NAN), 1.0);
    assert_eq!(normalize_width(5.556), 5.56);
}

#[test]
fn test_select_tool_cancels_open_gesture() {
    let mut state = create_test_input_state();
    state.on_pointer_down(0.0, 0.0);
    state.on_pointer_move(10.0, 0.0, true);
    state.select_tool(Tool::Eraser);
    assert!(state.state.is_idle());
    assert!(state.strokes().is_empty());
}

#[test]
fn test_hold_progress_drives_reveal_preview() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 10);
    let start = Instant::now();

    state.on_hold_press(start);
    assert!(state.hold_needs_frame());
    state.on_hold_frame(start + Duration::from_millis(600));
    let preview = state.reveal_preview().unwrap();
    assert!((preview - 0.5).abs() < 1e-9);
    assert!(state.take_pending_export().is_none());

    state.on_hold_release();
    assert_eq!(state.reveal_preview(), None);
    assert_eq!(state.hold().progress(), 0.0);
    assert!(state.take_pending_export().is_none());
}

#[test]
fn test_completed_hold_requests_export_once() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 10.0, 0, 10);
    let start = Instant::now();

    state.on_hold_press(start);
    state.on_hold_frame(start + Duration::from_millis(1200));
    assert_eq!(state.take_pending_export(), Some(HoldAction::Download));
    assert_eq!(state.reveal_preview(), None);

    state.on_hold_frame(start + Duration::from_millis(1300));
    assert!(state.take_pending_export().is_none());

    state.on_hold_frame(start + Duration::from_millis(2400));
    assert!(!state.hold_needs_frame());
    assert!(state.take_pending_export().is_none());
}

#[test]
fn test_render_paints_live_canvas() {
    let mut state = create_test_input_state();
    draw_line(&mut state, 75.0, 100, 300);
    state.on_pointer_down(50.0, 20.0);
    state.on_pointer_move(80.0, 20.0, true);

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 400, 150).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();
    state.render(&ctx);
    assert!(ctx.status().is_ok());
}
