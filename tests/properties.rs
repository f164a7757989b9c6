//! Property tests over arbitrary intent sequences

use proptest::prelude::*;
use pulse_grid::consts::GRID_SIZE;
use pulse_grid::sim::{Direction, Entity, GameState, Intent, TickInput, tick};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn play_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        3 => direction().prop_map(Intent::Move),
        1 => Just(Intent::PlacePulse),
    ]
}

/// A frame of moves and placements, without resets
fn frame_input() -> impl Strategy<Value = TickInput> {
    prop::collection::vec(play_intent(), 0..6).prop_map(TickInput::new)
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(seed in any::<u64>(), moves in prop::collection::vec(direction(), 0..200)) {
        let mut state = GameState::new(seed);
        for dir in moves {
            state.move_cursor(dir);
            let cursor = state.cursor();
            prop_assert!(cursor.col < GRID_SIZE && cursor.row < GRID_SIZE);
        }
    }

    #[test]
    fn stability_never_decreases(
        seed in any::<u64>(),
        frames in prop::collection::vec((frame_input(), 0.0f32..0.5), 1..60),
    ) {
        let mut state = GameState::new(seed);
        let mut last = state.stability();
        for (input, dt) in &frames {
            let report = tick(&mut state, input, *dt);
            prop_assert!(state.stability() >= last);
            prop_assert_eq!(state.stability() - last, report.disruptions as f32 * 5.0);
            last = state.stability();
        }
    }

    #[test]
    fn waves_never_reactivate(
        seed in any::<u64>(),
        frames in prop::collection::vec((frame_input(), 0.0f32..0.5), 1..60),
    ) {
        let mut state = GameState::new(seed);
        let mut was_active: Vec<bool> = state.waves().iter().map(|w| w.is_active()).collect();
        for (input, dt) in &frames {
            tick(&mut state, input, *dt);
            prop_assert_eq!(state.waves().len(), 3);
            for (before, wave) in was_active.iter().zip(state.waves()) {
                prop_assert!(*before || !wave.is_active());
            }
            prop_assert_eq!(
                state.is_level_complete(),
                state.waves().iter().all(|w| !w.is_active())
            );
            was_active = state.waves().iter().map(|w| w.is_active()).collect();
        }
    }

    #[test]
    fn reset_in_frame_homes_cursor(
        seed in any::<u64>(),
        before in prop::collection::vec(play_intent(), 0..10),
        after in prop::collection::vec(direction(), 0..10),
    ) {
        let mut state = GameState::new(seed);
        let mut intents = before;
        intents.push(Intent::Reset);
        state.apply_input(&TickInput::new(intents));
        prop_assert_eq!(state.cursor().col, 0);
        prop_assert_eq!(state.cursor().row, 0);
        prop_assert_eq!(state.grid().occupied_count(), 0);

        // Moves after the reset still apply
        let mut expected = state.cursor();
        for &dir in &after {
            expected = expected.step(dir);
        }
        state.apply_input(&TickInput::new(after.into_iter().map(Intent::Move)));
        prop_assert_eq!(state.cursor(), expected);
    }

    #[test]
    fn reset_restores_fresh_level(
        seed in any::<u64>(),
        frames in prop::collection::vec((frame_input(), 0.0f32..1.0), 0..40),
    ) {
        let mut state = GameState::new(seed);
        for (input, dt) in &frames {
            tick(&mut state, input, *dt);
        }
        state.reset();
        prop_assert_eq!(state.grid().occupied_count(), 0);
        prop_assert_eq!(state.waves().len(), 3);
        prop_assert!(state.waves().iter().all(|w| w.is_active()));
        prop_assert_eq!(state.cursor().col, 0);
        prop_assert_eq!(state.cursor().row, 0);
        prop_assert_eq!(state.stability(), 0.0);
        prop_assert!(!state.is_level_complete());
    }
}
