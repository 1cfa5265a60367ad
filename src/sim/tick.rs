//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one snake step.

use super::grid::{Cell, Direction};
use super::state::GameState;

/// Commands gathered for a single tick, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Requested turns, applied first to last
    pub turns: Vec<Direction>,
    /// Speed key presses in arrival order, +1 faster and -1 slower;
    /// each one is clamped on its own
    pub speed_changes: Vec<i32>,
}

/// What the snake did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Plain move
    Moved,
    /// Head reached the apple
    Ate,
    /// Head ran into the body; the round was reset
    SelfCollision,
}

/// Result of a tick, including the cells that need repainting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub event: TickEvent,
    /// The board was full at the start of the tick and the round was reset
    pub board_filled: bool,
    /// Head cell after the tick
    pub head: Cell,
    /// Tail cell freed this tick, if any
    pub vacated: Option<Cell>,
    /// Apple eaten from under the old head; now part of the body
    pub eaten_under_head: Option<Cell>,
    /// The board was reset and must be repainted from scratch
    pub redraw_all: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    state.time_ticks += 1;

    for &direction in &input.turns {
        state.snake.set_pending_direction(direction);
    }
    for &steps in &input.speed_changes {
        state.adjust_speed(steps);
    }

    // Full board counts as a win
    let board_filled = state.board_full();
    if board_filled {
        log::info!("Board filled at length {}", state.snake.len());
        state.reset_round();
    }

    // An apple already under the head is eaten by this advance
    let apple_under_head = state.snake.head() == state.apple.cell();
    let eaten_under_head = apple_under_head.then(|| state.apple.cell());
    if apple_under_head {
        state.snake.grow();
    }

    let step = state.snake.advance(&state.grid);

    if state.snake.check_self_collision() {
        state.reset_round();
        return TickOutcome {
            event: TickEvent::SelfCollision,
            board_filled,
            head: state.snake.head(),
            vacated: None,
            eaten_under_head: None,
            redraw_all: true,
        };
    }

    let mut event = TickEvent::Moved;
    if apple_under_head || step.head == state.apple.cell() {
        if !apple_under_head {
            state.snake.grow();
        }
        state.relocate_apple();
        event = TickEvent::Ate;
    }

    TickOutcome {
        event,
        board_filled,
        head: step.head,
        vacated: step.vacated,
        eaten_under_head,
        redraw_all: board_filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Apple, Grid, Snake, SpeedLimits};
    use glam::IVec2;

    fn state_heading_right() -> GameState {
        let mut state = GameState::new(
            Grid::new(32, 24),
            SpeedLimits {
                min: 1,
                max: 30,
                step: 1,
            },
            10,
            12345,
        );
        state.snake = Snake::with_direction(IVec2::new(16, 12), Direction::Right);
        state.apple = Apple::at(IVec2::new(0, 0));
        state
    }

    #[test]
    fn test_three_ticks_straight() {
        let mut state = state_heading_right();
        let input = TickInput::default();
        for _ in 0..3 {
            let outcome = tick(&mut state, &input);
            assert_eq!(outcome.event, TickEvent::Moved);
        }
        assert_eq!(state.snake.head(), IVec2::new(19, 12));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_eat_apple_in_path() {
        let mut state = state_heading_right();
        state.apple = Apple::at(IVec2::new(17, 12));

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.event, TickEvent::Ate);
        assert!(state.snake.just_ate());
        assert!(!state.snake.occupies(state.apple.cell()));

        // Growth lands on the next advance
        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.vacated, None);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_apple_under_head_grows_in_same_tick() {
        let mut state = state_heading_right();
        state.apple = Apple::at(state.snake.head());

        let outcome = tick(&mut state, &TickInput::default());

        assert_eq!(outcome.event, TickEvent::Ate);
        assert_eq!(state.snake.len(), 2);
        assert!(!state.snake.occupies(state.apple.cell()));
    }

    #[test]
    fn test_turns_applied_in_order() {
        let mut state = state_heading_right();
        let input = TickInput {
            turns: vec![Direction::Up, Direction::Left],
            speed_changes: Vec::new(),
        };
        tick(&mut state, &input);
        // Length one may reverse, so the last turn wins
        assert_eq!(state.snake.direction(), Direction::Left);
        assert_eq!(state.snake.head(), IVec2::new(15, 12));
    }

    #[test]
    fn test_speed_changes() {
        let mut state = state_heading_right();
        let input = TickInput {
            turns: Vec::new(),
            speed_changes: vec![1, 1, 1],
        };
        tick(&mut state, &input);
        assert_eq!(state.speed(), 13);
    }

    #[test]
    fn test_speed_changes_clamped_one_at_a_time() {
        let mut state = GameState::new(
            Grid::new(32, 24),
            SpeedLimits {
                min: 1,
                max: 30,
                step: 1,
            },
            30,
            12345,
        );
        let input = TickInput {
            turns: Vec::new(),
            speed_changes: vec![1, -1],
        };
        tick(&mut state, &input);
        // 30 stays at 30, then drops to 29
        assert_eq!(state.speed(), 29);

        let input = TickInput {
            turns: Vec::new(),
            speed_changes: vec![-1; 40].into_iter().chain([1]).collect(),
        };
        tick(&mut state, &input);
        assert_eq!(state.speed(), 2);
    }

    #[test]
    fn test_apple_under_head_reported() {
        let mut state = state_heading_right();
        let head = state.snake.head();
        state.apple = Apple::at(head);

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.eaten_under_head, Some(head));

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.eaten_under_head, None);
    }

    #[test]
    fn test_self_collision_resets() {
        let mut state = state_heading_right();
        // Hook shape; turning down lands on (5,6)
        state.snake = Snake::from_cells(
            [
                IVec2::new(5, 5),
                IVec2::new(4, 5),
                IVec2::new(4, 6),
                IVec2::new(5, 6),
                IVec2::new(6, 6),
            ],
            Direction::Right,
        )
        .unwrap();

        let input = TickInput {
            turns: vec![Direction::Down],
            speed_changes: Vec::new(),
        };
        let outcome = tick(&mut state, &input);

        assert_eq!(outcome.event, TickEvent::SelfCollision);
        assert!(outcome.redraw_all);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), state.grid.center());
        assert_eq!(state.best_score, 4);
        assert!(!state.snake.occupies(state.apple.cell()));
    }

    #[test]
    fn test_full_board_resets_before_advance() {
        let mut state = GameState::new(
            Grid::new(32, 24),
            SpeedLimits {
                min: 1,
                max: 30,
                step: 1,
            },
            10,
            4,
        );
        // Boustrophedon path covering all 768 cells
        let cells: Vec<IVec2> = (0..24)
            .flat_map(|y| {
                let row: Vec<IVec2> = (0..32).map(|x| IVec2::new(x, y)).collect();
                if y % 2 == 0 { row } else { row.into_iter().rev().collect() }
            })
            .collect();
        state.snake = Snake::from_cells(cells, Direction::Left).unwrap();
        assert!(state.board_full());

        let outcome = tick(&mut state, &TickInput::default());

        assert!(outcome.board_filled);
        assert!(outcome.redraw_all);
        assert_eq!(state.best_score, 767);
        assert_eq!(state.snake.len(), 1);
        assert!(!state.snake.occupies(state.apple.cell()));
    }
}
