//! The per-frame update. `advance_frame` is a pure function of the world and the physics
//! settings; the Bevy system around it only translates its outcome into a state transition.

use bevy::prelude::*;

use crate::collision::{detect_collision, Bounded};
use crate::config::{PhysicsSettings, DEPARTURE_EXIT_X};
use crate::physics::{apply_gravity, Fall};
use crate::state::{GameSet, GameState};
use crate::world::{GameWorld, Phase, Pipe};

/// Runs `advance_frame` on every fixed tick while the level is playing.
pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, run_frame.in_set(GameSet::Frame));
    }
}

/// What a call to `advance_frame` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The level had already ended; nothing moved.
    Idle,
    Continue,
    /// The bird crashed or fell out during this frame.
    Over,
    /// The bird reached the destination during this frame.
    Won,
}

/// Advances the level by one frame.
///
/// Order matters: landmarks scroll first and the win check runs before any physics, so the frame
/// that wins never moves the bird or pipes. A crash does not cut the frame short; the remaining
/// pipes still scroll and score.
pub fn advance_frame(world: &mut GameWorld, settings: &PhysicsSettings) -> FrameOutcome {
    if !world.is_running() {
        return FrameOutcome::Idle;
    }

    let scroll = settings.scroll_velocity;

    if world.departure.active {
        world.departure.x += scroll;
        if world.departure.x < DEPARTURE_EXIT_X {
            world.departure.active = false;
        }
    }

    if world.destination.active {
        world.destination.x += scroll;
    }

    if world.reached_destination() {
        world.phase = Phase::Won;
        return FrameOutcome::Won;
    }

    if apply_gravity(&mut world.bird, settings) == Fall::OutOfBounds {
        world.phase = Phase::Over;
    }

    let bird_box = world.bird.hitbox();
    let bird_x = world.bird.x();
    for pipe in world.pipes.iter_mut() {
        pipe.x += scroll;

        if !pipe.passed && bird_x > pipe.right() {
            pipe.passed = true;
            world.score += 0.5;
        }

        if detect_collision(&bird_box, &pipe.hitbox()) {
            world.phase = Phase::Over;
        }
    }

    trim_pipes(&mut world.pipes);

    match world.phase {
        Phase::Over => FrameOutcome::Over,
        _ => FrameOutcome::Continue,
    }
}

/// Drops pipes from the front of the queue once they have fully left the board.
pub fn trim_pipes(pipes: &mut std::collections::VecDeque<Pipe>) {
    while pipes.front().is_some_and(|pipe| pipe.x < -pipe.width) {
        pipes.pop_front();
    }
}

fn run_frame(
    settings: Res<PhysicsSettings>,
    mut world: ResMut<GameWorld>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match advance_frame(&mut world, &settings) {
        FrameOutcome::Over => {
            info!(
                "Game over with score {} after {} pipe pairs.",
                world.score, world.pairs_spawned
            );
            next_state.set(GameState::from(world.phase));
        }
        FrameOutcome::Won => {
            info!("Reached the destination with score {}.", world.score);
            next_state.set(GameState::from(world.phase));
        }
        FrameOutcome::Idle | FrameOutcome::Continue => {}
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::config::{BOARD_HEIGHT, PIPE_HEIGHT, PIPE_WIDTH};
    use crate::world::PipeSide;

    fn pipe_at(x: f32, y: f32) -> Pipe {
        Pipe {
            x,
            y,
            width: PIPE_WIDTH,
            height: PIPE_HEIGHT,
            side: PipeSide::Top,
            passed: false,
        }
    }

    /// A pipe far above the bird's flight path, so it never collides.
    fn harmless_pipe_at(x: f32) -> Pipe {
        pipe_at(x, -10_000.0)
    }

    #[test]
    fn landmarks_scroll_each_frame() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        advance_frame(&mut world, &settings);
        assert_eq!(world.departure.x, 358.0);
        assert_eq!(world.destination.x, 1358.0);
        assert_eq!(world.bird.x(), 45.0);
    }

    #[test]
    fn departure_retires_off_screen() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        world.departure.x = -99.0;
        world.bird.y = 100.0;
        advance_frame(&mut world, &settings);
        assert!(!world.departure.active);

        let frozen = world.departure.x;
        advance_frame(&mut world, &settings);
        assert_eq!(world.departure.x, frozen);
        assert!(world.destination.active);
    }

    #[test]
    fn reaching_the_destination_wins_once() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        world.destination.x = world.bird.x();
        let bird_y = world.bird.y;

        assert_eq!(advance_frame(&mut world, &settings), FrameOutcome::Won);
        assert_eq!(world.phase, Phase::Won);
        // The winning frame stops before physics.
        assert_eq!(world.bird.y, bird_y);

        for _ in 0..5 {
            assert_eq!(advance_frame(&mut world, &settings), FrameOutcome::Idle);
        }
        assert_eq!(world.phase, Phase::Won);
    }

    #[test]
    fn destination_arrives_after_scrolling() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        world.destination.x = world.bird.x() + 4.0;

        // Keep the bird airborne while the marker closes in.
        world.bird.velocity = -0.4;
        assert_eq!(advance_frame(&mut world, &settings), FrameOutcome::Continue);
        assert_eq!(advance_frame(&mut world, &settings), FrameOutcome::Won);
    }

    #[test]
    fn falling_out_ends_the_game() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        world.bird.y = BOARD_HEIGHT;
        world.bird.velocity = 1.0;
        assert_eq!(advance_frame(&mut world, &settings), FrameOutcome::Over);
        assert_eq!(world.phase, Phase::Over);
        assert_eq!(advance_frame(&mut world, &settings), FrameOutcome::Idle);
    }

    #[test]
    fn passing_a_pipe_scores_half_a_point_once() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        // Right edge sits at the bird's x; one scroll step puts it behind.
        world.pipes.push_back(harmless_pipe_at(world.bird.x() - PIPE_WIDTH));

        advance_frame(&mut world, &settings);
        assert_eq!(world.score, 0.5);
        assert!(world.pipes[0].passed);

        world.bird.velocity = -6.0;
        advance_frame(&mut world, &settings);
        assert_eq!(world.score, 0.5);
    }

    #[test]
    fn pair_of_pipes_is_one_point() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        let x = world.bird.x() - PIPE_WIDTH;
        world.pipes.push_back(harmless_pipe_at(x));
        world.pipes.push_back(pipe_at(x, 10_000.0));

        advance_frame(&mut world, &settings);
        assert_eq!(world.score, 1.0);
    }

    #[test]
    fn pipe_level_with_the_bird_is_not_yet_passed() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        // After scrolling, right edge equals bird.x exactly.
        world.pipes.push_back(harmless_pipe_at(world.bird.x() - PIPE_WIDTH + 2.0));
        advance_frame(&mut world, &settings);
        assert_eq!(world.score, 0.0);
        assert!(!world.pipes[0].passed);
    }

    #[test]
    fn hitting_a_pipe_ends_the_game_but_finishes_the_frame() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        world.pipes.push_back(pipe_at(world.bird.x(), 0.0));
        world.pipes.push_back(harmless_pipe_at(200.0));

        assert_eq!(advance_frame(&mut world, &settings), FrameOutcome::Over);
        assert_eq!(world.phase, Phase::Over);
        // The pipe behind the colliding one still moved this frame.
        assert_eq!(world.pipes[1].x, 198.0);
    }

    #[test]
    fn gap_lets_the_bird_through() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        let top = pipe_at(world.bird.x(), world.bird.y - PIPE_HEIGHT - 50.0);
        let bottom = pipe_at(world.bird.x(), world.bird.y + 150.0);
        world.pipes.extend([top, bottom]);

        assert_eq!(advance_frame(&mut world, &settings), FrameOutcome::Continue);
        assert_eq!(world.phase, Phase::Running);
    }

    #[test]
    fn trimming_keeps_order() {
        let mut pipes: VecDeque<Pipe> = [-200.0, -65.0, -64.0, 10.0, -300.0]
            .into_iter()
            .map(harmless_pipe_at)
            .collect();

        trim_pipes(&mut pipes);

        let xs: Vec<f32> = pipes.iter().map(|p| p.x).collect();
        // Only the front is trimmed; a stray pipe further back waits its turn.
        assert_eq!(xs, vec![-64.0, 10.0, -300.0]);
    }

    #[test]
    fn offscreen_pipes_are_dropped_while_scrolling() {
        let settings = PhysicsSettings::default();
        let mut world = GameWorld::new();
        world.pipes.push_back(harmless_pipe_at(-62.0));
        world.pipes.push_back(harmless_pipe_at(100.0));
        world.bird.velocity = -0.4;

        advance_frame(&mut world, &settings);
        assert_eq!(world.pipes.len(), 2);
        advance_frame(&mut world, &settings);
        assert_eq!(world.pipes.len(), 1);
        assert_eq!(world.pipes[0].x, 96.0);
    }

    #[test]
    fn frame_system_requests_the_terminal_state() {
        let mut app = App::new();
        let mut world = GameWorld::new();
        world.destination.x = world.bird.x();
        app.insert_resource(world)
            .insert_resource(PhysicsSettings::default())
            .init_resource::<NextState<GameState>>()
            .add_systems(Update, run_frame);

        app.update();

        assert!(matches!(
            app.world().resource::<NextState<GameState>>(),
            NextState::Pending(GameState::Won)
        ));
        assert_eq!(app.world().resource::<GameWorld>().phase, Phase::Won);
    }
}
