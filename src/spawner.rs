//! Pipe pair spawning on a wall-clock interval.
//!
//! The interval timer is a resource that exists only while the level is playing. Leaving the
//! `Playing` state removes it, so nothing keeps ticking after the game has ended.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{OPENING_SPACE, PIPE_HEIGHT, PIPE_SPAWN_INTERVAL, PIPE_WIDTH, PIPE_X, PIPE_Y};
use crate::state::{GameSet, GameState};
use crate::world::{GameWorld, Pipe, PipeSide};

/// Owns the pipe spawn timer and the random source for gap positions.
pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PipeRng::from_entropy())
            .add_systems(OnEnter(GameState::Playing), start_spawn_timer)
            .add_systems(OnExit(GameState::Playing), cancel_spawn_timer)
            .add_systems(
                FixedUpdate,
                tick_spawner
                    .in_set(GameSet::Spawn)
                    .run_if(resource_exists::<PipeSpawnTimer>),
            );
    }
}

/// Repeating timer driving `spawn_pipes`. Removing the resource cancels spawning.
#[derive(Resource, Deref, DerefMut)]
pub struct PipeSpawnTimer(pub Timer);

impl Default for PipeSpawnTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(PIPE_SPAWN_INTERVAL, TimerMode::Repeating))
    }
}

/// Source of gap offsets. Seedable so spawning is reproducible under test.
#[derive(Resource, Deref, DerefMut)]
pub struct PipeRng(pub StdRng);

impl PipeRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Appends a top/bottom pipe pair at the right edge of the board. The gap between them is always
/// `OPENING_SPACE` tall; only its vertical position is random. No-op unless the level is running.
///
/// The offset is drawn uniformly from the 250 whole-pixel steps in `[0, PIPE_HEIGHT / 2)`, not from
/// a continuous range, so pipe edges stay exactly representable while they scroll.
pub fn spawn_pipes<R: Rng>(world: &mut GameWorld, rng: &mut R) {
    if !world.is_running() {
        return;
    }

    let offset = rng.gen_range(0.0..PIPE_HEIGHT / 2.0).floor();
    let random_pipe_y = PIPE_Y - PIPE_HEIGHT / 4.0 - offset;

    world.pipes.push_back(Pipe {
        x: PIPE_X,
        y: random_pipe_y,
        width: PIPE_WIDTH,
        height: PIPE_HEIGHT,
        side: PipeSide::Top,
        passed: false,
    });
    world.pipes.push_back(Pipe {
        x: PIPE_X,
        y: random_pipe_y + PIPE_HEIGHT + OPENING_SPACE,
        width: PIPE_WIDTH,
        height: PIPE_HEIGHT,
        side: PipeSide::Bottom,
        passed: false,
    });
    world.pairs_spawned += 1;
}

fn start_spawn_timer(mut commands: Commands) {
    commands.insert_resource(PipeSpawnTimer::default());
}

fn cancel_spawn_timer(mut commands: Commands) {
    commands.remove_resource::<PipeSpawnTimer>();
    debug!("Pipe spawner cancelled.");
}

fn tick_spawner(
    time: Res<Time>,
    mut timer: ResMut<PipeSpawnTimer>,
    mut rng: ResMut<PipeRng>,
    mut world: ResMut<GameWorld>,
) {
    timer.tick(time.delta());

    for _ in 0..timer.times_finished_this_tick() {
        spawn_pipes(&mut world, &mut rng.0);
    }
}
