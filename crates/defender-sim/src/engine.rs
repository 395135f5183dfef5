//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands
//! at tick boundaries, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless (no scheduler, presentation,
//! or transport dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use defender_core::commands::PlayerCommand;
use defender_core::components::Craft;
use defender_core::constants::*;
use defender_core::enums::{GamePhase, SteerDirection};
use defender_core::events::GameEvent;
use defender_core::state::GameStateSnapshot;
use defender_core::types::{Position, SimTime};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn layout.
    pub seed: u64,
    /// Number of hazards spawned at session start.
    pub max_hazards: usize,
    /// Starting (and maximum) planet health.
    pub max_health: i32,
    /// Advisory multiplayer headcount cap.
    pub max_players: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_hazards: DEFAULT_MAX_HAZARDS,
            max_health: DEFAULT_MAX_HEALTH,
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    health: i32,
    max_health: i32,
    score: u32,
    players: u32,
    max_players: u32,
    rooms: Vec<String>,
    cooldown: u32,
    max_hazards: usize,
    rng: ChaCha8Rng,
    next_hazard_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    message: Option<String>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            health: config.max_health,
            max_health: config.max_health,
            score: 0,
            players: 0,
            max_players: config.max_players,
            rooms: Vec::new(),
            cooldown: 0,
            max_hazards: config.max_hazards,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_hazard_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            message: None,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Paused and terminal phases drain commands but mutate
    /// nothing else.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.health,
            self.max_health,
            self.score,
            self.players,
            &self.rooms,
            self.cooldown,
            events,
            &self.message,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current planet health.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a hazard at an explicit position (for scenario tests).
    #[cfg(test)]
    pub fn spawn_hazard_at(&mut self, position: Position) -> hecs::Entity {
        world_setup::spawn_hazard_at(&mut self.world, position, &mut self.next_hazard_id)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands arriving after the terminal
    /// transition are dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == GamePhase::Over {
            return;
        }

        match command {
            PlayerCommand::StartSession => {
                if self.phase == GamePhase::Idle {
                    world_setup::setup_session(
                        &mut self.world,
                        &mut self.rng,
                        self.max_hazards,
                        &mut self.next_hazard_id,
                    );
                    self.health = self.max_health;
                    self.score = 0;
                    self.cooldown = 0;
                    self.time = SimTime::default();
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::Steer { direction } => {
                if self.phase != GamePhase::Idle {
                    self.steer_craft(direction);
                }
            }
            PlayerCommand::Fire => {
                if self.phase != GamePhase::Idle {
                    world_setup::spawn_projectile(&mut self.world);
                }
            }
            PlayerCommand::SetPlayers { count } => {
                self.players = count.min(self.max_players);
            }
            PlayerCommand::SetRooms { rooms } => {
                self.rooms = rooms;
            }
        }
    }

    /// Apply the fixed per-axis delta to the craft position.
    fn steer_craft(&mut self, direction: SteerDirection) {
        for (_entity, (pos, _craft)) in self.world.query_mut::<(&mut Position, &Craft)>() {
            match direction {
                SteerDirection::Up => pos.y += CRAFT_STEP_XY,
                SteerDirection::Down => pos.y -= CRAFT_STEP_XY,
                SteerDirection::Right => pos.x += CRAFT_STEP_XY,
                SteerDirection::Left => pos.x -= CRAFT_STEP_XY,
                SteerDirection::Forward => pos.z += CRAFT_STEP_Z,
                SteerDirection::Backward => pos.z -= CRAFT_STEP_Z,
            }
        }
    }

    /// Run all systems in the source game's frame order.
    fn run_systems(&mut self) {
        // 1. Projectile advance
        systems::movement::run_projectiles(&mut self.world);
        // 2. Impact cooldown edge
        systems::cooldown::run(&mut self.cooldown, &mut self.events);
        // 3. Proximity classification + health state machine
        systems::collision::run(
            &mut self.world,
            &mut self.health,
            &mut self.phase,
            &mut self.cooldown,
            &mut self.events,
            &mut self.despawn_buffer,
            &mut self.message,
        );
        // Terminal transition ends the tick's work.
        if self.phase != GamePhase::Running {
            return;
        }
        // 4. Hazard drift
        systems::movement::run_hazards(&mut self.world);
        // 5. Projectile culling
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
