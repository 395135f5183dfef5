//! Frame scheduler — drives the simulation at the fixed tick rate.
//!
//! The engine is created inside the loop thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. After every tick the
//! snapshot is fanned out to the collaborators and stored in shared
//! state for synchronous polling.
//!
//! Lifecycle: `start` spawns the loop thread; pause and resume are
//! engine commands (the thread keeps ticking, a paused tick mutates
//! nothing); the thread exits on its own when the engine reports the
//! terminal phase, or when `stop` is called. `pause` and `stop` are
//! no-ops once stopped.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use defender_core::commands::PlayerCommand;
use defender_core::constants::{EARTH_COLLISION_EVENT, TICK_RATE};
use defender_core::enums::GamePhase;
use defender_core::events::GameEvent;
use defender_core::state::GameStateSnapshot;
use defender_sim::engine::{SimConfig, SimulationEngine};

use crate::collaborators::{Presenter, Transport};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the session surface to the loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player or server command to forward to the engine.
    Player(PlayerCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Owns the loop thread and the channel into it.
pub struct FrameScheduler {
    cmd_tx: Option<mpsc::Sender<GameLoopCommand>>,
    handle: Option<thread::JoinHandle<()>>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            cmd_tx: None,
            handle: None,
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }

    /// Whether the loop thread is alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Spawn the loop thread and start a session. No-op if already
    /// running.
    pub fn start(
        &mut self,
        config: SimConfig,
        presenter: Box<dyn Presenter>,
        transport: Option<Box<dyn Transport>>,
    ) {
        if self.is_running() {
            return;
        }

        let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
        let latest_snapshot = Arc::clone(&self.latest_snapshot);

        let handle = thread::Builder::new()
            .name("defender-game-loop".into())
            .spawn(move || {
                run_game_loop(config, cmd_rx, &latest_snapshot, presenter, transport);
            })
            .expect("Failed to spawn game loop thread");

        self.cmd_tx = Some(cmd_tx);
        self.handle = Some(handle);
    }

    /// Forward a command to the engine. Best-effort: dropped when the
    /// loop has stopped.
    pub fn send(&self, command: PlayerCommand) {
        if let Some(tx) = self.cmd_tx.as_ref() {
            let _ = tx.send(GameLoopCommand::Player(command));
        }
    }

    /// Suspend the simulation. Safe to call when already stopped.
    pub fn pause(&self) {
        self.send(PlayerCommand::Pause);
    }

    /// Resume a paused simulation. No state re-initialization.
    pub fn resume(&self) {
        self.send(PlayerCommand::Resume);
    }

    /// Stop the loop thread and wait for it to exit. Safe to call when
    /// already stopped, and called again after that.
    pub fn stop(&mut self) {
        if let Some(tx) = self.cmd_tx.take() {
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Block until the loop thread exits on its own (game over).
    pub fn join(&mut self) {
        self.cmd_tx = None;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Latest snapshot for synchronous polling.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The game loop. Runs until game over, Shutdown, or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    presenter: Box<dyn Presenter>,
    transport: Option<Box<dyn Transport>>,
) {
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartSession);

    let mut next_tick_time = Instant::now();
    let mut fan_out = FanOut::new(presenter, transport);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Fan out to collaborators, then store for polling
        fan_out.apply(&snapshot);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. Terminal phase releases the scheduling thread
        if snapshot.phase == GamePhase::Over {
            log::info!("game over after {} ticks", snapshot.time.tick);
            return;
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Push-on-change fan-out of snapshot state and events to the
/// collaborators. Collaborator calls are infallible by contract, so a
/// misbehaving presenter or transport cannot corrupt scheduling state.
struct FanOut {
    presenter: Box<dyn Presenter>,
    transport: Option<Box<dyn Transport>>,
    last_health: Option<i32>,
    last_players: Option<u32>,
    last_rooms: Option<Vec<String>>,
}

impl FanOut {
    fn new(presenter: Box<dyn Presenter>, transport: Option<Box<dyn Transport>>) -> Self {
        Self {
            presenter,
            transport,
            last_health: None,
            last_players: None,
            last_rooms: None,
        }
    }

    fn apply(&mut self, snapshot: &GameStateSnapshot) {
        if self.last_health != Some(snapshot.health) {
            self.presenter.set_health(snapshot.health);
            self.last_health = Some(snapshot.health);
        }
        if self.last_players != Some(snapshot.players) {
            self.presenter.set_players(snapshot.players);
            self.last_players = Some(snapshot.players);
        }
        if self.last_rooms.as_deref() != Some(&snapshot.rooms) {
            self.presenter.set_rooms(&snapshot.rooms);
            self.last_rooms = Some(snapshot.rooms.clone());
        }

        for event in &snapshot.events {
            match event {
                GameEvent::PlanetHit { .. } => {
                    if let Some(transport) = self.transport.as_ref() {
                        transport.send(EARTH_COLLISION_EVENT);
                    }
                }
                GameEvent::GameOver { message } => {
                    self.presenter.set_message(message);
                }
                GameEvent::HazardAlert { .. } | GameEvent::CooldownExpired => {}
            }
        }
    }
}
