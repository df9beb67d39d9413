//! Game host
//!
//! Owns the session together with its collaborators: the frame scheduler,
//! the presenter that draws snapshots and the flap sound. Input and frame
//! callbacks both go through `&mut Game`, so a transition is always applied
//! whole between two ticks.

use crate::audio::AudioCue;
use crate::frame::{FrameLoop, FrameScheduler};
use crate::input::{InputEvent, InputRouter};
use crate::settings::GameConfig;
use crate::sim::{GamePhase, Session, Snapshot, TickOutcome, Transition};

/// Draws (or otherwise consumes) a frame snapshot
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot);
}

pub struct Game<S: FrameScheduler, A: AudioCue, P: Presenter> {
    session: Session,
    router: InputRouter,
    frames: FrameLoop,
    scheduler: S,
    audio: A,
    presenter: P,
}

impl<S: FrameScheduler, A: AudioCue, P: Presenter> Game<S, A, P> {
    /// Create an Idle game and present its first frame
    pub fn new(config: GameConfig, seed: u64, scheduler: S, audio: A, presenter: P) -> Self {
        let router = InputRouter::new(config.activate_key.clone());
        let mut game = Self {
            session: Session::new(config, seed),
            router,
            frames: FrameLoop::new(),
            scheduler,
            audio,
            presenter,
        };
        log::info!("Game initialized with seed: {}", seed);
        game.present();
        game
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    pub fn frames(&self) -> &FrameLoop {
        &self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Route and apply one input event
    pub fn handle_input(&mut self, event: &InputEvent) -> Transition {
        let command = self.router.route(event, self.session.phase());
        let transition = self.session.apply(command);
        if transition == Transition::Ignored {
            return transition;
        }

        if transition.is_flap() {
            self.audio.flap();
        }
        self.sync_frames();
        self.present();
        transition
    }

    /// Animation frame callback: one tick, then reschedule while Running
    pub fn on_frame(&mut self) -> TickOutcome {
        if !self.frames.fired() {
            log::trace!("Ignoring frame with nothing pending");
            return TickOutcome::Skipped;
        }

        let outcome = self.session.tick();
        self.present();
        self.sync_frames();

        if let TickOutcome::Crashed(crash) = outcome {
            log::info!("Game over ({:?}), final score {}", crash, self.session.score());
        }
        outcome
    }

    /// Stop scheduling frames for good
    pub fn shutdown(&mut self) {
        self.frames.release(&mut self.scheduler);
    }

    /// Frames are pending exactly while the session is Running
    fn sync_frames(&mut self) {
        if self.session.phase() == GamePhase::Running {
            if let Err(e) = self.frames.acquire(&mut self.scheduler) {
                log::warn!("Failed to schedule frame: {}", e);
            }
        } else {
            self.frames.release(&mut self.scheduler);
        }
    }

    fn present(&mut self) {
        let snapshot = self.session.snapshot();
        log::trace!("{}", snapshot.to_json());
        self.presenter.present(&snapshot);
    }
}

impl<S: FrameScheduler, A: AudioCue, P: Presenter> Drop for Game<S, A, P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
