pub mod score;
pub mod spawner;
pub mod states;

use glam::Vec2;

use crate::ui::Rect;
use score::ScoreStore;
use spawner::Spawner;
use states::Phase;

pub const ROUND_SECONDS: u32 = 30;

/// Discrete feedback for the presenter (sound / visual cue); the game never
/// depends on how it is rendered or heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Hit,
    RoundEnd,
}

/// All round state plus the transitions driven by the event loop: a 1 Hz
/// tick, mouse clicks, and the restart choice after a round ends.
#[derive(Debug)]
pub struct CatchGame {
    pub score: u32,
    pub best_score: u32,
    pub time_left: u32,
    /// Target center, kept inside the playable bounds by the spawner.
    pub target: Vec2,
    pub phase: Phase,
    /// Banner condition captured at the last round end. Deliberately the
    /// loose `score >= best` comparison, so a tie still shows the banner,
    /// while persistence requires a strict improvement.
    pub new_best: bool,
    pub player_name: String,
    radius: f32,
    bounds: Rect,
    spawner: Spawner,
    store: ScoreStore,
}

impl CatchGame {
    pub fn new(player_name: String, radius: f32, bounds: Rect, store: ScoreStore) -> Self {
        Self::with_spawner(player_name, radius, bounds, store, Spawner::new())
    }

    pub fn with_spawner(
        player_name: String,
        radius: f32,
        bounds: Rect,
        store: ScoreStore,
        mut spawner: Spawner,
    ) -> Self {
        let best_score = store.load();
        let target = spawner.next(bounds, radius);
        tracing::info!(player = %player_name, best_score, "new game");
        Self {
            score: 0,
            best_score,
            time_left: ROUND_SECONDS,
            target,
            phase: Phase::Playing,
            new_best: false,
            player_name,
            radius,
            bounds,
            spawner,
            store,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Playable bounds follow the window; the current target stays where it
    /// is until the next respawn.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// One second of countdown. Ignored once the round is over; the state
    /// stays frozen until `restart`.
    pub fn handle_tick(&mut self) -> Option<Feedback> {
        if self.phase == Phase::Over {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            return Some(self.end_round());
        }
        self.respawn();
        None
    }

    /// Hit test against the target circle, boundary inclusive. Misses are
    /// silent; clicks after the round ended are no-ops.
    pub fn handle_click(&mut self, click: Vec2) -> Option<Feedback> {
        if self.phase == Phase::Over {
            return None;
        }
        if click.distance(self.target) <= self.radius {
            self.score += 1;
            tracing::debug!(score = self.score, "hit");
            self.respawn();
            Some(Feedback::Hit)
        } else {
            None
        }
    }

    /// Valid only from `Over`; begins a fresh round.
    pub fn restart(&mut self) {
        if self.phase != Phase::Over {
            return;
        }
        self.score = 0;
        self.time_left = ROUND_SECONDS;
        self.new_best = false;
        self.phase = Phase::Playing;
        self.respawn();
        tracing::info!("round restarted");
    }

    fn end_round(&mut self) -> Feedback {
        self.phase = Phase::Over;
        self.new_best = self.score >= self.best_score;
        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save(self.best_score);
        }
        tracing::info!(
            score = self.score,
            best_score = self.best_score,
            new_best = self.new_best,
            "round over"
        );
        Feedback::RoundEnd
    }

    fn respawn(&mut self) {
        if self.phase == Phase::Playing {
            self.target = self.spawner.next(self.bounds, self.radius);
        }
    }
}
