//! The generic game session layer.
//!
//! Every interactive game implements the `Game` trait: a state machine that is
//! advanced by structured inputs (button custom IDs) and can render itself as
//! an embed plus component rows. The `GameManager` tracks one session per
//! `(user, channel)` pair and enforces the abandonment policy: sessions idle
//! beyond the timeout are dropped, either lazily on the next input or by the
//! background sweeper.

use crate::constants::SESSION_IDLE_TIMEOUT_SECS;
use serenity::builder::{CreateActionRow, CreateEmbed};
use serenity::model::id::{ChannelId, UserId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Identifies a game session. One user can run at most one game per channel;
/// starting a new game replaces the old session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub user: UserId,
    pub channel: ChannelId,
}

/// What the manager should do after a game processed an input.
pub enum GameUpdate {
    /// The state changed; re-render the game message.
    ReRender,
    /// The game ended; render once more, strip the buttons, and show the message.
    GameOver(String),
    /// The input was not meaningful in the current phase; acknowledge silently.
    NoOp,
}

pub trait Game: Send + Sync {
    /// Advances the state machine with one structured input event.
    fn handle_input(&mut self, input: &str) -> GameUpdate;
    /// Renders the current state as an embed and its component rows.
    fn render(&self) -> (CreateEmbed, Vec<CreateActionRow>);
}

struct Session {
    game: Box<dyn Game>,
    last_input: Instant,
}

/// The result of feeding an input into the manager.
pub enum AdvanceOutcome {
    /// No session exists for this key.
    NoSession,
    /// The session had been idle past the timeout and was dropped.
    Expired,
    /// The game processed the input.
    Update {
        update: GameUpdate,
        embed: CreateEmbed,
        components: Vec<CreateActionRow>,
    },
}

pub struct GameManager {
    sessions: HashMap<SessionKey, Session>,
    idle_timeout: Duration,
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl GameManager {
    pub fn new() -> Self {
        Self::with_idle_timeout(Duration::from_secs(SESSION_IDLE_TIMEOUT_SECS))
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            idle_timeout,
        }
    }

    /// Registers a new session, replacing any previous game the user had in
    /// this channel.
    pub fn start_session(&mut self, key: SessionKey, game: Box<dyn Game>) {
        self.sessions.insert(
            key,
            Session {
                game,
                last_input: Instant::now(),
            },
        );
    }

    /// Feeds one input event into the session for `key`.
    /// Finished and expired sessions are removed here; the caller only has to
    /// translate the outcome into a Discord response.
    pub fn advance(&mut self, key: &SessionKey, input: &str) -> AdvanceOutcome {
        let Some(session) = self.sessions.get_mut(key) else {
            return AdvanceOutcome::NoSession;
        };
        if session.last_input.elapsed() > self.idle_timeout {
            self.sessions.remove(key);
            return AdvanceOutcome::Expired;
        }
        session.last_input = Instant::now();
        let update = session.game.handle_input(input);
        let (embed, components) = session.game.render();
        if matches!(update, GameUpdate::GameOver(_)) {
            self.sessions.remove(key);
        }
        AdvanceOutcome::Update {
            update,
            embed,
            components,
        }
    }

    pub fn remove_session(&mut self, key: &SessionKey) {
        self.sessions.remove(key);
    }

    /// Drops every session idle past the timeout and returns their keys.
    pub fn sweep_idle(&mut self) -> Vec<SessionKey> {
        let idle_timeout = self.idle_timeout;
        let expired: Vec<SessionKey> = self
            .sessions
            .iter()
            .filter(|(_, s)| s.last_input.elapsed() > idle_timeout)
            .map(|(k, _)| *k)
            .collect();
        for key in &expired {
            self.sessions.remove(key);
        }
        expired
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
