use super::{Controller, SessionState};
use crate::quiz::{LoadError, LoadedQuiz};

/// Issued when a load starts. Only the most recently issued ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { questions: usize },
    Failed(&'static str),
    /// A newer load was started before this one finished; nothing changed.
    Superseded,
}

impl Controller {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_ticket += 1;
        LoadTicket(self.last_ticket)
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.last_ticket
    }

    /// Apply the result of a load started with `ticket`.
    pub fn commit(
        &mut self,
        ticket: LoadTicket,
        result: Result<LoadedQuiz, LoadError>,
    ) -> LoadOutcome {
        if !self.is_latest(ticket) {
            tracing::warn!(
                "discarding stale load #{} (latest is #{})",
                ticket.0,
                self.last_ticket
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(quiz) => {
                let questions = quiz.len();
                self.replace(quiz);
                LoadOutcome::Loaded { questions }
            }
            Err(e) => {
                tracing::warn!("quiz load #{} failed: {e}", ticket.0);
                let message = e.user_message();
                self.fail(message);
                LoadOutcome::Failed(message)
            }
        }
    }

    /// Install a quiz and start a clean session for it.
    pub fn replace(&mut self, quiz: LoadedQuiz) {
        tracing::info!(
            "quiz loaded: {:?} with {} questions",
            quiz.title().unwrap_or("untitled"),
            quiz.len()
        );
        self.state = SessionState {
            quiz: Some(quiz),
            ..SessionState::default()
        };
    }

    /// Record a user-facing error. Only the latest one is kept.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state.error = Some(message.into());
    }
}
