use crate::{ExecutionConfig, MutationError};
use std::time::Duration;

/// Where a single call currently is.
///
/// `Succeeded`, `Failed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CallState {
    Pending,
    Sending { attempt: u32 },
    RetryScheduled { attempt: u32, delay: Duration },
    Succeeded,
    Failed,
    Cancelled
}

impl CallState {
    pub(crate) fn is_terminal(&self) -> bool {
        matches!(
            self,
            CallState::Succeeded | CallState::Failed | CallState::Cancelled
        )
    }
}

pub(crate) enum Next {
    Retry(Duration),
    Fail(MutationError)
}

/// Call-local retry bookkeeping. Created when a call starts, dropped when it ends.
pub(crate) struct RetryState<'a> {
    config: &'a ExecutionConfig,
    attempt: u32,
    last_error: Option<MutationError>,
    next_delay: Duration,
    state: CallState
}

impl<'a> RetryState<'a> {
    pub(crate) fn new(config: &'a ExecutionConfig) -> Self {
        RetryState {
            config,
            attempt: 0,
            last_error: None,
            next_delay: config.base_delay.min(config.max_delay),
            state: CallState::Pending
        }
    }

    pub(crate) fn attempt(&self) -> u32 {
        self.attempt
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> CallState {
        self.state
    }

    pub(crate) fn last_error(&self) -> Option<&MutationError> {
        self.last_error.as_ref()
    }

    pub(crate) fn begin_attempt(&mut self) -> u32 {
        self.attempt += 1;
        self.transition(CallState::Sending {
            attempt: self.attempt
        });
        self.attempt
    }

    pub(crate) fn succeed(&mut self) {
        self.transition(CallState::Succeeded);
    }

    pub(crate) fn cancel(&mut self) {
        self.transition(CallState::Cancelled);
    }

    /// Decide what happens after a failed attempt.
    pub(crate) fn on_failure(&mut self, error: MutationError) -> Next {
        if !error.is_transient() {
            self.transition(CallState::Failed);
            return Next::Fail(error);
        }

        if self.attempt >= self.config.attempts() {
            self.transition(CallState::Failed);
            return Next::Fail(MutationError::RetriesExhausted {
                attempts: self.attempt,
                last: Box::new(error)
            });
        }

        let delay = self.next_delay;
        self.next_delay = self.config.backoff_delay(self.attempt);
        self.last_error = Some(error);
        self.transition(CallState::RetryScheduled {
            attempt: self.attempt,
            delay
        });
        Next::Retry(delay)
    }

    fn transition(&mut self, next: CallState) {
        debug_assert!(!self.state.is_terminal(), "call already finished");
        tracing::trace!(from = ?self.state, to = ?next, "call state changed");
        self.state = next;
    }
}
