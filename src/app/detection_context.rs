use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    #[error("the detection was cancelled")]
    Cancelled,

    #[error("the detection deadline was exceeded")]
    DeadlineExceeded,
}

/// Cancellation and deadline the caller attaches to a single detection.
///
/// Cloning shares the cancellation token, so cancelling the original also
/// cancels every clone.
#[derive(Clone, Debug, Default)]
pub struct DetectionContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl DetectionContext {
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    pub fn with_deadline(self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        };

        Self {
            deadline: Some(deadline),
            ..self
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn check(&self) -> Result<(), Interruption> {
        if self.token.is_cancelled() {
            return Err(Interruption::Cancelled);
        }

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Interruption::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    pub async fn done(&self) -> Interruption {
        let Some(deadline) = self.deadline else {
            self.token.cancelled().await;
            return Interruption::Cancelled;
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Interruption::Cancelled,
            _ = tokio::time::sleep_until(deadline) => Interruption::DeadlineExceeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;
    use tokio_util::sync::CancellationToken;

    use super::{DetectionContext, Interruption};

    #[tokio::test]
    async fn a_background_context_never_interrupts() {
        let ctx = DetectionContext::background();

        assert_eq!(ctx.check(), Ok(()));
        assert!(ctx.deadline().is_none());
    }

    #[tokio::test]
    async fn it_reports_cancellation_through_clones() {
        let token = CancellationToken::new();
        let ctx = DetectionContext::with_cancellation(token.clone());
        let clone = ctx.clone().with_timeout(Duration::from_secs(60));

        token.cancel();

        assert_eq!(ctx.check(), Err(Interruption::Cancelled));
        assert_eq!(clone.check(), Err(Interruption::Cancelled));
        assert_eq!(clone.done().await, Interruption::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn it_reports_an_expired_deadline() {
        let ctx = DetectionContext::background().with_timeout(Duration::from_millis(100));

        assert_eq!(ctx.check(), Ok(()));
        assert_eq!(ctx.done().await, Interruption::DeadlineExceeded);
        assert_eq!(ctx.check(), Err(Interruption::DeadlineExceeded));
    }

    #[tokio::test]
    async fn cancellation_wins_over_an_expired_deadline() {
        let token = CancellationToken::new();
        token.cancel();
        let ctx = DetectionContext::with_cancellation(token).with_deadline(Instant::now());

        assert_eq!(ctx.check(), Err(Interruption::Cancelled));
        assert_eq!(ctx.done().await, Interruption::Cancelled);
    }

    #[tokio::test]
    async fn it_keeps_the_earliest_deadline() {
        let now = Instant::now();
        let early = now + Duration::from_secs(1);
        let late = now + Duration::from_secs(10);

        let ctx = DetectionContext::background()
            .with_deadline(early)
            .with_deadline(late);

        assert_eq!(ctx.deadline(), Some(early));
    }
}
