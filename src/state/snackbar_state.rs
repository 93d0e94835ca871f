//! Confirmation snackbar animation state

use std::time::{Duration, Instant};

/// Slide-in animation and optional auto-dismiss timer for the confirmation
#[derive(Debug, Clone)]
pub struct SnackbarState {
    /// When the snackbar appeared
    pub start_time: Instant,
    /// Dismiss automatically after this long
    pub timeout: Option<Duration>,
}

impl SnackbarState {
    /// Duration of the slide-in
    const SLIDE_DURATION: Duration = Duration::from_millis(250);

    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            start_time: Instant::now(),
            timeout,
        }
    }

    /// Eased slide-in progress from 0.0 (hidden) to 1.0 (fully shown)
    pub fn progress(&self) -> f32 {
        Self::progress_at(self.start_time.elapsed())
    }

    fn progress_at(elapsed: Duration) -> f32 {
        if elapsed >= Self::SLIDE_DURATION {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
        simple_easing::cubic_out(linear)
    }

    /// Whether the slide-in is still running
    pub fn is_animating(&self) -> bool {
        self.start_time.elapsed() < Self::SLIDE_DURATION
    }

    /// Whether the auto-dismiss timeout has elapsed
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(self.start_time.elapsed())
    }

    fn is_expired_at(&self, elapsed: Duration) -> bool {
        self.timeout.is_some_and(|timeout| elapsed >= timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_starts_at_zero() {
        assert_eq!(SnackbarState::progress_at(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_progress_completes_after_slide() {
        assert_eq!(SnackbarState::progress_at(Duration::from_millis(250)), 1.0);
        assert_eq!(SnackbarState::progress_at(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_progress_is_eased() {
        // cubic ease-out runs ahead of linear
        let half = SnackbarState::progress_at(Duration::from_millis(125));
        assert!(half > 0.5 && half < 1.0, "got {half}");
    }

    #[test]
    fn test_without_timeout_never_expires() {
        let snackbar = SnackbarState::new(None);
        assert!(!snackbar.is_expired_at(Duration::from_secs(3600)));
        assert!(!snackbar.is_expired());
    }

    #[test]
    fn test_expires_after_timeout() {
        let snackbar = SnackbarState::new(Some(Duration::from_secs(3)));
        assert!(!snackbar.is_expired());
        assert!(!snackbar.is_expired_at(Duration::from_secs(2)));
        assert!(snackbar.is_expired_at(Duration::from_secs(3)));
    }

    #[test]
    fn test_zero_timeout_expires_immediately() {
        let snackbar = SnackbarState::new(Some(Duration::ZERO));
        assert!(snackbar.is_expired());
    }

    #[test]
    fn test_new_snackbar_is_animating() {
        let snackbar = SnackbarState::new(None);
        assert!(snackbar.is_animating());
    }
}
