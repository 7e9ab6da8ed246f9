//! Pure control state for the page soundtrack.
//!
//! The browser glue in `components::audio_manager` feeds element facts in and
//! applies the returned requests; everything that decides *what* should
//! happen lives here, with no DOM dependency.

/// What the play/pause button should do, given the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayRequest {
    /// Local audio is active and audible; pause it.
    PauseLocal,
    /// Local audio is active but paused; resume it.
    ResumeLocal,
    /// Local audio never started; attempt a fresh start.
    StartLocal,
    /// No local source and the embedded fallback cannot be driven
    /// programmatically; only the button icon changes.
    IconOnly,
}

/// What the mute button should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuteRequest {
    /// Flip the local element's muted flag to this value.
    ToggleLocal { muted: bool },
    /// The fallback is the active source: the icon flip is only a hint,
    /// optionally paired with a best-effort local start.
    HintOnly { try_start: bool },
}

/// Transient page-lifetime playback state. Reset on every reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    /// True once local audio playback has successfully started.
    pub using_local: bool,
    /// Drives the play/pause button icon.
    pub playing: bool,
    /// Drives the mute button icon. While `using_local` is false this is a
    /// hint only and mirrors no real media element flag.
    pub muted: bool,
}

impl ControlState {
    /// Apply the outcome of a local playback start attempt.
    pub fn start_attempt_resolved(&mut self, started: bool) {
        self.using_local = started;
        self.playing = started;
    }

    /// Branch for the play/pause button.
    pub fn play_toggled(&mut self, local_paused: bool, has_source: bool) -> PlayRequest {
        if self.using_local && !local_paused {
            self.playing = false;
            PlayRequest::PauseLocal
        } else if self.using_local {
            // Optimistic: a rejected resume is swallowed, so the icon stays
            // on "playing" either way.
            self.playing = true;
            PlayRequest::ResumeLocal
        } else if has_source {
            PlayRequest::StartLocal
        } else {
            self.playing = true;
            PlayRequest::IconOnly
        }
    }

    /// Branch for the mute button.
    pub fn mute_toggled(&mut self, has_source: bool) -> MuteRequest {
        self.muted = !self.muted;
        if self.using_local {
            MuteRequest::ToggleLocal { muted: self.muted }
        } else {
            MuteRequest::HintOnly {
                try_start: has_source,
            }
        }
    }

    pub fn play_icon(&self) -> &'static str {
        if self.playing {
            "pause"
        } else {
            "play"
        }
    }

    pub fn mute_icon(&self) -> &'static str {
        if self.muted {
            "volume-muted"
        } else {
            "volume"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_success_activates_local() {
        let mut state = ControlState::default();
        state.start_attempt_resolved(true);
        assert!(state.using_local);
        assert!(state.playing);
        assert_eq!(state.play_icon(), "pause");
    }

    #[test]
    fn autoplay_rejection_keeps_fallback() {
        let mut state = ControlState::default();
        state.start_attempt_resolved(false);
        assert!(!state.using_local);
        assert!(!state.playing);
        assert_eq!(state.play_icon(), "play");
    }

    #[test]
    fn play_toggle_pauses_active_local() {
        let mut state = ControlState {
            using_local: true,
            playing: true,
            muted: false,
        };
        let request = state.play_toggled(false, true);
        assert_eq!(request, PlayRequest::PauseLocal);
        assert!(!state.playing);
        assert_eq!(state.play_icon(), "play");
    }

    #[test]
    fn play_toggle_resumes_paused_local() {
        let mut state = ControlState {
            using_local: true,
            playing: false,
            muted: false,
        };
        let request = state.play_toggled(true, true);
        assert_eq!(request, PlayRequest::ResumeLocal);
        assert!(state.playing);
        assert_eq!(state.play_icon(), "pause");
    }

    #[test]
    fn play_toggle_attempts_start_when_source_exists() {
        let mut state = ControlState::default();
        let request = state.play_toggled(true, true);
        assert_eq!(request, PlayRequest::StartLocal);
        // The icon only changes once the start attempt resolves.
        assert!(!state.playing);
        state.start_attempt_resolved(true);
        assert!(state.using_local);
        assert_eq!(state.play_icon(), "pause");
    }

    #[test]
    fn play_toggle_without_source_flips_icon_only() {
        let mut state = ControlState::default();
        let request = state.play_toggled(true, false);
        assert_eq!(request, PlayRequest::IconOnly);
        assert!(state.playing);
        assert!(!state.using_local);
    }

    #[test]
    fn mute_toggle_flips_local_muted_flag() {
        let mut state = ControlState {
            using_local: true,
            playing: true,
            muted: false,
        };
        assert_eq!(
            state.mute_toggled(true),
            MuteRequest::ToggleLocal { muted: true }
        );
        assert_eq!(state.mute_icon(), "volume-muted");
        assert_eq!(
            state.mute_toggled(true),
            MuteRequest::ToggleLocal { muted: false }
        );
        assert_eq!(state.mute_icon(), "volume");
    }

    #[test]
    fn mute_toggle_on_fallback_is_hint_with_start_attempt() {
        let mut state = ControlState::default();
        let request = state.mute_toggled(true);
        assert_eq!(request, MuteRequest::HintOnly { try_start: true });
        assert!(state.muted);
        assert!(!state.using_local);
    }

    #[test]
    fn mute_toggle_on_fallback_without_source_skips_start() {
        let mut state = ControlState::default();
        let request = state.mute_toggled(false);
        assert_eq!(request, MuteRequest::HintOnly { try_start: false });
        assert_eq!(state.mute_icon(), "volume-muted");
    }

    #[test]
    fn gesture_unlock_marks_local_active() {
        // A page click resumes local audio once the browser allows it.
        let mut state = ControlState::default();
        state.start_attempt_resolved(false);
        state.start_attempt_resolved(true);
        assert!(state.using_local);
        assert!(state.playing);
    }
}
