// Public playback utility API consumed by UI components.
/// Handle a press of the play/pause button.
#[cfg(target_arch = "wasm32")]
pub fn request_play_toggle(mut control: Signal<ControlState>) {
    let Some(audio) = get_or_create_audio_element() else {
        control.with_mut(|state| {
            state.play_toggled(true, false);
        });
        return;
    };

    let request =
        control.with_mut(|state| state.play_toggled(audio.paused(), audio_has_source(&audio)));
    match request {
        PlayRequest::PauseLocal => {
            let _ = audio.pause();
        }
        PlayRequest::ResumeLocal => web_try_play(&audio),
        PlayRequest::StartLocal => web_start_local_play(&audio, control, true),
        PlayRequest::IconOnly => {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn request_play_toggle(mut control: Signal<ControlState>) {
    control.with_mut(|state| {
        state.play_toggled(true, false);
    });
}

/// Handle a press of the mute button.
#[cfg(target_arch = "wasm32")]
pub fn request_mute_toggle(mut control: Signal<ControlState>) {
    let Some(audio) = get_or_create_audio_element() else {
        control.with_mut(|state| {
            state.mute_toggled(false);
        });
        return;
    };

    let request = control.with_mut(|state| state.mute_toggled(audio_has_source(&audio)));
    match request {
        MuteRequest::ToggleLocal { muted } => audio.set_muted(muted),
        MuteRequest::HintOnly { try_start } => {
            if try_start {
                web_start_local_play(&audio, control, false);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn request_mute_toggle(mut control: Signal<ControlState>) {
    control.with_mut(|state| {
        state.mute_toggled(false);
    });
}
