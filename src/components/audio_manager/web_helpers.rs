// Shared constants, state imports, and browser-specific helper utilities.
use crate::playback::ControlState;
#[cfg(target_arch = "wasm32")]
use crate::playback::{MuteRequest, PlayRequest};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "ambience-audio";

/// Same-origin soundtrack file. When it is missing the play promise rejects
/// and the muted fallback stays in charge.
#[cfg(target_arch = "wasm32")]
const LOCAL_AUDIO_SRC: &str = "/assets/audio/ambient-loop.mp3";

/// The soundtrack sits under the page, not on top of it.
#[cfg(target_arch = "wasm32")]
const LOCAL_AUDIO_VOLUME: f64 = 0.45;

/// Embedded stream with autoplay+mute baked into the URL.
pub const FALLBACK_VIDEO_SRC: &str =
    "https://www.youtube-nocookie.com/embed/jfKfPfyJRdk?autoplay=1&mute=1&loop=1&playlist=jfKfPfyJRdk";

/// Initialize the page audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_src(LOCAL_AUDIO_SRC);
    audio.set_attribute("preload", "auto").ok()?;
    audio.set_loop(true);
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

#[cfg(target_arch = "wasm32")]
fn audio_has_source(audio: &HtmlAudioElement) -> bool {
    !audio.src().is_empty()
}

#[cfg(target_arch = "wasm32")]
fn playback_rejection_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|value| value.as_string())
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| "playback request was rejected".to_string())
}

/// Fire the play promise and ignore its result.
#[cfg(target_arch = "wasm32")]
fn web_try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}

/// Attempt to start local playback and fold the promise result back into the
/// control state. `mark_failure` distinguishes the attempts whose rejection
/// should flip the UI back to "not playing" (autoplay on load, an explicit
/// start from the play button) from the opportunistic ones (gesture unlock,
/// the mute-button side attempt) where a rejection changes nothing.
#[cfg(target_arch = "wasm32")]
fn web_start_local_play(
    audio: &HtmlAudioElement,
    mut control: Signal<ControlState>,
    mark_failure: bool,
) {
    match audio.play() {
        Ok(promise) => {
            spawn(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => control.with_mut(|state| state.start_attempt_resolved(true)),
                    Err(err) => {
                        crate::diagnostics::log_event(
                            "audio",
                            &playback_rejection_message(&err),
                        );
                        if mark_failure {
                            control.with_mut(|state| state.start_attempt_resolved(false));
                        }
                    }
                }
            });
        }
        Err(err) => {
            crate::diagnostics::log_event("audio", &playback_rejection_message(&err));
            if mark_failure {
                control.with_mut(|state| state.start_attempt_resolved(false));
            }
        }
    }
}
