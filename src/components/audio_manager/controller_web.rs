#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let control = use_context::<Signal<ControlState>>();

    // One-time setup: create the audio element, attempt autoplay, and install
    // the document click listener that unlocks playback after a user gesture.
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        audio.set_volume(LOCAL_AUDIO_VOLUME);
        web_start_local_play(&audio, control, true);

        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };

        let runtime = Runtime::current();
        let click_cb = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(audio) = get_or_create_audio_element() else {
                return;
            };
            if audio_has_source(&audio) && audio.paused() {
                web_start_local_play(&audio, control, false);
            }
        }) as Box<dyn FnMut()>);
        let _ = doc.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
        click_cb.forget();
    });

    rsx! {}
}
