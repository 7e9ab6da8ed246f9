use crate::components::{request_mute_toggle, request_play_toggle, Icon};
use crate::playback::ControlState;
use dioxus::prelude::*;

#[component]
pub fn Player() -> Element {
    let control = use_context::<Signal<ControlState>>();
    let state = control();

    rsx! {
        div { class: "player-shell",
            div { class: "player-track",
                div { class: "player-track-art",
                    Icon { name: "music".to_string(), class: "player-track-icon".to_string() }
                }
                div { class: "player-track-text",
                    p { class: "player-title", "Ambient loop" }
                    p { class: "player-subtitle",
                        {
                            if state.using_local {
                                "Local soundtrack"
                            } else {
                                "Fallback stream (muted)"
                            }
                        }
                    }
                }
            }

            div { class: "player-controls",
                // Play/Pause button
                button {
                    id: "play-toggle-btn",
                    class: "control-btn control-btn-primary",
                    aria_label: if state.playing { "Pause" } else { "Play" },
                    onclick: move |_| request_play_toggle(control),
                    Icon {
                        name: state.play_icon().to_string(),
                        class: "control-icon".to_string(),
                    }
                }
                // Mute button
                button {
                    id: "mute-toggle-btn",
                    class: "control-btn",
                    aria_label: if state.muted { "Unmute" } else { "Mute" },
                    onclick: move |_| request_mute_toggle(control),
                    Icon {
                        name: state.mute_icon().to_string(),
                        class: "control-icon".to_string(),
                    }
                }
            }
        }
    }
}
