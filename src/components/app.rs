use crate::components::{AudioController, CardGrid, Player, FALLBACK_VIDEO_SRC};
use crate::playback::ControlState;
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let control = use_signal(ControlState::default);

    // Provide state via context
    use_context_provider(|| control);

    rsx! {
        div { class: "page-shell",
            header { class: "page-header",
                h1 { class: "page-title", "Ambience" }
                p { class: "page-tagline", "A quiet corner of the web, with a soundtrack." }
            }

            main { class: "page-main", CardGrid {} }

            // Muted autoplay fallback. It starts with the page and keeps
            // running whenever local audio cannot play; autoplay policy
            // prevents driving it programmatically.
            iframe {
                id: "fallback-video",
                class: "fallback-frame",
                src: FALLBACK_VIDEO_SRC,
                title: "Ambient fallback stream",
                allow: "autoplay; encrypted-media",
                tabindex: "-1",
            }

            AudioController {}
            Player {}
        }
    }
}
