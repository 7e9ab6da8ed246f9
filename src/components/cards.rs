use dioxus::prelude::*;

const PAGE_CARDS: &[(&str, &str)] = &[
    (
        "Listen",
        "The page opens with a low ambient loop. If your browser blocks it, a muted stream keeps the mood until you tap anywhere.",
    ),
    (
        "Slow down",
        "Nothing here refreshes, notifies, or scrolls forever. Stay as long as the track holds you.",
    ),
    (
        "Notes",
        "Occasional writing on sound, attention, and building calm software.",
    ),
];

fn card_class(hovering: bool) -> &'static str {
    if hovering {
        "card hovering"
    } else {
        "card"
    }
}

#[component]
pub fn CardGrid() -> Element {
    rsx! {
        div { class: "card-grid",
            for (title , body) in PAGE_CARDS.iter() {
                PageCard { title: title.to_string(), body: body.to_string() }
            }
        }
    }
}

#[component]
fn PageCard(title: String, body: String) -> Element {
    let mut hovering = use_signal(|| false);

    rsx! {
        div {
            class: card_class(hovering()),
            onmouseenter: move |_| hovering.set(true),
            onmouseleave: move |_| hovering.set(false),
            h3 { class: "card-title", "{title}" }
            p { class: "card-body", "{body}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_enter_leave_is_symmetric() {
        let rest = card_class(false);
        assert_eq!(card_class(true), "card hovering");
        // After an enter/leave pair the card carries no marker class.
        assert_eq!(card_class(false), rest);
        assert_eq!(rest, "card");
    }
}
