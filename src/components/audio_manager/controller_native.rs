#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    // The soundtrack only exists in the browser; this keeps the component
    // tree identical on native builds.
    let _control = use_context::<Signal<ControlState>>();

    rsx! {}
}
