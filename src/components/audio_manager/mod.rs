//! Audio Manager - Drives the page soundtrack outside of the component render cycle.
//! Keeps media side-effects isolated so rejected playback only touches icon state.

// Shared constants, state imports, and browser-only helper utilities.
include!("web_helpers.rs");
// Web (wasm) soundtrack controller component.
include!("controller_web.rs");
// Native (non-wasm) no-op controller component.
include!("controller_native.rs");
// Public playback utility API consumed by UI components.
include!("playback_api.rs");
