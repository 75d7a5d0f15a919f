pub mod app;
pub mod event_log;
pub mod gesture_pad;
pub mod intro_overlay;
pub mod settings_modal;
pub mod snapshot_panel;
