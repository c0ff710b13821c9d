use roadguard_core::{LoginFlow, SessionState, Theme};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<SessionState>,
    pub login: UseStateHandle<LoginFlow>,
    pub theme: UseStateHandle<Theme>,
    pub show_login: UseStateHandle<bool>,
    pub show_sos: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(SessionState::default),
        login: use_state(LoginFlow::default),
        theme: use_state(Theme::default),
        show_login: use_state(|| false),
        show_sos: use_state(|| false),
    }
}
