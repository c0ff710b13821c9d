//! Callback constructors wiring UI events to the engine flows.

use roadguard_core::{LoginFlow, ServiceKind, ServiceOutcome};
use yew::prelude::*;

use crate::app::state::AppState;
use crate::platform::web_engine;

pub fn build_toggle_theme(state: &AppState) -> Callback<()> {
    let theme = state.theme.clone();
    Callback::from(move |()| {
        let next = web_engine().toggle_theme(*theme);
        crate::theme::apply_theme(next);
        theme.set(next);
    })
}

/// Header button: opens the login dialog, or logs out when signed in.
pub fn build_login_click(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    let login = state.login.clone();
    let show_login = state.show_login.clone();
    Callback::from(move |()| {
        if session.logged_in() {
            let mut current = (*session).clone();
            web_engine().logout(&mut current);
            session.set(current);
        } else {
            login.set(LoginFlow::new());
            show_login.set(true);
        }
    })
}

pub fn build_send_otp(state: &AppState) -> Callback<String> {
    let login = state.login.clone();
    Callback::from(move |phone: String| {
        let mut flow = (*login).clone();
        // Validation errors were already surfaced by the engine dialog.
        let _ = web_engine().begin_login(&mut flow, &phone);
        login.set(flow);
    })
}

pub fn build_verify_otp(state: &AppState) -> Callback<String> {
    let login = state.login.clone();
    let session = state.session.clone();
    let show_login = state.show_login.clone();
    Callback::from(move |code: String| {
        let login = login.clone();
        let session = session.clone();
        let show_login = show_login.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let engine = web_engine();
            let mut flow = (*login).clone();
            let mut current = (*session).clone();
            if engine
                .verify_otp(&mut flow, &mut current, &code)
                .await
                .is_ok()
            {
                show_login.set(false);
            }
            login.set(flow);
            session.set(current);
        });
    })
}

pub fn build_close_login(state: &AppState) -> Callback<()> {
    let login = state.login.clone();
    let show_login = state.show_login.clone();
    Callback::from(move |()| {
        let mut flow = (*login).clone();
        flow.reset();
        login.set(flow);
        show_login.set(false);
    })
}

pub fn build_request_service(state: &AppState) -> Callback<ServiceKind> {
    let session = state.session.clone();
    let show_login = state.show_login.clone();
    Callback::from(move |kind: ServiceKind| {
        let session = session.clone();
        let show_login = show_login.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let engine = web_engine();
            let mut current = (*session).clone();
            let outcome = engine.request_service(&mut current, kind).await;
            if outcome == ServiceOutcome::LoginRequired {
                show_login.set(true);
            }
            session.set(current);
        });
    })
}

pub fn build_sos_toggle(state: &AppState) -> Callback<()> {
    let show_sos = state.show_sos.clone();
    Callback::from(move |()| {
        let next = !*show_sos;
        crate::a11y::set_status(if next {
            "SOS panel opened"
        } else {
            "SOS panel closed"
        });
        show_sos.set(next);
    })
}

pub fn build_sos_call(_state: &AppState) -> Callback<()> {
    Callback::from(move |()| {
        let _ = web_engine().sos_activate();
    })
}

pub fn build_allow_location(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| {
        let session = session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let engine = web_engine();
            let mut current = (*session).clone();
            let _ = engine.request_location(&mut current).await;
            session.set(current);
        });
    })
}

pub fn build_browse_services(_state: &AppState) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id("services"))
        {
            el.scroll_into_view();
        }
    })
}

#[derive(Clone)]
pub struct AppHandlers {
    pub toggle_theme: Callback<()>,
    pub login_click: Callback<()>,
    pub send_otp: Callback<String>,
    pub verify_otp: Callback<String>,
    pub close_login: Callback<()>,
    pub request_service: Callback<ServiceKind>,
    pub sos_toggle: Callback<()>,
    pub sos_call: Callback<()>,
    pub allow_location: Callback<()>,
    pub browse_services: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            toggle_theme: build_toggle_theme(state),
            login_click: build_login_click(state),
            send_otp: build_send_otp(state),
            verify_otp: build_verify_otp(state),
            close_login: build_close_login(state),
            request_service: build_request_service(state),
            sos_toggle: build_sos_toggle(state),
            sos_call: build_sos_call(state),
            allow_location: build_allow_location(state),
            browse_services: build_browse_services(state),
        }
    }
}
