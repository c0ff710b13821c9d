#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Restore the persisted theme and session record once at mount.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let session = app_state.session.clone();
    let theme = app_state.theme.clone();
    use_effect_with((), move |()| {
        let engine = crate::platform::web_engine();
        let restored = engine.restore_theme();
        crate::theme::apply_theme(restored);
        theme.set(restored);
        session.set(engine.restore_session());
        || {}
    });
}
