//! Browser implementations of the core platform ports.
//!
//! This module provides web-specific implementations of the roadguard-core
//! traits: localStorage persistence, `alert`/`confirm` dialogs, and the
//! `tel:` dialer handoff.

use roadguard_core::{AssistEngine, Dialer, Notifier, SessionStore, SessionUser, Theme};

use crate::dom;
use crate::geo::GeoLocator;

const SESSION_KEY: &str = "session-user";
const THEME_KEY: &str = "theme-preference";

/// Session and theme persistence in the tab's localStorage.
pub struct WebSessionStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStoreError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn storage() -> Result<web_sys::Storage, WebStoreError> {
    dom::local_storage().map_err(|err| WebStoreError::Storage(dom::js_error_message(&err)))
}

impl SessionStore for WebSessionStore {
    type Error = WebStoreError;

    fn load_session(&self) -> Result<Option<SessionUser>, Self::Error> {
        let raw = storage()?
            .get_item(SESSION_KEY)
            .map_err(|err| WebStoreError::Storage(dom::js_error_message(&err)))?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save_session(&self, user: &SessionUser) -> Result<(), Self::Error> {
        let json = serde_json::to_string(user)?;
        storage()?
            .set_item(SESSION_KEY, &json)
            .map_err(|err| WebStoreError::Storage(dom::js_error_message(&err)))
    }

    fn clear_session(&self) -> Result<(), Self::Error> {
        storage()?
            .remove_item(SESSION_KEY)
            .map_err(|err| WebStoreError::Storage(dom::js_error_message(&err)))
    }

    fn load_theme(&self) -> Result<Option<Theme>, Self::Error> {
        let raw = storage()?
            .get_item(THEME_KEY)
            .map_err(|err| WebStoreError::Storage(dom::js_error_message(&err)))?;
        // Anything unrecognized counts as the absent (dark) default.
        Ok(raw.and_then(|value| value.parse().ok()))
    }

    fn save_theme(&self, theme: Theme) -> Result<(), Self::Error> {
        let store = storage()?;
        if theme.is_light() {
            store.set_item(THEME_KEY, theme.as_str())
        } else {
            store.remove_item(THEME_KEY)
        }
        .map_err(|err| WebStoreError::Storage(dom::js_error_message(&err)))
    }
}

/// Blocking browser dialogs.
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Hands a number to the platform dialer via a `tel:` navigation.
pub struct TelDialer;

impl Dialer for TelDialer {
    fn dial(&self, number: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(err) = win.location().set_href(&format!("tel:{number}")) {
                log::error!("failed to open dialer: {}", dom::js_error_message(&err));
            }
        }
    }
}

/// The engine wired to the browser ports.
pub type WebEngine = AssistEngine<WebSessionStore, BrowserNotifier, GeoLocator, TelDialer>;

/// Create a web-compatible engine with the browser port implementations.
#[must_use]
pub const fn web_engine() -> WebEngine {
    AssistEngine::new(WebSessionStore, BrowserNotifier, GeoLocator, TelDialer)
}
