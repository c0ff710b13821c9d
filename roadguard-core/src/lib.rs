//! RoadGuard Core
//!
//! Platform-agnostic session, login, and dispatch-gating logic for the
//! RoadGuard roadside-assistance demo. This crate provides the flows without
//! UI or platform-specific dependencies.

use async_trait::async_trait;

pub mod error;
pub mod login;
pub mod nearby;
pub mod phone;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use error::{LocationError, LoginError};
pub use login::{DEMO_OTP, LoginFlow, LoginStage};
pub use nearby::{MAPS_SEARCH_BASE, NearbyCategory, NearbyLinks, links_for, search_url};
pub use phone::is_valid_phone;
pub use services::ServiceKind;
pub use session::{Coordinates, SessionState, SessionUser, Theme};

/// Fixed emergency line the SOS action dials.
pub const EMERGENCY_LINE: &str = "+911234567890";

/// Trait for abstracting the browser-tab-scoped key-value store.
/// Platform-specific implementations should provide this.
///
/// Writes are best-effort: the engine logs a failed write and carries on.
pub trait SessionStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the persisted session record, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the record is corrupt.
    fn load_session(&self) -> Result<Option<SessionUser>, Self::Error>;

    /// Persist the session record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save_session(&self, user: &SessionUser) -> Result<(), Self::Error>;

    /// Remove the persisted session record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn clear_session(&self) -> Result<(), Self::Error>;

    /// Load the persisted theme preference, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn load_theme(&self) -> Result<Option<Theme>, Self::Error>;

    /// Persist the theme preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be written.
    fn save_theme(&self, theme: Theme) -> Result<(), Self::Error>;
}

/// Blocking user-facing dialogs. Both calls suspend the flow until dismissed.
pub trait Notifier {
    fn notify(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// One-shot platform location request with a high-accuracy hint and timeout.
#[async_trait(?Send)]
pub trait Locator {
    /// Resolve the current position or report why it could not be obtained.
    ///
    /// # Errors
    ///
    /// Returns a [`LocationError`] on denial, unavailability, or timeout.
    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

/// Fire-and-forget handoff to the platform dialer.
pub trait Dialer {
    fn dial(&self, number: &str);
}

/// Outcome of a gated service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOutcome {
    /// The user must complete the login flow first; no request was made.
    LoginRequired,
    /// Location could not be resolved, so the request was dropped.
    Dropped,
    /// The user declined the confirmation dialog.
    Declined,
    /// Acknowledged. The demo performs no real dispatch.
    Placed,
}

/// Drives the assistance flows against the platform ports.
pub struct AssistEngine<S, N, L, D>
where
    S: SessionStore,
    N: Notifier,
    L: Locator,
    D: Dialer,
{
    store: S,
    notifier: N,
    locator: L,
    dialer: D,
}

impl<S, N, L, D> AssistEngine<S, N, L, D>
where
    S: SessionStore,
    N: Notifier,
    L: Locator,
    D: Dialer,
{
    pub const fn new(store: S, notifier: N, locator: L, dialer: D) -> Self {
        Self {
            store,
            notifier,
            locator,
            dialer,
        }
    }

    /// Restore the session persisted by a previous page load.
    pub fn restore_session(&self) -> SessionState {
        match self.store.load_session() {
            Ok(user) => SessionState::from_user(user),
            Err(err) => {
                log::warn!("failed to read persisted session: {err}");
                SessionState::default()
            }
        }
    }

    /// Restore the persisted theme preference, defaulting to dark.
    pub fn restore_theme(&self) -> Theme {
        match self.store.load_theme() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(err) => {
                log::warn!("failed to read theme preference: {err}");
                Theme::default()
            }
        }
    }

    /// Flip and persist the theme, returning the new value.
    pub fn toggle_theme(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(err) = self.store.save_theme(next) {
            log::warn!("failed to persist theme preference: {err}");
        }
        next
    }

    /// Step one of the login flow: validate the number and surface the demo
    /// code in place of an SMS dispatch.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPhone` after notifying the user; no state changes.
    pub fn begin_login(&self, flow: &mut LoginFlow, raw_phone: &str) -> Result<(), LoginError> {
        match flow.submit_phone(raw_phone) {
            Ok(code) => {
                self.notifier.notify(&format!("Demo OTP sent: {code}"));
                Ok(())
            }
            Err(err) => {
                self.notifier.notify(
                    "Enter a valid mobile number including country code (e.g. +919876543210).",
                );
                Err(err)
            }
        }
    }

    /// Step two: verify the code, persist the session, and warm up location
    /// so the first service request can skip the prompt. The location result
    /// is best-effort and ignored here.
    ///
    /// # Errors
    ///
    /// Returns the login failure after notifying the user; the session stays
    /// logged out.
    pub async fn verify_otp(
        &self,
        flow: &mut LoginFlow,
        state: &mut SessionState,
        code: &str,
    ) -> Result<(), LoginError> {
        match flow.submit_code(code) {
            Ok(phone) => {
                state.log_in(phone.clone());
                if let Err(err) = self.store.save_session(&SessionUser { phone }) {
                    log::warn!("failed to persist session: {err}");
                }
                self.notifier.notify("Login successful.");
                let _ = self.request_location(state).await;
                Ok(())
            }
            Err(err @ LoginError::CodeMismatch) => {
                self.notifier
                    .notify(&format!("Invalid OTP. Demo OTP is {DEMO_OTP}."));
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Clear the persisted record and in-memory identity. Last-known
    /// coordinates survive.
    pub fn logout(&self, state: &mut SessionState) {
        if let Err(err) = self.store.clear_session() {
            log::warn!("failed to clear persisted session: {err}");
        }
        state.log_out();
        self.notifier.notify("You have been logged out.");
    }

    /// Ask the platform for a one-shot position fix and remember it.
    ///
    /// # Errors
    ///
    /// Returns the provider failure after surfacing it to the user once.
    /// There is no retry and no cancellation; a stale in-flight request can
    /// only be superseded by its own resolution.
    pub async fn request_location(
        &self,
        state: &mut SessionState,
    ) -> Result<Coordinates, LocationError> {
        match self.locator.locate().await {
            Ok(coords) => {
                state.set_coords(coords);
                Ok(coords)
            }
            Err(err @ LocationError::Unsupported) => {
                self.notifier
                    .notify("Geolocation is not supported by your browser.");
                Err(err)
            }
            Err(err) => {
                self.notifier.notify(
                    "Location permission denied or unavailable. \
                     Services require location to dispatch help.",
                );
                Err(err)
            }
        }
    }

    /// Gated dispatch request: login, then location, then confirmation.
    ///
    /// The checks run in order; the first one that fails ends the attempt.
    /// A location failure drops the request silently beyond the dialog
    /// [`Self::request_location`] already raised.
    pub async fn request_service(
        &self,
        state: &mut SessionState,
        kind: ServiceKind,
    ) -> ServiceOutcome {
        if !state.logged_in() {
            return ServiceOutcome::LoginRequired;
        }
        let coords = match state.coords() {
            Some(coords) => coords,
            None => match self.request_location(state).await {
                Ok(coords) => coords,
                Err(_) => return ServiceOutcome::Dropped,
            },
        };
        let prompt = format!(
            "Requesting {} near ({:.4}, {:.4}). Continue?",
            kind.label(),
            coords.latitude,
            coords.longitude
        );
        if !self.notifier.confirm(&prompt) {
            return ServiceOutcome::Declined;
        }
        self.notifier.notify(&format!(
            "Your request for {} has been placed. A nearby mechanic will contact you.",
            kind.label()
        ));
        ServiceOutcome::Placed
    }

    /// Confirm, then hand off to the platform dialer. No state transition.
    /// Returns whether a dial was initiated.
    pub fn sos_activate(&self) -> bool {
        if self
            .notifier
            .confirm("Request immediate help from the RoadGuard emergency line?")
        {
            self.dialer.dial(EMERGENCY_LINE);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        session: Rc<RefCell<Option<SessionUser>>>,
        theme: Rc<RefCell<Option<Theme>>>,
    }

    impl SessionStore for MemoryStore {
        type Error = Infallible;

        fn load_session(&self) -> Result<Option<SessionUser>, Self::Error> {
            Ok(self.session.borrow().clone())
        }

        fn save_session(&self, user: &SessionUser) -> Result<(), Self::Error> {
            *self.session.borrow_mut() = Some(user.clone());
            Ok(())
        }

        fn clear_session(&self) -> Result<(), Self::Error> {
            *self.session.borrow_mut() = None;
            Ok(())
        }

        fn load_theme(&self) -> Result<Option<Theme>, Self::Error> {
            Ok(*self.theme.borrow())
        }

        fn save_theme(&self, theme: Theme) -> Result<(), Self::Error> {
            *self.theme.borrow_mut() = Some(theme);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notices: Rc<RefCell<Vec<String>>>,
        confirms: Rc<RefCell<Vec<String>>>,
        answer: Rc<Cell<bool>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.answer.get()
        }
    }

    #[derive(Clone)]
    struct ScriptedLocator {
        result: Result<Coordinates, LocationError>,
    }

    #[async_trait(?Send)]
    impl Locator for ScriptedLocator {
        async fn locate(&self) -> Result<Coordinates, LocationError> {
            self.result
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDialer {
        dialed: Rc<RefCell<Vec<String>>>,
    }

    impl Dialer for RecordingDialer {
        fn dial(&self, number: &str) {
            self.dialed.borrow_mut().push(number.to_string());
        }
    }

    const MUMBAI: Coordinates = Coordinates {
        latitude: 19.0760,
        longitude: 72.8777,
    };

    fn engine(
        answer: bool,
        locate: Result<Coordinates, LocationError>,
    ) -> (
        AssistEngine<MemoryStore, RecordingNotifier, ScriptedLocator, RecordingDialer>,
        MemoryStore,
        RecordingNotifier,
        RecordingDialer,
    ) {
        let store = MemoryStore::default();
        let notifier = RecordingNotifier::default();
        notifier.answer.set(answer);
        let dialer = RecordingDialer::default();
        let eng = AssistEngine::new(
            store.clone(),
            notifier.clone(),
            ScriptedLocator { result: locate },
            dialer.clone(),
        );
        (eng, store, notifier, dialer)
    }

    #[test]
    fn full_login_persists_and_warms_up_location() {
        let (eng, store, notifier, _) = engine(true, Ok(MUMBAI));
        let mut flow = LoginFlow::new();
        let mut state = SessionState::default();

        eng.begin_login(&mut flow, "+919876543210").unwrap();
        block_on(eng.verify_otp(&mut flow, &mut state, "123456")).unwrap();

        assert!(state.logged_in());
        assert_eq!(state.coords(), Some(MUMBAI));
        assert_eq!(
            store.session.borrow().as_ref().map(|u| u.phone.clone()),
            Some("+919876543210".to_string())
        );
        let notices = notifier.notices.borrow();
        assert!(notices.iter().any(|n| n.contains("Demo OTP sent: 123456")));
        assert!(notices.iter().any(|n| n.contains("Login successful")));
    }

    #[test]
    fn login_survives_a_denied_location_warmup() {
        let (eng, store, _, _) = engine(true, Err(LocationError::Denied));
        let mut flow = LoginFlow::new();
        let mut state = SessionState::default();

        eng.begin_login(&mut flow, "+919876543210").unwrap();
        block_on(eng.verify_otp(&mut flow, &mut state, "123456")).unwrap();

        assert!(state.logged_in());
        assert!(state.coords().is_none());
        assert!(store.session.borrow().is_some());
    }

    #[test]
    fn restore_roundtrips_through_the_store() {
        let (eng, _, _, _) = engine(true, Ok(MUMBAI));
        let mut flow = LoginFlow::new();
        let mut state = SessionState::default();
        eng.begin_login(&mut flow, "+919876543210").unwrap();
        block_on(eng.verify_otp(&mut flow, &mut state, "123456")).unwrap();

        // A fresh page load restores identity but not coordinates.
        let restored = eng.restore_session();
        assert!(restored.logged_in());
        assert_eq!(restored.phone(), Some("+919876543210"));
        assert!(restored.coords().is_none());
    }

    #[test]
    fn theme_toggle_persists_and_double_toggle_restores() {
        let (eng, store, _, _) = engine(true, Ok(MUMBAI));
        assert_eq!(eng.restore_theme(), Theme::Dark);

        let light = eng.toggle_theme(Theme::Dark);
        assert_eq!(light, Theme::Light);
        assert_eq!(*store.theme.borrow(), Some(Theme::Light));
        assert_eq!(eng.restore_theme(), Theme::Light);

        let dark = eng.toggle_theme(light);
        assert_eq!(dark, Theme::Dark);
        assert_eq!(eng.restore_theme(), Theme::Dark);
    }

    #[test]
    fn logout_clears_store_but_not_coords() {
        let (eng, store, _, _) = engine(true, Ok(MUMBAI));
        let mut flow = LoginFlow::new();
        let mut state = SessionState::default();
        eng.begin_login(&mut flow, "+919876543210").unwrap();
        block_on(eng.verify_otp(&mut flow, &mut state, "123456")).unwrap();

        eng.logout(&mut state);
        assert!(!state.logged_in());
        assert!(state.coords().is_some());
        assert!(store.session.borrow().is_none());
    }

    #[test]
    fn sos_dials_only_after_confirmation() {
        let (eng, _, _, dialer) = engine(true, Ok(MUMBAI));
        assert!(eng.sos_activate());
        assert_eq!(*dialer.dialed.borrow(), vec![EMERGENCY_LINE.to_string()]);

        let (eng, _, _, dialer) = engine(false, Ok(MUMBAI));
        assert!(!eng.sos_activate());
        assert!(dialer.dialed.borrow().is_empty());
    }
}
