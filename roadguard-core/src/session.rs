use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal-degree position as reported by the platform location provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The persisted session record, stored as JSON under the `session-user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub phone: String,
}

/// In-memory session record for the current page load.
///
/// `phone` is set exactly when `logged_in` is true; the fields are private so
/// the only transitions are [`SessionState::log_in`] and
/// [`SessionState::log_out`]. Last-known coordinates are never cleared within
/// a session, logout included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    logged_in: bool,
    phone: Option<String>,
    coords: Option<Coordinates>,
}

impl SessionState {
    /// Rebuild the in-memory state from a persisted record, if any.
    #[must_use]
    pub fn from_user(user: Option<SessionUser>) -> Self {
        user.map_or_else(Self::default, |u| Self {
            logged_in: true,
            phone: Some(u.phone),
            coords: None,
        })
    }

    pub fn log_in(&mut self, phone: String) {
        self.logged_in = true;
        self.phone = Some(phone);
    }

    /// Drop the identity but keep last-known coordinates.
    pub fn log_out(&mut self) {
        self.logged_in = false;
        self.phone = None;
    }

    pub fn set_coords(&mut self, coords: Coordinates) {
        self.coords = Some(coords);
    }

    #[must_use]
    pub const fn logged_in(&self) -> bool {
        self.logged_in
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub const fn coords(&self) -> Option<Coordinates> {
        self.coords
    }

    /// The record to persist, present only while logged in.
    #[must_use]
    pub fn user(&self) -> Option<SessionUser> {
        self.phone.clone().map(|phone| SessionUser { phone })
    }
}

/// Page theme, persisted under the `theme-preference` key as `"light"`;
/// an absent key means dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(()),
        }
    }
}
