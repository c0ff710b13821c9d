use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The roadside services a signed-in user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Refuel,
    Tyre,
    Battery,
    Tow,
}

impl ServiceKind {
    pub const ALL: [Self; 4] = [Self::Refuel, Self::Tyre, Self::Battery, Self::Tow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Refuel => "refuel",
            Self::Tyre => "tyre",
            Self::Battery => "battery",
            Self::Tow => "tow",
        }
    }

    /// Customer-facing service name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Refuel => "Emergency Refuel",
            Self::Tyre => "Flat Tyre Repair",
            Self::Battery => "Battery Jump-start",
            Self::Tow => "Towing Service",
        }
    }

    /// Short card blurb for the services grid.
    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Refuel => "Fuel delivered to where you stopped.",
            Self::Tyre => "On-the-spot puncture fix or swap.",
            Self::Battery => "Jump leads and a battery health check.",
            Self::Tow => "Flatbed to the nearest garage.",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "refuel" => Ok(Self::Refuel),
            "tyre" => Ok(Self::Tyre),
            "battery" => Ok(Self::Battery),
            "tow" => Ok(Self::Tow),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip_through_from_str() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.as_str().parse::<ServiceKind>(), Ok(kind));
        }
        assert!("winch".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn labels_match_the_service_menu() {
        assert_eq!(ServiceKind::Refuel.label(), "Emergency Refuel");
        assert_eq!(ServiceKind::Tyre.label(), "Flat Tyre Repair");
        assert_eq!(ServiceKind::Battery.label(), "Battery Jump-start");
        assert_eq!(ServiceKind::Tow.label(), "Towing Service");
    }
}
