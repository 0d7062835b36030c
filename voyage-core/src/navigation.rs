use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named screens on the app's navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    TripHome,
    TripDetails,
    Booking,
    BookingConfirmation,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::TripHome => "TripHome",
            Route::TripDetails => "TripDetails",
            Route::Booking => "Booking",
            Route::BookingConfirmation => "BookingConfirmation",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TripHome" => Ok(Route::TripHome),
            "TripDetails" => Ok(Route::TripDetails),
            "Booking" => Ok(Route::Booking),
            "BookingConfirmation" => Ok(Route::BookingConfirmation),
            other => Err(format!("unknown route: {}", other)),
        }
    }
}

/// Receives parameterless jumps to a named destination.
pub trait Router: Send + Sync {
    fn navigate_to(&self, route: Route);
}
