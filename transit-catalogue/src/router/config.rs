//! Routing settings for the journey graph.

use serde::Deserialize;

/// Error returned when routing settings cannot produce valid edge weights.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid routing settings: {reason}")]
pub struct InvalidRoutingSettings {
    reason: &'static str,
}

/// Parameters that turn distances into travel times.
///
/// The same values apply to every stop and every ride segment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting each time a bus is boarded.
    pub bus_wait_time: u32,

    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time (minutes) and velocity (km/h).
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check that ride times will be finite and non-negative.
    pub fn validate(&self) -> Result<(), InvalidRoutingSettings> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(InvalidRoutingSettings {
                reason: "bus velocity must be a positive number",
            });
        }
        Ok(())
    }

    /// Returns the boarding wait as a weight in minutes.
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Returns the velocity in meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }

    /// Minutes needed to ride the given distance.
    pub fn ride_minutes(&self, meters: f64) -> f64 {
        meters / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = RoutingSettings::default();

        assert_eq!(settings.bus_wait_time, 6);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn unit_conversions() {
        let settings = RoutingSettings::new(2, 30.0);

        assert_eq!(settings.wait_minutes(), 2.0);
        assert_eq!(settings.meters_per_minute(), 500.0);
        assert_eq!(settings.ride_minutes(12400.0), 24.8);
        assert_eq!(settings.ride_minutes(0.0), 0.0);
    }

    #[test]
    fn rejects_bad_velocity() {
        assert!(RoutingSettings::new(6, 0.0).validate().is_err());
        assert!(RoutingSettings::new(6, -40.0).validate().is_err());
        assert!(RoutingSettings::new(6, f64::NAN).validate().is_err());
        assert!(RoutingSettings::new(6, f64::INFINITY).validate().is_err());

        let err = RoutingSettings::new(6, 0.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid routing settings: bus velocity must be a positive number"
        );
    }

    #[test]
    fn zero_wait_is_allowed() {
        assert!(RoutingSettings::new(0, 1.0).validate().is_ok());
    }

    #[test]
    fn deserialize_from_json() {
        let settings: RoutingSettings =
            serde_json::from_str(r#"{"bus_wait_time": 6, "bus_velocity": 40}"#).unwrap();
        assert_eq!(settings, RoutingSettings::new(6, 40.0));
    }
}
