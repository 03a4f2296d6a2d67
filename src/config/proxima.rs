use crate::constants::LIGHT_YEAR;
use crate::models::scenario::LinkScenario;

/// Illustrative link: a transmitter at Proxima Centauri delivering 0.1 W
/// onto a 100 m radio telescope.
pub struct ProximaLink;

impl ProximaLink {
    pub const RECEIVED_POWER: f64 = 0.1; // W
    pub const APERTURE_RADIUS: f64 = 100.0; // meters
    pub const DISTANCE_LY: f64 = 4.2465; // light years
}

impl LinkScenario for ProximaLink {
    fn received_power(&self) -> f64 {
        Self::RECEIVED_POWER
    }

    fn aperture_radius(&self) -> f64 {
        Self::APERTURE_RADIUS
    }

    fn distance(&self) -> f64 {
        Self::DISTANCE_LY * LIGHT_YEAR
    }
}
