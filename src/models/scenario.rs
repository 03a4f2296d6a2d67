/// Parameters of a point-source radio link evaluated with the inverse-square
/// law. All values in SI units.
pub trait LinkScenario {
    /// Power that must arrive at the receiver [W]
    fn received_power(&self) -> f64;
    /// Radius of the receiving aperture [m]
    fn aperture_radius(&self) -> f64;
    /// Distance between transmitter and receiver [m]
    fn distance(&self) -> f64;
}
