use nalgebra as na;

use crate::models::TrajectoryRecord;

/// Converts a (range, latitude, longitude) triple to a Cartesian vector in
/// the same frame and length unit. Latitude and longitude in degrees.
pub fn spherical_to_cartesian(
    range: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> na::Vector3<f64> {
    let lat = latitude_deg.to_radians();
    let lon = longitude_deg.to_radians();

    na::Vector3::new(
        range * lat.cos() * lon.cos(),
        range * lat.cos() * lon.sin(),
        range * lat.sin(),
    )
}

/// Spacecraft position relative to the Sun in solar-ecliptic axes [AU]
pub fn solar_ecliptic_position(record: &TrajectoryRecord) -> na::Vector3<f64> {
    spherical_to_cartesian(record.srange, record.seclat, record.seclon)
}

/// Spacecraft position relative to Jupiter in planet-equatorial axes
/// [Jupiter radii]
pub fn planet_equatorial_position(record: &TrajectoryRecord) -> na::Vector3<f64> {
    spherical_to_cartesian(record.prange, record.peqlat, record.peqlon)
}
