use super::errors::RadiationErrors;
use crate::constants::{PI, WATTS_PER_PETAWATT};
use crate::models::scenario::LinkScenario;

/// Collecting area of a circular aperture [m^2]
pub fn aperture_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Solves the inverse-square law I = P / (4 pi d^2) for the transmit power
/// that delivers `received_power` onto the receiving aperture:
/// P_tx = 4 pi d^2 P_recv / (pi r^2). Closed form, no iteration.
pub fn required_transmit_power<T: LinkScenario>(scenario: &T) -> Result<f64, RadiationErrors> {
    let received_power = positive("received_power", scenario.received_power())?;
    let radius = positive("aperture_radius", scenario.aperture_radius())?;
    let distance = positive("distance", scenario.distance())?;

    Ok(4.0 * PI * distance * distance * received_power / aperture_area(radius))
}

/// Watts to petawatts, for display only.
pub fn to_petawatts(watts: f64) -> f64 {
    watts / WATTS_PER_PETAWATT
}

// A zero aperture or distance would turn the closed form into a division by
// zero; reject it up front instead of letting inf propagate.
fn positive(name: &'static str, value: f64) -> Result<f64, RadiationErrors> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RadiationErrors::InvalidArgument(name, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::proxima::ProximaLink;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    struct Link {
        received_power: f64,
        aperture_radius: f64,
        distance: f64,
    }

    impl LinkScenario for Link {
        fn received_power(&self) -> f64 {
            self.received_power
        }

        fn aperture_radius(&self) -> f64 {
            self.aperture_radius
        }

        fn distance(&self) -> f64 {
            self.distance
        }
    }

    #[test]
    fn matches_the_closed_form() {
        let link = Link {
            received_power: 0.5,
            aperture_radius: 30.0,
            distance: 1.0e10,
        };
        let expected = 4.0 * PI * 1.0e10 * 1.0e10 * 0.5 / (PI * 30.0 * 30.0);
        assert_abs_diff_eq!(
            required_transmit_power(&link).unwrap(),
            expected,
            epsilon = 1e3
        );
    }

    #[test]
    fn proxima_scenario_regression() {
        // 0.1 W onto a 100 m dish across 4.2465 ly
        let power = required_transmit_power(&ProximaLink).unwrap();
        assert_abs_diff_eq!(power, 6.455122984e28, epsilon = 1e21);
        assert_abs_diff_eq!(to_petawatts(power), 6.455122984e13, epsilon = 1e6);
    }

    #[test]
    fn monotonic_in_distance_and_powers() {
        let base = Link {
            received_power: 0.1,
            aperture_radius: 100.0,
            distance: 1.0e16,
        };
        let p0 = required_transmit_power(&base).unwrap();

        let farther = Link {
            distance: 2.0e16,
            ..base
        };
        assert!(required_transmit_power(&farther).unwrap() > p0);

        let stronger = Link {
            received_power: 0.2,
            ..base
        };
        assert!(required_transmit_power(&stronger).unwrap() > p0);

        let bigger_dish = Link {
            aperture_radius: 200.0,
            ..base
        };
        assert!(required_transmit_power(&bigger_dish).unwrap() < p0);
    }

    #[test_case(0.0, 100.0, 1.0e16, "received_power"; "zero received power")]
    #[test_case(-0.1, 100.0, 1.0e16, "received_power"; "negative received power")]
    #[test_case(0.1, 0.0, 1.0e16, "aperture_radius"; "zero aperture")]
    #[test_case(0.1, -5.0, 1.0e16, "aperture_radius"; "negative aperture")]
    #[test_case(0.1, 100.0, 0.0, "distance"; "zero distance")]
    #[test_case(0.1, 100.0, f64::NAN, "distance"; "nan distance")]
    #[test_case(0.1, f64::INFINITY, 1.0e16, "aperture_radius"; "infinite aperture")]
    fn rejects_non_positive_arguments(
        received_power: f64,
        aperture_radius: f64,
        distance: f64,
        expected_name: &'static str,
    ) {
        let link = Link {
            received_power,
            aperture_radius,
            distance,
        };
        match required_transmit_power(&link) {
            Err(RadiationErrors::InvalidArgument(name, _)) => assert_eq!(name, expected_name),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}
