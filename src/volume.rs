use std::fmt;

use crate::config::Config;

/// Convert a detected droplet radius in pixels to a physical volume
///
/// The droplet is taken as a sphere while its diameter stays below the
/// channel height and as flattened against the channel walls above it; the
/// volume is an ellipsoid of revolution either way. Returns microlitres when
/// `config.convert_to_microlitres` is set, cubic metres otherwise.
pub fn droplet_volume(radius_pixels: f64, config: &Config) -> f64 {
    // convert to microns
    let microns =
        radius_pixels * (config.reference_distance_micron / config.reference_distance_pixel);
    // scale to meters
    let xy = microns * 1e-6;
    // strictly above the channel height the droplet pancakes; the channel
    // height term keeps its 10e-6 scale factor
    let z = if microns > config.channel_height_micron {
        config.channel_height_micron * 10e-6
    } else {
        xy
    };
    let volume = (4. / 3.) * std::f64::consts::PI * xy * xy * z;
    if config.convert_to_microlitres {
        volume * 1e9
    } else {
        volume
    }
}

/// Unit of the values a pipeline run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Pixels,
    CubicMetres,
    Microlitres,
}
impl Unit {
    pub fn from_config(config: &Config) -> Self {
        if !config.convert_units {
            Unit::Pixels
        } else if config.convert_to_microlitres {
            Unit::Microlitres
        } else {
            Unit::CubicMetres
        }
    }
    /// The reported quantity: radius in pixels, volume otherwise
    pub fn quantity(&self) -> &'static str {
        match self {
            Unit::Pixels => "Radius",
            Unit::CubicMetres | Unit::Microlitres => "Volume",
        }
    }
}
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Pixels => write!(f, "px"),
            Unit::CubicMetres => write!(f, "m^3"),
            Unit::Microlitres => write!(f, "uL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_close(value: f64, expected: f64) {
        assert!(
            (value - expected).abs() <= 1e-9 * expected.abs(),
            "{value} != {expected}"
        );
    }

    #[test]
    fn zero_radius_is_zero_volume() {
        assert_eq!(droplet_volume(0., &Config::default()), 0.);
        assert_eq!(droplet_volume(0., &Config::default().cubic_metres()), 0.);
    }

    #[test]
    fn sphere_reference_value() {
        // 50 px -> 22.31 micron, below the 60 micron channel
        assert_close(droplet_volume(50., &Config::default()), 4.652357210540168e-5);
    }

    #[test]
    fn cubic_metres_reference_value() {
        assert_close(
            droplet_volume(50., &Config::default().cubic_metres()),
            4.652357210540168e-14,
        );
    }

    #[test]
    fn confined_reference_value() {
        // 150 px -> 66.93 micron, above the channel height
        assert_close(droplet_volume(150., &Config::default()), 1.1260007109526165e-2);
    }

    #[test]
    fn channel_height_boundary_is_a_sphere() {
        // 1:1 calibration so 60 px is exactly 60 micron
        let config = Config::new(1., 1., 60.).unwrap();
        assert_close(droplet_volume(60., &config), 9.047786842338604e-4);
        // just above the boundary the pancake term takes over
        assert!(droplet_volume(60.000001, &config) > 5. * droplet_volume(60., &config));
    }

    #[test]
    fn monotonic_in_radius() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(17);
        let mut radii: Vec<f64> = (0..100).map(|_| rng.gen_range(0.0..300.0)).collect();
        radii.sort_by(|a, b| a.total_cmp(b));
        for pair in radii.windows(2) {
            assert!(droplet_volume(pair[0], &config) <= droplet_volume(pair[1], &config));
        }
    }

    #[test]
    fn unit_from_config() {
        assert_eq!(Unit::from_config(&Config::default()), Unit::Microlitres);
        assert_eq!(
            Unit::from_config(&Config::default().cubic_metres()),
            Unit::CubicMetres
        );
        assert_eq!(Unit::from_config(&Config::default().pixels()), Unit::Pixels);
        assert_eq!(Unit::Microlitres.quantity(), "Volume");
        assert_eq!(Unit::Pixels.quantity(), "Radius");
        assert_eq!(Unit::CubicMetres.to_string(), "m^3");
    }
}
