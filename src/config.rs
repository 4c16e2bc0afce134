#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reference distance of {0} micron is not positive")]
    ReferenceMicron(f64),
    #[error("reference distance of {0} pixel is not positive")]
    ReferencePixel(f64),
    #[error("channel height of {0} micron is not positive")]
    ChannelHeight(f64),
}
type Result<T> = std::result::Result<T, ConfigError>;

/// Calibration and unit settings for one batch run
///
/// Built once per run and passed by reference through every stage; nothing
/// mutates it afterwards. `reference_distance_pixel` is used as a divisor and
/// must stay non-zero, which [`Config::new`] guarantees together with the
/// positivity of the other lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Physical length of the calibration reference [micron]
    pub reference_distance_micron: f64,
    /// Length of the calibration reference on the sensor [pixel]
    pub reference_distance_pixel: f64,
    /// Height of the microfluidic channel [micron]
    pub channel_height_micron: f64,
    /// Convert pixel radii to volumes
    pub convert_units: bool,
    /// Report volumes in microlitres instead of cubic metres
    pub convert_to_microlitres: bool,
}
impl Default for Config {
    /// The droplet rig calibration: 100 micron for 224.1 pixel, 60 micron
    /// channel, volumes in microlitres
    fn default() -> Self {
        Self {
            reference_distance_micron: 100.,
            reference_distance_pixel: 224.1,
            channel_height_micron: 60.,
            convert_units: true,
            convert_to_microlitres: true,
        }
    }
}
impl Config {
    /// A new configuration reporting volumes in microlitres, it will return
    /// an error if any of the lengths is not strictly positive
    pub fn new(
        reference_distance_micron: f64,
        reference_distance_pixel: f64,
        channel_height_micron: f64,
    ) -> Result<Self> {
        if !(reference_distance_micron > 0.) {
            return Err(ConfigError::ReferenceMicron(reference_distance_micron));
        }
        if !(reference_distance_pixel > 0.) {
            return Err(ConfigError::ReferencePixel(reference_distance_pixel));
        }
        if !(channel_height_micron > 0.) {
            return Err(ConfigError::ChannelHeight(channel_height_micron));
        }
        Ok(Self {
            reference_distance_micron,
            reference_distance_pixel,
            channel_height_micron,
            ..Default::default()
        })
    }
    /// Keep the measurements as raw pixel radii
    pub fn pixels(self) -> Self {
        Self {
            convert_units: false,
            ..self
        }
    }
    /// Report the volumes in cubic metres
    pub fn cubic_metres(self) -> Self {
        Self {
            convert_units: true,
            convert_to_microlitres: false,
            ..self
        }
    }
    /// Report the volumes in microlitres
    pub fn microlitres(self) -> Self {
        Self {
            convert_units: true,
            convert_to_microlitres: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calibration() {
        let config = Config::default();
        assert_eq!(config.reference_distance_micron, 100.);
        assert_eq!(config.reference_distance_pixel, 224.1);
        assert_eq!(config.channel_height_micron, 60.);
        assert!(config.convert_units);
        assert!(config.convert_to_microlitres);
    }

    #[test]
    fn rejects_non_positive_lengths() {
        assert!(matches!(
            Config::new(0., 224.1, 60.),
            Err(ConfigError::ReferenceMicron(_))
        ));
        assert!(matches!(
            Config::new(100., 0., 60.),
            Err(ConfigError::ReferencePixel(_))
        ));
        assert!(matches!(
            Config::new(100., 224.1, -1.),
            Err(ConfigError::ChannelHeight(_))
        ));
        assert!(matches!(
            Config::new(f64::NAN, 224.1, 60.),
            Err(ConfigError::ReferenceMicron(_))
        ));
    }

    #[test]
    fn unit_toggles() {
        let config = Config::default().pixels();
        assert!(!config.convert_units);
        let config = config.cubic_metres();
        assert!(config.convert_units && !config.convert_to_microlitres);
        let config = config.microlitres();
        assert!(config.convert_units && config.convert_to_microlitres);
    }
}
