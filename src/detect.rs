use std::{fs::File, io, path::Path};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
#[error("no droplet detected in {0:?}")]
pub struct NoDetectionError(pub String);

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("failed to open the detections file")]
    Io(#[from] std::io::Error),
    #[error("failed to deserialize the detections CSV")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    NoDetection(#[from] NoDetectionError),
}
type Result<T> = std::result::Result<T, DetectError>;

/// One circle reported by the upstream detector, in image pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

#[derive(Debug, Deserialize)]
struct Record {
    file: String,
    #[serde(rename = "x (px)")]
    x: Option<f64>,
    #[serde(rename = "y (px)")]
    y: Option<f64>,
    #[serde(rename = "radius (px)")]
    radius: Option<f64>,
}

/// Detector output for a batch: the circles found in each image
///
/// One CSV row per circle, several rows per image when the detector reports
/// more than one candidate; a row with empty circle columns records an image
/// the detector processed without finding anything.
#[derive(Debug, Clone, Default)]
pub struct Detections(Vec<(String, Vec<Circle>)>);
impl Detections {
    /// Load a detections CSV file (`file, x (px), y (px), radius (px)`)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }
    /// Read detections from any CSV source
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut this = Self::default();
        for result in rdr.deserialize() {
            let record: Record = result?;
            let index = match this.0.iter().position(|(file, _)| *file == record.file) {
                Some(index) => index,
                None => {
                    this.0.push((record.file.clone(), vec![]));
                    this.0.len() - 1
                }
            };
            if let (Some(center_x), Some(center_y), Some(radius)) =
                (record.x, record.y, record.radius)
            {
                this.0[index].1.push(Circle {
                    center_x,
                    center_y,
                    radius,
                });
            }
        }
        log::info!("detections loaded for {} images", this.len());
        Ok(this)
    }
    /// Number of images the detector reported on
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Iterate the images with their detected circles, in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Circle])> + '_ {
        self.0
            .iter()
            .map(|(file, circles)| (file.as_str(), circles.as_slice()))
    }
    /// Reduce each image to a single radius with the first-detection policy
    ///
    /// An image without any circle is an error, not a silent default.
    pub fn primary_radii(&self) -> Result<Vec<(String, f64)>> {
        Ok(self
            .0
            .iter()
            .map(|(file, circles)| {
                primary_radius(file, circles).map(|radius| (file.clone(), radius))
            })
            .collect::<std::result::Result<Vec<_>, NoDetectionError>>()?)
    }
}

/// First-detection policy: the first circle of an image is its measurement
pub fn primary_radius(
    filename: &str,
    circles: &[Circle],
) -> std::result::Result<f64, NoDetectionError> {
    circles
        .first()
        .map(|circle| circle.radius)
        .ok_or_else(|| NoDetectionError(filename.to_owned()))
}
