//! Microfluidic droplet micrograph size statistics
//!
//! Reduces a batch of droplet micrographs, already measured by an upstream
//! circle detector, into per-condition droplet size statistics: the
//! experimental condition, a `<carrier>,<droplet>` flow rate pair, is parsed
//! from each filename, the detected radii are grouped by condition, converted
//! to physical volumes under a channel confinement model and summarized by
//! mean and standard deviation, ready for plotting.
//!
//! ```
//! use parse_droplets::{pipeline, Config};
//!
//! # fn main() -> Result<(), parse_droplets::pipeline::PipelineError> {
//! let measurements = [("x_a-1.0,2.0-1.bmp", 50.0), ("x_a-1.0,2.0-2.bmp", 60.0)];
//! let series = pipeline::run(&measurements, &Config::default().pixels())?;
//! assert_eq!(series.average_y, vec![55.0]);
//! # Ok(())
//! # }
//! ```

pub mod condition;
pub mod config;
pub mod detect;
pub mod discover;
mod error;
pub mod pipeline;
#[cfg(feature = "plot")]
pub mod plot;
pub mod series;
pub mod stats;
pub mod volume;

pub use condition::ConditionKey;
pub use config::Config;
pub use detect::{Circle, Detections};
pub use error::Error;
pub use pipeline::{analyze, run, Analysis, ConditionGroups};
pub use series::PlotSeries;
pub use stats::Stats;
pub use volume::{droplet_volume, Unit};
