use anyhow::Context;
use parse_droplets::{detect::Detections, pipeline, Config};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "parse-droplets", about = "Parsing droplet micrograph detections")]
struct Opt {
    /// Path to the detections CSV file (one row per detected circle)
    path: String,
    /// Keep only the images whose filename contains the term
    #[structopt(short, long)]
    filter: Option<String>,
    /// Keep the radii in pixels instead of converting to volumes
    #[structopt(long)]
    pixels: bool,
    /// Report the volumes in cubic metres instead of microlitres
    #[structopt(long)]
    cubic_metres: bool,
    /// Physical length of the calibration reference [micron]
    #[structopt(long, default_value = "100.0")]
    reference_micron: f64,
    /// Length of the calibration reference on the sensor [pixel]
    #[structopt(long, default_value = "224.1")]
    reference_pixel: f64,
    /// Height of the microfluidic channel [micron]
    #[structopt(long, default_value = "60.0")]
    channel_height: f64,
    /// Save the per-condition statistics to a CSV file
    #[structopt(long)]
    csv: Option<String>,
    /// Plot the droplet size against the droplet phase flow rate
    #[structopt(short, long)]
    plot: bool,
    /// Plot file name
    #[structopt(long, default_value = "DROPLETS.svg")]
    plot_file: String,
    /// Leave the raw measurements out of the plot
    #[structopt(long)]
    no_raw: bool,
    /// Leave the mean and error bars out of the plot
    #[structopt(long)]
    no_error: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut config = Config::new(opt.reference_micron, opt.reference_pixel, opt.channel_height)?;
    if opt.pixels {
        config = config.pixels();
    }
    if opt.cubic_metres {
        config = config.cubic_metres();
    }

    let mut measurements = Detections::load(&opt.path)
        .with_context(|| format!("loading detections from {}", opt.path))?
        .primary_radii()?;
    if let Some(term) = &opt.filter {
        measurements.retain(|(filename, _)| filename.contains(term.as_str()));
    }

    let analysis = pipeline::analyze(&measurements, &config)?;
    analysis.summary();

    if let Some(filename) = opt.csv {
        analysis.to_csv(filename)?;
    }
    #[cfg(feature = "plot")]
    if opt.plot {
        let series = analysis.plot_series()?;
        parse_droplets::plot::plot_series(
            &series,
            analysis.unit,
            !opt.no_raw,
            !opt.no_error,
            &opt.plot_file,
        );
    }
    #[cfg(not(feature = "plot"))]
    if opt.plot {
        log::warn!("this build has no plotting support, rebuild with `--features plot`");
    }

    Ok(())
}
