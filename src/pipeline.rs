use std::{collections::BTreeMap, path::Path};

use crate::{
    condition::{ConditionError, ConditionKey},
    config::Config,
    series::PlotSeries,
    stats::{summarize, EmptyGroupError, Stats},
    volume::{droplet_volume, Unit},
};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no measurements to process")]
    EmptyBatch,
    #[error("{keys} condition keys for {radii} radii, the sequences must be index-aligned")]
    Misaligned { keys: usize, radii: usize },
    #[error("no measurements left for condition {key:?}")]
    EmptyGroup {
        key: String,
        #[source]
        source: EmptyGroupError,
    },
    #[error("invalid experimental condition")]
    Condition(#[from] ConditionError),
    #[error("failed to write the statistics CSV file")]
    Csv(#[from] csv::Error),
}
type Result<T> = std::result::Result<T, PipelineError>;

/// Measurements grouped by experimental condition
///
/// Groups are created in the order their key is first seen and each group
/// keeps its measurements in input order, so a given batch always reduces to
/// the same series.
#[derive(Debug, Clone, Default)]
pub struct ConditionGroups {
    order: Vec<ConditionKey>,
    groups: BTreeMap<ConditionKey, Vec<f64>>,
}
impl ConditionGroups {
    /// Group index-aligned keys and radii, preserving multiplicity
    pub fn aggregate(keys: Vec<ConditionKey>, radii: Vec<f64>) -> Result<Self> {
        if keys.len() != radii.len() {
            return Err(PipelineError::Misaligned {
                keys: keys.len(),
                radii: radii.len(),
            });
        }
        let mut this = Self::default();
        for (key, radius) in keys.into_iter().zip(radii) {
            if !this.groups.contains_key(&key) {
                this.order.push(key.clone());
            }
            this.groups.entry(key).or_default().push(radius);
        }
        Ok(this)
    }
    /// Iterate the groups in first-seen key order
    pub fn iter(&self) -> impl Iterator<Item = (&ConditionKey, &[f64])> + '_ {
        self.order
            .iter()
            .filter_map(move |key| self.groups.get(key).map(|values| (key, values.as_slice())))
    }
    /// Condition keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &ConditionKey> + '_ {
        self.order.iter()
    }
    pub fn get(&self, key: &ConditionKey) -> Option<&[f64]> {
        self.groups.get(key).map(Vec::as_slice)
    }
    /// Number of distinct conditions
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
    /// Total number of measurements across all conditions
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
    /// Apply a conversion to every measurement, group by group
    pub fn map_values<F: Fn(f64) -> f64>(self, f: F) -> Self {
        Self {
            order: self.order,
            groups: self
                .groups
                .into_iter()
                .map(|(key, values)| (key, values.into_iter().map(&f).collect()))
                .collect(),
        }
    }
}

/// One processed batch: converted groups with their per-condition statistics
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Measurements grouped by condition, volume-converted per the run config
    pub groups: ConditionGroups,
    /// Per-group statistics, parallel to the group order
    pub stats: Vec<Stats>,
    /// Unit of the group values and statistics
    pub unit: Unit,
}
impl Analysis {
    /// Print the per-condition statistics to stdout
    pub fn summary(&self) {
        println!("SUMMARY:");
        println!(" - # of measurements: {}", self.groups.total());
        println!(" - # of conditions: {}", self.groups.len());
        println!(
            " - droplet {} [{}]:",
            self.unit.quantity().to_lowercase(),
            self.unit
        );
        println!(
            "    {:^16}: {:^7}  ({:^13}, {:^13})",
            "CONDITION", "SAMPLES", "MEAN", "STD"
        );
        for ((key, values), stats) in self.groups.iter().zip(&self.stats) {
            println!(
                "  - {:16}: {:>7}  ({:>13.6e}, {:>13.6e})",
                key.as_str(),
                values.len(),
                stats.mean,
                stats.std
            );
        }
    }
    /// Save the per-condition statistics to a CSV file
    pub fn to_csv<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let mut wtr = csv::Writer::from_path(filename)?;
        wtr.write_record(vec![
            "condition".to_string(),
            "carrier flow rate (uL/min)".to_string(),
            "droplet flow rate (uL/min)".to_string(),
            "samples".to_string(),
            format!("mean ({})", self.unit),
            format!("std ({})", self.unit),
        ])?;
        for ((key, values), stats) in self.groups.iter().zip(&self.stats) {
            let (carrier, droplet) = key.flow_rates()?;
            wtr.write_record(vec![
                key.as_str().to_owned(),
                format!("{}", carrier),
                format!("{}", droplet),
                format!("{}", values.len()),
                format!("{}", stats.mean),
                format!("{}", stats.std),
            ])?;
        }
        Ok(())
    }
    /// Assemble the plot-ready series
    pub fn plot_series(&self) -> Result<PlotSeries> {
        PlotSeries::build(&self.groups, &self.stats)
    }
}

/// Reduce labeled radii to per-condition, unit-converted statistics
///
/// A pure function of its arguments: nothing survives the call, so repeated
/// runs with different configurations over the same measurements are
/// independent. Any malformed filename aborts the whole batch rather than
/// silently dropping a data point.
pub fn analyze<S: AsRef<str>>(labeled_radii: &[(S, f64)], config: &Config) -> Result<Analysis> {
    if labeled_radii.is_empty() {
        return Err(PipelineError::EmptyBatch);
    }
    let keys = labeled_radii
        .iter()
        .map(|(filename, _)| ConditionKey::parse(filename.as_ref()))
        .collect::<std::result::Result<Vec<_>, ConditionError>>()?;
    let radii: Vec<f64> = labeled_radii.iter().map(|(_, radius)| *radius).collect();
    let groups = ConditionGroups::aggregate(keys, radii)?;
    log::info!(
        "grouped {} measurements into {} conditions",
        groups.total(),
        groups.len()
    );
    let groups = if config.convert_units {
        groups.map_values(|radius| droplet_volume(radius, config))
    } else {
        groups
    };
    let stats = groups
        .iter()
        .map(|(key, values)| {
            summarize(values).map_err(|source| PipelineError::EmptyGroup {
                key: key.as_str().to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<Stats>>>()?;
    Ok(Analysis {
        groups,
        stats,
        unit: Unit::from_config(config),
    })
}

/// Run the whole pipeline: parse, group, convert, summarize, build the series
pub fn run<S: AsRef<str>>(labeled_radii: &[(S, f64)], config: &Config) -> Result<PlotSeries> {
    analyze(labeled_radii, config)?.plot_series()
}
