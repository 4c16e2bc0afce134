use crate::{
    pipeline::{ConditionGroups, PipelineError},
    stats::Stats,
};

/// Plot-ready view of one processed batch
///
/// Parallel sequences: one scatter point per raw measurement and one
/// average/error point per condition, both in group first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSeries {
    /// Droplet phase flow rate, repeated once per measurement of its group
    pub scatter_x: Vec<f64>,
    /// The converted measurements, in group order
    pub scatter_y: Vec<f64>,
    /// Droplet phase flow rate, one point per condition
    pub average_x: Vec<f64>,
    /// Group means
    pub average_y: Vec<f64>,
    /// Group standard deviations, for the error bars
    pub error_y: Vec<f64>,
    /// Carrier phase flow rate of the first group, for display labels only
    pub carrier_flow_rate: f64,
}
impl PlotSeries {
    /// Build the series from converted groups and their statistics
    ///
    /// All groups are assumed to share the carrier flow rate: the first key
    /// provides the display value and no cross-check is made.
    pub fn build(groups: &ConditionGroups, stats: &[Stats]) -> Result<Self, PipelineError> {
        let first = groups.keys().next().ok_or(PipelineError::EmptyBatch)?;
        let mut series = Self {
            carrier_flow_rate: first.carrier_flow_rate()?,
            ..Default::default()
        };
        for ((key, values), stats) in groups.iter().zip(stats) {
            let x = key.droplet_flow_rate()?;
            series.scatter_x.extend(std::iter::repeat(x).take(values.len()));
            series.scatter_y.extend_from_slice(values);
            series.average_x.push(x);
            series.average_y.push(stats.mean);
            series.error_y.push(stats.std);
        }
        Ok(series)
    }
    /// One `(x, y)` pair per raw measurement
    pub fn scatter_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.scatter_x
            .iter()
            .copied()
            .zip(self.scatter_y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        condition::{ConditionError, ConditionKey},
        stats::summarize,
    };

    fn groups_of(batch: &[(&str, f64)]) -> ConditionGroups {
        let keys = batch
            .iter()
            .map(|(filename, _)| ConditionKey::parse(filename).unwrap())
            .collect();
        let radii = batch.iter().map(|(_, radius)| *radius).collect();
        ConditionGroups::aggregate(keys, radii).unwrap()
    }

    #[test]
    fn scatter_x_repeats_per_group_member() {
        let groups = groups_of(&[
            ("x_a-1.0,2.0-1.bmp", 50.0),
            ("x_a-1.0,2.0-2.bmp", 60.0),
            ("x_a-1.0,3.0-1.bmp", 40.0),
        ]);
        let stats: Vec<_> = groups
            .iter()
            .map(|(_, values)| summarize(values).unwrap())
            .collect();
        let series = PlotSeries::build(&groups, &stats).unwrap();
        assert_eq!(series.scatter_x, vec![2.0, 2.0, 3.0]);
        assert_eq!(series.scatter_y, vec![50.0, 60.0, 40.0]);
        assert_eq!(series.average_x, vec![2.0, 3.0]);
        assert_eq!(series.carrier_flow_rate, 1.0);
        assert_eq!(series.scatter_points().count(), 3);
    }

    #[test]
    fn non_numeric_key_fails_the_build() {
        let groups = groups_of(&[("x_a-oil,water-1.bmp", 50.0)]);
        let stats: Vec<_> = groups
            .iter()
            .map(|(_, values)| summarize(values).unwrap())
            .collect();
        assert!(matches!(
            PlotSeries::build(&groups, &stats),
            Err(PipelineError::Condition(ConditionError::FlowRate { .. }))
        ));
    }
}
