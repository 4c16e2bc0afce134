use std::{fmt, num::ParseFloatError};

#[derive(Debug, thiserror::Error)]
pub enum ConditionError {
    #[error("{0:?} doesn't match the <experiment>_<label>-<carrier>,<droplet>-<replicate> pattern")]
    Filename(String),
    #[error("condition key {0:?} is not a <carrier>,<droplet> flow rate pair")]
    FlowPair(String),
    #[error("invalid flow rate in condition key {key:?}")]
    FlowRate {
        key: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("invalid flow pair regex")]
    Regex(#[from] regex::Error),
}
type Result<T> = std::result::Result<T, ConditionError>;

/// Experimental condition extracted from a micrograph filename
///
/// The key is the raw `<carrier>,<droplet>` flow rate token of the filename
/// and two keys are equal iff their strings are equal: `"1.0,2"` and `"1,2.0"`
/// name distinct conditions even though the rates are numerically equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConditionKey(String);

impl ConditionKey {
    /// Extract the condition key from a filename of the form
    /// `<date/experiment info>_<label>-<carrier>,<droplet>-<replicate>.<ext>`
    pub fn parse(filename: &str) -> Result<Self> {
        // drop the date/experiment prefix, keep the last `_` segment
        let tail = filename.rsplit('_').next().unwrap_or(filename);
        // the flow pair sits right before the replicate index
        let mut fields = tail.rsplit('-');
        fields.next();
        match fields.next() {
            Some(key) => Ok(Self(key.to_owned())),
            None => Err(ConditionError::Filename(filename.to_owned())),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Carrier phase flow rate, the value before the comma
    pub fn carrier_flow_rate(&self) -> Result<f64> {
        Ok(self.flow_rates()?.0)
    }
    /// Droplet phase flow rate, the value after the comma
    pub fn droplet_flow_rate(&self) -> Result<f64> {
        Ok(self.flow_rates()?.1)
    }
    /// Split the key into its `(carrier, droplet)` flow rates
    pub fn flow_rates(&self) -> Result<(f64, f64)> {
        let re = regex::Regex::new(r"^([^,]+),([^,]+)$")?;
        let caps = re
            .captures(&self.0)
            .ok_or_else(|| ConditionError::FlowPair(self.0.clone()))?;
        let parse = |rate: &str| {
            rate.parse::<f64>().map_err(|source| ConditionError::FlowRate {
                key: self.0.clone(),
                source,
            })
        };
        Ok((parse(&caps[1])?, parse(&caps[2])?))
    }
}
impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
