#[derive(Debug, thiserror::Error)]
#[error("cannot compute the statistics of an empty group")]
pub struct EmptyGroupError;

/// Mean and population standard deviation of one condition group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub std: f64,
}

/// Two-pass mean and population standard deviation (divisor N)
pub fn summarize(values: &[f64]) -> Result<Stats, EmptyGroupError> {
    if values.is_empty() {
        return Err(EmptyGroupError);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.iter().map(|x| x - mean).fold(0f64, |s, x| s + x * x) / n).sqrt();
    Ok(Stats { mean, std })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value() {
        let stats = summarize(&[42.5]).unwrap();
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.std, 0.);
    }

    #[test]
    fn empty_group() {
        assert!(summarize(&[]).is_err());
    }

    #[test]
    fn population_standard_deviation() {
        // divisor is N, not N - 1
        let stats = summarize(&[50., 60.]).unwrap();
        assert_eq!(stats.mean, 55.);
        assert_eq!(stats.std, 5.);
        let stats = summarize(&[2., 4., 4., 4., 5., 5., 7., 9.]).unwrap();
        assert_eq!(stats.mean, 5.);
        assert_eq!(stats.std, 2.);
    }
}
