use crate::{
    condition::ConditionError, config::ConfigError, detect::DetectError,
    discover::DiscoverError, pipeline::PipelineError,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `condition` module")]
    Condition(#[from] ConditionError),
    #[error("Error in the `config` module")]
    Config(#[from] ConfigError),
    #[error("Error in the `detect` module")]
    Detect(#[from] DetectError),
    #[error("Error in the `discover` module")]
    Discover(#[from] DiscoverError),
    #[error("Error in the `pipeline` module")]
    Pipeline(#[from] PipelineError),
}
