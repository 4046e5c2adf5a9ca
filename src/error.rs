use thiserror::Error;

pub type OptionsResult<T> = Result<T, OptionsError>;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("unknown chart type: `{0}`")]
    UnknownChartType(String),

    #[error("options tree has no `chart.type` discriminant")]
    MissingChartType,

    #[error("invalid options tree: {0}")]
    InvalidTree(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
