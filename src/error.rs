use thiserror::Error;

use crate::render::NodeId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("element has no parent container to size against")]
    MissingParent,

    #[error("unknown surface node: {0:?}")]
    UnknownNode(NodeId),

    #[error("tick label `{label}` is not a `Mon D` date")]
    InvalidTickLabel { label: String },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid config: {0}")]
    Config(String),
}
