/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unable to detect case in string: \"{0}\"")]
    NoStyleDetected(String),
    #[error("Unknown case style: \"{0}\"")]
    UnknownStyle(String),
}
