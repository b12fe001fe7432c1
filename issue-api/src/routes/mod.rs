pub(crate) mod error;
pub(crate) mod issues;

pub(crate) use error::ApiError;
