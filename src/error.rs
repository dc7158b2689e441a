/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimensions;

/// Errors produced while parsing, composing or converting units.
#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Debug)]
pub enum UnitError {
    #[error("invalid unit string: {0}")]
    InvalidUnitString(String),
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("invalid exponent: {0}")]
    InvalidExponent(String),
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error("offset-bearing unit used outside of a solitary position: {0}")]
    InvalidOffsetUse(String),
    #[error("incompatible units: {0} <-> {1}")]
    InvalidConversion(Box<Dimensions>, Box<Dimensions>),
}

impl UnitError {
    pub(crate) fn conversion(from: Dimensions, to: Dimensions) -> Self {
        UnitError::InvalidConversion(Box::new(from), Box::new(to))
    }
}
