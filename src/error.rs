//! Error types for path queries and coordinate parsing.

use crate::cell::Cell;
use core::fmt;
use thiserror::Error;

/// Which end of a path query was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("{endpoint} point {cell} is not within the {rows}x{cols} maze")]
    InvalidInput {
        endpoint: Endpoint,
        cell: Cell,
        rows: usize,
        cols: usize,
    },

    #[error("no path exists between the given points")]
    NotFound,

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("search stopped after expanding {expanded} nodes")]
    Cancelled { expanded: usize },
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseCellError {
    #[error("expected a coordinate of the form `row,col`, got `{0}`")]
    MissingCoordinate(String),

    #[error("`{0}` is not an integer")]
    NotAnInteger(String),

    #[error("expected exactly two coordinates, got `{0}`")]
    TooManyCoordinates(String),
}

pub type Result<T> = std::result::Result<T, PathError>;
