//! Construction heuristics for the travelling salesman problem over a distance matrix.
//!
//! Cities are the indices `0..n` of the matrix.

mod nearest_insertion;
mod nearest_neighbor;

pub use nearest_insertion::NearestInsertion;
pub use nearest_neighbor::{MultiStartNearestNeighbor, NearestNeighbor};

use alloc::format;
use alloc::vec::Vec;

use itertools::Itertools;
use serde::Serialize;

use crate::error::Error;
use crate::weight::{self, Weight};

/// A square matrix of non-negative distances between cities, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix<W> {
    len: usize,
    distances: Vec<W>,
}

impl<W: Weight> DistanceMatrix<W> {
    pub fn new<R, I>(rows: R) -> Result<Self, Error>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = W>,
    {
        let rows: Vec<Vec<W>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let len = rows.len();
        if len == 0 {
            return Err(Error::EmptyMatrix);
        }
        if rows.iter().any(|row| row.len() != len) {
            return Err(Error::NonSquareMatrix);
        }

        let distances = rows
            .into_iter()
            .flatten()
            .map(weight::validate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { len, distances })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The distance from city `from` to city `to`.
    ///
    /// Panics if either city is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> W {
        self.distances[from * self.len + to]
    }

    /// Length of the walk visiting `cities` in order.
    pub fn walk_length(&self, cities: &[usize]) -> Result<W, Error> {
        for &city in cities {
            self.city(city)?;
        }
        weight::sum(
            cities
                .iter()
                .tuple_windows()
                .map(|(&a, &b)| self.distance(a, b)),
        )
    }

    pub(crate) fn city(&self, city: usize) -> Result<usize, Error> {
        if city < self.len {
            Ok(city)
        } else {
            Err(Error::UnknownNode(format!("{city}")))
        }
    }
}

/// A closed tour: the start city is repeated at the end.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tour<W> {
    cities: Vec<usize>,
    length: W,
}

impl<W: Weight> Tour<W> {
    pub(crate) fn new(matrix: &DistanceMatrix<W>, cities: Vec<usize>) -> Result<Self, Error> {
        let length = matrix.walk_length(&cities)?;
        Ok(Self { cities, length })
    }

    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    pub fn length(&self) -> W {
        self.length
    }

    pub fn start(&self) -> usize {
        self.cities[0]
    }
}

/// A heuristic that builds a tour through every city.
pub trait TourConstruction {
    fn construct<W: Weight>(&self, matrix: &DistanceMatrix<W>) -> Result<Tour<W>, Error>;
}
