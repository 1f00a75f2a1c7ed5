use alloc::vec;
use alloc::vec::Vec;

use super::{DistanceMatrix, Tour, TourConstruction};
use crate::error::Error;
use crate::weight::{self, Weight};

/// Starting from `start`, always travel to the closest city not visited yet.
///
/// Ties go to the lowest city index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearestNeighbor {
    pub start: usize,
}

impl TourConstruction for NearestNeighbor {
    fn construct<W: Weight>(&self, matrix: &DistanceMatrix<W>) -> Result<Tour<W>, Error> {
        let start = matrix.city(self.start)?;
        nearest_neighbor(matrix, start)
    }
}

/// Runs the nearest neighbor heuristic from every city and keeps the shortest tour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MultiStartNearestNeighbor;

impl MultiStartNearestNeighbor {
    /// The nearest neighbor tour from every start city, in city order.
    pub fn tours<W: Weight>(&self, matrix: &DistanceMatrix<W>) -> Result<Vec<Tour<W>>, Error> {
        (0..matrix.len())
            .map(|start| nearest_neighbor(matrix, start))
            .collect()
    }
}

impl TourConstruction for MultiStartNearestNeighbor {
    fn construct<W: Weight>(&self, matrix: &DistanceMatrix<W>) -> Result<Tour<W>, Error> {
        self.tours(matrix)?
            .into_iter()
            .inspect(|tour| log::debug!("start {}: length {}", tour.start(), tour.length()))
            // keeps the earliest of equally short tours
            .reduce(|best, tour| if tour.length < best.length { tour } else { best })
            .ok_or(Error::EmptyMatrix)
    }
}

fn nearest_neighbor<W: Weight>(matrix: &DistanceMatrix<W>, start: usize) -> Result<Tour<W>, Error> {
    let mut visited = vec![false; matrix.len()];
    let mut cities = Vec::with_capacity(matrix.len() + 1);
    visited[start] = true;
    cities.push(start);

    let mut current = start;
    while let Some(next) = (0..matrix.len())
        .filter(|&city| !visited[city])
        .min_by(|&a, &b| weight::cmp(&matrix.distance(current, a), &matrix.distance(current, b)))
    {
        visited[next] = true;
        cities.push(next);
        current = next;
    }
    cities.push(start);

    Tour::new(matrix, cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::tsp::tests::{five_cities, four_cities};

    #[test]
    fn visits_closest_city_first() {
        let tour = NearestNeighbor { start: 0 }.construct(&four_cities()).unwrap();
        assert_eq!(tour.cities(), &[0, 1, 3, 2, 0]);
        assert_eq!(tour.length(), 80);
    }

    #[test]
    fn rejects_unknown_start() {
        assert_eq!(
            NearestNeighbor { start: 9 }.construct(&four_cities()),
            Err(Error::UnknownNode("9".into()))
        );
    }

    #[test]
    fn single_city() {
        let matrix = DistanceMatrix::new([[0.0]]).unwrap();
        let tour = NearestNeighbor::default().construct(&matrix).unwrap();
        assert_eq!(tour.cities(), &[0, 0]);
        assert_eq!(tour.length(), 0.0);
    }

    #[test]
    fn tour_length_beyond_the_weight_type_fails() {
        let matrix = DistanceMatrix::new([[0, u32::MAX], [u32::MAX, 0]]).unwrap();
        assert_eq!(
            NearestNeighbor::default().construct(&matrix),
            Err(Error::ArithmeticOverflow)
        );
        assert_eq!(
            MultiStartNearestNeighbor.construct(&matrix),
            Err(Error::ArithmeticOverflow)
        );
    }

    #[test]
    fn multi_start_keeps_the_best_tour() {
        let matrix = five_cities();
        let lengths: Vec<_> = MultiStartNearestNeighbor
            .tours(&matrix)
            .unwrap()
            .iter()
            .map(|t| t.length())
            .collect();
        assert_eq!(lengths, [140, 145, 145, 150, 150]);

        let best = MultiStartNearestNeighbor.construct(&matrix).unwrap();
        assert_eq!(best.cities(), &[0, 1, 4, 3, 2, 0]);
        assert_eq!(best.length(), 140);
    }
}
