use alloc::vec;
use alloc::vec::Vec;

use super::{DistanceMatrix, Tour, TourConstruction};
use crate::error::Error;
use crate::weight::{self, Weight};

/// Grows a closed tour from `start`: the city closest to any city already on the tour is
/// inserted where it lengthens the tour the least.
///
/// Ties go to the lowest city index and to the earliest insertion position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearestInsertion {
    pub start: usize,
}

impl TourConstruction for NearestInsertion {
    fn construct<W: Weight>(&self, matrix: &DistanceMatrix<W>) -> Result<Tour<W>, Error> {
        let start = matrix.city(self.start)?;
        let mut on_tour = vec![false; matrix.len()];
        let mut cities = Vec::with_capacity(matrix.len() + 1);
        on_tour[start] = true;
        cities.extend([start, start]);

        while let Some(city) = closest_to_tour(matrix, &cities, &on_tour) {
            let position = cheapest_position(matrix, &cities, city)?;
            log::trace!("insert {city} at {position}");
            cities.insert(position, city);
            on_tour[city] = true;
        }

        Tour::new(matrix, cities)
    }
}

fn closest_to_tour<W: Weight>(
    matrix: &DistanceMatrix<W>,
    cities: &[usize],
    on_tour: &[bool],
) -> Option<usize> {
    (0..matrix.len())
        .filter(|&city| !on_tour[city])
        .filter_map(|city| {
            cities
                .iter()
                .map(|&t| matrix.distance(city, t))
                .min_by(weight::cmp)
                .map(|d| (city, d))
        })
        .min_by(|a, b| weight::cmp(&a.1, &b.1))
        .map(|(city, _)| city)
}

/// The index in `cities` at which inserting `city` adds the least length.
///
/// Every edge of the closed tour is a candidate, the one returning to the start included.
/// Inserting between `a` and `b` costs `d(a, city) + d(city, b) - d(a, b)`; the comparison is
/// rearranged so that unsigned weights never subtract.
fn cheapest_position<W: Weight>(
    matrix: &DistanceMatrix<W>,
    cities: &[usize],
    city: usize,
) -> Result<usize, Error> {
    let detour = |i: usize| {
        let (a, b) = (cities[i], cities[i + 1]);
        let added = matrix.distance(a, city).checked_add(&matrix.distance(city, b))?;
        Some((added, matrix.distance(a, b)))
    };

    let mut best: Option<(usize, W, W)> = None;
    for i in 0..cities.len() - 1 {
        // a detour whose length leaves the weight type is never the cheapest
        let Some((added, removed)) = detour(i) else {
            continue;
        };
        let cheaper = match best {
            None => true,
            Some((_, best_added, best_removed)) => {
                match (added.checked_add(&best_removed), best_added.checked_add(&removed)) {
                    (Some(lhs), Some(rhs)) => lhs < rhs,
                    (lhs, _) => lhs.is_some(),
                }
            }
        };
        if cheaper {
            best = Some((i, added, removed));
        }
    }

    best.map(|(i, _, _)| i + 1).ok_or(Error::ArithmeticOverflow)
}
