//! Greedy heuristics for the 0-1 and the fractional knapsack problem.
//!
//! Both take items by decreasing value-to-weight ratio; items with the same ratio keep their input
//! order. Item indices in the results are positions in the input slice.

use alloc::vec::Vec;
use core::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::weight::{self, Weight};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(
    try_from = "RawItem<W>",
    bound(deserialize = "W: Weight + Deserialize<'de>")
)]
pub struct Item<W> {
    value: W,
    weight: W,
    #[serde(skip_serializing)]
    ratio: f64,
}

impl<W: Weight> Item<W> {
    pub fn new(value: W, weight: W) -> Result<Self, Error> {
        match weight.partial_cmp(&W::zero()) {
            None => return Err(Error::IncomparableWeight),
            Some(Ordering::Greater) => {}
            Some(_) => return Err(Error::NonPositiveItemWeight),
        }
        let value = weight::validate(value).map_err(|e| match e {
            Error::NegativeWeight => Error::NegativeItemValue,
            e => e,
        })?;

        let ratio = value
            .to_f64()
            .zip(weight.to_f64())
            .map(|(v, w)| v / w)
            .ok_or(Error::IncomparableWeight)?;

        Ok(Self {
            value,
            weight,
            ratio,
        })
    }

    pub fn value(&self) -> W {
        self.value
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Value per unit of weight.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RawItem<W> {
    pub value: W,
    pub weight: W,
}

impl<W: Weight> TryFrom<RawItem<W>> for Item<W> {
    type Error = Error;

    fn try_from(i: RawItem<W>) -> Result<Self, Self::Error> {
        Self::new(i.value, i.weight)
    }
}

/// Items picked whole, in the order they were picked.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Selection<W> {
    pub items: Vec<usize>,
    pub total_value: W,
    pub total_weight: W,
}

/// Items picked with the fraction taken of each, in the order they were picked.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FractionalSelection {
    pub items: Vec<(usize, f64)>,
    pub total_value: f64,
    pub total_weight: f64,
}

fn by_ratio<W: Weight>(items: &[Item<W>]) -> impl Iterator<Item = (usize, &Item<W>)> {
    items.iter().enumerate().sorted_by(|(_, a), (_, b)| {
        b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal)
    })
}

fn validate_capacity<W: Weight>(capacity: W) -> Result<W, Error> {
    weight::validate(capacity).map_err(|e| match e {
        Error::NegativeWeight => Error::NegativeCapacity,
        e => e,
    })
}

/// 0-1 knapsack: take every item that still fits, best ratio first.
///
/// An item that does not fit is skipped and the scan goes on, so lighter items further down can
/// still fill the remaining capacity.
pub fn greedy<W: Weight>(items: &[Item<W>], capacity: W) -> Result<Selection<W>, Error> {
    let capacity = validate_capacity(capacity)?;

    let mut selection = Selection {
        items: Vec::new(),
        total_value: W::zero(),
        total_weight: W::zero(),
    };

    for (idx, item) in by_ratio(items) {
        // a weight sum past the type's range cannot fit either
        let Some(total_weight) = selection
            .total_weight
            .checked_add(&item.weight)
            .filter(|&w| w <= capacity)
        else {
            continue;
        };
        log::trace!("take item {idx} (ratio {:.3})", item.ratio);
        selection.items.push(idx);
        selection.total_value = weight::add(selection.total_value, item.value)?;
        selection.total_weight = total_weight;
    }

    log::debug!(
        "picked {} of {} items: value {}, weight {}",
        selection.items.len(),
        items.len(),
        selection.total_value,
        selection.total_weight
    );

    Ok(selection)
}

/// Fractional knapsack: take whole items best ratio first, then the fraction of the next item
/// that fills the knapsack exactly.
pub fn fractional_greedy<W: Weight>(
    items: &[Item<W>],
    capacity: W,
) -> Result<FractionalSelection, Error> {
    let capacity = validate_capacity(capacity)?
        .to_f64()
        .ok_or(Error::IncomparableWeight)?;

    let mut selection = FractionalSelection {
        items: Vec::new(),
        total_value: 0.0,
        total_weight: 0.0,
    };

    for (idx, item) in by_ratio(items) {
        let remaining = capacity - selection.total_weight;
        if remaining <= 0.0 {
            break;
        }

        let (value, weight) = item
            .value
            .to_f64()
            .zip(item.weight.to_f64())
            .ok_or(Error::IncomparableWeight)?;

        if selection.total_weight + weight <= capacity {
            selection.items.push((idx, 1.0));
            selection.total_value += value;
            selection.total_weight += weight;
        } else {
            let fraction = remaining / weight;
            log::trace!("take {fraction:.3} of item {idx}");
            selection.items.push((idx, fraction));
            selection.total_value += value * fraction;
            selection.total_weight += weight * fraction;
            break;
        }
    }

    if !selection.total_value.is_finite() {
        return Err(Error::ArithmeticOverflow);
    }

    log::debug!(
        "filled {} of {capacity} with value {}",
        selection.total_weight,
        selection.total_value
    );

    Ok(selection)
}
