//! Built-in extractors, one per facet.
//!
//! Each extractor reads a [`RouteCandidate`] and produces the value of exactly
//! one facet. None of them look at the output of another.

use super::{Extractor, Facet, FacetValue};
use crate::osrm::RouteCandidate;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Total distance split into whole kilometers and remaining meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distance {
    pub kilometers: u64,
    pub meters: u64,
}

impl Distance {
    /// Fractional meters are truncated. Negative input clamps to zero.
    pub fn from_meters(meters: f64) -> Self {
        let total = meters as u64;
        Self {
            kilometers: total / 1000,
            meters: total % 1000,
        }
    }
}

/// Total duration decomposed into days, hours, minutes and seconds.
///
/// Plain arithmetic decomposition: no calendar or time zone semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelTime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TravelTime {
    pub fn from_seconds(seconds: f64) -> Self {
        let total = seconds as u64;
        let (days, rest) = (total / SECONDS_PER_DAY, total % SECONDS_PER_DAY);
        let (hours, rest) = (rest / SECONDS_PER_HOUR, rest % SECONDS_PER_HOUR);
        let (minutes, seconds) = (rest / SECONDS_PER_MINUTE, rest % SECONDS_PER_MINUTE);
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

/// Step-by-step directions of the first leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directions {
    pub number_steps: usize,
    pub steps: Vec<Direction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    /// Road name
    pub name: String,
    /// Maneuver kind
    pub maneuver: String,
    /// Maneuver modifier, `null` when the service gave none
    pub direction: Option<String>,
}

pub struct DistanceExtractor;

impl Extractor for DistanceExtractor {
    fn facet(&self) -> Facet {
        Facet::Distance
    }

    fn extract(&self, candidate: &RouteCandidate) -> Option<FacetValue> {
        Some(FacetValue::Distance(Distance::from_meters(candidate.distance)))
    }
}

pub struct DurationExtractor;

impl Extractor for DurationExtractor {
    fn facet(&self) -> Facet {
        Facet::Duration
    }

    fn extract(&self, candidate: &RouteCandidate) -> Option<FacetValue> {
        Some(FacetValue::Duration(TravelTime::from_seconds(candidate.duration)))
    }
}

/// Reads the summary of the first leg.
pub struct SummaryExtractor;

impl Extractor for SummaryExtractor {
    fn facet(&self) -> Facet {
        Facet::Summary
    }

    fn extract(&self, candidate: &RouteCandidate) -> Option<FacetValue> {
        candidate
            .first_leg()
            .map(|leg| FacetValue::Summary(leg.summary.clone()))
    }
}

/// Lists the steps of the first leg in service order.
pub struct RouteExtractor;

impl Extractor for RouteExtractor {
    fn facet(&self) -> Facet {
        Facet::Route
    }

    fn extract(&self, candidate: &RouteCandidate) -> Option<FacetValue> {
        let leg = candidate.first_leg()?;
        let steps: Vec<Direction> = leg
            .steps
            .iter()
            .map(|step| Direction {
                name: step.name.clone(),
                maneuver: step.maneuver.kind.clone(),
                direction: step.maneuver.modifier.clone(),
            })
            .collect();

        Some(FacetValue::Route(Directions {
            number_steps: steps.len(),
            steps,
        }))
    }
}
