//! Result extraction pipeline.
//!
//! An [`ExtractionPipeline`] is an ordered list of [`Extractor`]s selected from
//! the query's facet flags. It runs the same extractors over every candidate
//! route and collects one [`ExtractionResult`] per candidate, in service order.
//!
//! Selection order is fixed: distance, duration, summary, route. Extractors
//! write disjoint keys, so the order never changes the values produced.
//!
//! The `raw` facet is not an extractor: the whole service response is
//! attached once at reply level.

pub mod error;
pub mod facets;

pub use error::ExtractError;
pub use facets::{
    Direction, Directions, Distance, DistanceExtractor, DurationExtractor, RouteExtractor,
    SummaryExtractor, TravelTime,
};

use crate::osrm::RouteCandidate;
use crate::query::FacetFlags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A per-candidate output dimension.
///
/// Variant order is the pipeline composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Distance,
    Duration,
    Summary,
    Route,
}

impl Facet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Distance => "distance",
            Facet::Duration => "duration",
            Facet::Summary => "summary",
            Facet::Route => "route",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value written by one extractor.
///
/// Serialize-only: an untagged read could not tell which facet a value
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FacetValue {
    Distance(Distance),
    Duration(TravelTime),
    Summary(String),
    Route(Directions),
}

/// Facet values extracted from one candidate route.
///
/// Serializes as a JSON object keyed by facet name; unselected facets are
/// absent rather than null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractionResult(BTreeMap<Facet, FacetValue>);

impl ExtractionResult {
    pub fn get(&self, facet: Facet) -> Option<&FacetValue> {
        self.0.get(&facet)
    }

    pub fn contains(&self, facet: Facet) -> bool {
        self.0.contains_key(&facet)
    }

    pub fn facets(&self) -> impl Iterator<Item = Facet> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn distance(&self) -> Option<&Distance> {
        match self.get(Facet::Distance)? {
            FacetValue::Distance(d) => Some(d),
            _ => None,
        }
    }

    pub fn duration(&self) -> Option<&TravelTime> {
        match self.get(Facet::Duration)? {
            FacetValue::Duration(d) => Some(d),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self.get(Facet::Summary)? {
            FacetValue::Summary(s) => Some(s),
            _ => None,
        }
    }

    pub fn directions(&self) -> Option<&Directions> {
        match self.get(Facet::Route)? {
            FacetValue::Route(r) => Some(r),
            _ => None,
        }
    }

    fn insert(&mut self, facet: Facet, value: FacetValue) {
        self.0.insert(facet, value);
    }
}

/// Reads one facet from a candidate route.
pub trait Extractor: Send + Sync {
    /// Facet this extractor writes.
    fn facet(&self) -> Facet;

    /// Extract the facet value.
    ///
    /// Returns `None` when the candidate lacks the leg data the facet needs.
    fn extract(&self, candidate: &RouteCandidate) -> Option<FacetValue>;
}

/// Ordered extractors applied to every candidate.
#[derive(Default)]
pub struct ExtractionPipeline {
    extractors: Vec<Box<dyn Extractor>>,
}

impl ExtractionPipeline {
    pub fn new(extractors: Vec<Box<dyn Extractor>>) -> Self {
        Self { extractors }
    }

    /// Select extractors from facet flags in composition order.
    pub fn for_facets(flags: &FacetFlags) -> Self {
        let mut extractors: Vec<Box<dyn Extractor>> = Vec::new();
        if flags.distance {
            extractors.push(Box::new(DistanceExtractor));
        }
        if flags.duration {
            extractors.push(Box::new(DurationExtractor));
        }
        if flags.summary {
            extractors.push(Box::new(SummaryExtractor));
        }
        if flags.route {
            extractors.push(Box::new(RouteExtractor));
        }

        for extractor in &extractors {
            tracing::debug!(facet = %extractor.facet(), "Added extractor to pipeline");
        }

        Self { extractors }
    }

    /// Facets produced, in execution order.
    pub fn facets(&self) -> Vec<Facet> {
        self.extractors.iter().map(|e| e.facet()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Run every extractor over one candidate.
    ///
    /// `index` is the candidate position, used in errors.
    pub fn extract(
        &self,
        index: usize,
        candidate: &RouteCandidate,
    ) -> Result<ExtractionResult, ExtractError> {
        let mut result = ExtractionResult::default();
        for extractor in &self.extractors {
            let facet = extractor.facet();
            let value = extractor.extract(candidate).ok_or(ExtractError::EmptyRoute {
                candidate: index,
                facet,
            })?;
            result.insert(facet, value);
        }
        Ok(result)
    }

    /// Run the pipeline over all candidates, preserving their order.
    pub fn run(
        &self,
        candidates: &[RouteCandidate],
    ) -> Result<Vec<ExtractionResult>, ExtractError> {
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| self.extract(index, candidate))
            .collect()
    }
}
