use crate::error::{Result, SkeinError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of a directed edge, or the accumulated distance along a path.
///
/// `Weight::INFINITY` stands for "no edge" in weight lookups and for
/// "unreachable" in shortest-path results. Finite weights are never negative
/// and never NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    /// Validate a raw edge weight; NaN and negative values are rejected
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            crate::bail_invalid!("edge weight", "NaN (weights must be numeric)");
        }
        if value < 0.0 {
            crate::bail_invalid!(
                "edge weight",
                format!("{} (weights must be non-negative)", value)
            );
        }
        Ok(Weight(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl fmt::Display for Weight {
    /// Float-literal rendering: integral values keep one fractional digit
    /// (`1.0`), exponents below -4 or from 16 up switch to scientific
    /// notation (`1e+16`, `2.5e-07`), infinity renders as `inf`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }

        let scientific = format!("{:e}", value);
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
            if !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }

        if value.fract() == 0.0 {
            write!(f, "{:.1}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

/// Parse boundary text (CLI arguments, document strings) into an edge weight.
pub fn parse_weight(text: &str) -> Result<Weight> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        SkeinError::invalid_argument("edge weight", format!("'{}' is not numeric", text))
    })?;
    Weight::new(value)
}

/// How Dijkstra picks the next vertex to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStrategy {
    /// Scan every unsettled vertex for the minimum tentative distance
    #[default]
    LinearScan,
    /// Binary heap keyed by (distance, insertion order)
    Heap,
}

impl std::str::FromStr for PathStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear-scan" | "linear" | "scan" => Ok(PathStrategy::LinearScan),
            "heap" => Ok(PathStrategy::Heap),
            other => Err(format!(
                "unknown strategy '{}' (expected: linear-scan, heap)",
                other
            )),
        }
    }
}

impl fmt::Display for PathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStrategy::LinearScan => write!(f, "linear-scan"),
            PathStrategy::Heap => write!(f, "heap"),
        }
    }
}

/// What `add_vertex` does when the label is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateVertexPolicy {
    /// Fail with `InvalidArgument`
    #[default]
    Reject,
    /// Keep the vertex's position and incoming edges, drop its outgoing edges
    Replace,
}

impl std::str::FromStr for DuplicateVertexPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(DuplicateVertexPolicy::Reject),
            "replace" => Ok(DuplicateVertexPolicy::Replace),
            other => Err(format!(
                "unknown duplicate vertex policy '{}' (expected: reject, replace)",
                other
            )),
        }
    }
}

/// Construction options for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphOptions {
    pub duplicate_vertex: DuplicateVertexPolicy,
    pub path_strategy: PathStrategy,
}

/// Result of a single-pair shortest-path query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Total weight of the path; infinite when the destination is unreachable
    pub distance: Weight,
    /// Vertex labels from source to destination; empty when unreachable
    pub path: Vec<String>,
}

impl ShortestPath {
    pub fn unreachable() -> Self {
        ShortestPath {
            distance: Weight::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
