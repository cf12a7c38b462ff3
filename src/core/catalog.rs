//! The fixed set of built-in functions a scan can be run against.
//!
//! Each [`FunctionKind`] owns one row of the catalog table: its identifier string,
//! its evaluator, and the crossing rule the detector applies where the
//! location of the jump is known analytically. Adding a built-in means adding
//! a variant and a row.

use crate::utils::error::ScanError;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_HEAVISIDE_AT_ZERO: f64 = 0.5;

/// Where a function's jumps are known to sit, independent of sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossingRule {
    /// Single jump at `x = 0`.
    Zero,
    /// A jump at every integer.
    Integer,
}

impl CrossingRule {
    /// The analytically known jump locations inside `(x_min, x_max]`.
    pub fn known_jumps_in(self, x_min: f64, x_max: f64) -> Vec<f64> {
        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Vec::new();
        }
        match self {
            CrossingRule::Zero if x_min < 0.0 && 0.0 < x_max => vec![0.0],
            CrossingRule::Zero => Vec::new(),
            CrossingRule::Integer => {
                let first = x_min.floor() + 1.0;
                let last = x_max.floor();
                let mut jumps = Vec::new();
                let mut k = first;
                while k <= last {
                    jumps.push(k);
                    k += 1.0;
                }
                jumps
            }
        }
    }
}

/// Anything the sampler and detector can work with.
pub trait RealFunction {
    fn identifier(&self) -> &str;

    /// Total evaluation: domain errors come back as NaN or a signed infinity.
    fn eval(&self, x: f64) -> f64;

    fn crossing_rule(&self) -> Option<CrossingRule> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Sign,
    Reciprocal,
    Floor,
    Heaviside,
}

struct CatalogEntry {
    kind: FunctionKind,
    identifier: &'static str,
    // Second argument is the value taken exactly at the jump, for functions that define one.
    eval: fn(f64, f64) -> f64,
    rule: Option<CrossingRule>,
}

// Rows are in declaration order of `FunctionKind`.
static CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        kind: FunctionKind::Sign,
        identifier: "sign(x)",
        eval: sign,
        rule: Some(CrossingRule::Zero),
    },
    CatalogEntry {
        kind: FunctionKind::Reciprocal,
        identifier: "1/x",
        eval: reciprocal,
        rule: Some(CrossingRule::Zero),
    },
    CatalogEntry {
        kind: FunctionKind::Floor,
        identifier: "floor(x)",
        eval: floor,
        rule: Some(CrossingRule::Integer),
    },
    CatalogEntry {
        kind: FunctionKind::Heaviside,
        identifier: "Heaviside(x)",
        eval: heaviside,
        rule: Some(CrossingRule::Zero),
    },
];

fn sign(x: f64, _: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

// IEEE division: 1/+0 = +inf, 1/-0 = -inf.
fn reciprocal(x: f64, _: f64) -> f64 {
    1.0 / x
}

fn floor(x: f64, _: f64) -> f64 {
    x.floor()
}

fn heaviside(x: f64, at_zero: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 0.0 {
        1.0
    } else if x == 0.0 {
        at_zero
    } else {
        f64::NAN
    }
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 4] = [
        FunctionKind::Sign,
        FunctionKind::Reciprocal,
        FunctionKind::Floor,
        FunctionKind::Heaviside,
    ];

    fn entry(self) -> &'static CatalogEntry {
        let entry = &CATALOG[self as usize];
        debug_assert_eq!(entry.kind, self);
        entry
    }

    pub fn identifier(self) -> &'static str {
        self.entry().identifier
    }

    pub fn crossing_rule(self) -> Option<CrossingRule> {
        self.entry().rule
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|entry| entry.identifier == identifier)
            .map(|entry| entry.kind)
    }

    pub fn identifiers() -> Vec<&'static str> {
        CATALOG.iter().map(|entry| entry.identifier).collect()
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for FunctionKind {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s.trim()).ok_or_else(|| ScanError::UnknownFunction {
            identifier: s.to_string(),
            available: Self::identifiers().join(", "),
        })
    }
}

/// A catalog function together with its evaluation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinFunction {
    kind: FunctionKind,
    heaviside_at_zero: f64,
}

impl BuiltinFunction {
    pub fn new(kind: FunctionKind) -> Self {
        Self {
            kind,
            heaviside_at_zero: DEFAULT_HEAVISIDE_AT_ZERO,
        }
    }

    pub fn with_heaviside_at_zero(mut self, value: f64) -> Self {
        self.heaviside_at_zero = value;
        self
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn heaviside_at_zero(&self) -> f64 {
        self.heaviside_at_zero
    }

    pub fn eval_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

impl From<FunctionKind> for BuiltinFunction {
    fn from(kind: FunctionKind) -> Self {
        Self::new(kind)
    }
}

impl RealFunction for BuiltinFunction {
    fn identifier(&self) -> &str {
        self.kind.identifier()
    }

    fn eval(&self, x: f64) -> f64 {
        (self.kind.entry().eval)(x, self.heaviside_at_zero)
    }

    fn crossing_rule(&self) -> Option<CrossingRule> {
        self.kind.crossing_rule()
    }
}
