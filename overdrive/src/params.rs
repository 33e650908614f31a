//! Parameter generation for workload submissions.

use overdrive_core::{
    ArgEncoding, GenRange, SafetyParams, SubmitError, ONCOMING_SPEED, OVERTAKING_DISTANCE,
    REACTION_TIME, RELATIVE_SPEED, SAFETY_MARGIN, VISIBILITY_DISTANCE,
};
use rand::Rng;

/// Argument-generation policy for a workload variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamPolicy {
    /// Fresh uniform draws per submission. Varied payloads surface backend
    /// sensitivity to input content.
    Randomized,
    /// A constant pre-declared tuple. Isolates throughput measurement from
    /// input-dependent branching in the contract.
    Fixed(Vec<String>),
}

impl ParamPolicy {
    /// Produce one argument list under the given convention.
    pub fn generate(
        &self,
        encoding: ArgEncoding,
        rng: &mut impl Rng,
    ) -> Result<Vec<String>, SubmitError> {
        match self {
            Self::Fixed(args) => Ok(args.clone()),
            Self::Randomized => {
                let params = draw_safety_params(rng);
                match encoding {
                    ArgEncoding::JsonPayload => Ok(vec![params.to_json()?]),
                    ArgEncoding::Positional => Ok(params.positional()),
                }
            }
        }
    }
}

/// One randomized safety tuple, each field drawn from its declared range.
pub fn draw_safety_params(rng: &mut impl Rng) -> SafetyParams {
    SafetyParams {
        relative_speed: sample(RELATIVE_SPEED, rng),
        oncoming_speed: sample(ONCOMING_SPEED, rng),
        visibility_distance: sample(VISIBILITY_DISTANCE, rng),
        overtaking_distance: sample(OVERTAKING_DISTANCE, rng),
        reaction_time: sample(REACTION_TIME, rng),
        safety_margin: sample(SAFETY_MARGIN, rng),
    }
}

/// Uniform draw from `range`, kept to two decimals.
///
/// Truncation rather than rounding: the value must stay inside the
/// exclusive upper bound, and it travels as text with two decimal places.
pub fn sample(range: GenRange, rng: &mut impl Rng) -> f64 {
    let v: f64 = rng.gen_range(range.lo..range.hi);
    (v * 100.0).floor() / 100.0
}
