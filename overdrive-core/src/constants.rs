/// Inclusive-exclusive range for one uniformly drawn workload field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenRange {
    pub lo: f64,
    pub hi: f64,
}

impl GenRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v < self.hi
    }
}

/// Vr: speed of the overtaking vehicle relative to the lead vehicle (m/s).
pub const RELATIVE_SPEED: GenRange = GenRange::new(5.0, 15.0);

/// Vo: speed of oncoming traffic (m/s).
pub const ONCOMING_SPEED: GenRange = GenRange::new(20.0, 40.0);

/// Dv: visible road ahead of the overtaking vehicle (m).
pub const VISIBILITY_DISTANCE: GenRange = GenRange::new(200.0, 700.0);

/// Do: length of the overtaking maneuver (m).
pub const OVERTAKING_DISTANCE: GenRange = GenRange::new(30.0, 80.0);

/// Tr: driver reaction time (s).
pub const REACTION_TIME: GenRange = GenRange::new(0.5, 2.0);

/// Sm: safety margin (s).
pub const SAFETY_MARGIN: GenRange = GenRange::new(5.0, 15.0);

pub const SAFETY_CONTRACT: &str = "overtake_chaincode";
pub const PROPOSAL_CONTRACT: &str = "overtakingcc";
pub const DEFAULT_CHANNEL: &str = "mychannel";

pub const EVALUATE_SAFETY: &str = "EvaluateSafety";
pub const INITIATE_OVERTAKE_PROPOSAL: &str = "InitiateOvertakeProposal";
pub const CHECK_PROPOSAL_STATUS: &str = "CheckProposalStatus";
