use serde::{Deserialize, Serialize};

/// Argument-passing convention declared by a remote contract function.
///
/// The two conventions are not interchangeable: a function written for one
/// rejects arguments encoded with the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgEncoding {
    /// The argument list is exactly one element, a serialized JSON object.
    JsonPayload,
    /// One stringified scalar per declared parameter, order-sensitive.
    Positional,
}

/// One transaction submission.
///
/// Built fresh per `submit` call, handed to the adapter, and discarded once
/// the call returns or fails. Carries no identity beyond the call itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub contract_id: String,
    pub contract_function: String,
    pub contract_arguments: Vec<String>,
    pub read_only: bool,
}

impl TransactionRequest {
    /// A state-mutating call, subject to ordering and endorsement upstream.
    pub fn invoke(contract_id: &str, function: &str, arguments: Vec<String>) -> Self {
        Self {
            contract_id: contract_id.to_string(),
            contract_function: function.to_string(),
            contract_arguments: arguments,
            read_only: false,
        }
    }

    /// A read-only evaluation against current ledger state.
    pub fn query(contract_id: &str, function: &str, arguments: Vec<String>) -> Self {
        Self {
            contract_id: contract_id.to_string(),
            contract_function: function.to_string(),
            contract_arguments: arguments,
            read_only: true,
        }
    }
}

/// Domain inputs for one overtaking-safety evaluation.
///
/// Serialized field names match the contract's JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyParams {
    pub relative_speed: f64,
    pub oncoming_speed: f64,
    pub visibility_distance: f64,
    pub overtaking_distance: f64,
    pub reaction_time: f64,
    pub safety_margin: f64,
}

impl SafetyParams {
    /// Positional order expected by `InitiateOvertakeProposal`:
    /// `[Dv, Do, Vr, Vo, Tr, Sm]`.
    pub fn positional(&self) -> Vec<String> {
        [
            self.visibility_distance,
            self.overtaking_distance,
            self.relative_speed,
            self.oncoming_speed,
            self.reaction_time,
            self.safety_margin,
        ]
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
