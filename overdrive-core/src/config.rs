use crate::{ArgEncoding, ConfigError};

/// Declared signature of a remote contract function.
///
/// Which convention a function expects is implicit on the ledger side, so
/// each workload variant declares it here and argument lists are checked
/// against the declaration before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub function: String,
    pub encoding: ArgEncoding,
    pub arity: usize,
}

impl FunctionSignature {
    pub fn positional(function: &str, arity: usize) -> Self {
        Self {
            function: function.to_string(),
            encoding: ArgEncoding::Positional,
            arity,
        }
    }

    pub fn json_payload(function: &str) -> Self {
        Self {
            function: function.to_string(),
            encoding: ArgEncoding::JsonPayload,
            arity: 1,
        }
    }

    /// Validate an argument list against the declared convention.
    ///
    /// Positional lists are checked for arity only; the remote function is
    /// the authority on order and content. A JSON payload must be exactly
    /// one argument holding a JSON object.
    pub fn check(&self, arguments: &[String]) -> Result<(), ConfigError> {
        match self.encoding {
            ArgEncoding::Positional => {
                if arguments.len() != self.arity {
                    return Err(ConfigError::ArityMismatch {
                        function: self.function.clone(),
                        expected: self.arity,
                        actual: arguments.len(),
                    });
                }
            }
            ArgEncoding::JsonPayload => {
                let object = arguments.len() == 1
                    && serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(
                        &arguments[0],
                    )
                    .is_ok();
                if !object {
                    return Err(ConfigError::PayloadShape {
                        function: self.function.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Per-variant configuration captured once at initialize time and treated
/// as immutable for the rest of the worker's life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    pub contract_id: String,
    pub channel_id: String,
    pub signature: FunctionSignature,
}

impl WorkloadConfig {
    pub fn new(contract_id: &str, channel_id: &str, signature: FunctionSignature) -> Self {
        Self {
            contract_id: contract_id.to_string(),
            channel_id: channel_id.to_string(),
            signature,
        }
    }
}
