use epr_core::{AgentId, EprError, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{agent} failed to advance: {source}")]
    Agent {
        agent:  AgentId,
        #[source]
        source: EprError,
    },

    #[error("population halted at {tick} after an agent failed; rebuild it to continue")]
    Halted { tick: Tick },

    #[error(transparent)]
    Epr(#[from] EprError),
}

pub type SimResult<T> = Result<T, SimError>;
