//! # Plan files
//! A plan is an ordered list of calls and sleeps, executed over one connection. Request ids are assigned from `1` in call
//! order when the plan runs.
//!
//! ```toml
//! [[step]]
//! method = "mrvl_l2fwd_set_fwd_state"
//! params = { state = 0 }
//!
//! [[step]]
//! sleep = 5
//! ```

use super::{ReadError, Validate};
use crate::{
    error::Error,
    l2fwd::{self, FwdPair, FwdState, SetFwdState},
    rpc::Request,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Representation of a plan file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}
impl Plan {
    /// The built-in plan: disables forwarding, re-creates `pair`, waits for `delay`, then enables forwarding again.
    pub fn reconfigure(pair: &FwdPair, delay: Duration) -> Result<Self, Error> {
        let disable = SetFwdState {
            state: FwdState::Disabled,
        };
        let enable = SetFwdState {
            state: FwdState::Enabled,
        };
        Ok(Self {
            steps: vec![
                Step::call(l2fwd::SET_FWD_STATE, &disable)?,
                Step::call(l2fwd::DEL_FWD_PAIR, pair)?,
                Step::call(l2fwd::ADD_FWD_PAIR, pair)?,
                Step::Sleep(delay),
                Step::call(l2fwd::SET_FWD_STATE, &enable)?,
            ],
        })
    }

    /// Parses a plan from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ReadError> {
        let plan: Self = toml::from_str(s)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Returns the actions of this plan, with request ids assigned from `1` in call order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        let mut next_id = 0;
        self.steps.iter().map(move |step| match step {
            Step::Call { method, params } => {
                next_id += 1;
                Action::Call(Request {
                    params: params.clone(),
                    ..Request::new(next_id, method.clone())
                })
            }
            Step::Sleep(duration) => Action::Sleep(*duration),
        })
    }
}
impl Validate for Plan {
    fn validate(&self) -> Result<(), ReadError> {
        if !self.steps.iter().any(|x| matches!(x, Step::Call { .. })) {
            return Err("plan must contain at least one call".into());
        }
        Ok(())
    }
}

/// A step of a [`Plan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStep", into = "RawStep")]
pub enum Step {
    Call {
        method: String,
        params: Option<serde_json::Value>,
    },
    Sleep(Duration),
}
impl Step {
    /// Creates a call step, serializing `params` to JSON.
    pub fn call<M: Into<String>, P: Serialize>(method: M, params: P) -> Result<Self, Error> {
        Ok(Self::Call {
            method: method.into(),
            params: Some(serde_json::to_value(params)?),
        })
    }
}

/// An executable step of a [`Plan`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Call(Request),
    Sleep(Duration),
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    sleep: Option<f64>,
}
impl TryFrom<RawStep> for Step {
    type Error = String;

    fn try_from(value: RawStep) -> Result<Self, Self::Error> {
        match (value.method, value.params, value.sleep) {
            (Some(method), _, None) if method.is_empty() => {
                Err("`method` must not be empty".into())
            }
            (Some(method), params, None) => Ok(Self::Call { method, params }),
            (None, None, Some(secs)) => Duration::try_from_secs_f64(secs)
                .map(Self::Sleep)
                .map_err(|err| format!("invalid `sleep` value {secs}: {err}")),
            (Some(_), _, Some(_)) => Err("a step cannot have both `method` and `sleep`".into()),
            (None, Some(_), _) => Err("`params` requires `method`".into()),
            (None, None, None) => Err("a step requires either `method` or `sleep`".into()),
        }
    }
}
impl From<Step> for RawStep {
    fn from(value: Step) -> Self {
        match value {
            Step::Call { method, params } => Self {
                method: Some(method),
                params,
                sleep: None,
            },
            Step::Sleep(duration) => Self {
                method: None,
                params: None,
                sleep: Some(duration.as_secs_f64()),
            },
        }
    }
}
