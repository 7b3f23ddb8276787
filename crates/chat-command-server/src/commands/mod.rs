//! Chat commands served by the webhook.

mod recharge;

pub use recharge::{render_plans_markup, RechargeQuery, RECHARGE_USAGE};

use crate::error::ServerError;
use crate::format::ResponseFormat;
use async_trait::async_trait;
use axum::response::Response;
use recharge_plans_client::{Plan, PlansError, RechargePlansClient};
use std::fmt;
use std::str::FromStr;

/// Source of recharge plans.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanSource: Send + Sync {
    async fn find_plans(&self, operator: &str, circle: &str) -> Result<Vec<Plan>, PlansError>;
}

#[async_trait]
impl PlanSource for RechargePlansClient {
    async fn find_plans(&self, operator: &str, circle: &str) -> Result<Vec<Plan>, PlansError> {
        RechargePlansClient::find_plans(self, operator, circle).await
    }
}

/// A command addressable as `POST /<name>.<format>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Recharge,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Recharge => "recharge",
        }
    }

    /// Run the command against its raw text and answer in `format`.
    pub async fn run(self, plans: &dyn PlanSource, format: ResponseFormat, text: &str) -> Response {
        match self {
            Command::Recharge => recharge::handle(plans, format, text).await,
        }
    }
}

impl FromStr for Command {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recharge" => Ok(Command::Recharge),
            other => Err(ServerError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_lookup() {
        assert_eq!("recharge".parse::<Command>().unwrap(), Command::Recharge);
        assert!(matches!(
            "movie".parse::<Command>(),
            Err(ServerError::UnknownCommand(name)) if name == "movie"
        ));
    }
}
