//! `recharge` - list the recharge plans an operator offers in a circle.

use super::PlanSource;
use crate::args::{self, ArgsError};
use crate::format::ResponseFormat;
use crate::render::{self, RenderError};
use crate::responses::{self, NOT_FOUND_TEXT};
use axum::http::StatusCode;
use axum::response::Response;
use recharge_plans_client::Plan;
use std::fmt::{self, Write};
use tracing::{error, info, warn};

pub const RECHARGE_USAGE: &str = "<operator> <circle>";

/// Parsed `recharge` arguments, in the order users type them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargeQuery {
    pub operator: String,
    pub circle: String,
}

impl RechargeQuery {
    pub fn from_text(text: &str) -> Result<Self, ArgsError> {
        let [operator, circle] = args::take_positional::<2>(text, RECHARGE_USAGE)?;
        Ok(Self { operator, circle })
    }
}

fn write_plan_block(out: &mut String, plan: &Plan) -> fmt::Result {
    writeln!(out, "*Value:* {}", plan.value)?;
    writeln!(out, "*Talktime:* {}", plan.talktime)?;
    writeln!(out, "*Validity:* {}", plan.validity)?;
    writeln!(out, "*ShortDescription:* {}", plan.short_description)?;
    writeln!(out, "*Description:* {}", plan.description)?;
    writeln!(out, "*DescriptionMore:* {}", plan.description_more)?;
    writeln!(out, "*ProductType:* {}", plan.product_type)?;
    writeln!(out, "*Circle:* {}", plan.circle)?;
    writeln!(out, "*Operator:* {}", plan.operator)?;
    writeln!(out, "*Category:* {}", plan.category)?;
    writeln!(out, "*IsPrepaid:* {}", plan.is_prepaid)
}

/// Render plans as chat markup, one labelled block per plan.
pub fn render_plans_markup(plans: &[Plan]) -> Result<String, RenderError> {
    render::render_markup(plans, write_plan_block)
}

pub(super) async fn handle(plans: &dyn PlanSource, format: ResponseFormat, text: &str) -> Response {
    let query = match RechargeQuery::from_text(text) {
        Ok(query) => query,
        Err(e) => {
            warn!(error = %e, "Rejecting recharge request");
            return responses::failure(
                format,
                StatusCode::BAD_REQUEST,
                e.to_string(),
                format!("Usage: /recharge {}", RECHARGE_USAGE),
            );
        }
    };

    info!(operator = %query.operator, circle = %query.circle, "Recharge query");

    let found = match plans.find_plans(&query.operator, &query.circle).await {
        Ok(found) => found,
        Err(e) => {
            warn!(error = %e, "Recharge lookup failed");
            return responses::failure(format, StatusCode::NOT_FOUND, e.to_string(), NOT_FOUND_TEXT);
        }
    };

    respond_with_plans(format, &found, write_plan_block)
}

/// Render `plans` in `format`. A render failure answers 404 like a failed
/// lookup does.
fn respond_with_plans<F>(format: ResponseFormat, plans: &[Plan], write_block: F) -> Response
where
    F: Fn(&mut String, &Plan) -> fmt::Result,
{
    let rendered = match format {
        ResponseFormat::Json => render::render_structured(plans).map(responses::structured_ok),
        ResponseFormat::Slack => render::render_markup(plans, write_block).map(responses::markup_ok),
    };

    rendered.unwrap_or_else(|e| {
        error!(error = %e, %format, "Failed to render recharge plans");
        responses::failure(format, StatusCode::NOT_FOUND, e.to_string(), NOT_FOUND_TEXT)
    })
}
