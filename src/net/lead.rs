//! Lead-capture endpoint call.
//!
//! Only the HTTP status matters; the response body is never read.

#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::state::form::lead_source;

pub const LEAD_ENDPOINT: &str = "https://yuca-api.vercel.app/api/lead";

/// One contact-form submission as the lead service expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business: String,
    pub project: String,
    pub source: String,
}

impl Lead {
    /// Build a lead from the form fields. Missing fields arrive as empty
    /// strings; `business` and `source` are derived from the site config.
    pub fn from_fields(config: &SiteConfig, name: &str, email: &str, phone: &str, project: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            business: config.business_name.clone(),
            project: project.to_owned(),
            source: lead_source(&config.business_name),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn lead_request_failed_message(status: u16) -> String {
    format!("lead request failed: {status}")
}

/// Post a lead to the capture endpoint.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status. The
/// caller only branches on success/failure.
pub async fn submit_lead(lead: &Lead) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LEAD_ENDPOINT)
            .json(lead)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                log::warn!("lead request failed to send: {e}");
                e.to_string()
            })?;
        if !resp.ok() {
            log::warn!("lead endpoint returned status {}", resp.status());
            return Err(lead_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lead;
        Err("not available on server".to_owned())
    }
}
