//! Credits, usage and activity lookups.

use chrono::NaiveDate;

use crate::client::Client;
use crate::models::{ActivityDataResponse, ApiUsageResponse, CreditsResponse, USAGE_DATE_FORMAT};
use crate::Result;

const ENDPOINT_CREDITS: &str = "getcredits";
const ENDPOINT_API_USAGE: &str = "getapiusage";
const ENDPOINT_ACTIVITY_DATA: &str = "activity";

impl Client {
    /// Remaining credit balance.
    pub async fn credits(&self) -> Result<CreditsResponse> {
        let url = self.url(ENDPOINT_CREDITS, &[])?;
        self.get_json(url).await
    }

    /// Usage counters between two dates, inclusive.
    pub async fn api_usage(&self, start: NaiveDate, end: NaiveDate) -> Result<ApiUsageResponse> {
        let start = start.format(USAGE_DATE_FORMAT).to_string();
        let end = end.format(USAGE_DATE_FORMAT).to_string();
        let url = self.url(
            ENDPOINT_API_USAGE,
            &[("start_date", start.as_str()), ("end_date", end.as_str())],
        )?;
        self.get_json(url).await
    }

    /// How recently an address was seen engaging with email.
    pub async fn activity_data(&self, email: &str) -> Result<ActivityDataResponse> {
        let url = self.url(ENDPOINT_ACTIVITY_DATA, &[("email", email)])?;
        self.get_json(url).await
    }
}
