//! Email finder and domain search, one lookup at a time.

use crate::client::Client;
use crate::models::{DomainSearchResponse, FindEmailResponse};
use crate::Result;

const ENDPOINT_EMAIL_FINDER: &str = "guessformat";

/// Drop parameters the caller left empty.
fn non_empty<'a>(pairs: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    pairs
        .iter()
        .copied()
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

impl Client {
    /// Guess the address of a person at `domain`.
    ///
    /// Empty name parts are not sent.
    pub async fn find_email(
        &self,
        first_name: &str,
        middle_name: &str,
        last_name: &str,
        domain: &str,
    ) -> Result<FindEmailResponse> {
        let params = non_empty(&[
            ("domain", domain),
            ("first_name", first_name),
            ("middle_name", middle_name),
            ("last_name", last_name),
        ]);
        let url = self.url(ENDPOINT_EMAIL_FINDER, &params)?;
        self.get_json(url).await
    }

    /// Address patterns used at `domain`.
    pub async fn domain_search_by_domain(&self, domain: &str) -> Result<DomainSearchResponse> {
        self.domain_search(&[("domain", domain)]).await
    }

    /// Address patterns used by a company, looked up by name.
    pub async fn domain_search_by_company_name(
        &self,
        company_name: &str,
    ) -> Result<DomainSearchResponse> {
        self.domain_search(&[("company_name", company_name)]).await
    }

    async fn domain_search(&self, params: &[(&str, &str)]) -> Result<DomainSearchResponse> {
        let url = self.url(ENDPOINT_EMAIL_FINDER, &non_empty(params))?;
        self.get_json(url).await
    }
}
