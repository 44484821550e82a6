//! Single and batch validation.

use crate::client::Client;
use crate::models::{BatchRequest, EmailToValidate, ValidateBatchResponse, ValidateResponse};
use crate::Result;

const ENDPOINT_VALIDATE: &str = "validate";
const ENDPOINT_BATCH_VALIDATE: &str = "validatebatch";

impl Client {
    /// Validate one address.
    ///
    /// # Arguments
    /// * `email` - The address to validate
    /// * `ip_address` - IP the address signed up from, if known
    ///
    /// # Examples
    /// ```no_run
    /// # use zerobounce_client::{Client, SANDBOX_IP};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let result = client.validate("valid@example.com", Some(SANDBOX_IP)).await?;
    /// if result.is_valid() {
    ///     println!("{} is deliverable", result.address);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn validate(&self, email: &str, ip_address: Option<&str>) -> Result<ValidateResponse> {
        let mut params = vec![("email", email)];
        if let Some(ip) = ip_address {
            params.push(("ip_address", ip));
        }
        let url = self.url(ENDPOINT_VALIDATE, &params)?;
        self.get_json(url).await
    }

    /// Validate several addresses in one request.
    ///
    /// Entries the API refuses (for example a missing address) come back in
    /// [`ValidateBatchResponse::errors`]; the call itself still succeeds. A
    /// wrong key is also reported there, with `email_address` set to `all`.
    pub async fn validate_batch(&self, emails: &[EmailToValidate]) -> Result<ValidateBatchResponse> {
        let body = BatchRequest {
            api_key: self.api_key(),
            email_batch: emails,
        };
        self.post_json(ENDPOINT_BATCH_VALIDATE, &body).await
    }
}
