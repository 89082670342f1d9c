use crate::validation::ContactInput;
use crate::models::contact_request::ContactRequest;
use crate::models::submission_result::SubmissionResult;
use log::warn;

pub const CONTACT_PATH: &str = "/api/contact";

/// HTTP side of the form, one request per submission
#[derive(Clone, Debug)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(api_url: &str) -> Self {
        ContactClient {
            http: reqwest::Client::new(),
            endpoint: format!("{}{CONTACT_PATH}", api_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit(
        &self,
        input: &ContactInput,
        token: String,
    ) -> Result<SubmissionResult, reqwest::Error> {
        let request = ContactRequest {
            name: input.name.clone(),
            email: input.email.clone(),
            message: input.message.clone(),
            recaptcha_token: token,
        };

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        let mut result: SubmissionResult = response.json().await?;

        if !status.is_success() && result.success {
            warn!("Contact endpoint answered {status} with a success body");
            result.success = false;
        }

        Ok(result)
    }
}
