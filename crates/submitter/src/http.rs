//! HttpSubmitter - multipart POST to the save-fact endpoint

use contracts::{Credential, Fact, FactSubmitter, SubmitError};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument};

const FIELD_MIME: &str = "text/plain; charset=utf-8";

/// Submitter that posts each fact as `multipart/form-data`
///
/// One request per fact, no retries, transport default timeouts.
/// Only `200 OK` counts as success; the response body is never read.
pub struct HttpSubmitter {
    name: String,
    endpoint: Url,
    client: Client,
}

impl HttpSubmitter {
    /// Create a submitter for `endpoint`
    ///
    /// # Errors
    /// `SubmitError::RequestBuild` if the endpoint is not a valid URL or the
    /// HTTP client cannot be initialised.
    pub fn new(name: impl Into<String>, endpoint: &str) -> Result<Self, SubmitError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            SubmitError::request_build(format!("invalid endpoint '{endpoint}': {e}"))
        })?;
        let client = Client::builder()
            .build()
            .map_err(|e| SubmitError::request_build(format!("http client: {e}")))?;
        Ok(Self::with_client(name, endpoint, client))
    }

    /// Create a submitter around an existing client
    pub fn with_client(name: impl Into<String>, endpoint: Url, client: Client) -> Self {
        Self {
            name: name.into(),
            endpoint,
            client,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_form(fact: &Fact) -> Result<Form, SubmitError> {
        fact.form_fields()
            .into_iter()
            .try_fold(Form::new(), |form, (name, value)| {
                let part = Part::text(value)
                    .mime_str(FIELD_MIME)
                    .map_err(|e| SubmitError::encoding(format!("field '{name}': {e}")))?;
                Ok(form.part(name, part))
            })
    }

    fn build_request(
        &self,
        fact: &Fact,
        credential: &Credential,
    ) -> Result<reqwest::Request, SubmitError> {
        let form = Self::build_form(fact)?;
        self.client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, credential.authorization())
            .multipart(form)
            .build()
            .map_err(|e| SubmitError::request_build(e.to_string()))
    }
}

impl FactSubmitter for HttpSubmitter {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "http_submitter_submit",
        skip(self, fact, credential),
        fields(submitter = %self.name, value = fact.value)
    )]
    async fn submit(&self, fact: &Fact, credential: &Credential) -> Result<(), SubmitError> {
        let request = self.build_request(fact, credential)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| SubmitError::transport(e.to_string()))?;

        let status = response.status();
        // Releases the connection without reading the body
        drop(response);

        if status != StatusCode::OK {
            return Err(SubmitError::UnexpectedStatus {
                code: status.as_u16(),
            });
        }

        debug!(submitter = %self.name, status = status.as_u16(), "Fact accepted");
        Ok(())
    }
}
