//! Server-mode gateway talking to the `/api/leads` endpoints.

use reqwest::{Client, Response};

use crate::component::gateway::{GatewayError, LeadsGateway};
use crate::domain::lead::{Lead, NewLead};
use crate::dto::api::MessageResponse;

#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn leads_url(&self) -> String {
        format!("{}/api/leads", self.base_url)
    }

    /// Turns a non-2xx answer into [`GatewayError::Status`] carrying the
    /// server's generic message.
    async fn check(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<MessageResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        Err(GatewayError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl LeadsGateway for HttpGateway {
    async fn create_lead(&self, new_lead: &NewLead) -> Result<Lead, GatewayError> {
        let response = self
            .client
            .post(self.leads_url())
            .json(new_lead)
            .send()
            .await?;
        Ok(Self::check(response).await?.json::<Lead>().await?)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, GatewayError> {
        let response = self.client.get(self.leads_url()).send().await?;
        Ok(Self::check(response).await?.json::<Vec<Lead>>().await?)
    }

    async fn clear_leads(&self) -> Result<(), GatewayError> {
        let response = self.client.delete(self.leads_url()).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leads_url_ignores_trailing_slash() {
        let gateway = HttpGateway::new("http://127.0.0.1:8080/");
        assert_eq!(gateway.leads_url(), "http://127.0.0.1:8080/api/leads");
    }
}
