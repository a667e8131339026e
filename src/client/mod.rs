//! Client layer: the delivery channel seam, its HTTP implementation, and the dispatcher.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use url::Url;

use crate::config::RelayConfig;
use crate::domain::{ApiToken, DispatchResult, SendSmsError, SmsRequest, ValidationError};

/// Boxed error returned by delivery channels.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Boxed future returned by [`DeliveryChannel::publish`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Something that can deliver a text to a destination address.
///
/// Failures may carry any cause; the [`Dispatcher`] replaces them with
/// [`SendSmsError::Delivery`].
pub trait DeliveryChannel: Send + Sync {
    fn publish<'a>(
        &'a self,
        destination: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<DispatchResult, BoxError>>;
}

impl<T: DeliveryChannel + ?Sized> DeliveryChannel for Arc<T> {
    fn publish<'a>(
        &'a self,
        destination: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<DispatchResult, BoxError>> {
        (**self).publish(destination, body)
    }
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors raised while setting up an [`HttpDeliveryChannel`].
pub enum ClientError {
    /// HTTP client construction failed (TLS backend, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The publish endpoint is not a valid URL.
    #[error("invalid publish endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// One of the domain constructors rejected a configured value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`HttpDeliveryChannel`].
pub struct HttpDeliveryChannelBuilder {
    endpoint: Url,
    api_token: Option<ApiToken>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpDeliveryChannelBuilder {
    /// Create a builder posting to `endpoint`, with no token, timeout, or user-agent.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            api_token: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Send `api_token` with every publish.
    pub fn api_token(mut self, api_token: ApiToken) -> Self {
        self.api_token = Some(api_token);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`HttpDeliveryChannel`].
    pub fn build(self) -> Result<HttpDeliveryChannel, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ClientError::Transport(Box::new(err)))?;

        Ok(HttpDeliveryChannel {
            endpoint: self.endpoint,
            api_token: self.api_token,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Delivery channel that POSTs a `Publish` form to an HTTP endpoint.
///
/// Form fields: `Action=Publish`, `PhoneNumber`, `Message`, and `api_token`
/// when configured. Any 2xx response with a non-empty body is the
/// [`DispatchResult`]; everything else is a failure.
pub struct HttpDeliveryChannel {
    endpoint: Url,
    api_token: Option<ApiToken>,
    http: Arc<dyn HttpTransport>,
}

impl HttpDeliveryChannel {
    /// Create a channel with default HTTP settings.
    ///
    /// For more customization, use [`HttpDeliveryChannel::builder`].
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            api_token: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a channel with custom settings.
    pub fn builder(endpoint: Url) -> HttpDeliveryChannelBuilder {
        HttpDeliveryChannelBuilder::new(endpoint)
    }

    /// Build a channel from [`RelayConfig`].
    pub fn from_config(config: &RelayConfig) -> Result<Self, ClientError> {
        let endpoint =
            Url::parse(&config.publish_endpoint).map_err(|source| ClientError::InvalidEndpoint {
                endpoint: config.publish_endpoint.clone(),
                source,
            })?;

        let mut builder = Self::builder(endpoint);
        if let Some(token) = config.api_token.as_deref() {
            builder = builder.api_token(ApiToken::new(token)?);
        }
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = config.user_agent.as_deref() {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl DeliveryChannel for HttpDeliveryChannel {
    fn publish<'a>(
        &'a self,
        destination: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<DispatchResult, BoxError>> {
        Box::pin(async move {
            let params =
                crate::transport::encode_publish_form(destination, body, self.api_token.as_ref());
            let response = self.http.post_form(self.endpoint.as_str(), params).await?;
            let result = crate::transport::decode_publish_response(response.status, response.body)?;
            Ok(result)
        })
    }
}

/// Forwards validated requests to a [`DeliveryChannel`].
#[derive(Debug, Clone)]
pub struct Dispatcher<C> {
    channel: C,
}

impl<C: DeliveryChannel> Dispatcher<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Publish the request once.
    ///
    /// The channel's result is returned unmodified. Any channel failure is
    /// logged and reported as [`SendSmsError::Delivery`]; the cause is not returned.
    pub async fn dispatch(&self, request: &SmsRequest) -> Result<DispatchResult, SendSmsError> {
        match self
            .channel
            .publish(request.phone_number().as_str(), request.message().as_str())
            .await
        {
            Ok(result) => {
                info!(
                    message_len = request.message().len_utf16(),
                    "message handed to delivery channel"
                );
                Ok(result)
            }
            Err(cause) => {
                error!(error = %cause, "delivery channel failed");
                Err(SendSmsError::Delivery)
            }
        }
    }
}
