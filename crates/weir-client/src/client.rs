//! The management API client.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, header};
use tracing::{debug, trace};
use weir_proto::{Object, Objects, RawStatus, Status, node_statuses};

use crate::cluster::Cluster;
use crate::error::{ClientError, ClientResult};
use crate::urls;
use crate::yaml::yaml_to_json;

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for one cluster's management API.
///
/// Every operation issues a single request and returns fresh data; nothing is
/// retried or cached, and failures propagate to the caller unchanged.
///
/// # Example
///
/// ```rust,no_run
/// use weir_client::{Client, Cluster};
///
/// # async fn example() -> Result<(), weir_client::ClientError> {
/// let client = Client::new(Cluster::new("dev", "http://127.0.0.1:2381"))?;
/// let objects = client.objects().await?;
/// println!("{} pipelines", objects.pipelines.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Target cluster.
    cluster: Cluster,
    /// Per-request timeout.
    request_timeout: Duration,
}

impl Client {
    /// Create a client for the given cluster.
    ///
    /// # Errors
    ///
    /// Returns an error if the cluster's server URL is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(cluster: Cluster) -> ClientResult<Self> {
        cluster.validate()?;
        let http = reqwest::Client::builder()
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            cluster,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Set the per-request timeout.
    pub fn set_request_timeout(&mut self, timeout: Duration) {
        self.request_timeout = timeout;
    }

    /// The cluster this client talks to.
    #[must_use]
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Fetch all managed objects, partitioned by kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or response deserialization fails.
    pub async fn objects(&self) -> ClientResult<Objects> {
        debug!(cluster = %self.cluster.name, "listing objects");
        let response = self.send(self.request(Method::GET, urls::OBJECTS)).await?;
        let raw: Vec<Object> = response.json().await?;
        trace!(count = raw.len(), "fetched objects");
        Ok(Objects::classify(raw))
    }

    /// Create an object from user-edited YAML.
    ///
    /// The YAML is converted to JSON before the request; a parse failure is
    /// raised without touching the network. No schema validation happens on
    /// this side — the server rejects specs it does not accept.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid YAML or a failed request.
    pub async fn create_object(&self, object_yaml: &str) -> ClientResult<()> {
        let json = yaml_to_json(object_yaml)?;
        debug!(cluster = %self.cluster.name, "creating object");
        self.send(
            self.request(Method::POST, urls::OBJECTS)
                .header(header::CONTENT_TYPE, "application/json")
                .body(json),
        )
        .await?;
        Ok(())
    }

    /// Replace the named object with user-edited YAML.
    ///
    /// The caller is responsible for checking that the YAML keeps the
    /// target's name and kind; this layer submits it as-is.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid YAML or a failed request.
    pub async fn update_object(&self, target: &Object, object_yaml: &str) -> ClientResult<()> {
        let json = yaml_to_json(object_yaml)?;
        debug!(cluster = %self.cluster.name, object = %target.name, "updating object");
        self.send(
            self.request(Method::PUT, &urls::object_item(&target.name))
                .header(header::CONTENT_TYPE, "application/json")
                .body(json),
        )
        .await?;
        Ok(())
    }

    /// Delete an object by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_object(&self, object_name: &str) -> ClientResult<()> {
        debug!(cluster = %self.cluster.name, object = %object_name, "deleting object");
        self.send(self.request(Method::DELETE, &urls::object_item(object_name)))
            .await?;
        Ok(())
    }

    /// Fetch the per-node status of an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or response deserialization fails.
    pub async fn object_status(&self, object_name: &str) -> ClientResult<Status> {
        debug!(cluster = %self.cluster.name, object = %object_name, "fetching object status");
        let response = self
            .send(self.request(Method::GET, &urls::object_status(object_name)))
            .await?;
        let raw: RawStatus = response.json().await?;
        Ok(node_statuses(raw, object_name))
    }

    /// Build a request against the cluster with auth and timeout applied.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.cluster.endpoint(path);
        trace!(%url, "building request");
        let mut request = self.http.request(method, url).timeout(self.request_timeout);
        if let Some(token) = &self.cluster.token {
            request = request.bearer_auth(token);
        } else if let Some(username) = &self.cluster.username {
            request = request.basic_auth(username, self.cluster.password.as_deref());
        }
        request
    }

    /// Send a request, mapping non-success statuses to [`ClientError::Api`].
    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
