//! Checksum-guarded store client for the `/v1.0` resource collections.

use crate::config::ClientConfig;
use crate::envelope::{codes, Envelope, WireError};
use crate::error::ApiError;
use crate::path::ResourcePath;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use turbine_api_types::{Checksum, Cluster, ClusterKey, Instance, Resource, ValidationError};
use url::Url;

const API_KEY_HEADER: &str = "X-Turbine-Api-Key";
const CLIENT_ID_HEADER: &str = "X-Turbine-Api-Clientid";
const CLIENT_ID: &str = "turbine-api-client (rust v0.1)";

/// Synchronous-RPC-style client: one call, one request, no implicit
/// retry. Staleness is only ever detected at mutation time, surfaced as
/// [`ApiError::Conflict`].
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base = Url::parse(&config.base_url)?;
        Ok(Self { http, base, api_key: config.api_key })
    }

    /// Fetch all resources of a collection.
    pub async fn index<T: Resource>(&self) -> Result<Vec<T>, ApiError> {
        let response = self
            .send::<()>(Method::GET, ResourcePath::collection(T::COLLECTION), None)
            .await?;
        self.unpack(response, T::COLLECTION, "").await
    }

    /// Fetch a single resource by key.
    pub async fn get<T: Resource>(&self, key: &str) -> Result<T, ApiError> {
        require_key(T::COLLECTION, key)?;
        let response = self
            .send::<()>(Method::GET, ResourcePath::keyed(T::COLLECTION, key), None)
            .await?;
        self.unpack(response, T::COLLECTION, key).await
    }

    /// Submit a new resource; the server assigns key and initial
    /// checksum, both returned on the created value.
    pub async fn create<T: Resource>(&self, body: &T) -> Result<T, ApiError> {
        body.is_valid(true)?;
        let response = self
            .send(Method::POST, ResourcePath::collection(T::COLLECTION), Some(body))
            .await?;
        let created: T = self.unpack(response, T::COLLECTION, "").await?;
        tracing::debug!(
            collection = T::COLLECTION,
            key = created.key(),
            name = created.name(),
            "created resource"
        );
        Ok(created)
    }

    /// Submit a full replacement. The body carries the checksum of the
    /// revision being replaced; a stale one yields
    /// [`ApiError::Conflict`] and the caller must re-fetch to retry.
    pub async fn modify<T: Resource>(&self, body: &T) -> Result<T, ApiError> {
        body.is_valid(false)?;
        let key = body.key().to_string();
        let response = self
            .send(Method::PUT, ResourcePath::keyed(T::COLLECTION, &key), Some(body))
            .await?;
        self.unpack(response, T::COLLECTION, &key).await
    }

    /// Delete a resource, guarded by its current checksum.
    pub async fn delete<T: Resource>(
        &self,
        key: &str,
        checksum: &Checksum,
    ) -> Result<(), ApiError> {
        require_key(T::COLLECTION, key)?;
        let response = self
            .send::<()>(
                Method::DELETE,
                ResourcePath::keyed(T::COLLECTION, key).checksum(checksum),
                None,
            )
            .await?;
        self.unpack_empty(response, T::COLLECTION, key).await
    }

    /// Add an instance to a cluster. Bumps the owning cluster's
    /// checksum; the returned cluster carries the fresh one.
    pub async fn add_instance(
        &self,
        cluster_key: &ClusterKey,
        checksum: &Checksum,
        instance: &Instance,
    ) -> Result<Cluster, ApiError> {
        instance.is_valid()?;
        let path = ResourcePath::keyed(Cluster::COLLECTION, cluster_key.as_str())
            .subresource("instance", None)
            .checksum(checksum);
        let response = self.send(Method::POST, path, Some(instance)).await?;
        self.unpack(response, Cluster::COLLECTION, cluster_key.as_str()).await
    }

    /// Remove an instance, addressed by its `{host}:{port}` identity.
    /// Bumps the owning cluster's checksum like [`Self::add_instance`].
    pub async fn remove_instance(
        &self,
        cluster_key: &ClusterKey,
        checksum: &Checksum,
        instance: &Instance,
    ) -> Result<Cluster, ApiError> {
        let path = ResourcePath::keyed(Cluster::COLLECTION, cluster_key.as_str())
            .subresource("instance", Some(instance.key()))
            .checksum(checksum);
        let response = self.send::<()>(Method::DELETE, path, None).await?;
        self.unpack(response, Cluster::COLLECTION, cluster_key.as_str()).await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: ResourcePath,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = path.to_url(&self.base)?;
        tracing::debug!(%method, %url, "api request");

        let mut request = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CLIENT_ID_HEADER, CLIENT_ID);
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Unpack an envelope that must carry a payload.
    async fn unpack<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        collection: &'static str,
        key: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let envelope = read_envelope(response).await?;

        if let Some(err) = envelope.error {
            return Err(lift_error(status, err, collection, key));
        }
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: "error response with no additional information".to_string(),
            });
        }

        let result = envelope.result.ok_or_else(|| {
            ApiError::Decode(format!("expected payload but {collection} response had no result"))
        })?;
        serde_json::from_value(result).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Unpack an envelope that carries no payload (delete).
    async fn unpack_empty(
        &self,
        response: reqwest::Response,
        collection: &'static str,
        key: &str,
    ) -> Result<(), ApiError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() && bytes.is_empty() {
            return Ok(());
        }

        let envelope: Envelope = serde_json::from_slice(&bytes).map_err(|e| {
            if status.is_success() {
                ApiError::Decode(e.to_string())
            } else {
                ApiError::UnexpectedStatus {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                }
            }
        })?;

        match envelope.error {
            Some(err) => Err(lift_error(status, err, collection, key)),
            None if status.is_success() => Ok(()),
            None => Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: "error response with no additional information".to_string(),
            }),
        }
    }
}

async fn read_envelope(response: reqwest::Response) -> Result<Envelope, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|e| {
        if status.is_success() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }
        }
    })
}

/// Map an envelope error to the client taxonomy, preferring the HTTP
/// status and falling back to the wire error code.
fn lift_error(
    status: StatusCode,
    err: WireError,
    collection: &'static str,
    key: &str,
) -> ApiError {
    if status == StatusCode::NOT_FOUND || err.code == codes::NOT_FOUND {
        return ApiError::NotFound { collection, key: key.to_string() };
    }
    if status == StatusCode::CONFLICT || err.code == codes::MODIFICATION_CONFLICT {
        return ApiError::Conflict {
            collection,
            key: key.to_string(),
            message: err.message,
        };
    }
    if status.is_client_error() {
        return ApiError::Validation { code: err.code, message: err.message };
    }
    ApiError::UnexpectedStatus { status: status.as_u16(), body: err.message }
}

fn require_key(collection: &'static str, key: &str) -> Result<(), ApiError> {
    if key.is_empty() {
        let mut errs = ValidationError::new();
        errs.push(format!("{collection}_key"), "is a required parameter");
        return Err(errs.into());
    }
    Ok(())
}
