//! Get-or-create resolution of named resources.

use crate::client::ApiClient;
use crate::error::ApiError;
use turbine_api_types::Resource;

/// Fetch the resource named `name` from its collection, creating it from
/// `template` if absent. Name comparison is exact and case-sensitive.
///
/// This is best-effort idempotency, not a lock: two resolvers racing on
/// the same name can both miss the scan and both create, leaving
/// duplicates. The API exposes no idempotency key that would close the
/// window, so callers must tolerate the race; under sequential use the
/// second call finds the first call's resource and creates nothing.
pub async fn resolve<T: Resource>(
    client: &ApiClient,
    name: &str,
    template: T,
) -> Result<T, ApiError> {
    let existing = client.index::<T>().await?;

    if let Some(found) = existing.into_iter().find(|r| r.name() == name) {
        tracing::debug!(
            collection = T::COLLECTION,
            name,
            key = found.key(),
            "resolved existing resource"
        );
        return Ok(found);
    }

    tracing::debug!(collection = T::COLLECTION, name, "no match, creating");
    client.create(&template).await
}
