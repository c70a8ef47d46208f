//! ops::tags
//!
//! Fetching and manipulating the account's tags.
//!
//! Tags can be selected by listing index or by name. Name matching
//! takes the first tag with an equal name; accounts with duplicate tag
//! names get whichever tag the service listed first (documented
//! undefined behavior). Names that match nothing are silently skipped.

use reqwest::Method;
use serde_json::Value;

use super::OpsError;
use crate::api::{ApiClient, RequestSpec};
use crate::core::select::Selection;
use crate::core::types::Tag;

/// Fetch the current snapshot of the account's tags.
pub async fn fetch_tags(client: &ApiClient) -> Result<Vec<Tag>, OpsError> {
    let data = client.send(RequestSpec::new("user").aspect("tags")).await?;
    Ok(serde_json::from_value(data)?)
}

/// Resolve a selection against a tag snapshot.
pub fn resolve_tags<'a>(
    selection: &Selection,
    snapshot: &'a [Tag],
) -> Result<Vec<&'a Tag>, OpsError> {
    match selection {
        Selection::Indices(indices) => indices
            .iter()
            .map(|&index| {
                snapshot
                    .get(index)
                    .ok_or_else(|| OpsError::bad_index(index, snapshot.len()))
            })
            .collect(),
        Selection::Names(names) => Ok(names
            .iter()
            .filter_map(|name| snapshot.iter().find(|tag| &tag.name == name))
            .collect()),
    }
}

/// Create a new tag.
pub async fn add_tag(client: &ApiClient, name: &str) -> Result<(), OpsError> {
    client
        .send(
            RequestSpec::new("user")
                .aspect("tags")
                .method(Method::POST)
                .field("name", name),
        )
        .await?;
    Ok(())
}

/// Delete every resolved tag, one request per tag.
pub async fn delete_tags(client: &ApiClient, tags: &[&Tag]) -> Result<(), OpsError> {
    for tag in tags {
        client
            .send(
                RequestSpec::new("user")
                    .aspect("tags")
                    .method(Method::DELETE)
                    .fields(tag.to_fields()),
            )
            .await?;
    }
    Ok(())
}

/// Rename a single resolved tag. Exactly one tag must have resolved.
pub async fn rename_tag(client: &ApiClient, tags: &[&Tag], name: &str) -> Result<(), OpsError> {
    let tag = match tags {
        [] => return Err(OpsError::NoTagMatched),
        [tag] => tag,
        _ => return Err(OpsError::AmbiguousRename),
    };

    let mut fields = tag.to_fields();
    fields.insert("name".to_string(), Value::from(name));

    client
        .send(
            RequestSpec::new("user")
                .aspect("tags")
                .method(Method::PUT)
                .fields(fields),
        )
        .await?;
    Ok(())
}
