//! Document types used when submitting content to the search index.
//!
//! A document is identified by the id assigned by the upload pipeline and the
//! S3 object holding its content. Every indexed document carries an access
//! control list; the adapter always grants read access to a single group.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the group that every indexed document is readable by.
pub const EVERYBODY_GROUP: &str = "everybody";

const S3_SCHEME: &str = "s3://";

/// Location of an object in S3.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Location {
    /// Bucket holding the object.
    pub bucket: String,
    /// Object key within the bucket.
    pub key: String,
}

impl S3Location {
    /// Create a new S3 location.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parse an `s3://bucket/key` URI.
    ///
    /// The key may contain further slashes; everything after the first slash
    /// following the bucket is the key.
    ///
    /// # Example
    ///
    /// ```
    /// use document_search_shared::S3Location;
    ///
    /// let location = S3Location::parse("s3://docs/reports/a.pdf").unwrap();
    /// assert_eq!(location.bucket, "docs");
    /// assert_eq!(location.key, "reports/a.pdf");
    /// ```
    pub fn parse(uri: &str) -> Result<Self, String> {
        let rest = uri
            .strip_prefix(S3_SCHEME)
            .ok_or_else(|| format!("S3 URI must start with {}: {}", S3_SCHEME, uri))?;

        let (bucket, key) = rest
            .split_once('/')
            .ok_or_else(|| format!("S3 URI has no object key: {}", uri))?;

        if bucket.is_empty() {
            return Err(format!("S3 URI has an empty bucket: {}", uri));
        }
        if key.is_empty() {
            return Err(format!("S3 URI has an empty object key: {}", uri));
        }

        Ok(Self::new(bucket, key))
    }
}

impl FromStr for S3Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for S3Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", S3_SCHEME, self.bucket, self.key)
    }
}

/// Reference to a stored document that should be indexed.
///
/// The adapter holds no state about the document; the object store owns the
/// content and the search index owns everything derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    /// The document id generated by the upload pipeline.
    pub document_id: String,
    /// Where the document content lives.
    #[serde(flatten)]
    pub location: S3Location,
}

impl DocumentReference {
    /// Create a document reference from its id, bucket and key.
    pub fn new(
        document_id: impl Into<String>,
        bucket: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            location: S3Location::new(bucket, key),
        }
    }

    /// Create a document reference from an id and an already resolved location.
    pub fn at(document_id: impl Into<String>, location: S3Location) -> Self {
        Self {
            document_id: document_id.into(),
            location,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.location.bucket
    }

    pub fn key(&self) -> &str {
        &self.location.key
    }
}

/// Kind of principal an access control entry applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalType {
    User,
    Group,
}

/// Whether a principal is allowed or denied read access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    Allow,
    Deny,
}

/// A single entry of a document's access control list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessControlEntry {
    /// Principal name (user id or group name).
    pub name: String,
    /// Whether `name` is a user or a group.
    pub principal_type: PrincipalType,
    /// Allow or deny.
    pub access: AccessType,
}

impl AccessControlEntry {
    /// The entry granting read access to the `everybody` group.
    pub fn everybody() -> Self {
        Self {
            name: EVERYBODY_GROUP.to_string(),
            principal_type: PrincipalType::Group,
            access: AccessType::Allow,
        }
    }
}

/// Content type of an indexed document. Only PDF documents are indexed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    #[default]
    Pdf,
}
