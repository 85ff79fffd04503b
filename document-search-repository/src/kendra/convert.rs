//! Conversions from provider requests to Kendra API types.

use aws_sdk_kendra::error::BuildError;
use aws_sdk_kendra::types::{
    AttributeFilter, ContentType, Document, DocumentAttribute, DocumentAttributeValue, Principal,
    PrincipalType, ReadAccessType, RelevanceFeedback, RelevanceType, S3Path,
};
use document_search_shared::{
    AccessControlEntry, AccessType, ContentType as DocumentContentType,
    PrincipalType as EntryPrincipalType, QueryFilter, RelevanceValue,
};

use crate::errors::SearchIndexError;
use crate::types::{FeedbackSubmission, IndexDocumentRequest};

fn build_error(err: BuildError) -> SearchIndexError {
    SearchIndexError::validation(err.to_string())
}

/// Build the Kendra document for an ingestion request.
pub fn to_kendra_document(request: &IndexDocumentRequest) -> Result<Document, SearchIndexError> {
    let s3_path = S3Path::builder()
        .bucket(request.document.bucket())
        .key(request.document.key())
        .build()
        .map_err(build_error)?;

    let access_control_list = request
        .access_control_list
        .iter()
        .map(to_principal)
        .collect::<Result<Vec<_>, _>>()?;

    Document::builder()
        .id(&request.document.document_id)
        .s3_path(s3_path)
        .set_access_control_list(Some(access_control_list))
        .content_type(to_content_type(request.content_type))
        .build()
        .map_err(build_error)
}

pub fn to_principal(entry: &AccessControlEntry) -> Result<Principal, SearchIndexError> {
    let principal_type = match entry.principal_type {
        EntryPrincipalType::User => PrincipalType::User,
        EntryPrincipalType::Group => PrincipalType::Group,
    };
    let access = match entry.access {
        AccessType::Allow => ReadAccessType::Allow,
        AccessType::Deny => ReadAccessType::Deny,
    };

    Principal::builder()
        .name(&entry.name)
        .r#type(principal_type)
        .access(access)
        .build()
        .map_err(build_error)
}

pub fn to_content_type(content_type: DocumentContentType) -> ContentType {
    match content_type {
        DocumentContentType::Pdf => ContentType::Pdf,
    }
}

/// Build the Kendra attribute filter for a query filter.
pub fn to_attribute_filter(filter: &QueryFilter) -> Result<AttributeFilter, SearchIndexError> {
    match filter {
        QueryFilter::OrAll(filters) => {
            let nested = filters
                .iter()
                .map(to_attribute_filter)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AttributeFilter::builder()
                .set_or_all_filters(Some(nested))
                .build())
        }
        QueryFilter::EqualsTo { key, values } => {
            let value = DocumentAttributeValue::builder()
                .set_string_list_value(Some(values.clone()))
                .build();
            let attribute = DocumentAttribute::builder()
                .key(key)
                .value(value)
                .build()
                .map_err(build_error)?;
            Ok(AttributeFilter::builder().equals_to(attribute).build())
        }
    }
}

pub fn to_relevance_type(relevance: RelevanceValue) -> RelevanceType {
    match relevance {
        RelevanceValue::Relevant => RelevanceType::Relevant,
        RelevanceValue::NotRelevant => RelevanceType::NotRelevant,
    }
}

/// Build the single feedback item for a submission.
pub fn to_relevance_feedback(
    submission: &FeedbackSubmission,
) -> Result<RelevanceFeedback, SearchIndexError> {
    RelevanceFeedback::builder()
        .result_id(&submission.result_id)
        .relevance_value(to_relevance_type(submission.relevance))
        .build()
        .map_err(build_error)
}
