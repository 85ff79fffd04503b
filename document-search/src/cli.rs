//! Command-line definition.

use clap::{Parser, Subcommand};

/// Index, de-index, search and rate PDF documents in an AWS Kendra index.
#[derive(Debug, Parser)]
#[command(name = "document-search", version, about)]
pub struct Cli {
    /// Region of the index (overrides KENDRA_REGION)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Id of the index (overrides KENDRA_INDEX_ID)
    #[arg(long, global = true)]
    pub index_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Submit a PDF stored in S3 for ingestion, readable by everybody
    Index {
        /// Id the document is stored under
        #[arg(long)]
        document_id: String,

        /// Location of the document as s3://bucket/key
        #[arg(long, conflicts_with_all = ["bucket", "key"])]
        s3_uri: Option<String>,

        /// Bucket holding the document
        #[arg(long, requires = "key")]
        bucket: Option<String>,

        /// Key of the document within the bucket
        #[arg(long, requires = "bucket")]
        key: Option<String>,

        /// Role the index assumes to read the bucket (overrides KENDRA_ROLE_ARN)
        #[arg(long)]
        role_arn: Option<String>,
    },

    /// Remove a document from the index
    Deindex {
        /// Id of the document to remove
        #[arg(long)]
        document_id: String,
    },

    /// Run a query, printing the response as JSON
    Search {
        /// JSON request {query, tag?, pageNumber, pageSize}; read from stdin when omitted
        body: Option<String>,
    },

    /// Rate a search result
    Feedback {
        /// JSON request {queryId, resultId, relevance}; read from stdin when omitted
        body: Option<String>,
    },
}
