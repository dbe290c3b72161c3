//! Error taxonomies for loading and rendering.
//!
//! Load failures are expected environment outcomes (network, HTTP status,
//! malformed JSON). Render failures split the programming-invariant
//! violation (rendering before the document arrived) from the reportable
//! environment error (an anchor element missing from the host document).

use thiserror::Error;

use crate::render::Region;

/// Failure fetching or decoding the profile document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport-level failure issuing the request or reading the body.
    #[error("profile document request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("profile document request returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not a valid profile document.
    #[error("profile document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure during a render pass. Terminal for the pass; nothing is retried
/// and no partial recovery is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A render pass was attempted before the document arrived.
    #[error("render attempted before the profile document was loaded")]
    DocumentAbsent,

    /// A region's anchor element is missing from the host document.
    #[error("missing anchor element for the {region} region (expected id \"{id}\")", id = .region.anchor_id())]
    MissingAnchor { region: Region },
}
