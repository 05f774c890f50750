/// Analysis service integration module
///
/// The analysis backend is an external collaborator reached over HTTP:
/// one multipart POST per analysis plus an advisory health probe at
/// startup. client.rs owns the request plumbing and the response
/// envelope.

pub mod client;

pub use client::{AnalyzeClient, AnalyzeError};
