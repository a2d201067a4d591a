//! # Blog Shared
//!
//! Wire types exchanged with HTTP clients.
//! Kept free of domain and infrastructure dependencies so clients can reuse them.

pub mod dto;
pub mod response;

pub use dto::{AuthorPayload, CreatePostRequest, PostResponse, UpdatePostRequest};
pub use response::ErrorResponse;
