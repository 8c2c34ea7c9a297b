//! # Azure Face client for Rust
//!
//! Client for the [Azure Cognitive Services Face
//! API](https://learn.microsoft.com/azure/cognitive-services/face/): detect
//! faces, search for similar ones, group them, and manage face lists and
//! large face lists -- all with idiomatic async Rust.
//!
//! ## Quick start
//!
//! ```no_run
//! use azure_face::Client;
//!
//! #[tokio::main]
//! async fn main() -> azure_face::Result<()> {
//!     let client = Client::new(
//!         "https://westeurope.api.cognitive.microsoft.com",
//!         "your-subscription-key",
//!     )?;
//!
//!     let faces = client
//!         .face()
//!         .detect_with_url("https://example.com/photo.jpg", None)
//!         .await?;
//!
//!     for face in faces.as_array().into_iter().flatten() {
//!         println!("face: {}", face["faceId"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Builder pattern
//!
//! ```no_run
//! use azure_face::ClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> azure_face::Result<()> {
//! // Falls back to AZURE_FACE_ENDPOINT / AZURE_FACE_SUBSCRIPTION_KEY for
//! // settings not provided here.
//! let client = ClientBuilder::new()
//!     .endpoint("https://westeurope.api.cognitive.microsoft.com")
//!     .subscription_key("your-subscription-key")
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! Responses are decoded into [`serde_json::Value`]; their shape is defined
//! by the service, not by this crate. Failures surface as [`Error`]: API
//! rejections as [`Error::Api`], network problems as [`Error::Http`], and
//! undecodable bodies as [`Error::Decode`]. Nothing is retried or swallowed.

mod client;
mod errors;
mod models;
mod resources;
mod transport;

pub use client::{Client, ClientBuilder, Configuration, Resource, ResourceKind};
pub use errors::{Error, Result};
pub use models::{AddFaceOptions, DetectOptions, FindSimilarOptions};
pub use resources::{Face, FaceList, LargeFaceList};
