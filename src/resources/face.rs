use std::path::Path;

use reqwest::Method;
use serde_json::{json, Value};

use crate::errors::Result;
use crate::models::{DetectOptions, FindSimilarOptions};
use crate::resources::Query;
use crate::transport::{Payload, Transport};

/// Face operations: detection, similarity search, and grouping.
///
/// Obtained from [`Client::face`](crate::Client::face).
pub struct Face<'a> {
    transport: &'a Transport,
}

impl<'a> Face<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn detect_query(options: &DetectOptions) -> Query {
        Query::new()
            .push("detectionModel", &options.detection_model)
            .push("faceIdTimeToLive", options.face_id_time_to_live)
            .push("recognitionModel", &options.recognition_model)
            .push("returnFaceAttributes", &options.return_face_attributes)
            .push("returnFaceId", options.return_face_id)
            .push("returnFaceLandmarks", options.return_face_landmarks)
            .push("returnRecognitionModel", options.return_recognition_model)
    }

    /// Detect human faces in an image located at a URL.
    ///
    /// Returns the face entries the service found: rectangles, and optionally
    /// `faceId`s, landmarks, and attributes depending on `options`.
    ///
    /// See <https://learn.microsoft.com/rest/api/faceapi/face/detect-with-url>.
    pub async fn detect_with_url(
        &self,
        url: &str,
        options: Option<DetectOptions>,
    ) -> Result<Value> {
        let options = options.unwrap_or_default();
        self.transport
            .send_json(
                Method::POST,
                "detect",
                Self::detect_query(&options).pairs(),
                Payload::Json(json!({ "url": url })),
            )
            .await
    }

    /// Detect human faces in raw image bytes.
    ///
    /// See <https://learn.microsoft.com/rest/api/faceapi/face/detect-with-stream>.
    pub async fn detect_with_stream(
        &self,
        image: Vec<u8>,
        options: Option<DetectOptions>,
    ) -> Result<Value> {
        let options = options.unwrap_or_default();
        self.transport
            .send_json(
                Method::POST,
                "detect",
                Self::detect_query(&options).pairs(),
                Payload::Octets(image),
            )
            .await
    }

    /// Detect human faces in a local image file.
    ///
    /// Reads the file and delegates to [`detect_with_stream`](Self::detect_with_stream).
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) if the file cannot be read.
    pub async fn detect_with_file(
        &self,
        path: impl AsRef<Path>,
        options: Option<DetectOptions>,
    ) -> Result<Value> {
        let image = tokio::fs::read(path).await?;
        self.detect_with_stream(image, options).await
    }

    async fn find_similar(&self, body: Value) -> Result<Value> {
        self.transport
            .send_json(Method::POST, "findsimilars", &[], Payload::Json(body))
            .await
    }

    /// Search a face list for faces similar to the query face.
    ///
    /// See <https://learn.microsoft.com/rest/api/faceapi/face/find-similar>.
    pub async fn find_similar_in_face_list(
        &self,
        face_id: &str,
        face_list_id: &str,
        options: Option<FindSimilarOptions>,
    ) -> Result<Value> {
        let options = options.unwrap_or_default();
        self.find_similar(json!({
            "faceId": face_id,
            "faceListId": face_list_id,
            "maxNumOfCandidatesReturned": options.max_candidates,
            "mode": options.mode,
        }))
        .await
    }

    /// Search a large face list for faces similar to the query face.
    ///
    /// The list must have been trained; see
    /// [`LargeFaceList::train`](crate::LargeFaceList::train).
    pub async fn find_similar_in_large_face_list(
        &self,
        face_id: &str,
        large_face_list_id: &str,
        options: Option<FindSimilarOptions>,
    ) -> Result<Value> {
        let options = options.unwrap_or_default();
        self.find_similar(json!({
            "faceId": face_id,
            "largeFaceListId": large_face_list_id,
            "maxNumOfCandidatesReturned": options.max_candidates,
            "mode": options.mode,
        }))
        .await
    }

    /// Search an ad-hoc `faceId` array for faces similar to the query face.
    pub async fn find_similar_in_face_ids(
        &self,
        face_id: &str,
        face_ids: &[&str],
        options: Option<FindSimilarOptions>,
    ) -> Result<Value> {
        let options = options.unwrap_or_default();
        self.find_similar(json!({
            "faceId": face_id,
            "faceIds": face_ids,
            "maxNumOfCandidatesReturned": options.max_candidates,
            "mode": options.mode,
        }))
        .await
    }

    /// Divide candidate faces into groups based on face similarity.
    ///
    /// See <https://learn.microsoft.com/rest/api/faceapi/face/group>.
    pub async fn group(&self, face_ids: &[&str]) -> Result<Value> {
        self.transport
            .send_json(
                Method::POST,
                "group",
                &[],
                Payload::Json(json!({ "faceIds": face_ids })),
            )
            .await
    }
}
