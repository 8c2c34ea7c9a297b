use reqwest::Method;
use serde_json::{json, Value};

use crate::errors::Result;
use crate::models::AddFaceOptions;
use crate::resources::Query;
use crate::transport::{Payload, Transport};

/// Default page size for listing operations.
pub(super) const DEFAULT_TOP: u32 = 1000;

/// Operations shared between [`FaceList`] and
/// [`LargeFaceList`](crate::LargeFaceList); the two differ only in their
/// URL path prefix and the large variant's training endpoints.
pub(crate) struct ListOps<'a> {
    pub(super) transport: &'a Transport,
    pub(super) prefix: &'static str,
}

impl<'a> ListOps<'a> {
    pub(crate) fn new(transport: &'a Transport, prefix: &'static str) -> Self {
        Self { transport, prefix }
    }

    pub(super) async fn create(
        &self,
        list_id: &str,
        name: &str,
        recognition_model: Option<&str>,
        user_data: Option<&str>,
    ) -> Result<()> {
        let mut body = json!({ "name": name });
        if let Some(model) = recognition_model {
            body["recognitionModel"] = json!(model);
        }
        if let Some(data) = user_data {
            body["userData"] = json!(data);
        }

        self.transport
            .send_unit(
                Method::PUT,
                &format!("{}/{list_id}", self.prefix),
                &[],
                Payload::Json(body),
            )
            .await
    }

    pub(super) async fn get(&self, list_id: &str, return_recognition_model: bool) -> Result<Value> {
        let query = Query::new().push("returnRecognitionModel", return_recognition_model);
        self.transport
            .send_json(
                Method::GET,
                &format!("{}/{list_id}", self.prefix),
                query.pairs(),
                Payload::Empty,
            )
            .await
    }

    pub(super) async fn all(
        &self,
        start: Option<&str>,
        top: Option<u32>,
        return_recognition_model: bool,
    ) -> Result<Value> {
        let query = Query::new()
            .push("top", top.unwrap_or(DEFAULT_TOP))
            .push("returnRecognitionModel", return_recognition_model)
            .push_opt("start", start);

        self.transport
            .send_json(Method::GET, self.prefix, query.pairs(), Payload::Empty)
            .await
    }

    pub(super) async fn update(
        &self,
        list_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        let mut body = json!({ "name": name });
        if let Some(data) = user_data {
            body["userData"] = json!(data);
        }

        self.transport
            .send_unit(
                Method::PATCH,
                &format!("{}/{list_id}", self.prefix),
                &[],
                Payload::Json(body),
            )
            .await
    }

    pub(super) async fn delete(&self, list_id: &str) -> Result<()> {
        self.transport
            .send_unit(
                Method::DELETE,
                &format!("{}/{list_id}", self.prefix),
                &[],
                Payload::Empty,
            )
            .await
    }

    fn add_face_query(options: &AddFaceOptions) -> Query {
        Query::new()
            .push_opt("userData", options.user_data.as_deref())
            .push_opt("targetFace", options.target_face.as_deref())
            .push_opt("detectionModel", options.detection_model.as_deref())
    }

    pub(super) async fn add_face_from_url(
        &self,
        list_id: &str,
        url: &str,
        options: Option<AddFaceOptions>,
    ) -> Result<()> {
        let options = options.unwrap_or_default();
        self.transport
            .send_unit(
                Method::POST,
                &format!("{}/{list_id}/persistedfaces", self.prefix),
                Self::add_face_query(&options).pairs(),
                Payload::Json(json!({ "url": url })),
            )
            .await
    }

    pub(super) async fn add_face_from_stream(
        &self,
        list_id: &str,
        image: Vec<u8>,
        options: Option<AddFaceOptions>,
    ) -> Result<()> {
        let options = options.unwrap_or_default();
        self.transport
            .send_unit(
                Method::POST,
                &format!("{}/{list_id}/persistedfaces", self.prefix),
                Self::add_face_query(&options).pairs(),
                Payload::Octets(image),
            )
            .await
    }

    pub(super) async fn delete_face(&self, list_id: &str, persisted_face_id: &str) -> Result<()> {
        self.transport
            .send_unit(
                Method::DELETE,
                &format!("{}/{list_id}/persistedfaces/{persisted_face_id}", self.prefix),
                &[],
                Payload::Empty,
            )
            .await
    }
}

/// Face list management.
///
/// A face list is a server-side named collection of persisted faces, usable
/// as a `findsimilars` target. Obtained from
/// [`Client::face_list`](crate::Client::face_list).
///
/// See <https://learn.microsoft.com/rest/api/faceapi/face-list>.
pub struct FaceList<'a> {
    ops: ListOps<'a>,
}

impl<'a> FaceList<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            ops: ListOps::new(transport, "facelists"),
        }
    }

    /// Create an empty face list with a user-defined name.
    pub async fn create(
        &self,
        face_list_id: &str,
        name: &str,
        recognition_model: Option<&str>,
        user_data: Option<&str>,
    ) -> Result<()> {
        self.ops
            .create(face_list_id, name, recognition_model, user_data)
            .await
    }

    /// Retrieve a face list's id, name, userData, and recognition model.
    pub async fn get(&self, face_list_id: &str, return_recognition_model: bool) -> Result<Value> {
        self.ops.get(face_list_id, return_recognition_model).await
    }

    /// List face lists, starting after `start`, up to `top` entries
    /// (defaults to 1000 when `None`).
    pub async fn all(
        &self,
        start: Option<&str>,
        top: Option<u32>,
        return_recognition_model: bool,
    ) -> Result<Value> {
        self.ops.all(start, top, return_recognition_model).await
    }

    /// Update a face list's name and, optionally, userData.
    pub async fn update(
        &self,
        face_list_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        self.ops.update(face_list_id, name, user_data).await
    }

    /// Delete a face list and all the faces in it.
    pub async fn delete(&self, face_list_id: &str) -> Result<()> {
        self.ops.delete(face_list_id).await
    }

    /// Add a face from an image URL to the list.
    pub async fn add_face_from_url(
        &self,
        face_list_id: &str,
        url: &str,
        options: Option<AddFaceOptions>,
    ) -> Result<()> {
        self.ops.add_face_from_url(face_list_id, url, options).await
    }

    /// Add a face from raw image bytes to the list.
    pub async fn add_face_from_stream(
        &self,
        face_list_id: &str,
        image: Vec<u8>,
        options: Option<AddFaceOptions>,
    ) -> Result<()> {
        self.ops
            .add_face_from_stream(face_list_id, image, options)
            .await
    }

    /// Delete a persisted face from the list.
    pub async fn delete_face(&self, face_list_id: &str, persisted_face_id: &str) -> Result<()> {
        self.ops.delete_face(face_list_id, persisted_face_id).await
    }
}
