use reqwest::Method;
use serde_json::{json, Value};

use crate::errors::Result;
use crate::models::AddFaceOptions;
use crate::resources::face_list::DEFAULT_TOP;
use crate::resources::{ListOps, Query};
use crate::transport::{Payload, Transport};

/// Large face list management.
///
/// Same contract as [`FaceList`](crate::FaceList) under the
/// `largefacelists` path, at higher scale, plus per-face reads/updates and
/// the asynchronous training endpoints. Similarity search against a large
/// face list only works after [`train`](Self::train) has completed; check
/// progress with [`get_training_status`](Self::get_training_status) — this
/// client does not poll on its own.
///
/// See <https://learn.microsoft.com/rest/api/faceapi/large-face-list>.
pub struct LargeFaceList<'a> {
    ops: ListOps<'a>,
}

impl<'a> LargeFaceList<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            ops: ListOps::new(transport, "largefacelists"),
        }
    }

    /// Create an empty large face list with a user-defined name.
    pub async fn create(
        &self,
        large_face_list_id: &str,
        name: &str,
        recognition_model: Option<&str>,
        user_data: Option<&str>,
    ) -> Result<()> {
        self.ops
            .create(large_face_list_id, name, recognition_model, user_data)
            .await
    }

    /// Retrieve a large face list's id, name, userData, and recognition model.
    pub async fn get(
        &self,
        large_face_list_id: &str,
        return_recognition_model: bool,
    ) -> Result<Value> {
        self.ops
            .get(large_face_list_id, return_recognition_model)
            .await
    }

    /// List large face lists, starting after `start`, up to `top` entries
    /// (defaults to 1000 when `None`).
    pub async fn all(
        &self,
        start: Option<&str>,
        top: Option<u32>,
        return_recognition_model: bool,
    ) -> Result<Value> {
        self.ops.all(start, top, return_recognition_model).await
    }

    /// Update a large face list's name and, optionally, userData.
    pub async fn update(
        &self,
        large_face_list_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        self.ops.update(large_face_list_id, name, user_data).await
    }

    /// Delete a large face list and all the faces in it.
    pub async fn delete(&self, large_face_list_id: &str) -> Result<()> {
        self.ops.delete(large_face_list_id).await
    }

    /// Add a face from an image URL to the list.
    pub async fn add_face_from_url(
        &self,
        large_face_list_id: &str,
        url: &str,
        options: Option<AddFaceOptions>,
    ) -> Result<()> {
        self.ops
            .add_face_from_url(large_face_list_id, url, options)
            .await
    }

    /// Add a face from raw image bytes to the list.
    pub async fn add_face_from_stream(
        &self,
        large_face_list_id: &str,
        image: Vec<u8>,
        options: Option<AddFaceOptions>,
    ) -> Result<()> {
        self.ops
            .add_face_from_stream(large_face_list_id, image, options)
            .await
    }

    /// Delete a persisted face from the list.
    pub async fn delete_face(
        &self,
        large_face_list_id: &str,
        persisted_face_id: &str,
    ) -> Result<()> {
        self.ops
            .delete_face(large_face_list_id, persisted_face_id)
            .await
    }

    /// Update a persisted face's userData field.
    pub async fn update_face(
        &self,
        large_face_list_id: &str,
        persisted_face_id: &str,
        user_data: &str,
    ) -> Result<()> {
        self.ops
            .transport
            .send_unit(
                Method::PATCH,
                &format!(
                    "{}/{large_face_list_id}/persistedfaces/{persisted_face_id}",
                    self.ops.prefix
                ),
                &[],
                Payload::Json(json!({ "userData": user_data })),
            )
            .await
    }

    /// Retrieve a persisted face's information.
    pub async fn get_face(
        &self,
        large_face_list_id: &str,
        persisted_face_id: &str,
    ) -> Result<Value> {
        self.ops
            .transport
            .send_json(
                Method::GET,
                &format!(
                    "{}/{large_face_list_id}/persistedfaces/{persisted_face_id}",
                    self.ops.prefix
                ),
                &[],
                Payload::Empty,
            )
            .await
    }

    /// List faces in the list, starting after `start`, up to `top` entries
    /// (defaults to 1000 when `None`).
    pub async fn list_faces(
        &self,
        large_face_list_id: &str,
        start: Option<&str>,
        top: Option<u32>,
    ) -> Result<Value> {
        let query = Query::new()
            .push("top", top.unwrap_or(DEFAULT_TOP))
            .push_opt("start", start);

        self.ops
            .transport
            .send_json(
                Method::GET,
                &format!("{}/{large_face_list_id}/persistedfaces", self.ops.prefix),
                query.pairs(),
                Payload::Empty,
            )
            .await
    }

    /// Queue server-side training of the list.
    ///
    /// Training is asynchronous; poll [`get_training_status`](Self::get_training_status)
    /// to learn when the list becomes searchable.
    pub async fn train(&self, large_face_list_id: &str) -> Result<()> {
        self.ops
            .transport
            .send_unit(
                Method::POST,
                &format!("{}/{large_face_list_id}/train", self.ops.prefix),
                &[],
                Payload::Empty,
            )
            .await
    }

    /// Retrieve the training status of the list (completed or ongoing).
    pub async fn get_training_status(&self, large_face_list_id: &str) -> Result<Value> {
        self.ops
            .transport
            .send_json(
                Method::GET,
                &format!("{}/{large_face_list_id}/training", self.ops.prefix),
                &[],
                Payload::Empty,
            )
            .await
    }
}
