/// Options for the `detect` operations.
///
/// Every field is always sent on the wire; the defaults mirror the
/// service's documented defaults.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Detection model name. Default: `detection_01`.
    pub detection_model: String,

    /// Seconds the returned `faceId` stays cached server-side. Default: 86400.
    pub face_id_time_to_live: u32,

    /// Recognition model name. Default: `recognition_01`.
    pub recognition_model: String,

    /// Comma-separated attribute names to analyze (e.g. `"age,glasses"`).
    /// Empty requests none.
    pub return_face_attributes: String,

    /// Return `faceId`s of detected faces. Default: true.
    pub return_face_id: bool,

    /// Return landmarks of detected faces. Default: false.
    pub return_face_landmarks: bool,

    /// Include `recognitionModel` in the response. Default: false.
    pub return_recognition_model: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            detection_model: "detection_01".to_string(),
            face_id_time_to_live: 86400,
            recognition_model: "recognition_01".to_string(),
            return_face_attributes: String::new(),
            return_face_id: true,
            return_face_landmarks: false,
            return_recognition_model: false,
        }
    }
}

/// Options for the `findsimilars` operations.
#[derive(Debug, Clone)]
pub struct FindSimilarOptions {
    /// Maximum number of candidates returned. Default: 20.
    pub max_candidates: u32,

    /// `"matchPerson"` (same-person filter) or `"matchFace"`. Default:
    /// `"matchPerson"`.
    pub mode: String,
}

impl Default for FindSimilarOptions {
    fn default() -> Self {
        Self {
            max_candidates: 20,
            mode: "matchPerson".to_string(),
        }
    }
}

/// Options for adding a persisted face to a (large) face list.
///
/// Absent fields are omitted from the request entirely.
#[derive(Debug, Clone, Default)]
pub struct AddFaceOptions {
    /// User-specified data attached to the face.
    pub user_data: Option<String>,

    /// Target face rectangle, `"left,top,width,height"`. Required when the
    /// image holds more than one face.
    pub target_face: Option<String>,

    /// Detection model name.
    pub detection_model: Option<String>,
}
