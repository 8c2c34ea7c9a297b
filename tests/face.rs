use azure_face::{Client, DetectOptions, Error, FindSimilarOptions};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new(server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn detect_with_url_sends_documented_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/face/v1.0/detect"))
        .and(query_param("detectionModel", "detection_01"))
        .and(query_param("faceIdTimeToLive", "86400"))
        .and(query_param("recognitionModel", "recognition_01"))
        .and(query_param("returnFaceAttributes", ""))
        .and(query_param("returnFaceId", "true"))
        .and(query_param("returnFaceLandmarks", "false"))
        .and(query_param("returnRecognitionModel", "false"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "http://img" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "faceId": "abc" }])))
        .expect(1)
        .mount(&server)
        .await;

    let faces = client_for(&server)
        .face()
        .detect_with_url("http://img", None)
        .await
        .unwrap();

    assert_eq!(faces, json!([{ "faceId": "abc" }]));
}

#[tokio::test]
async fn detect_with_url_sends_custom_options() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/face/v1.0/detect"))
        .and(query_param("detectionModel", "detection_03"))
        .and(query_param("faceIdTimeToLive", "60"))
        .and(query_param("recognitionModel", "recognition_04"))
        .and(query_param("returnFaceAttributes", "age,glasses"))
        .and(query_param("returnFaceId", "false"))
        .and(query_param("returnFaceLandmarks", "true"))
        .and(query_param("returnRecognitionModel", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let options = DetectOptions {
        detection_model: "detection_03".into(),
        face_id_time_to_live: 60,
        recognition_model: "recognition_04".into(),
        return_face_attributes: "age,glasses".into(),
        return_face_id: false,
        return_face_landmarks: true,
        return_recognition_model: true,
    };

    client_for(&server)
        .face()
        .detect_with_url("http://img", Some(options))
        .await
        .unwrap();
}

#[tokio::test]
async fn detect_with_stream_posts_raw_bytes() {
    let server = MockServer::start().await;
    let image = b"fake image bytes".to_vec();

    Mock::given(method("POST"))
        .and(path("/face/v1.0/detect"))
        .and(query_param("detectionModel", "detection_01"))
        .and(header("content-type", "application/octet-stream"))
        .and(body_string("fake image bytes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .face()
        .detect_with_stream(image, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn detect_with_file_reads_and_posts_the_file() {
    let server = MockServer::start().await;
    let image = b"fake png bytes".to_vec();

    let file = std::env::temp_dir().join("azure-face-detect-test.png");
    std::fs::write(&file, &image).unwrap();

    Mock::given(method("POST"))
        .and(path("/face/v1.0/detect"))
        .and(header("content-type", "application/octet-stream"))
        .and(body_string("fake png bytes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .face()
        .detect_with_file(&file, None)
        .await
        .unwrap();

    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn detect_with_file_surfaces_missing_file_as_io() {
    let server = MockServer::start().await;

    let missing = std::env::temp_dir().join("azure-face-no-such-file.png");
    match client_for(&server)
        .face()
        .detect_with_file(&missing, None)
        .await
    {
        Err(Error::Io(_)) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[tokio::test]
async fn find_similar_in_face_list_sends_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/face/v1.0/findsimilars"))
        .and(body_json(json!({
            "faceId": "F1",
            "faceListId": "L1",
            "maxNumOfCandidatesReturned": 20,
            "mode": "matchPerson",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "persistedFaceId": "P1", "confidence": 0.9 }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let similar = client_for(&server)
        .face()
        .find_similar_in_face_list("F1", "L1", None)
        .await
        .unwrap();

    assert_eq!(similar[0]["persistedFaceId"], "P1");
}

#[tokio::test]
async fn find_similar_in_large_face_list_names_the_large_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/face/v1.0/findsimilars"))
        .and(body_json(json!({
            "faceId": "F1",
            "largeFaceListId": "L1",
            "maxNumOfCandidatesReturned": 5,
            "mode": "matchFace",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let options = FindSimilarOptions {
        max_candidates: 5,
        mode: "matchFace".into(),
    };

    client_for(&server)
        .face()
        .find_similar_in_large_face_list("F1", "L1", Some(options))
        .await
        .unwrap();
}

#[tokio::test]
async fn find_similar_in_face_ids_sends_the_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/face/v1.0/findsimilars"))
        .and(body_json(json!({
            "faceId": "F1",
            "faceIds": ["F2", "F3"],
            "maxNumOfCandidatesReturned": 20,
            "mode": "matchPerson",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .face()
        .find_similar_in_face_ids("F1", &["F2", "F3"], None)
        .await
        .unwrap();
}

#[tokio::test]
async fn group_round_trips_the_response() {
    let server = MockServer::start().await;
    let body = json!({ "groups": [["F1", "F2"]], "messyGroup": ["F3"] });

    Mock::given(method("POST"))
        .and(path("/face/v1.0/group"))
        .and(body_json(json!({ "faceIds": ["F1", "F2", "F3"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let groups = client_for(&server)
        .face()
        .group(&["F1", "F2", "F3"])
        .await
        .unwrap();

    assert_eq!(groups, body);
}

#[tokio::test]
async fn structured_error_body_becomes_a_typed_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/face/v1.0/detect"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": { "code": "InvalidRequest", "message": "bad" } })),
        )
        .mount(&server)
        .await;

    match client_for(&server).face().detect_with_url("x", None).await {
        Err(Error::Api {
            code,
            message,
            http_status,
        }) => {
            assert_eq!(code, "InvalidRequest");
            assert_eq!(message, "bad");
            assert_eq!(http_status, 400);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_success_body_surfaces_as_decode() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/face/v1.0/detect"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    match client_for(&server).face().detect_with_url("x", None).await {
        Err(Error::Decode(_)) => {}
        other => panic!("expected Decode error, got {other:?}"),
    }
}
