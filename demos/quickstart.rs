//! Quick-start walkthrough for the Azure Face client.
//!
//! Run with:
//!   AZURE_FACE_ENDPOINT=https://<region>.api.cognitive.microsoft.com \
//!   AZURE_FACE_SUBSCRIPTION_KEY=... cargo run --example quickstart
//!
//! Or pass both settings directly in code (not recommended for production).

use azure_face::{ClientBuilder, DetectOptions, ResourceKind};

#[tokio::main]
async fn main() -> azure_face::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Create a client (reads AZURE_FACE_ENDPOINT / _SUBSCRIPTION_KEY)
    // -----------------------------------------------------------------------
    let client = ClientBuilder::new().build()?;

    // Or provide the settings directly:
    // let client = azure_face::Client::new("https://westeurope.api.cognitive.microsoft.com", "key")?;

    // -----------------------------------------------------------------------
    // 2. Detect faces in an image URL
    // -----------------------------------------------------------------------
    let faces = client
        .face()
        .detect_with_url("https://example.com/group-photo.jpg", None)
        .await?;

    println!("Detected {} face(s):", faces.as_array().map_or(0, Vec::len));
    for face in faces.as_array().into_iter().flatten() {
        println!("  {} at {}", face["faceId"], face["faceRectangle"]);
    }
    println!();

    // With attributes:
    let options = DetectOptions {
        return_face_attributes: "age,glasses".to_string(),
        ..Default::default()
    };
    let faces = client
        .face()
        .detect_with_file("portrait.jpg", Some(options))
        .await?;
    println!("Local file: {} face(s)", faces.as_array().map_or(0, Vec::len));
    println!();

    // -----------------------------------------------------------------------
    // 3. Build a face list and add faces to it
    // -----------------------------------------------------------------------
    let face_list = client.face_list();
    face_list
        .create("team", "Team members", None, Some("created by quickstart"))
        .await?;
    face_list
        .add_face_from_url("team", "https://example.com/alice.jpg", None)
        .await?;

    let lists = face_list.all(None, None, false).await?;
    println!("Face lists: {lists}");
    println!();

    // -----------------------------------------------------------------------
    // 4. Large face lists: add, train, check status, search
    // -----------------------------------------------------------------------
    let large = client.large_face_list();
    large.create("visitors", "All visitors", None, None).await?;
    large
        .add_face_from_url("visitors", "https://example.com/bob.jpg", None)
        .await?;

    // Training is asynchronous server-side; this client never polls for you.
    large.train("visitors").await?;
    let status = large.get_training_status("visitors").await?;
    println!("Training status: {}", status["status"]);

    if status["status"] == "succeeded" {
        let query_face = &faces[0]["faceId"];
        let similar = client
            .face()
            .find_similar_in_large_face_list(query_face.as_str().unwrap(), "visitors", None)
            .await?;
        println!("Similar faces: {similar}");
    }
    println!();

    // -----------------------------------------------------------------------
    // 5. Dispatch by logical resource name
    // -----------------------------------------------------------------------
    let kind: ResourceKind = "largeFaceList".parse()?;
    match client.resource(kind) {
        azure_face::Resource::LargeFaceList(resource) => {
            resource.delete("visitors").await?;
        }
        _ => unreachable!(),
    }
    client.face_list().delete("team").await?;

    Ok(())
}
