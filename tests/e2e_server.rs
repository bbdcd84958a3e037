//! Server end-to-end tests
//!
//! Runs the router on a real socket and talks to it over HTTP.

use smilseq::config::Config;
use smilseq::server::{create_router, AppContext};
use std::net::SocketAddr;
use tempfile::tempdir;

/// Start the router on a random port
async fn spawn_server(config: Config) -> SocketAddr {
    let app = create_router(AppContext::new(config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind random port");
    let addr = listener.local_addr().expect("failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    addr
}

#[tokio::test]
async fn test_get_and_post_over_http() {
    let temp = tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join("lists")).unwrap();
    std::fs::write(
        temp.path().join("lists/evening.smil"),
        r#"<smil><body><video src="file:a.mp4"/><video/><video src="b.mp4"/></body></smil>"#,
    )
    .unwrap();

    let addr = spawn_server(Config {
        host: "127.0.0.1".to_string(),
        root_dir: temp.path().to_path_buf(),
        ..Config::default()
    })
    .await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("http://{addr}/lists/evening.smil"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let json: serde_json::Value = resp.json().await.unwrap();
    let paths: Vec<_> = json["sequences"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["clips"][0]["path"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            temp.path().join("a.mp4").to_string_lossy().into_owned(),
            temp.path().join("b.mp4").to_string_lossy().into_owned(),
        ]
    );

    let resp = client
        .post(format!("http://{addr}/srv/evening.smil"))
        .body(r#"<smil><video src="file:a.mp4"/></smil>"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["sequences"][0]["clips"][0]["path"], "/srv/a.mp4");
}

#[tokio::test]
async fn test_status_codes_over_http() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("bad.smil"), "<smil><body>").unwrap();

    let addr = spawn_server(Config {
        root_dir: temp.path().to_path_buf(),
        ..Config::default()
    })
    .await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .get(format!("http://{addr}/nothing.smil"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .get(format!("http://{addr}/bad.smil"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);

    let resp = client
        .post(format!("http://{addr}/x/bad.smil"))
        .body("not xml")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);
}
