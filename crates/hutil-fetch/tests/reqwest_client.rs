#![cfg(feature = "reqwest")]

use hutil_fetch::{FetchError, Fetcher, ReqwestClient};
use tempfile::tempdir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn streams_into_directory_with_disposition() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/1"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-disposition", r#"attachment; filename="data.csv""#)
                .set_body_bytes(b"a,b\n1,2\n".to_vec()),
        )
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let fetcher = Fetcher::new(ReqwestClient::new().unwrap());
    let url = format!("{}/files/1", server.uri());

    let dest = fetcher
        .download(&url, dir.path(), &[("Authorization".into(), "Bearer abc".into())])
        .await
        .unwrap();

    assert_eq!(dest, dir.path().join("data.csv"));
    assert_eq!(std::fs::read_to_string(dest).unwrap(), "a,b\n1,2\n");
}

#[tokio::test]
async fn http_error_status_leaves_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let fetcher = Fetcher::new(ReqwestClient::new().unwrap());

    let err = fetcher
        .download(&format!("{}/boom", server.uri()), dir.path().join("x.bin"), &[])
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn utf8_disposition_filename_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-disposition", r#"attachment; filename="报告.pdf""#)
                .set_body_bytes(b"%PDF".to_vec()),
        )
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let fetcher = Fetcher::new(ReqwestClient::new().unwrap());

    let dest = fetcher
        .download(&format!("{}/f", server.uri()), dir.path(), &[])
        .await
        .unwrap();

    assert_eq!(dest, dir.path().join("报告.pdf"));
    assert_eq!(std::fs::read(dest).unwrap(), b"%PDF");
}
