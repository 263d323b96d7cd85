use feedback_uploader::upload::selection::resolve_paths;
use feedback_uploader::upload::{HttpEndpoint, ProgressFn, SelectedFile, UploadEndpoint, UploadedFile};
use feedback_uploader::{Config, UploadError};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

// minimal HTTP responder: reads one whole request, answers, closes
async fn respond_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}/upload", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let body = &buf[header_end + 4..];

    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok());
    if let Some(length) = content_length {
        return body.len() >= length;
    }

    let boundary = headers
        .lines()
        .find_map(|line| line.split("boundary=").nth(1))
        .map(|b| format!("--{}--", b.trim()));
    match boundary {
        Some(end) => String::from_utf8_lossy(body).contains(&end),
        None => false,
    }
}

fn recorder() -> (Arc<Mutex<Vec<(u64, u64)>>>, ProgressFn) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let on_progress: ProgressFn = Arc::new(move |loaded: u64, total: u64| {
        sink.lock().unwrap().push((loaded, total));
    });
    (seen, on_progress)
}

fn endpoint_for(url: String) -> HttpEndpoint {
    let config = Config {
        upload_url: url,
        chunk_size: 4,
        ..Config::default()
    };
    HttpEndpoint::new(&config).unwrap()
}

fn write_file(dir: &Path, name: &str, contents: &[u8]) -> SelectedFile {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    resolve_paths(Some(vec![path])).unwrap().remove(0)
}

#[tokio::test]
async fn test_upload_streams_file_and_returns_receipts() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "notes.txt", b"great product, slow support");
    let total = file.size;

    let (url, server) =
        respond_once("200 OK", r#"[{"filename":"notes.txt","status":"uploaded"}]"#).await;
    let (seen, on_progress) = recorder();

    let receipts = endpoint_for(url).upload(&file, on_progress).await.unwrap();
    assert_eq!(
        receipts,
        vec![UploadedFile {
            filename: "notes.txt".to_string(),
            status: "uploaded".to_string(),
        }]
    );

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.first(), Some(&(0, total)));
    assert_eq!(seen.last(), Some(&(total, total)));
    assert!(seen.len() >= 2);
    assert!(seen.windows(2).all(|w| w[0].0 <= w[1].0));
    assert!(seen.iter().all(|(_, t)| *t == total));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /upload"));
    assert!(request.contains(r#"name="files""#));
    assert!(request.contains(r#"filename="notes.txt""#));
    assert!(request.contains("great product, slow support"));
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "report.json", b"{\"feedback\":\"meh\"}");

    let (url, server) = respond_once("500 Internal Server Error", "boom").await;
    let (_, on_progress) = recorder();

    let err = endpoint_for(url).upload(&file, on_progress).await.unwrap_err();
    match err {
        UploadError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_unparsable_success_body_means_no_receipts() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a.txt", b"hello");

    let (url, server) = respond_once("200 OK", "ok").await;
    let (_, on_progress) = recorder();

    let receipts = endpoint_for(url).upload(&file, on_progress).await.unwrap();
    assert!(receipts.is_empty());
    server.await.unwrap();
}

#[tokio::test]
async fn test_empty_file_reports_zero_total() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "empty.txt", b"");

    let (url, server) = respond_once("200 OK", "[]").await;
    let (seen, on_progress) = recorder();

    let receipts = endpoint_for(url).upload(&file, on_progress).await.unwrap();
    assert!(receipts.is_empty());
    assert_eq!(*seen.lock().unwrap(), vec![(0, 0)]);

    let request = server.await.unwrap();
    assert!(request.contains(r#"filename="empty.txt""#));
}

#[tokio::test]
async fn test_missing_file_fails_before_sending() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "gone.txt", b"x");
    std::fs::remove_file(&file.path).unwrap();

    let (_, on_progress) = recorder();
    let err = endpoint_for("http://127.0.0.1:9/upload".to_string())
        .upload(&file, on_progress)
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::Io(_)));
}
