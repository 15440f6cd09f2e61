//! One-shot HTTP server for client tests

#![allow(dead_code)]

use std::sync::Once;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const SUCCESS_BODY: &str = r#"{
    "success": true,
    "scheme": "2022",
    "branch": "CS",
    "sgpa": "8.67",
    "subjects": [
        {"code": "BCS401", "name": "ANALYSIS & DESIGN OF ALGORITHMS", "internal": 45,
         "external": 36, "total": 81, "result": "P", "credits": 3, "grade": "A+",
         "grade_point": 9, "credit_points": 27},
        {"code": "BCS402", "name": "MICROCONTROLLERS", "internal": 20,
         "external": 10, "total": 30, "result": "F", "credits": 4, "grade": "F",
         "grade_point": 0, "credit_points": 0}
    ],
    "summary": {"total_subjects": 2, "passed_subjects": 1,
                "total_credits": 7, "total_credit_points": 27}
}"#;

static NO_PROXY: Once = Once::new();

/// Local test servers must not go through an ambient HTTP proxy
pub fn bypass_proxy() {
    NO_PROXY.call_once(|| std::env::set_var("NO_PROXY", "127.0.0.1,localhost"));
}

/// Serve one canned response; the handle yields the raw request text
pub async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    bypass_proxy();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        request
    });

    (format!("http://{}", addr), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// Minimal valid-looking PDF bytes
pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF\n".to_vec()
}
