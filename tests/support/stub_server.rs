use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Request line plus body captured by the stub.
#[derive(Debug)]
pub struct CapturedRequest {
    pub request_line: String,
    pub body: String,
}

/// Serve one canned response per connection, in order, then stop.
pub fn serve(responses: Vec<String>) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub address");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                break;
            };
            let request = read_request(&mut stream);
            let _ = stream.write_all(response.as_bytes());
            let _ = tx.send(request);
        }
    });
    (format!("http://{addr}"), rx)
}

pub fn json_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let mut body_start = None;
    let mut content_length = 0usize;
    loop {
        let Ok(read) = stream.read(&mut buf) else {
            break;
        };
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buf[..read]);
        if body_start.is_none()
            && let Some(end) = find_header_end(&data)
        {
            body_start = Some(end);
            content_length = parse_content_length(&String::from_utf8_lossy(&data[..end]));
        }
        if let Some(start) = body_start
            && data.len() >= start + content_length
        {
            break;
        }
    }
    let text = String::from_utf8_lossy(&data).into_owned();
    let request_line = text.lines().next().unwrap_or_default().to_string();
    let body = body_start
        .map(|start| String::from_utf8_lossy(&data[start..]).into_owned())
        .unwrap_or_default();
    CapturedRequest { request_line, body }
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

fn parse_content_length(headers: &str) -> usize {
    headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
