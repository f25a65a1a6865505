// src/browser/webdriver.rs
// Minimal W3C WebDriver client: one session, JSON over HTTP.
//
// The session is deleted in `Drop`, so every exit path (normal return, `?`,
// panic unwinding) releases the browser process.

use std::time::Duration;

use serde_json::{json, Value};

use super::Browser;
use crate::config::consts::BROWSER_USER_AGENT;
use crate::config::Settings;
use crate::core::net;
use crate::error::{Result, ScrapeError};

/// W3C element reference key.
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";
const NO_SUCH_ELEMENT: &str = "no such element";
const COMMAND_TIMEOUT: Duration = Duration::from_secs(120);

pub struct WebDriverSession {
    agent: ureq::Agent,
    base_url: String,
    session_id: String,
    closed: bool,
}

impl WebDriverSession {
    /// Open a Chrome session on the configured endpoint.
    pub fn start(settings: &Settings) -> Result<Self> {
        let agent = net::agent_with(BROWSER_USER_AGENT, COMMAND_TIMEOUT);
        let base_url = settings.webdriver_url.trim_end_matches('/').to_string();

        let value = send(&agent, "POST", &join!(&base_url, "/session"), Some(capabilities(settings)))?;
        let session_id = value
            .get("sessionId")
            .and_then(Value::as_str)
            .ok_or_else(|| ScrapeError::Parse(s!("new session response without sessionId")))?
            .to_string();

        logf!("WebDriver session {} started on {}", session_id, base_url);
        Ok(Self { agent, base_url, session_id, closed: false })
    }

    /// Close the session now and surface any error. `Drop` does the same silently.
    pub fn quit(mut self) -> Result<()> {
        self.close()
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        logf!("Closing WebDriver session {}", self.session_id);
        send(&self.agent, "DELETE", &self.url(""), None).map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        join!(&self.base_url, "/session/", &self.session_id, path)
    }

    fn command(&self, method: &str, path: &str, body: Option<Value>) -> Result<Value> {
        send(&self.agent, method, &self.url(path), body)
    }

    fn execute(&self, script: &str) -> Result<Value> {
        self.command("POST", "/execute/sync", Some(json!({ "script": script, "args": [] })))
    }
}

impl Drop for WebDriverSession {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            logw!("WebDriver session {} did not close cleanly: {}", self.session_id, e);
        }
    }
}

impl Browser for WebDriverSession {
    fn goto(&mut self, url: &str) -> Result<()> {
        self.command("POST", "/url", Some(json!({ "url": url }))).map(|_| ())
    }

    fn click_first(&mut self, css: &str) -> Result<bool> {
        let found = self.command("POST", "/element", Some(json!({ "using": "css selector", "value": css })));
        let element = match found {
            Ok(v) => v,
            Err(ScrapeError::WebDriver { kind, .. }) if kind == NO_SUCH_ELEMENT => return Ok(false),
            Err(e) => return Err(e),
        };
        let id = element
            .get(ELEMENT_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| ScrapeError::Parse(s!("element response without reference")))?;
        self.command("POST", &join!("/element/", id, "/click"), Some(json!({})))?;
        Ok(true)
    }

    fn scroll_height(&mut self) -> Result<u64> {
        let v = self.execute("return document.body.scrollHeight")?;
        v.as_u64()
            .or_else(|| v.as_f64().map(|f| f.max(0.0) as u64))
            .ok_or_else(|| ScrapeError::Parse(format!("scrollHeight was {v}")))
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.execute("window.scrollTo(0, document.body.scrollHeight);").map(|_| ())
    }

    fn page_source(&mut self) -> Result<String> {
        match self.command("GET", "/source", None)? {
            Value::String(s) => Ok(s),
            other => Err(ScrapeError::Parse(format!("page source was {other}"))),
        }
    }
}

fn capabilities(settings: &Settings) -> Value {
    let mut args = vec![
        s!("--no-sandbox"),
        s!("--disable-dev-shm-usage"),
        join!("user-agent=", BROWSER_USER_AGENT),
    ];
    if settings.headless {
        args.push(s!("--headless=new"));
    }
    json!({
        "capabilities": {
            "alwaysMatch": {
                "browserName": "chrome",
                "goog:chromeOptions": { "args": args }
            }
        }
    })
}

/// Issue one command and unwrap the `value` envelope.
/// WebDriver reports failures as non-2xx with `{"value": {"error", "message"}}`.
fn send(agent: &ureq::Agent, method: &str, url: &str, body: Option<Value>) -> Result<Value> {
    let req = agent.request(method, url);
    let sent = match body {
        Some(b) => req.send_json(b),
        None => req.call(),
    };
    let resp = match sent {
        Ok(r) => r,
        Err(ureq::Error::Status(_, r)) => r,
        Err(e) => return Err(e.into()),
    };
    let mut envelope: Value = resp.into_json()?;
    unwrap_value(&mut envelope)
}

fn unwrap_value(envelope: &mut Value) -> Result<Value> {
    let value = envelope.get_mut("value").map(Value::take).unwrap_or(Value::Null);
    if let Some(kind) = value.get("error").and_then(Value::as_str) {
        let message = value.get("message").and_then(Value::as_str).unwrap_or_default();
        return Err(ScrapeError::WebDriver { kind: s!(kind), message: s!(message) });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// One-connection-per-request chromedriver stand-in. Records "METHOD path"
    /// for each request and stops after the session is deleted.
    fn fake_driver() -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for stream in listener.incoming() {
                let mut stream = stream.unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let mut parts = line.split_whitespace();
                let req = format!("{} {}", parts.next().unwrap(), parts.next().unwrap());

                let mut len = 0;
                loop {
                    let mut header = String::new();
                    reader.read_line(&mut header).unwrap();
                    let header = header.trim_end();
                    if header.is_empty() {
                        break;
                    }
                    if let Some((k, v)) = header.split_once(':') {
                        if k.eq_ignore_ascii_case("content-length") {
                            len = v.trim().parse().unwrap();
                        }
                    }
                }
                let mut body = vec![0; len];
                reader.read_exact(&mut body).unwrap();

                let reply = if req == "POST /session" {
                    r#"{"value":{"sessionId":"s1","capabilities":{}}}"#
                } else {
                    r#"{"value":null}"#
                };
                write!(
                    stream,
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.len(),
                    reply
                )
                .unwrap();

                let done = req.starts_with("DELETE");
                seen.push(req);
                if done {
                    break;
                }
            }
            seen
        });
        (url, handle)
    }

    #[test]
    fn session_is_deleted_on_drop() {
        let (url, server) = fake_driver();
        {
            let settings = Settings { webdriver_url: url, headless: false };
            let mut session = WebDriverSession::start(&settings).unwrap();
            session.goto("https://steamcommunity.com/app/1/allnews/").unwrap();
        }
        assert_eq!(server.join().unwrap(), ["POST /session", "POST /session/s1/url", "DELETE /session/s1"]);
    }

    #[test]
    fn envelope_value_is_unwrapped() {
        let mut env = json!({ "value": { "sessionId": "abc", "capabilities": {} } });
        let v = unwrap_value(&mut env).unwrap();
        assert_eq!(v["sessionId"], "abc");
    }

    #[test]
    fn envelope_error_becomes_webdriver_error() {
        let mut env = json!({ "value": { "error": "no such element", "message": "nope", "stacktrace": "" } });
        match unwrap_value(&mut env) {
            Err(ScrapeError::WebDriver { kind, message }) => {
                assert_eq!(kind, NO_SUCH_ELEMENT);
                assert_eq!(message, "nope");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn null_value_is_ok() {
        let mut env = json!({ "value": null });
        assert_eq!(unwrap_value(&mut env).unwrap(), Value::Null);
    }

    #[test]
    fn headless_flag_adds_arg() {
        let settings = Settings { headless: true, ..Settings::default() };
        let caps = capabilities(&settings);
        let args = caps["capabilities"]["alwaysMatch"]["goog:chromeOptions"]["args"].as_array().unwrap();
        assert!(args.iter().any(|a| a == "--headless=new"));
        assert!(args.iter().any(|a| a.as_str().unwrap().starts_with("user-agent=")));
    }
}
