//! Browser-backed viewer.
//!
//! The first `show` binds a synchronous tiny_http server on
//! `ViewerConfig::addr`; later calls reuse it, since tiny_http does not
//! release its listener synchronously on drop. Each `show` points the system
//! browser at the server and serves the current figure until the page's
//! Close button posts to `/close`.
//!
//! Routes:
//!   GET  /             HTML page with the inline SVG
//!   GET  /figure.svg   the SVG document
//!   GET  /figure.json  the figure description
//!   POST /close        dismisses the figure

use std::io::Cursor;

use log::{debug, info, warn};
use tiny_http::{Header, Method, Response, Server, StatusCode};

use crate::error::{FigureError, Result};
use crate::figure::Figure;
use crate::render::to_svg;
use crate::viewer::page::{closed_page, render_page};
use crate::viewer::Viewer;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Socket address the figure server listens on.
    pub addr: String,
    /// Whether to launch the system browser on each figure.
    pub open_browser: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            addr: "127.0.0.1:7878".to_owned(),
            open_browser: true,
        }
    }
}

pub struct BrowserViewer {
    config: ViewerConfig,
    server: Option<Server>,
    shown: usize,
}

impl BrowserViewer {
    pub fn new(config: ViewerConfig) -> Self {
        BrowserViewer { config, server: None, shown: 0 }
    }

    /// Binds the server on first use and hands back the same one afterwards.
    fn server(&mut self) -> Result<&Server> {
        let server = match self.server.take() {
            Some(server) => server,
            None => {
                let server = Server::http(self.config.addr.as_str()).map_err(|e| {
                    FigureError::Bind { addr: self.config.addr.clone(), reason: e.to_string() }
                })?;
                debug!("listening on {}", self.config.addr);
                server
            }
        };
        Ok(&*self.server.insert(server))
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.config.addr)
    }
}

impl Viewer for BrowserViewer {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let index = self.shown + 1;
        let svg = to_svg(figure);
        let json = serde_json::to_string_pretty(figure)?;
        let page = render_page(&figure.title, &svg, index);

        let url = self.url();
        let open_browser = self.config.open_browser;
        let server = self.server()?;

        info!("figure {} \"{}\" at {}", index, figure.title, url);
        if open_browser {
            if let Err(e) = open::that(&url) {
                warn!("could not launch a browser ({e}); open {url} manually");
            }
        }

        for request in server.incoming_requests() {
            let method = request.method().clone();
            let path = request.url().split('?').next().unwrap_or("").to_owned();
            debug!("{} {}", method, path);

            let (response, close) = match (method, path.as_str()) {
                (Method::Get, "/") => (html_response(page.clone()), false),
                (Method::Get, "/figure.svg") => (svg_response(svg.clone()), false),
                (Method::Get, "/figure.json") => (json_response(json.clone()), false),
                (Method::Post, "/close") => (html_response(closed_page().to_owned()), true),
                _ => (not_found(), false),
            };

            if let Err(e) = request.respond(response) {
                warn!("failed to answer {}: {}", path, e);
            }
            if close {
                info!("figure {} closed", index);
                break;
            }
        }
        self.shown = index;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn respond_with(status: u16, content_type: &str, body: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = body.len();
    let headers: Vec<Header> = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes())
        .into_iter()
        .collect();
    Response::new(StatusCode(status), headers, Cursor::new(body), Some(len), None)
}

fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    respond_with(200, "text/html; charset=utf-8", body.into_bytes())
}

fn svg_response(body: String) -> Response<Cursor<Vec<u8>>> {
    respond_with(200, "image/svg+xml", body.into_bytes())
}

fn json_response(body: String) -> Response<Cursor<Vec<u8>>> {
    respond_with(200, "application/json", body.into_bytes())
}

fn not_found() -> Response<Cursor<Vec<u8>>> {
    respond_with(404, "text/plain", b"404 Not Found".to_vec())
}
