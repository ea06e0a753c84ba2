//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::io::{Cursor, Read};
use std::net::SocketAddr;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use tms::export::{Exporter, DOCUMENT_PART};
use tms::http_server::{HttpServer, TestCaseState};
use tms::store::TestCaseStore;

/// Router backed by a fresh in-memory store, exporting into `export_dir`
pub async fn app(export_dir: &Path) -> (Router, TestCaseStore) {
    let store = TestCaseStore::open_in_memory().await.unwrap();
    let state = TestCaseState::new(store.clone(), Exporter::new(export_dir));
    let router = HttpServer::new(SocketAddr::from(([127, 0, 0, 1], 0)), state).router();
    (router, store)
}

/// Send one request and return status plus raw body
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send_raw(app, "GET", uri, None, String::new()).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, body) =
        send_raw(app, "POST", uri, Some("application/json"), body.to_string()).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// Read `word/document.xml` out of an exported package
pub fn document_xml(path: &Path) -> String {
    let bytes = std::fs::read(path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

/// Table rows of an exported document as cell texts
pub fn table_rows(xml: &str) -> Vec<Vec<String>> {
    let table = match xml.split_once("<w:tbl>") {
        Some((_, rest)) => rest,
        None => return Vec::new(),
    };

    table
        .split("<w:tr>")
        .skip(1)
        .map(|row| {
            row.split("<w:tc>")
                .skip(1)
                .map(cell_text)
                .collect()
        })
        .collect()
}

fn cell_text(cell: &str) -> String {
    let cell = cell.split("</w:tc>").next().unwrap_or("");
    let mut text = String::new();
    for piece in cell.split("<w:t xml:space=\"preserve\">").skip(1) {
        text.push_str(piece.split("</w:t>").next().unwrap_or(""));
    }
    text
}
