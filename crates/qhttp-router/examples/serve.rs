//! Serves a small route table over HTTP/1.1 with hyper.
//!
//! Run with `cargo run -p qhttp-router --example serve`, then try
//! `curl -i localhost:3000/status/check`.

use std::convert::Infallible;
use std::net::SocketAddr;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request as HyperRequest, Response as HyperResponse, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};

use qhttp_router::{Dispatcher, Request, Response, Router};

fn build_router() -> qhttp_router::Result<Dispatcher> {
    Ok(Router::new()
        .get("/", |_| async { Response::text("qhttp example server") })?
        .get("/status", |_| async { Response::text("up") })?
        .get("/status/check", |_| async {
            Response::json(&serde_json::json!({"router": "ok"}))
        })?
        .post("/echo", |req: Request| async move {
            Response::ok()
                .header(
                    "Content-Type",
                    req.get_header("content-type").unwrap_or("application/octet-stream"),
                )
                .body(req.body)
        })?
        .build())
}

async fn handle_request(
    req: HyperRequest<hyper::body::Incoming>,
    dispatcher: Dispatcher,
) -> Result<HyperResponse<Full<Bytes>>, Infallible> {
    let uri = req.uri();
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);

    let mut qreq = Request::new(req.method().as_str(), &target);
    for (key, value) in req.headers() {
        if let Ok(v) = value.to_str() {
            qreq.headers.insert(key.to_string(), v.to_string());
        }
    }
    qreq.body = req
        .collect()
        .await
        .map(|b| b.to_bytes().to_vec())
        .unwrap_or_default();

    let res = dispatcher.dispatch(qreq).await;

    let mut builder = HyperResponse::builder().status(
        StatusCode::from_u16(res.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    );
    for (key, value) in &res.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    let response = builder
        .body(Full::new(Bytes::from(res.body)))
        .unwrap_or_else(|_| {
            let mut fallback = HyperResponse::new(Full::new(Bytes::new()));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        });

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();

    let addr: SocketAddr = ([127, 0, 0, 1], 3000).into();
    let dispatcher = build_router()?;

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, routes = dispatcher.len(), "listening");

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let dispatcher = dispatcher.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| handle_request(req, dispatcher.clone()));

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!(?err, "error serving connection");
            }
        });
    }
}
