//! Dispatching requests through a built router.

mod common;
use common::*;

use qhttp_router::{method, Request, Response, Router, NOT_FOUND_BODY};

#[tokio::test]
async fn dispatch_invokes_matched_handler_with_request() {
    let dispatcher = Router::new()
        .post("/echo", |req: Request| async move {
            let who = req.get_query("who").unwrap_or("nobody").to_string();
            Response::text(format!("{who}:{}", req.body_string().unwrap_or_default()))
                .header("X-Seen-Header", req.get_header("x-token").unwrap_or(""))
        })
        .unwrap()
        .build();

    let req = Request::post("/echo?who=ada")
        .header("X-Token", "t0k")
        .body("hi");
    let res = dispatcher.dispatch(req).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body_string().as_deref(), Some("ada:hi"));
    assert_eq!(
        res.headers.get("X-Seen-Header").map(String::as_str),
        Some("t0k")
    );
}

#[tokio::test]
async fn dispatch_miss_returns_not_found() {
    let dispatcher = labelled(Router::new(), "/status", "H1").build();

    for (verb, target) in [
        (method::GET, "/status/other"),
        (method::POST, "/status"),
        (method::GET, "/status/"),
    ] {
        let res = dispatcher.dispatch(Request::new(verb, target)).await;
        assert_eq!(res.status, 404, "{verb} {target}");
        assert_eq!(res.body_string().as_deref(), Some(NOT_FOUND_BODY));
    }
}

#[tokio::test]
async fn query_string_does_not_affect_matching() {
    let dispatcher = labelled(Router::new(), "/search", "found").build();

    let res = dispatcher.dispatch(Request::get("/search?q=tree")).await;
    assert_eq!(res.body_string().as_deref(), Some("found"));
}

#[tokio::test]
async fn later_registration_wins() {
    let router = labelled(Router::new(), "/v", "first");
    let dispatcher = labelled(router, "/v", "second").build();

    let res = dispatcher.dispatch(Request::get("/v")).await;
    assert_eq!(res.body_string().as_deref(), Some("second"));
    assert_eq!(dispatcher.len(), 1);
}

#[tokio::test]
async fn clones_serve_concurrently() {
    let router = labelled(Router::new(), "/a", "A");
    let dispatcher = labelled(router, "/a/b", "B").build();

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let dispatcher = dispatcher.clone();
            tokio::spawn(async move {
                let (path, expected) = if i % 2 == 0 { ("/a", "A") } else { ("/a/b", "B") };
                let res = dispatcher.dispatch(Request::get(path)).await;
                assert_eq!(res.body_string().as_deref(), Some(expected));
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }
}

#[test]
fn routes_lists_the_tree() {
    let router = labelled(Router::new(), "/status", "H1");
    let dispatcher = labelled(router, "/status/check", "H2").build();

    let outline: Vec<_> = dispatcher
        .routes()
        .map(|e| (e.depth, e.segment.to_string(), e.methods.join(",")))
        .collect();
    assert_eq!(
        outline,
        [
            (0, "/".to_string(), String::new()),
            (1, "status".to_string(), "GET".to_string()),
            (2, "check".to_string(), "GET".to_string()),
        ]
    );
}
