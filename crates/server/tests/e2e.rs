use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes, startup};

struct TestApp {
    base_url: String,
}

fn config() -> AppConfig {
    let mut cfg = AppConfig::default();
    let dir = std::env::temp_dir().join(format!("server-e2e-{}", Uuid::new_v4()));
    cfg.database.url = format!("sqlite://{}?mode=rwc", dir.join("data").join("logs.db").display());
    cfg
}

async fn start_server(cfg: &AppConfig) -> anyhow::Result<TestApp> {
    // creates the data dir and the table, as on a real startup
    let state = startup::prepare_state(cfg).await?;
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_example_scenarios() -> anyhow::Result<()> {
    let app = start_server(&config()).await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/log", app.base_url))
        .json(&json!({"method": "GET", "status": "200", "content_type": "application/json"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Log entry created"}));

    let res = c.get(format!("{}/logs", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([[1, "GET", "200", "application/json"]]));

    let res = c.post(format!("{}/log", app.base_url))
        .json(&json!({"method": "POST", "status": "404"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let logs = c.get(format!("{}/logs", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(logs, json!([[1, "GET", "200", "application/json"], [2, "POST", "404", null]]));
    Ok(())
}

#[tokio::test]
async fn e2e_restart_keeps_rows() -> anyhow::Result<()> {
    let cfg = config();
    let first = start_server(&cfg).await?;
    let c = reqwest::Client::new();
    let res = c.post(format!("{}/log", first.base_url))
        .json(&json!({"method": "PUT", "status": "500", "content_type": "text/plain"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    // second instance over the same file re-runs initialization
    let second = start_server(&cfg).await?;
    let logs = c.get(format!("{}/logs", second.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(logs, json!([[1, "PUT", "500", "text/plain"]]));
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_creates_get_unique_ids() -> anyhow::Result<()> {
    let app = start_server(&config()).await?;
    let c = reqwest::Client::new();

    let mut handles = vec![];
    for i in 0..8 {
        let c = c.clone();
        let url = format!("{}/log", app.base_url);
        handles.push(tokio::spawn(async move {
            c.post(url)
                .json(&json!({"method": "GET", "status": format!("{}", 200 + i)}))
                .send()
                .await
                .map(|r| r.status())
        }));
    }
    for h in handles {
        assert_eq!(h.await??, HttpStatusCode::CREATED);
    }

    let logs = c.get(format!("{}/logs", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    let ids: Vec<i64> = logs.iter().map(|row| row[0].as_i64().unwrap()).collect();
    assert_eq!(ids, (1..=8).collect::<Vec<i64>>());
    Ok(())
}

#[tokio::test]
async fn e2e_missing_method_rejected() -> anyhow::Result<()> {
    let app = start_server(&config()).await?;
    let c = reqwest::Client::new();
    let res = c.post(format!("{}/log", app.base_url))
        .json(&json!({"status": "200"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "method is required");

    let logs = c.get(format!("{}/logs", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(logs, json!([]));
    Ok(())
}
