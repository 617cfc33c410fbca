use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{http::StatusCode, routing::get, Json, Router, Server};
use serde_json::{json, Value};

use tarefa_client::{
    server::{connect, create_router, AppState},
    HttpTaskApi, Task, TaskApi, TaskListClient, TaskSchema,
};

async fn spawn(app: Router) -> SocketAddr {
    let server =
        Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(async move {
        server.await.ok();
    });
    addr
}

async fn backend() -> (String, Arc<AppState>) {
    let pool = connect("sqlite::memory:").await.unwrap();
    let state = Arc::new(AppState { db: pool });
    let addr = spawn(create_router(state.clone())).await;
    (format!("http://{addr}/tarefa"), state)
}

async fn seed(state: &AppState, description: &str, completed: bool) -> i64 {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO tarefa (description, completed) VALUES (?, ?) RETURNING id")
            .bind(description)
            .bind(completed)
            .fetch_one(&state.db)
            .await
            .unwrap();
    id
}

fn task(id: i64, description: &str, completed: bool) -> Task {
    Task {
        id,
        description: description.to_string(),
        completed,
    }
}

#[tokio::test]
async fn toggling_buy_milk_round_trips_through_backend() {
    let (url, state) = backend().await;
    let id = seed(&state, "Buy milk", false).await;
    let mut client = TaskListClient::new(HttpTaskApi::new(url));

    client.refresh().await;
    assert_eq!(client.tasks(), &[task(id, "Buy milk", false)]);

    let target = client.find(id).cloned().unwrap();
    client.toggle_completion(&target).await;

    assert_eq!(client.tasks(), &[task(id, "Buy milk", true)]);
}

#[tokio::test]
async fn add_edit_delete_flow() {
    let (url, _state) = backend().await;
    let mut client = TaskListClient::new(HttpTaskApi::new(url));

    client.set_input("Buy milk");
    client.submit().await.unwrap();
    client.set_input("Walk the dog");
    client.submit().await.unwrap();

    let descriptions: Vec<&str> = client
        .tasks()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["Buy milk", "Walk the dog"]);
    assert_eq!(client.input(), "");

    let first = client.tasks()[0].clone();
    client.begin_edit(&first);
    client.set_input("Buy oat milk");
    client.submit().await.unwrap();

    assert_eq!(client.editing(), None);
    assert_eq!(client.tasks()[0], task(first.id, "Buy oat milk", false));

    client.delete(first.id).await;
    assert_eq!(client.tasks().len(), 1);
    assert_eq!(client.tasks()[0].description, "Walk the dog");
}

#[tokio::test]
async fn writes_to_missing_task_are_not_errors() {
    let (url, _state) = backend().await;
    let api = HttpTaskApi::new(url);

    api.update(99, &TaskSchema::from_input("ghost")).await.unwrap();
    api.delete(99).await.unwrap();
    assert_eq!(api.list().await.unwrap(), json!([]));
}

#[tokio::test]
async fn non_array_listing_keeps_previous_tasks() {
    // First listing is a proper array, every later one an error object.
    let calls = Arc::new(AtomicUsize::new(0));
    let flaky = Router::new().route(
        "/tarefa",
        get(move || {
            let calls = calls.clone();
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    (
                        StatusCode::OK,
                        Json(json!([{"id": 1, "descricao": "Buy milk", "concluido": false}])),
                    )
                } else {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"status": "fail", "message": "boom"})),
                    )
                }
            }
        }),
    );
    let addr = spawn(flaky).await;
    let mut client = TaskListClient::new(HttpTaskApi::new(format!("http://{addr}/tarefa")));

    client.refresh().await;
    assert_eq!(client.tasks(), &[task(1, "Buy milk", false)]);

    client.refresh().await;
    assert_eq!(client.tasks(), &[task(1, "Buy milk", false)]);
}

#[tokio::test]
async fn unreachable_backend_is_logged_not_raised() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let api = HttpTaskApi::with_client(http, format!("http://{addr}/tarefa/"));
    assert_eq!(api.base_url(), format!("http://{addr}/tarefa"));
    assert!(api.list().await.is_err());

    let mut client = TaskListClient::new(api);
    client.refresh().await;
    client.set_input("Buy milk");
    client.submit().await.unwrap();
    assert!(client.tasks().is_empty());
    assert_eq!(client.input(), "");
}

#[tokio::test]
async fn wire_body_uses_backend_field_names() {
    let seen = Arc::new(tokio::sync::Mutex::new(Vec::<Value>::new()));
    let recorder = {
        let seen = seen.clone();
        Router::new().route(
            "/tarefa/:id",
            axum::routing::put(move |Json(body): Json<Value>| {
                let seen = seen.clone();
                async move {
                    seen.lock().await.push(body);
                    StatusCode::OK
                }
            }),
        )
    };
    let addr = spawn(recorder).await;
    let api = HttpTaskApi::new(format!("http://{addr}/tarefa"));

    api.update(1, &TaskSchema::toggled(&task(1, "Buy milk", false)))
        .await
        .unwrap();

    assert_eq!(
        seen.lock().await.as_slice(),
        &[json!({"descricao": "Buy milk", "concluido": true})]
    );
}
