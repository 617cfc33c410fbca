pub mod api;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod server;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use client::{FormMode, TaskListClient};
pub use model::Task;
pub use schema::TaskSchema;

/// Installs the `tracing` subscriber used by both binaries.
///
/// `RUST_LOG` wins when set; otherwise `info,tarefa_client=debug`.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tarefa_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
