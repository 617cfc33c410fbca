use clap::Parser;
use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

use tarefa_client::{
    command::{Command, Flow},
    config::Config,
    view, HttpTaskApi, TaskListClient,
};

/// Terminal front-end for the `/tarefa` task list.
#[derive(Debug, Parser)]
#[command(name = "tarefa", version, about)]
struct Args {
    /// Task resource URL; defaults to TAREFA_API_URL or http://localhost:8080/tarefa
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tarefa_client::init_tracing();

    let args = Args::parse();
    let api_url = args.api_url.unwrap_or_else(|| Config::from_env().api_url);
    tracing::debug!(%api_url, "starting task list");

    let mut client = TaskListClient::new(HttpTaskApi::new(api_url));
    client.refresh().await;
    print!("{}", view::render(&client));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match command.apply(&mut client).await {
            Flow::Continue(text) => println!("{}", text.trim_end()),
            Flow::Stop => break,
        }
    }
    Ok(())
}
