use std::io::Write;

use bs_client::{HttpApi, SearchClient};
use bs_core::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::Page;

const HELP: &str = "Type a query to search, or :random, :stats, :blogs, :help, :quit";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Search(&'a str),
    Random,
    Stats,
    Blogs,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> ShellCommand<'_> {
    match line.trim() {
        ":random" | ":r" => ShellCommand::Random,
        ":stats" => ShellCommand::Stats,
        ":blogs" => ShellCommand::Blogs,
        ":help" | ":h" => ShellCommand::Help,
        ":quit" | ":q" => ShellCommand::Quit,
        other if other.starts_with(':') => ShellCommand::Unknown(other),
        // Untrimmed on purpose: the client trims on submit.
        _ => ShellCommand::Search(line),
    }
}

fn prompt() {
    let mut out = std::io::stdout();
    let _ = write!(out, "> ").and_then(|_| out.flush());
}

/// Interactive loop. Failed actions are already rendered as messages, so
/// they never end the session.
pub(crate) async fn run<V: Page>(client: &SearchClient<HttpApi, V>) -> Result<()> {
    client.load_stats().await;
    client.view().await.present();
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        let outcome = match parse_line(&line) {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("{}", HELP);
                Ok(())
            }
            ShellCommand::Unknown(cmd) => {
                println!("Unknown command {}. {}", cmd, HELP);
                Ok(())
            }
            ShellCommand::Search(query) => {
                client.view().await.set_query(query);
                client.submit(query).await.map(|_| ())
            }
            ShellCommand::Random => client.random_article().await.map(|_| ()),
            ShellCommand::Stats => {
                client.load_stats().await;
                Ok(())
            }
            ShellCommand::Blogs => client.list_blogs().await.map(|_| ()),
        };
        if let Err(e) = outcome {
            debug!("Shell action failed: {}", e);
        }
        client.view().await.present();
        prompt();
    }
    Ok(())
}
