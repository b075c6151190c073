/*
[INPUT]:  Command-line arguments, resolved configuration, TaskClient
[OUTPUT]: Parsed CLI and one-shot task commands printed to a writer
[POS]:    CLI layer - scripting entry points next to the TUI
[UPDATE]: When adding subcommands or global flags
*/

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use taskdeck_adapter::{Task, TaskClient, TaskExecution, TaskFormData};
use tracing::info;

use crate::app::filter_tasks;
use crate::app::list::NO_OUTPUT_TEXT;
use crate::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Terminal client for the task service")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
    /// Print the resolved configuration as YAML and exit
    #[arg(long = "print-config")]
    pub print_config: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all tasks
    List {
        /// Case-insensitive filter on name, owner and command
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one task
    Get { id: String },
    /// Find tasks whose name contains NAME
    Search { name: String },
    /// Create or replace a task
    Create {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        command: String,
    },
    /// Delete a task
    Delete { id: String },
    /// Run a task's command and print its output
    Execute { id: String },
    /// Run a task's command and print the execution record
    Record { id: String },
}

impl Command {
    fn requires_execute(&self) -> bool {
        matches!(self, Command::Execute { .. } | Command::Record { .. })
    }
}

/// Run one subcommand against `client`, writing results to `out`
pub async fn run_command<W: Write>(
    command: Command,
    client: &TaskClient,
    enable_execute: bool,
    out: &mut W,
) -> Result<()> {
    if command.requires_execute() && !enable_execute {
        bail!("command execution is disabled; set enable_execute in the configuration");
    }

    match command {
        Command::List { search } => {
            let tasks = client.list_tasks().await?;
            let matching = filter_tasks(&tasks, search.as_deref().unwrap_or(""));
            write_tasks(out, &matching)?;
        }
        Command::Get { id } => {
            let task = client.get_task(&id).await?;
            write_tasks(out, &[&task])?;
        }
        Command::Search { name } => {
            let tasks = client.search_tasks(&name).await?;
            write_tasks(out, &tasks.iter().collect::<Vec<_>>())?;
        }
        Command::Create {
            id,
            name,
            owner,
            command,
        } => {
            let data = TaskFormData {
                id,
                name,
                owner,
                command,
            };
            if let Some(field) = blank_field(&data) {
                bail!("{field} is required");
            }
            let task = client.create_task(&data).await?;
            info!(task_id = %task.id, "task created");
            writeln!(out, "Task created successfully")?;
            write_tasks(out, &[&task])?;
        }
        Command::Delete { id } => {
            client.delete_task(&id).await?;
            info!(task_id = %id, "task deleted");
            writeln!(out, "Task deleted successfully")?;
        }
        Command::Execute { id } => {
            let output = client.execute_task(&id).await?;
            if output.is_empty() {
                writeln!(out, "{}", NO_OUTPUT_TEXT)?;
            } else {
                writeln!(out, "{}", output.trim_end_matches('\n'))?;
            }
        }
        Command::Record { id } => {
            let execution = client.record_execution(&id).await?;
            write_execution(out, &execution)?;
        }
    }
    out.flush().context("flush output")?;
    Ok(())
}

fn blank_field(data: &TaskFormData) -> Option<&'static str> {
    [
        ("Task ID", &data.id),
        ("Task Name", &data.name),
        ("Owner", &data.owner),
        ("Command", &data.command),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty())
    .map(|(label, _)| label)
}

fn write_tasks<W: Write>(out: &mut W, tasks: &[&Task]) -> Result<()> {
    if tasks.is_empty() {
        writeln!(out, "No tasks found")?;
        return Ok(());
    }

    let widths = tasks.iter().fold([2, 4, 5], |acc, task| {
        [
            acc[0].max(task.id.chars().count()),
            acc[1].max(task.name.chars().count()),
            acc[2].max(task.owner.chars().count()),
        ]
    });
    writeln!(
        out,
        "{:<w0$}  {:<w1$}  {:<w2$}  COMMAND",
        "ID",
        "NAME",
        "OWNER",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )?;
    for task in tasks {
        writeln!(
            out,
            "{:<w0$}  {:<w1$}  {:<w2$}  {}",
            task.id,
            task.name,
            task.owner,
            task.command,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        )?;
    }
    Ok(())
}

fn write_execution<W: Write>(out: &mut W, execution: &TaskExecution) -> Result<()> {
    writeln!(
        out,
        "start:  {}",
        execution.start_time.as_deref().unwrap_or("-")
    )?;
    writeln!(out, "end:    {}", execution.end_time.as_deref().unwrap_or("-"))?;
    writeln!(out, "output:")?;
    match execution.output.as_deref() {
        Some(output) if !output.is_empty() => writeln!(out, "{}", output.trim_end_matches('\n'))?,
        _ => writeln!(out, "{}", NO_OUTPUT_TEXT)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use taskdeck_adapter::ClientConfig;
    use tokio_test::assert_ok;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> TaskClient {
        TaskClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .expect("client init")
    }

    async fn run(command: Command, server: &MockServer, enable_execute: bool) -> Result<String> {
        let client = client_for(server);
        let mut out = Vec::new();
        run_command(command, &client, enable_execute, &mut out).await?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_create_with_global_flags() {
        let cli = Cli::parse_from([
            "taskdeck",
            "--base-url",
            "http://tasks:8080",
            "create",
            "--id",
            "7",
            "--name",
            "Build",
            "--owner",
            "alice",
            "--command",
            "make all",
        ]);
        assert_eq!(cli.overrides().base_url.as_deref(), Some("http://tasks:8080"));
        assert_eq!(
            cli.command,
            Some(Command::Create {
                id: "7".to_string(),
                name: "Build".to_string(),
                owner: "alice".to_string(),
                command: "make all".to_string(),
            })
        );
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::parse_from(["taskdeck"]);
        assert!(cli.command.is_none());
        assert!(!cli.print_config);
    }

    #[tokio::test]
    async fn list_applies_client_side_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "name": "Build", "owner": "alice", "command": "make"},
                {"id": "2", "name": "Deploy", "owner": "bob", "command": "kubectl apply"}
            ])))
            .mount(&server)
            .await;

        let output = assert_ok!(
            run(
                Command::List {
                    search: Some("BOB".to_string()),
                },
                &server,
                false,
            )
            .await
        );

        assert!(output.contains("Deploy"));
        assert!(!output.contains("Build"));
    }

    #[tokio::test]
    async fn search_without_matches_prints_empty_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks/search"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let output = run(
            Command::Search {
                name: "nothing".to_string(),
            },
            &server,
            false,
        )
        .await
        .expect("search");

        assert_eq!(output.trim(), "No tasks found");
    }

    #[tokio::test]
    async fn execute_is_refused_when_disabled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hi"))
            .expect(0)
            .mount(&server)
            .await;

        let err = run(
            Command::Execute {
                id: "1".to_string(),
            },
            &server,
            false,
        )
        .await
        .expect_err("disabled");

        assert!(err.to_string().contains("disabled"));
    }

    #[tokio::test]
    async fn execute_prints_output_when_enabled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks/1/execute"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello\n"))
            .expect(1)
            .mount(&server)
            .await;

        let output = assert_ok!(
            run(
                Command::Execute {
                    id: "1".to_string(),
                },
                &server,
                true,
            )
            .await
        );

        assert_eq!(output, "hello\n");
    }

    #[tokio::test]
    async fn create_reports_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/tasks"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"message": "id already exists"})),
            )
            .mount(&server)
            .await;

        let err = run(
            Command::Create {
                id: "1".to_string(),
                name: "Build".to_string(),
                owner: "alice".to_string(),
                command: "make".to_string(),
            },
            &server,
            false,
        )
        .await
        .expect_err("conflict");

        assert_eq!(err.to_string(), "id already exists");
    }

    #[tokio::test]
    async fn create_rejects_blank_fields_locally() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = run(
            Command::Create {
                id: "1".to_string(),
                name: "  ".to_string(),
                owner: "alice".to_string(),
                command: "make".to_string(),
            },
            &server,
            false,
        )
        .await
        .expect_err("blank name");

        assert_eq!(err.to_string(), "Task Name is required");
    }
}
