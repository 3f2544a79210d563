// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use drivergen::config::consts::DRIVER_HEADER_FILE;
use drivergen::config::{collect_warnings, load_and_validate_task, shared_task_names};
use drivergen::model::Task;
use drivergen::render_driver_header;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drivergen", about = "Render C++ driver headers from task descriptors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the driver header of each task
    Render {
        /// Task descriptors (.yaml, .yml or .toml)
        #[arg(required = true)]
        tasks: Vec<PathBuf>,
        /// Write <DIR>/<task name>/driver.h instead of printing to stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Load and validate each task without rendering
    Check {
        #[arg(required = true)]
        tasks: Vec<PathBuf>,
    },
    /// Print the loaded task model as JSON
    Inspect { task: PathBuf },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Render { tasks, out_dir } => run_render(tasks, out_dir).await,
        Command::Check { tasks } => run_check(tasks).await,
        Command::Inspect { task } => run_inspect(task).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn load(path: PathBuf) -> Result<Task> {
    let display = path.display().to_string();
    tokio::task::spawn_blocking(move || load_and_validate_task(&path))
        .await
        .context("task loader panicked")?
        .with_context(|| format!("failed to load {}", display))
}

/// Run `job` once per task file concurrently, returning results in input order.
async fn for_each_task<T, F, Fut>(tasks: Vec<PathBuf>, job: F) -> Vec<(PathBuf, Result<T>)>
where
    T: Send + 'static,
    F: Fn(PathBuf) -> Fut,
    Fut: std::future::Future<Output = Result<T>> + Send + 'static,
{
    let mut set = JoinSet::new();
    for (index, path) in tasks.iter().cloned().enumerate() {
        let fut = job(path);
        set.spawn(async move { (index, fut.await) });
    }

    let mut results: Vec<Option<Result<T>>> = tasks.iter().map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, result)) => results[index] = Some(result),
            Err(e) => tracing::error!(error = %e, "task worker failed"),
        }
    }

    tasks
        .into_iter()
        .zip(results)
        .map(|(path, result)| {
            let result = result.unwrap_or_else(|| Err(anyhow!("worker did not complete")));
            (path, result)
        })
        .collect()
}

async fn run_render(tasks: Vec<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let results = for_each_task(tasks, |path| async move {
        let task = load(path).await?;
        let header = render_driver_header(&task)
            .with_context(|| format!("failed to render task '{}'", task.name))?;
        Ok((task, header))
    })
    .await;

    // Only written headers can collide; stdout output is just concatenated.
    let conflicts = if out_dir.is_some() {
        name_conflicts(&results)
    } else {
        results.iter().map(|_| None).collect()
    };

    let mut failures = 0;
    for ((path, result), conflict) in results.into_iter().zip(conflicts) {
        let outcome = match (result, conflict) {
            (Err(e), _) => Err(e),
            (Ok(_), Some(conflict)) => Err(anyhow!(conflict)),
            (Ok((task, header)), None) => match &out_dir {
                Some(dir) => write_header(dir, &task, &header).await.map(Output::Written),
                None => Ok(Output::Stdout(header)),
            },
        };

        match outcome {
            Ok(Output::Stdout(header)) => print!("{}", header),
            Ok(Output::Written(target)) => {
                println!("✅ {} → {}", path.display(), target.display())
            }
            Err(e) => {
                failures += 1;
                eprintln!("❌ {}: {:#}", path.display(), e);
            }
        }
    }

    finish(failures)
}

type Rendered = (PathBuf, Result<(Task, String)>);

/// For each rendered task, the reason it may not be written: another file in
/// the batch declares the same task name and would target the same header.
fn name_conflicts(results: &[Rendered]) -> Vec<Option<String>> {
    let rendered_name = |result: &Result<(Task, String)>| -> Option<String> {
        result.as_ref().ok().map(|(task, _)| task.name.clone())
    };
    let names: Vec<Option<String>> = results.iter().map(|(_, r)| rendered_name(r)).collect();
    let shared = shared_task_names(names.iter().flatten().map(String::as_str));

    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = name.as_deref().filter(|name| shared.contains(name))?;
            let others: Vec<String> = names
                .iter()
                .zip(results)
                .enumerate()
                .filter(|(other, (other_name, _))| {
                    *other != index && other_name.as_deref() == Some(name)
                })
                .map(|(_, (_, (path, _)))| path.display().to_string())
                .collect();
            Some(format!(
                "task name '{}' is also used by {}; refusing to write {}/{}",
                name,
                others.join(", "),
                name,
                DRIVER_HEADER_FILE
            ))
        })
        .collect()
}

enum Output {
    Stdout(String),
    Written(PathBuf),
}

async fn write_header(out_dir: &Path, task: &Task, header: &str) -> Result<PathBuf> {
    let dir = out_dir.join(&task.name);
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let target = dir.join(DRIVER_HEADER_FILE);
    tokio::fs::write(&target, header)
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}

async fn run_check(tasks: Vec<PathBuf>) -> Result<()> {
    let results = for_each_task(tasks, |path| async move { load(path).await }).await;

    let mut failures = 0;
    for (path, result) in results {
        match result {
            Ok(task) => {
                let warnings = collect_warnings(&task);
                println!(
                    "✅ {}: task '{}' is valid ({} interfaces, {} warnings)",
                    path.display(),
                    task.name,
                    task.interfaces.len(),
                    warnings.len()
                );
                for warning in warnings {
                    println!("   ⚠️  {}", warning);
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("❌ {}: {:#}", path.display(), e);
            }
        }
    }

    finish(failures)
}

async fn run_inspect(path: PathBuf) -> Result<()> {
    let task = load(path).await?;
    let json = serde_json::to_string_pretty(&task).context("failed to serialize task")?;
    println!("{}", json);
    Ok(())
}

fn finish(failures: usize) -> Result<()> {
    if failures == 0 {
        Ok(())
    } else {
        Err(anyhow!("{} task(s) failed", failures))
    }
}
