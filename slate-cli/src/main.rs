use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::json;
use slate_core::{TaskStore, parse_task_spec, parse_timestamp};
use tracing_subscriber::EnvFilter;

mod chart;
mod config;
mod menu;
mod render;
mod state;

use config::{Config, config_path, init_config, load_config};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SLATE_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "slate",
    version,
    long_version = LONG_VERSION,
    about = "Personal scheduling assistant"
)]
struct Cli {
    /// Defaults to the interactive menu
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu: add, view, find, sort, optimise, chart
    Interactive,

    /// Pick the highest-priority set of non-overlapping tasks
    Optimise {
        /// Task as name|category|priority|start|end|deadline (repeatable)
        #[arg(long = "task", required = true)]
        tasks: Vec<String>,

        #[arg(long, default_value_t = false)]
        json: bool,

        /// Also draw the selected tasks as a timeline
        #[arg(long, default_value_t = false)]
        chart: bool,
    },

    /// Sort tasks by a field (stable, ascending)
    Sort {
        /// name, category, priority, start_time, end_time or deadline
        #[arg(long)]
        by: String,

        #[arg(long = "task", required = true)]
        tasks: Vec<String>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Find the task with an exact deadline
    Find {
        #[arg(long)]
        deadline: String,

        #[arg(long = "task", required = true)]
        tasks: Vec<String>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Manage ~/.slate/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let cfg = load_config()?;
            let stdin = std::io::stdin();
            let mut session = menu::Session::new(&cfg, stdin.lock(), std::io::stdout());
            session.run()?;
        }

        Command::Optimise { tasks, json, chart } => {
            let cfg = load_config()?;
            let store = build_store(&tasks, &cfg)?;
            let plan = store.plan();

            if json {
                let out = json!({
                    "selected": plan.selected,
                    "skipped": plan.skipped,
                    "total_priority": plan.total_priority,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render::describe_plan(&plan, &cfg));
            }

            if chart {
                println!();
                print!("{}", chart::render_timeline(&plan.selected, cfg.display.chart_width));
            }
        }

        Command::Sort { by, tasks, json } => {
            let cfg = load_config()?;
            let mut store = build_store(&tasks, &cfg)?;
            store.sort_by(&by)?;

            if json {
                let sorted: Vec<_> = store.tasks().collect();
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            } else {
                for t in store.tasks() {
                    println!("{}", render::describe(t, &cfg));
                }
            }
        }

        Command::Find { deadline, tasks, json } => {
            let cfg = load_config()?;
            let store = build_store(&tasks, &cfg)?;
            let when = parse_timestamp(&deadline, &cfg.input.datetime_format)?;

            let Some(task) = store.find_by_deadline(when) else {
                bail!("No task found with deadline {}", deadline.trim());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(task)?);
            } else {
                println!("{}", render::describe(task, &cfg));
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => init_config()?,
            ConfigCommand::Show => {
                let cfg = load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Path => println!("{}", config_path()?.display()),
        },
    }

    Ok(())
}

/// Logs go to stderr; filter with SLATE_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SLATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_store(specs: &[String], cfg: &Config) -> Result<TaskStore> {
    let mut store = TaskStore::new();
    for spec in specs {
        let task = parse_task_spec(spec)
            .and_then(|draft| draft.build(&cfg.input.datetime_format, &cfg.input.categories))
            .with_context(|| format!("task '{spec}'"))?;
        store.add(task);
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["slate"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn optimise_takes_repeated_tasks() {
        let cli = Cli::try_parse_from([
            "slate",
            "optimise",
            "--task",
            "a|personal|1|2026-03-02 09:00|2026-03-02 10:00|2026-03-02 10:00",
            "--task",
            "b|academic|2|2026-03-02 09:30|2026-03-02 11:00|2026-03-02 11:00",
            "--chart",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Optimise { tasks, json, chart }) => {
                assert_eq!(tasks.len(), 2);
                assert!(!json);
                assert!(chart);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn build_store_reports_the_bad_task() {
        let err = build_store(&["oops|personal|1".to_string()], &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("task 'oops|personal|1'"));
    }

    #[test]
    fn build_store_keeps_order() {
        let specs = vec![
            "b|academic|2|2026-03-02 09:30|2026-03-02 11:00|2026-03-02 11:00".to_string(),
            "a|personal|1|2026-03-02 09:00|2026-03-02 10:00|2026-03-02 10:00".to_string(),
        ];
        let store = build_store(&specs, &Config::default()).unwrap();
        let names: Vec<&str> = store.tasks().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(store.optimise_schedule()[0].name, "b");
    }
}
