//! Interactive menu session.
//!
//! Tasks live only for the length of the session.

use anyhow::Result;
use slate_core::{TaskDraft, TaskStore, parse_timestamp};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::chart::render_timeline;
use crate::config::Config;
use crate::render::{describe, describe_plan};

const MENU: &str = "\nPersonal Scheduling Assistant
1. Add Task
2. View Tasks
3. Find Task by Deadline
4. Sort Tasks
5. Optimise Schedule
6. Visualise Timeline
7. Exit";

enum Flow {
    Continue,
    Exit,
}

pub struct Session<'c, R, W> {
    store: TaskStore,
    config: &'c Config,
    input: R,
    output: W,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(config: &'c Config, input: R, output: W) -> Self {
        Self {
            store: TaskStore::new(),
            config,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice")? else {
                break;
            };
            debug!(choice = %choice, "menu choice");

            let flow = match choice.as_str() {
                "1" => self.add_task()?,
                "2" => self.view_tasks()?,
                "3" => self.find_by_deadline()?,
                "4" => self.sort_tasks()?,
                "5" => self.optimise()?,
                "6" => self.visualise()?,
                "7" => {
                    writeln!(self.output, "Exiting the application.")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            return Ok(None);
        }
        Ok(Some(s.trim().to_string()))
    }

    fn add_task(&mut self) -> Result<Flow> {
        let fmt = self.config.input.datetime_format.clone();
        let categories = self.config.input.categories.join("/");
        let category_label = if categories.is_empty() {
            "Task Category".to_string()
        } else {
            format!("Task Category ({categories})")
        };

        let mut draft = TaskDraft::default();
        let fields: [(&mut String, String); 6] = [
            (&mut draft.name, "Task Name".to_string()),
            (&mut draft.category, category_label),
            (&mut draft.priority, "Priority (higher is better)".to_string()),
            (&mut draft.start_time, format!("Start Time ({fmt})")),
            (&mut draft.end_time, format!("End Time ({fmt})")),
            (&mut draft.deadline, format!("Deadline ({fmt})")),
        ];
        for (slot, label) in fields {
            let Some(value) = self.prompt(&label)? else {
                return Ok(Flow::Exit);
            };
            *slot = value;
        }

        match draft.build(&fmt, &self.config.input.categories) {
            Ok(task) => {
                self.store.add(task);
                writeln!(self.output, "Task added.")?;
            }
            Err(e) => writeln!(self.output, "Task not added: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn view_tasks(&mut self) -> Result<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No tasks yet.")?;
            return Ok(Flow::Continue);
        }
        if let Some(key) = self.store.sort_key() {
            writeln!(self.output, "(sorted by {key})")?;
        }
        for task in self.store.tasks() {
            writeln!(self.output, "{}", describe(task, self.config))?;
        }
        Ok(Flow::Continue)
    }

    fn find_by_deadline(&mut self) -> Result<Flow> {
        let fmt = self.config.input.datetime_format.clone();
        let Some(raw) = self.prompt(&format!("Enter Deadline ({fmt})"))? else {
            return Ok(Flow::Exit);
        };

        match parse_timestamp(&raw, &fmt) {
            Ok(deadline) => match self.store.find_by_deadline(deadline) {
                Some(task) => writeln!(self.output, "{}", describe(task, self.config))?,
                None => writeln!(self.output, "No task found with the given deadline.")?,
            },
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn sort_tasks(&mut self) -> Result<Flow> {
        let Some(field) =
            self.prompt("Sort by (name, category, priority, start_time, end_time, deadline)")?
        else {
            return Ok(Flow::Exit);
        };

        match self.store.sort_by(&field) {
            Ok(()) => writeln!(self.output, "Tasks sorted!")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn optimise(&mut self) -> Result<Flow> {
        let plan = self.store.plan();
        write!(self.output, "{}", describe_plan(&plan, self.config))?;
        Ok(Flow::Continue)
    }

    fn visualise(&mut self) -> Result<Flow> {
        let chart = render_timeline(self.store.tasks(), self.config.display.chart_width);
        write!(self.output, "{chart}")?;
        Ok(Flow::Continue)
    }
}
