//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Menu loop: queue export files, inspect the queue, run the analysis
//! cycle, reset. The TUI owns the Session for this conversational context;
//! use cases receive it by reference and never hold state of their own.

use crate::domain::{DomainError, Session};
use crate::ports::{DocumentSource, InputPort};
use crate::usecases::{report_service, ReportService};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{InquireError, MultiSelect, Select};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

const MENU_ADD: &str = "Add export files to the queue";
const MENU_SHOW: &str = "Show queue";
const MENU_ANALYZE: &str = "Analyze queued files";
const MENU_RESET: &str = "Reset queue";
const MENU_QUIT: &str = "Quit";

/// TUI adapter. Inquire prompts over one session queue.
pub struct TuiInputPort {
    source: Arc<dyn DocumentSource>,
    report_service: Arc<ReportService>,
    session: Mutex<Session>,
}

impl TuiInputPort {
    pub fn new(source: Arc<dyn DocumentSource>, report_service: Arc<ReportService>) -> Self {
        Self {
            source,
            report_service,
            session: Mutex::new(Session::new()),
        }
    }

    async fn add_files(&self) -> Result<(), DomainError> {
        let available = self.source.list_available().await?;
        if available.is_empty() {
            println!("No export files found. Drop .json exports into the export directory.");
            return Ok(());
        }

        let options: Vec<String> = available.iter().map(|d| d.name.clone()).collect();
        let selected = match MultiSelect::new("Select export files to queue", options).prompt() {
            Ok(selected) => selected,
            Err(InquireError::OperationCanceled) => return Ok(()),
            Err(e) => return Err(DomainError::Input(e.to_string())),
        };

        let mut session = self.session.lock().await;
        for doc in available
            .into_iter()
            .filter(|d| selected.contains(&d.name))
        {
            let name = doc.name.clone();
            match session.append(doc) {
                Ok(count) => println!("Added {} (queued: {})", name, count),
                Err(e) => println!("Rejected {}: {}", name, e),
            }
        }
        Ok(())
    }

    async fn show_queue(&self) {
        let session = self.session.lock().await;
        if session.is_empty() {
            println!("Queue is empty.");
            return;
        }
        println!("Queued files:");
        for (i, name) in session.pending_names().iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }
    }

    async fn analyze(&self) -> Result<(), DomainError> {
        let mut session = self.session.lock().await;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("analyzing {} file(s)...", session.len()));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let outcome = self.report_service.aggregate(&mut session).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(report) => {
                println!("{}", report_service::render(&report));
                println!("Done. Queue cleared.");
                Ok(())
            }
            Err(DomainError::EmptyQueue) => {
                println!("You have not queued any files yet.");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn reset(&self) {
        let mut session = self.session.lock().await;
        session.reset();
        info!("session queue reset");
        println!("Queue cleared. Send new files and trigger the analysis again.");
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        println!("Queue exported Telegram chat JSON files, then run the analysis.");
        loop {
            let choice = Select::new(
                "What next?",
                vec![MENU_ADD, MENU_SHOW, MENU_ANALYZE, MENU_RESET, MENU_QUIT],
            )
            .prompt();

            match choice {
                Ok(MENU_ADD) => self.add_files().await?,
                Ok(MENU_SHOW) => self.show_queue().await,
                Ok(MENU_ANALYZE) => self.analyze().await?,
                Ok(MENU_RESET) => self.reset().await,
                Ok(MENU_QUIT) => return Ok(()),
                Ok(_) => {}
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(DomainError::Input(e.to_string())),
            }
        }
    }
}
