mod config;

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use arboard::Clipboard;
use clap::{Parser, Subcommand};
use client_core::{
    library::estimate_content_height, summarizer::SummaryCardView, tasks::TaskBoard,
    weather::WeatherPanel, ActionController, ActionResult, ClipboardWriter, FeedbackSink,
    HttpBackend, LibraryPage, NotificationRequest, Snackbar, SummarizerPage, TextDownloader,
    WeatherWidget,
};
use shared::{
    domain::{SummaryHash, SummaryId, TaskId},
    protocol::{SavedSummary, TaskRecord},
};
use tracing_subscriber::EnvFilter;

use crate::config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(about = "Summarizer, task board and weather actions from the terminal")]
struct Args {
    /// Settings file; ignored when missing.
    #[arg(long, default_value = "client.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize text, optionally saving and downloading the result.
    Summarize {
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        save: bool,
        #[arg(long)]
        download: bool,
    },
    Save {
        #[arg(long)]
        summary: String,
        #[arg(long)]
        hash: String,
    },
    /// Delete a saved summary and list what remains.
    Delete {
        id: String,
        /// Saved summaries as a JSON array; without it the library holds only ID.
        #[arg(long)]
        library: Option<PathBuf>,
    },
    Download {
        #[arg(long)]
        text: String,
    },
    Copy {
        #[arg(long)]
        text: String,
    },
    Weather {
        city: String,
    },
    /// Load a task list, toggle completion and show task details.
    Tasks {
        #[arg(long)]
        file: PathBuf,
        #[arg(long = "toggle")]
        toggle: Vec<i64>,
        #[arg(long)]
        info: Option<i64>,
    },
}

/// Applies the configured display time to every notification.
struct TimedSnackbar {
    snackbar: Snackbar,
    duration: Duration,
}

impl FeedbackSink for TimedSnackbar {
    fn notify(&self, request: NotificationRequest) {
        self.snackbar.notify(request.with_duration(self.duration));
    }

    fn dismiss(&self) {
        self.snackbar.dismiss();
    }
}

struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("system clipboard unavailable")?;
        clipboard
            .set_text(text.to_string())
            .context("failed to write to the system clipboard")
    }
}

struct Session {
    settings: Settings,
    snackbar: Snackbar,
    controller: ActionController,
}

impl Session {
    fn new(settings: Settings) -> Self {
        let snackbar = Snackbar::new();
        let controller = ActionController::new(Arc::new(TimedSnackbar {
            snackbar: snackbar.clone(),
            duration: settings.notification_duration(),
        }));
        Self {
            settings,
            snackbar,
            controller,
        }
    }

    fn summarizer_backend(&self) -> Result<Arc<HttpBackend>> {
        Ok(Arc::new(HttpBackend::new(&self.settings.summarizer_url)?))
    }

    fn summarizer_page(&self) -> Result<SummarizerPage> {
        Ok(SummarizerPage::new(
            self.controller.clone(),
            self.summarizer_backend()?,
            Arc::new(SystemClipboard),
            TextDownloader::new(&self.settings.download_dir),
        ))
    }

    fn library_page(&self, summaries: Vec<SavedSummary>) -> Result<LibraryPage> {
        Ok(LibraryPage::new(
            self.controller.clone(),
            self.summarizer_backend()?,
            Arc::new(SystemClipboard),
            TextDownloader::new(&self.settings.download_dir),
            summaries,
            estimate_content_height,
        ))
    }

    fn print_snackbar(&self) {
        let view = self.snackbar.view();
        if view.visible {
            println!("[{}] {}", view.role.as_str(), view.message);
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let settings = load_settings(&args.config)?;
    tracing::debug!(?settings, "settings loaded");
    let session = Session::new(settings);

    let ok = match args.command {
        Command::Summarize {
            text,
            file,
            save,
            download,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(file)) => read_input(&file)?,
                (None, None) => String::new(),
            };
            summarize(&session, &text, save, download).await?
        }
        Command::Save { summary, hash } => {
            let page = session.summarizer_page()?;
            page.open_summary(&summary, Some(SummaryHash::new(hash)));
            report(&page.save().await)
        }
        Command::Delete { id, library } => {
            delete(&session, SummaryId::new(id), library.as_deref()).await?
        }
        Command::Download { text } => {
            let page = session.summarizer_page()?;
            page.open_summary(&text, None);
            let result = page.download().await;
            if let Some(path) = result.data() {
                println!("written: {}", path.display());
            }
            report(&result)
        }
        Command::Copy { text } => {
            let page = session.summarizer_page()?;
            page.open_summary(&text, None);
            report(&page.copy().await)
        }
        Command::Weather { city } => weather(&session, &city).await?,
        Command::Tasks { file, toggle, info } => tasks(&file, &toggle, info)?,
    };

    session.print_snackbar();
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn report<T>(result: &ActionResult<T>) -> bool {
    match result.error() {
        Some(err) => println!("failed ({}): {}", err.status(), err.message()),
        None => println!("ok ({})", result.status()),
    }
    result.ok()
}

fn print_card(card: &SummaryCardView) {
    if !card.visible {
        return;
    }
    if let Some(hash) = &card.hash {
        println!("hash: {hash}");
    }
    println!("{}", card.text);
}

async fn summarize(session: &Session, text: &str, save: bool, download: bool) -> Result<bool> {
    let page = session.summarizer_page()?;
    page.input(text);
    let counter = page.counter();
    println!(
        "{}{}",
        counter.text,
        if counter.danger { " (over limit)" } else { "" }
    );

    let mut ok = report(&page.summarize().await);
    print_card(&page.card());

    if ok && save {
        ok = report(&page.save().await);
    }
    if ok && download {
        let result = page.download().await;
        if let Some(path) = result.data() {
            println!("written: {}", path.display());
        }
        ok = report(&result);
    }
    Ok(ok)
}

/// Saved summaries from `library`, or a one-entry library holding only `id`.
fn library_entries(id: &SummaryId, library: Option<&Path>) -> Result<Vec<SavedSummary>> {
    let Some(path) = library else {
        return Ok(vec![SavedSummary {
            id: id.clone(),
            hash: SummaryHash::new(String::new()),
            summary: String::new(),
            created_at: None,
        }]);
    };
    serde_json::from_str(&read_input(path)?)
        .with_context(|| format!("'{}' is not a list of saved summaries", path.display()))
}

async fn delete(session: &Session, id: SummaryId, library: Option<&Path>) -> Result<bool> {
    let page = session.library_page(library_entries(&id, library)?)?;

    let ok = report(&page.delete(&id).await);
    for item in page.items() {
        let preview = item.summary.summary.lines().next().unwrap_or_default();
        println!("{} {preview}", item.summary.id);
    }
    Ok(ok)
}

async fn weather(session: &Session, city: &str) -> Result<bool> {
    let backend = Arc::new(HttpBackend::new(&session.settings.weather_url)?);
    let widget = WeatherWidget::new(backend);
    let ok = widget.search(city).await.ok();

    match widget.panel() {
        WeatherPanel::Empty => {}
        WeatherPanel::Report(report) => {
            println!("{}", report.city);
            println!("  {} {}", report.temperature, report.condition);
            println!("  humidity {}  wind {}", report.humidity, report.wind);
            println!("  icon {}", report.icon_url);
        }
        WeatherPanel::Error(template) => {
            println!("{}", template.heading);
            println!("  {}", template.message);
        }
    }
    Ok(ok)
}

fn tasks(file: &Path, toggles: &[i64], info: Option<i64>) -> Result<bool> {
    let raw = read_input(file)?;
    let records: Vec<TaskRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not a task list", file.display()))?;
    let mut board = TaskBoard::new(records);

    let mut ok = true;
    for &id in toggles {
        if board.toggle(TaskId(id)).is_none() {
            eprintln!("no task with id {id}");
            ok = false;
        }
    }

    for row in board.rows() {
        let mark = if row.completed { 'x' } else { ' ' };
        println!("[{mark}] {} {}", row.record.id, row.record.task);
    }
    println!("pending: {}", board.pending_count());

    if let Some(id) = info {
        match board.open_info(TaskId(id)) {
            Some(popup) => {
                println!();
                println!("{}", popup.title);
                for line in &popup.lines {
                    println!("  {line}");
                }
            }
            None => {
                eprintln!("no task with id {id}");
                ok = false;
            }
        }
    }
    Ok(ok)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
