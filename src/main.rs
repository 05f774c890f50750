use iced::widget::{image as picture, stack, text, Column};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

// Declare the application modules
mod config;
mod media;
mod remote;
mod state;
mod ui;

use config::Settings;
use remote::{AnalyzeClient, AnalyzeError};
use state::notification::{Notifications, Severity, NOTIFICATION_TTL};
use state::workflow::{SelectedFile, Workflow, WorkflowError};

/// Main application state
struct ImageAnalyzer {
    /// Pure selection/analysis state machine
    workflow: Workflow,
    /// Transient notification stack
    notifications: Notifications,
    /// Client for the analysis service
    client: AnalyzeClient,
    /// Decoded preview of the current selection
    preview: Option<picture::Handle>,
    /// Whether a drag is currently hovering the window
    drop_hover: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Browse Files"
    BrowseRequested,
    /// The file dialog closed (None = cancelled)
    FileChosen(Option<PathBuf>),
    /// A dragged file entered the window
    DragEntered,
    /// The drag left without dropping
    DragLeft,
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// Candidate bytes were read and inspected
    CandidateLoaded(Result<SelectedFile, String>),
    /// Preview decoding finished
    PreviewRendered(Result<picture::Handle, String>),
    /// User clicked "Analyze Image"
    AnalyzeRequested,
    /// The analysis round trip finished
    AnalysisFinished(Result<String, AnalyzeError>),
    /// User clicked "Choose Another"
    ResetRequested,
    /// User clicked "Copy"
    CopyRequested,
    /// The startup health probe finished
    HealthChecked(Result<(), AnalyzeError>),
    /// A notification reached its display deadline
    NotificationExpired(u64),
}

impl ImageAnalyzer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let client = AnalyzeClient::new(settings.server_url);

        println!(
            "🔍 Image Analyzer ready (service at {})",
            client.base_url()
        );

        // Probe the service once at startup; advisory only
        let probe = {
            let client = client.clone();
            Task::perform(
                async move { client.health().await },
                Message::HealthChecked,
            )
        };

        (
            ImageAnalyzer {
                workflow: Workflow::new(),
                notifications: Notifications::new(),
                client,
                preview: None,
                drop_hover: false,
            },
            probe,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseRequested => {
                if self.workflow.is_analyzing() {
                    return Task::none();
                }

                Task::perform(pick_image(), Message::FileChosen)
            }
            Message::FileChosen(Some(path)) => load_candidate_task(path),
            Message::FileChosen(None) => Task::none(),
            Message::DragEntered => {
                self.drop_hover = true;
                Task::none()
            }
            Message::DragLeft => {
                self.drop_hover = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.drop_hover = false;
                load_candidate_task(path)
            }
            Message::CandidateLoaded(Ok(file)) => match self.workflow.select(file) {
                Ok(()) => {
                    // Accepted: decode a preview from the stored bytes
                    let bytes = self
                        .workflow
                        .selected()
                        .map(|file| file.bytes.clone())
                        .unwrap_or_default();

                    self.preview = None;

                    Task::perform(
                        media::preview::render_preview(bytes),
                        Message::PreviewRendered,
                    )
                }
                Err(e) => self.notify(Severity::Error, e.to_string()),
            },
            Message::CandidateLoaded(Err(e)) => {
                eprintln!("⚠️  {}", e);
                self.notify(Severity::Error, e)
            }
            Message::PreviewRendered(Ok(handle)) => {
                self.preview = Some(handle);
                Task::none()
            }
            Message::PreviewRendered(Err(e)) => {
                // The type check passed but the bytes do not decode, so the
                // selection is unusable - back to the upload surface
                eprintln!("⚠️  {}", e);
                self.workflow.reset();
                self.preview = None;
                self.notify(
                    Severity::Error,
                    "The selected file could not be decoded as an image",
                )
            }
            Message::AnalyzeRequested => match self.workflow.begin_analysis() {
                Ok(file) => {
                    println!("🚀 Analyzing {} ({} bytes)", file.filename, file.size());

                    let client = self.client.clone();
                    Task::perform(
                        async move { client.analyze(file).await },
                        Message::AnalysisFinished,
                    )
                }
                // A second trigger while a request is outstanding is ignored
                Err(WorkflowError::AnalysisInFlight) => Task::none(),
                Err(e) => self.notify(Severity::Error, e.to_string()),
            },
            Message::AnalysisFinished(Ok(analysis)) => {
                println!("✅ Analysis complete ({} chars)", analysis.len());
                self.workflow.record_result(analysis);
                self.notify(Severity::Success, "Analysis complete")
            }
            Message::AnalysisFinished(Err(e)) => {
                eprintln!("❌ Analysis failed: {}", e);
                self.workflow.record_failure();
                self.notify(Severity::Error, e.to_string())
            }
            Message::ResetRequested => {
                if self.workflow.is_analyzing() {
                    return Task::none();
                }

                self.workflow.reset();
                self.preview = None;
                self.drop_hover = false;
                Task::none()
            }
            Message::CopyRequested => {
                let result = self.workflow.result().unwrap_or_default().to_string();

                match copy_to_clipboard(result) {
                    Ok(()) => self.notify(Severity::Success, "Result copied to clipboard"),
                    Err(e) => {
                        eprintln!("⚠️  Clipboard error: {}", e);
                        self.notify(Severity::Error, format!("Could not copy: {}", e))
                    }
                }
            }
            Message::HealthChecked(Ok(())) => {
                println!("✅ Analysis service is healthy");
                self.notify(Severity::Info, "Connected to the analysis service")
            }
            Message::HealthChecked(Err(e)) => {
                eprintln!("⚠️  Health probe failed: {}", e);
                self.notify(
                    Severity::Error,
                    "The analysis service is unreachable - is it running?",
                )
            }
            Message::NotificationExpired(id) => {
                self.notifications.dismiss(id);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body: Element<Message> = match self.workflow.selected() {
            None => ui::panels::upload_area(self.drop_hover),
            Some(file) => {
                let mut workspace = Column::new().spacing(20).align_x(Alignment::Center);

                workspace = workspace.push(match &self.preview {
                    Some(handle) => ui::panels::preview_panel(
                        handle,
                        &file.filename,
                        self.workflow.is_analyzing(),
                    ),
                    // Brief moment while the decode task runs
                    None => text("Loading preview...").size(16).into(),
                });

                if let Some(result) = self.workflow.result() {
                    workspace = workspace.push(ui::panels::results_panel(result));
                }

                workspace.width(Length::Fill).into()
            }
        };

        let mut page = Column::new()
            .spacing(20)
            .padding(40)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        if !self.notifications.is_empty() {
            page = page.push(ui::notifications::banners(&self.notifications));
        }

        page = page
            .push(text("Image Analyzer").size(40))
            .push(text("Upload an image and let AI describe it").size(16))
            .push(body);

        if self.workflow.is_analyzing() {
            stack![page, ui::panels::loading_overlay()].into()
        } else {
            page.into()
        }
    }

    /// Listen for window-level file drag events
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(window::Event::FileHovered(_)) => Some(Message::DragEntered),
            iced::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragLeft),
            iced::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Push a notification and schedule its dismissal
    fn notify(&mut self, severity: Severity, message: impl Into<String>) -> Task<Message> {
        let id = self.notifications.push(severity, message);

        Task::perform(
            async move {
                tokio::time::sleep(NOTIFICATION_TTL).await;
                id
            },
            Message::NotificationExpired,
        )
    }
}

fn main() -> iced::Result {
    println!("🚀 Image Analyzer starting...");

    iced::application(
        "Image Analyzer",
        ImageAnalyzer::update,
        ImageAnalyzer::view,
    )
    .subscription(ImageAnalyzer::subscription)
    .theme(ImageAnalyzer::theme)
    .centered()
    .run_with(ImageAnalyzer::new)
}

/// Show the native file picker filtered to image files
async fn pick_image() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select an Image to Analyze")
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Read a picked or dropped file in the background
fn load_candidate_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        media::inspect::load_candidate(path),
        Message::CandidateLoaded,
    )
}

/// Write text to the system clipboard
fn copy_to_clipboard(text: String) -> Result<(), String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("clipboard unavailable: {}", e))?;

    clipboard
        .set_text(text)
        .map_err(|e| format!("clipboard write failed: {}", e))
}
