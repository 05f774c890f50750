/// Selection and analysis workflow state
///
/// This module owns the widget's pure state machine: which image is
/// currently selected, whether an analysis request is in flight, and the
/// text returned by the analysis service. It knows nothing about rendering;
/// the UI layer derives all panel visibility from this state.

use thiserror::Error;

/// Maximum accepted image size in bytes (10 MiB)
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// The currently chosen image awaiting or undergoing analysis
///
/// At most one selection is live at a time. A new selection replaces the
/// previous one wholesale; reset clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Filename only (e.g., "IMG_0001.jpg")
    pub filename: String,
    /// Declared media type (e.g., "image/jpeg")
    pub media_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Size of the file in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Errors surfaced by workflow transitions
///
/// Every variant becomes a transient notification at the UI boundary;
/// none of them abort the application.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    /// The candidate's media type does not start with "image/"
    #[error("'{media_type}' is not an image - please choose an image file")]
    InvalidFileType { media_type: String },

    /// The candidate exceeds the size limit
    #[error("image is {size} bytes - the limit is 10 MiB")]
    FileTooLarge { size: usize },

    /// Analyze was requested with nothing selected
    #[error("select an image before analyzing")]
    NoImageSelected,

    /// A request is already outstanding
    #[error("an analysis is already running")]
    AnalysisInFlight,
}

/// The selection/analysis state machine
///
/// Transitions:
/// - `select` : Idle or Previewing -> Previewing (validated)
/// - `begin_analysis` : Previewing -> Analyzing
/// - `record_result` / `record_failure` : Analyzing -> Previewing
/// - `reset` : any non-analyzing state -> Idle
#[derive(Debug, Default)]
pub struct Workflow {
    /// The live selection, if any
    selected: Option<SelectedFile>,
    /// Text returned by the last successful analysis
    result: Option<String>,
    /// True while an analysis request is outstanding
    analyzing: bool,
}

impl Workflow {
    /// Create a fresh workflow in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a candidate before it is accepted
    ///
    /// Checks run in order: media type first, then size. A rejection here
    /// leaves whatever was previously selected untouched.
    pub fn validate(media_type: &str, size: usize) -> Result<(), WorkflowError> {
        if !media_type.starts_with("image/") {
            return Err(WorkflowError::InvalidFileType {
                media_type: media_type.to_string(),
            });
        }

        if size > MAX_IMAGE_BYTES {
            return Err(WorkflowError::FileTooLarge { size });
        }

        Ok(())
    }

    /// Accept a candidate as the new selection
    ///
    /// Replaces any previous selection and discards any previous analysis
    /// result. Rejected candidates leave the prior state untouched.
    pub fn select(&mut self, file: SelectedFile) -> Result<(), WorkflowError> {
        if self.analyzing {
            return Err(WorkflowError::AnalysisInFlight);
        }

        Self::validate(&file.media_type, file.size())?;

        self.selected = Some(file);
        self.result = None;
        Ok(())
    }

    /// The current selection, if any
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Whether an image is currently selected
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Mark the start of an analysis request
    ///
    /// Returns a copy of the selection for the caller to upload. Only one
    /// request may be outstanding at a time; a second trigger is rejected
    /// rather than racing two responses against each other.
    pub fn begin_analysis(&mut self) -> Result<SelectedFile, WorkflowError> {
        if self.analyzing {
            return Err(WorkflowError::AnalysisInFlight);
        }

        let file = self
            .selected
            .clone()
            .ok_or(WorkflowError::NoImageSelected)?;

        self.analyzing = true;
        self.result = None;
        Ok(file)
    }

    /// Whether an analysis request is outstanding
    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Store the text returned by a successful analysis
    pub fn record_result(&mut self, text: String) {
        self.analyzing = false;
        self.result = Some(text);
    }

    /// Note a failed analysis
    ///
    /// The selection and any preview stay intact so the user can retry.
    pub fn record_failure(&mut self) {
        self.analyzing = false;
    }

    /// The last analysis result, if one is displayed
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Return to the idle state: no selection, no result
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A well-formed candidate of the given size
    fn png_of_size(size: usize) -> SelectedFile {
        SelectedFile {
            filename: "photo.png".to_string(),
            media_type: "image/png".to_string(),
            bytes: vec![0u8; size],
        }
    }

    #[test]
    fn test_validate_rejects_non_image() {
        let result = Workflow::validate("application/pdf", 100);
        assert_eq!(
            result,
            Err(WorkflowError::InvalidFileType {
                media_type: "application/pdf".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_oversized() {
        // Exactly at the limit is fine, one byte over is not
        assert!(Workflow::validate("image/png", MAX_IMAGE_BYTES).is_ok());
        assert_eq!(
            Workflow::validate("image/png", MAX_IMAGE_BYTES + 1),
            Err(WorkflowError::FileTooLarge {
                size: MAX_IMAGE_BYTES + 1
            })
        );
    }

    #[test]
    fn test_oversized_rejected_regardless_of_type() {
        // The type check runs first, so only image types reach the size check
        assert_eq!(
            Workflow::validate("image/gif", MAX_IMAGE_BYTES + 1),
            Err(WorkflowError::FileTooLarge {
                size: MAX_IMAGE_BYTES + 1
            })
        );
    }

    #[test]
    fn test_select_accepts_valid_image() {
        let mut workflow = Workflow::new();

        workflow.select(png_of_size(1024)).unwrap();

        assert!(workflow.has_selection());
        assert_eq!(workflow.result(), None);
    }

    #[test]
    fn test_rejected_candidate_leaves_state_untouched() {
        let mut workflow = Workflow::new();
        workflow.select(png_of_size(1024)).unwrap();

        let bad = SelectedFile {
            filename: "notes.txt".to_string(),
            media_type: "text/plain".to_string(),
            bytes: vec![0u8; 16],
        };
        assert!(workflow.select(bad).is_err());

        // The earlier selection survives
        assert_eq!(workflow.selected().unwrap().filename, "photo.png");
    }

    #[test]
    fn test_new_selection_discards_previous_result() {
        let mut workflow = Workflow::new();
        workflow.select(png_of_size(1024)).unwrap();
        workflow.begin_analysis().unwrap();
        workflow.record_result("a red square".to_string());

        workflow.select(png_of_size(2048)).unwrap();

        assert_eq!(workflow.result(), None);
    }

    #[test]
    fn test_begin_analysis_without_selection() {
        let mut workflow = Workflow::new();

        assert_eq!(
            workflow.begin_analysis(),
            Err(WorkflowError::NoImageSelected)
        );
        assert!(!workflow.is_analyzing());
    }

    #[test]
    fn test_begin_analysis_guards_reentry() {
        let mut workflow = Workflow::new();
        workflow.select(png_of_size(1024)).unwrap();

        workflow.begin_analysis().unwrap();

        // Second trigger while the first is outstanding is rejected
        assert_eq!(
            workflow.begin_analysis(),
            Err(WorkflowError::AnalysisInFlight)
        );
        // So is a new selection
        assert_eq!(
            workflow.select(png_of_size(512)),
            Err(WorkflowError::AnalysisInFlight)
        );
    }

    #[test]
    fn test_result_recorded_verbatim() {
        let mut workflow = Workflow::new();
        workflow.select(png_of_size(1024)).unwrap();
        workflow.begin_analysis().unwrap();

        workflow.record_result("X".to_string());

        assert!(!workflow.is_analyzing());
        assert_eq!(workflow.result(), Some("X"));
    }

    #[test]
    fn test_failure_keeps_selection_for_retry() {
        let mut workflow = Workflow::new();
        workflow.select(png_of_size(1024)).unwrap();
        workflow.begin_analysis().unwrap();

        workflow.record_failure();

        assert!(!workflow.is_analyzing());
        assert!(workflow.has_selection());
        assert_eq!(workflow.result(), None);

        // Retry is possible immediately
        assert!(workflow.begin_analysis().is_ok());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut workflow = Workflow::new();
        workflow.select(png_of_size(1024)).unwrap();
        workflow.begin_analysis().unwrap();
        workflow.record_result("a cat".to_string());

        workflow.reset();

        assert!(!workflow.has_selection());
        assert_eq!(workflow.result(), None);
        assert!(!workflow.is_analyzing());
    }
}
