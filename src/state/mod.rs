/// State management module
///
/// This module handles all application state, independent of rendering:
/// - Selection/analysis workflow state machine (workflow.rs)
/// - Transient notification stack (notification.rs)

pub mod notification;
pub mod workflow;
