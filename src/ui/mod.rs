/// User interface module
///
/// Pure view construction: every function here takes state and returns an
/// iced element. All state transitions happen in the update loop; nothing
/// in this module mutates anything.

pub mod notifications;
pub mod panels;
