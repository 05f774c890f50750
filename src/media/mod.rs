/// Image candidate handling module
///
/// This module handles:
/// - Reading a picked or dropped file and deriving its media type (inspect.rs)
/// - Decoding accepted bytes into a displayable preview (preview.rs)

pub mod inspect;
pub mod preview;
