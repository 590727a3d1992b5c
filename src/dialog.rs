// Interactive front end: native folder pickers and modal message dialogs

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

const DIALOG_TITLE: &str = "hbbatch";

/// Prompt for the directory holding the videos to encode.
/// Returns `None` when the user cancels the dialog.
pub fn pick_input_directory() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Pick Video Directory")
        .pick_folder()
}

/// Prompt for the directory the encodes land in.
pub fn pick_output_directory() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Pick Output Directory")
        .pick_folder()
}

pub fn show_error(message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(DIALOG_TITLE)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_info(message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(DIALOG_TITLE)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
