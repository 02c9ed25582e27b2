//! File browsing handlers.

use std::path::PathBuf;

use iced::Task;

use crate::app::{App, Message};

/// Extensions offered by the "Video Files" filter.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "webm", "m4v", "ts", "m2ts", "mpg", "mpeg", "wmv", "flv",
];

impl App {
    /// Open the multi-select dialog for up to three videos.
    pub fn browse_videos(&self) -> Task<Message> {
        let start_dir = self.config.open_dir();

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title("Select 3 Files")
                    .add_filter("Video Files", VIDEO_EXTENSIONS)
                    .add_filter("All Files", &["*"]);
                if let Some(dir) = start_dir {
                    dialog = dialog.set_directory(dir);
                }

                dialog
                    .pick_files()
                    .await
                    .map(|files| files.into_iter().map(|f| f.path().to_path_buf()).collect())
                    .unwrap_or_default()
            },
            Message::FilesSelected,
        )
    }

    /// Hand the chosen files to the player and remember their directory.
    pub fn handle_files_selected(&mut self, paths: Vec<PathBuf>) {
        let report = self.player.open_files(&paths);
        if report.is_empty() {
            return;
        }

        tracing::info!(
            "Opened {} file(s), {} failed, {} ignored",
            report.loaded.len(),
            report.failed.len(),
            report.ignored.len()
        );

        let Some(dir) = self.player.last_directory().map(PathBuf::from) else {
            return;
        };
        if let Err(e) = self.config.remember_open_dir(&dir) {
            tracing::warn!("Failed to save last directory: {}", e);
        }
    }
}
