//! Application window management
//!
//! Wires the Slint window to the async controller.

use std::rc::Rc;

use dotalens_domain::MatchColumn;
use slint::{ComponentHandle, Image, ModelRc, Rgba8Pixel, SharedPixelBuffer, SharedString, VecModel};
use tokio::sync::mpsc;

use crate::bridge::{MatchRowData, ProfileLineData, UiCommand, UiUpdate};
use crate::controller::run_async_runtime;
use crate::{MainWindow, MatchRowItem, ProfileLine};

/// Application window wrapper with business logic bindings.
pub struct AppWindow {
    window: MainWindow,
}

impl AppWindow {
    /// Creates a new application window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new() -> Result<Self, slint::PlatformError> {
        let window = MainWindow::new()?;
        let ui_weak = window.as_weak();

        let titles: Vec<SharedString> = MatchColumn::ALL.iter().map(|c| c.title().into()).collect();
        window.set_column_titles(ModelRc::from(Rc::new(VecModel::from(titles))));

        // Create channels for UI <-> async communication
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();
        let (update_tx, mut update_rx) = mpsc::unbounded_channel::<UiUpdate>();

        let cmd_tx_search = cmd_tx.clone();
        let cmd_tx_header = cmd_tx;

        let ui_weak_search = ui_weak.clone();
        window.on_search(move |text: SharedString| {
            // Stays disabled until the runtime reports a final state
            if let Some(ui) = ui_weak_search.upgrade() {
                ui.set_is_loading(true);
            }
            let _ = cmd_tx_search.send(UiCommand::Search {
                player_id: text.to_string(),
            });
        });

        window.on_header_clicked(move |column| {
            let _ = cmd_tx_header.send(UiCommand::HeaderClicked { column });
        });

        // Spawn the async runtime in a separate thread
        std::thread::spawn(move || {
            run_async_runtime(cmd_rx, update_tx);
        });

        // Process UI updates on the main thread using a timer
        let ui_weak_update = ui_weak;
        let timer = slint::Timer::default();
        timer.start(
            slint::TimerMode::Repeated,
            std::time::Duration::from_millis(16),
            move || {
                while let Ok(update) = update_rx.try_recv() {
                    if let Some(ui) = ui_weak_update.upgrade() {
                        apply_update(&ui, update);
                    }
                }
            },
        );

        // The timer runs for the lifetime of the application
        std::mem::forget(timer);

        Ok(Self { window })
    }

    /// Runs the application event loop.
    ///
    /// This method blocks until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop fails.
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        self.window.run()
    }

    /// Returns a reference to the underlying Slint window.
    #[must_use]
    pub const fn window(&self) -> &MainWindow {
        &self.window
    }
}

/// Applies a UI update to the Slint window.
fn apply_update(ui: &MainWindow, update: UiUpdate) {
    match update {
        UiUpdate::State(state) => {
            ui.set_is_loading(state.is_loading());
            ui.set_status_text(state.status_text().into());
        }

        UiUpdate::Profile { lines, avatar } => {
            let items: Vec<ProfileLine> = lines.into_iter().map(profile_line_to_slint).collect();
            ui.set_profile_lines(ModelRc::from(Rc::new(VecModel::from(items))));

            match avatar {
                Some(avatar) => {
                    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
                        &avatar.rgba,
                        avatar.width,
                        avatar.height,
                    );
                    ui.set_avatar(Image::from_rgba8(buffer));
                    ui.set_has_avatar(true);
                }
                None => {
                    ui.set_avatar(Image::default());
                    ui.set_has_avatar(false);
                }
            }
        }

        UiUpdate::MatchRows(rows) => {
            let items: Vec<MatchRowItem> = rows.into_iter().map(match_row_to_slint).collect();
            ui.set_match_rows(ModelRc::from(Rc::new(VecModel::from(items))));
        }

        UiUpdate::SortIndicator { column, ascending } => {
            ui.set_sort_column(column);
            ui.set_sort_ascending(ascending);
        }

        UiUpdate::Error { title, message } => {
            ui.set_error_title(title.into());
            ui.set_error_message(message.into());
            ui.set_error_visible(true);
        }
    }
}

fn profile_line_to_slint(line: ProfileLineData) -> ProfileLine {
    ProfileLine {
        label: line.label.into(),
        value: line.value.into(),
    }
}

fn match_row_to_slint(row: MatchRowData) -> MatchRowItem {
    MatchRowItem {
        match_id: row.match_id.into(),
        hero: row.hero.into(),
        duration: row.duration.into(),
        result: row.result.into(),
    }
}
