//! Async side of the UI bridge.
//!
//! Receives [`UiCommand`]s from the Slint thread, runs them against the
//! statistics API and answers with [`UiUpdate`]s.

use std::sync::Arc;

use dotalens_application::{ApplicationError, SearchOutcome, SearchPlayer, StatsApi};
use dotalens_domain::{ClientSettings, INVALID_PLAYER_MESSAGE, SearchErrorKind, SearchState};
use dotalens_infrastructure::{OpenDotaClient, SettingsRepository, decode_avatar};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::bridge::{ProfileLineData, UiCommand, UiUpdate};
use crate::state::MatchTableState;

/// Handles commands for one window.
///
/// Commands are processed one at a time, so a search never overlaps another
/// and header clicks always act on the rows of the last finished search.
pub struct SearchController<A: StatsApi> {
    search: SearchPlayer<A>,
    table: MatchTableState,
    settled: SearchState,
    update_tx: mpsc::UnboundedSender<UiUpdate>,
}

impl<A: StatsApi> SearchController<A> {
    /// Creates a controller sending updates to `update_tx`.
    pub fn new(search: SearchPlayer<A>, update_tx: mpsc::UnboundedSender<UiUpdate>) -> Self {
        Self {
            search,
            table: MatchTableState::new(),
            settled: SearchState::Idle,
            update_tx,
        }
    }

    /// Processes a single command.
    pub async fn handle(&mut self, command: UiCommand) {
        match command {
            UiCommand::Search { player_id } => self.handle_search(&player_id).await,
            UiCommand::HeaderClicked { column } => self.handle_header_clicked(column),
        }
    }

    async fn handle_search(&mut self, input: &str) {
        let input = input.trim();
        info!(input, "Search requested");
        self.send(UiUpdate::State(SearchState::loading(input)));

        match self.search.execute(input).await {
            Ok(SearchOutcome::Found(report)) => {
                let avatar = report.avatar.as_deref().and_then(|bytes| {
                    decode_avatar(bytes)
                        .map_err(|e| warn!(error = %e, "Could not decode avatar"))
                        .ok()
                });
                let lines = report
                    .profile
                    .fields()
                    .into_iter()
                    .map(ProfileLineData::from)
                    .collect();
                self.send(UiUpdate::Profile { lines, avatar });

                if let Some(e) = report.history_error {
                    self.fail(&ApplicationError::from(e));
                    return;
                }

                let match_count = if let Some(rows) = report.matches {
                    self.table.replace_rows(rows);
                    self.send(UiUpdate::MatchRows(self.table.row_data()));
                    self.send(UiUpdate::sort_indicator(self.table.sort()));
                    Some(self.table.len())
                } else {
                    None
                };

                self.settle(SearchState::Loaded { match_count });
            }
            Ok(SearchOutcome::InvalidPlayer) => {
                self.send(UiUpdate::Error {
                    title: SearchErrorKind::InvalidPlayer.title().to_string(),
                    message: INVALID_PLAYER_MESSAGE.to_string(),
                });
                // Status line goes back to what the previous search left
                self.settle(self.settled.clone());
            }
            Err(e) => self.fail(&e),
        }
    }

    fn fail(&mut self, error: &ApplicationError) {
        let kind = error.kind();
        warn!(error = %error, ?kind, "Search failed");
        self.send(UiUpdate::Error {
            title: kind.title().to_string(),
            message: error.to_string(),
        });
        self.settle(SearchState::error(kind, error.to_string()));
    }

    fn settle(&mut self, state: SearchState) {
        self.settled = state.clone();
        self.send(UiUpdate::State(state));
    }

    fn handle_header_clicked(&mut self, column: i32) {
        if let Some(order) = self.table.header_clicked(column) {
            debug!(column, ?order, "Sorted match table");
            self.send(UiUpdate::MatchRows(self.table.row_data()));
            self.send(UiUpdate::sort_indicator(self.table.sort()));
        }
    }

    fn send(&self, update: UiUpdate) {
        if self.update_tx.send(update).is_err() {
            debug!("UI update channel closed");
        }
    }
}

/// Runs the async runtime on the current thread until the command channel
/// closes.
pub fn run_async_runtime(
    mut cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
    update_tx: mpsc::UnboundedSender<UiUpdate>,
) {
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return;
        }
    };

    rt.block_on(async move {
        let settings = load_settings().await;

        let client = match OpenDotaClient::new(&settings) {
            Ok(client) => client,
            Err(e) => {
                error!(error = %e, "Failed to create statistics client");
                let _ = update_tx.send(UiUpdate::Error {
                    title: e.to_error_kind().title().to_string(),
                    message: e.to_string(),
                });
                return;
            }
        };

        info!(base_url = %settings.api_base_url, "Statistics client ready");
        let search = SearchPlayer::new(Arc::new(client))
            .with_match_limit(settings.match_history_limit);
        let mut controller = SearchController::new(search, update_tx);

        while let Some(command) = cmd_rx.recv().await {
            controller.handle(command).await;
        }

        debug!("Command channel closed, stopping runtime");
    });
}

async fn load_settings() -> ClientSettings {
    let repository = SettingsRepository::new();
    if let Err(e) = repository.init_if_missing().await {
        warn!(error = %e, "Could not write default settings");
    }

    match repository.load_with_env().await {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "Failed to load settings, using defaults");
            ClientSettings::default()
        }
    }
}
