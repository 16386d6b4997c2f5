//! Application window management
//!
//! Wires the Slint window to the async runtime: button callbacks enqueue
//! `UiCommand`s, a background Tokio runtime performs the network work, and
//! `UiUpdate`s are drained back onto the UI thread by a repeating timer.

use std::sync::Arc;
use std::time::Duration;

use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use spotter_application::{
    CancellationToken, ClockDisplay, FetchOwnIp, GeolocateIp, ListVisits, LoadIcons,
};
use spotter_domain::{IconState, ProviderSettings, VisitListing};
use spotter_infrastructure::{
    HttpIconFetcher, IpifyEchoClient, IpinfoGeolocator, RestVisitStore, SettingsRepository,
    SystemClock,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::MainWindow;
use crate::bridge::{UiCommand, UiUpdate};

/// Interval at which queued updates are applied to the window.
const UPDATE_DRAIN_INTERVAL: Duration = Duration::from_millis(16);

/// Interval of the clock label refresh.
const CLOCK_TICK: Duration = Duration::from_secs(1);

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

        // Create channels for UI <-> async communication
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();
        let (update_tx, mut update_rx) = mpsc::unbounded_channel::<UiUpdate>();

        // Set up UI callbacks
        let cmd_tx_own_ip = cmd_tx.clone();
        window.on_fetch_own_ip(move || {
            let _ = cmd_tx_own_ip.send(UiCommand::FetchOwnIp);
        });

        let cmd_tx_geolocate = cmd_tx.clone();
        window.on_geolocate(move |input| {
            let _ = cmd_tx_geolocate.send(UiCommand::Geolocate {
                input: input.to_string(),
            });
        });

        let cmd_tx_visits = cmd_tx;
        window.on_refresh_visits(move || {
            let _ = cmd_tx_visits.send(UiCommand::RefreshVisits);
        });

        // Spawn the async runtime in a separate thread
        std::thread::spawn(move || {
            run_async_runtime(cmd_rx, update_tx);
        });

        // Process UI updates on the main thread using a timer
        let ui_weak = window.as_weak();
        let timer = slint::Timer::default();
        timer.start(slint::TimerMode::Repeated, UPDATE_DRAIN_INTERVAL, move || {
            while let Ok(update) = update_rx.try_recv() {
                if let Some(ui) = ui_weak.upgrade() {
                    apply_update(&ui, update);
                }
            }
        });

        // The timer must outlive this scope to keep draining updates
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
}

/// Per-action cancellation slots managed by the async runtime.
///
/// Re-triggering an action cancels its previous in-flight instance, so a
/// display region never has two writers.
#[derive(Default)]
struct AppState {
    own_ip_cancel: Option<CancellationToken>,
    geo_cancel: Option<CancellationToken>,
    visits_cancel: Option<CancellationToken>,
}

/// Runs the async runtime handling all network actions.
fn run_async_runtime(
    mut cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
    update_tx: mpsc::UnboundedSender<UiUpdate>,
) {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    rt.block_on(async move {
        // Load provider settings: file, then environment overrides
        let settings_repo = SettingsRepository::new();
        let mut settings = settings_repo.load().await.unwrap_or_else(|error| {
            warn!(%error, "failed to load settings, using defaults");
            ProviderSettings::default()
        });
        SettingsRepository::apply_env_overrides(&mut settings);
        if let Err(error) = settings.validate() {
            warn!(%error, "invalid provider settings, using defaults");
            settings = ProviderSettings::default();
        }

        // Initialize infrastructure and use cases
        let echo_client = IpifyEchoClient::new(settings.ip_echo_url.clone())
            .expect("Failed to create HTTP client");
        let fetch_own_ip = Arc::new(FetchOwnIp::new(Arc::new(echo_client)));

        let geolocator = IpinfoGeolocator::new(
            settings.geolocation_url.clone(),
            settings.geolocation_token.clone(),
        )
        .expect("Failed to create HTTP client");
        let geolocate = Arc::new(GeolocateIp::new(Arc::new(geolocator)));

        let list_visits = settings.visit_store_url.clone().map(|url| {
            let store = RestVisitStore::new(url, settings.visit_store_token.clone())
                .expect("Failed to create HTTP client");
            Arc::new(ListVisits::new(Arc::new(store)))
        });

        let clock_display = ClockDisplay::new(Arc::new(SystemClock::new()));

        // Clock tick: once per second, no network
        let clock_tx = update_tx.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(CLOCK_TICK);
            loop {
                ticker.tick().await;
                if clock_tx
                    .send(UiUpdate::Clock(clock_display.current()))
                    .is_err()
                {
                    break;
                }
            }
        });

        // Icon strip: fetched once at startup, purely cosmetic
        let load_icons = LoadIcons::new(Arc::new(
            HttpIconFetcher::new().expect("Failed to create HTTP client"),
        ));
        let icon_sources = settings.icon_sources();
        let icons_tx = update_tx.clone();
        tokio::spawn(async move {
            let states = load_icons.execute(&icon_sources).await;
            let labels = states.iter().map(IconState::label).collect();
            let _ = icons_tx.send(UiUpdate::Icons(labels));
        });

        let mut state = AppState::default();

        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                UiCommand::FetchOwnIp => {
                    let (token, mut cancel) = CancellationToken::new();
                    if let Some(previous) = state.own_ip_cancel.replace(token) {
                        previous.cancel();
                    }
                    let use_case = Arc::clone(&fetch_own_ip);
                    let tx = update_tx.clone();
                    tokio::spawn(async move {
                        tokio::select! {
                            report = use_case.execute() => {
                                let _ = tx.send(UiUpdate::OwnIp(report.display()));
                            }
                            () = cancel.cancelled() => {
                                debug!("own-ip lookup cancelled");
                            }
                        }
                    });
                }

                UiCommand::Geolocate { input } => {
                    let (token, mut cancel) = CancellationToken::new();
                    if let Some(previous) = state.geo_cancel.replace(token) {
                        previous.cancel();
                    }
                    let use_case = Arc::clone(&geolocate);
                    let tx = update_tx.clone();
                    tokio::spawn(async move {
                        tokio::select! {
                            report = use_case.execute(&input) => {
                                let _ = tx.send(UiUpdate::Geolocation {
                                    headline: report.headline(),
                                    detail: report.detail(),
                                });
                            }
                            () = cancel.cancelled() => {
                                debug!("geolocation cancelled");
                            }
                        }
                    });
                }

                UiCommand::RefreshVisits => {
                    if let Some(use_case) = &list_visits {
                        let (token, mut cancel) = CancellationToken::new();
                        if let Some(previous) = state.visits_cancel.replace(token) {
                            previous.cancel();
                        }
                        let use_case = Arc::clone(use_case);
                        let tx = update_tx.clone();
                        tokio::spawn(async move {
                            tokio::select! {
                                result = use_case.execute() => {
                                    let listing = match result {
                                        Ok(records) => VisitListing::from_records(records),
                                        Err(error) => {
                                            warn!(%error, "visits listing failed");
                                            VisitListing::Failed
                                        }
                                    };
                                    let _ = tx.send(UiUpdate::Visits {
                                        entries: listing.entries(),
                                        placeholder_visible: listing.placeholder_visible(),
                                    });
                                }
                                () = cancel.cancelled() => {
                                    debug!("visits listing cancelled");
                                }
                            }
                        });
                    } else {
                        warn!("visit store not configured; set SPOTTER_VISIT_STORE_URL");
                        let listing = VisitListing::Failed;
                        let _ = update_tx.send(UiUpdate::Visits {
                            entries: listing.entries(),
                            placeholder_visible: listing.placeholder_visible(),
                        });
                    }
                }
            }
        }
    });
}

/// Applies one update to its display region.
fn apply_update(ui: &MainWindow, update: UiUpdate) {
    match update {
        UiUpdate::Clock(text) => ui.set_clock_text(text.into()),

        UiUpdate::OwnIp(text) => ui.set_own_ip_text(text.into()),

        UiUpdate::Geolocation { headline, detail } => {
            ui.set_geo_headline(headline.into());
            ui.set_geo_detail(detail.into());
        }

        UiUpdate::Visits {
            entries,
            placeholder_visible,
        } => {
            let rows: Vec<SharedString> = entries.into_iter().map(SharedString::from).collect();
            ui.set_visit_entries(ModelRc::new(VecModel::from(rows)));
            ui.set_placeholder_visible(placeholder_visible);
        }

        UiUpdate::Icons(labels) => {
            let labels: Vec<SharedString> = labels.into_iter().map(SharedString::from).collect();
            ui.set_icon_labels(ModelRc::new(VecModel::from(labels)));
        }
    }
}
