use std::future::Future;
use std::time::Duration;

use forge_store::StoreEvent;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::broadcast;

use crate::ui;

pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Drive `action` while following its store's notifications: a spinner is
/// shown while the store is Loading and `Failed` events print as notices.
pub async fn track<T>(
    mut events: broadcast::Receiver<StoreEvent>,
    message: &str,
    action: impl Future<Output = T>,
) -> T {
    tokio::pin!(action);
    let mut spinner: Option<Progress> = None;

    loop {
        tokio::select! {
            result = &mut action => {
                while let Ok(event) = events.try_recv() {
                    on_event(event, message, &mut spinner);
                }
                if let Some(spinner) = spinner.take() {
                    spinner.finish_clear();
                }
                return result;
            }
            Ok(event) = events.recv() => on_event(event, message, &mut spinner),
        }
    }
}

fn on_event(event: StoreEvent, message: &str, spinner: &mut Option<Progress>) {
    match event {
        StoreEvent::Loading { .. } => {
            if spinner.is_none() {
                *spinner = Some(Progress::spinner(message));
            }
        }
        StoreEvent::Failed { domain, message } => {
            if let Some(spinner) = spinner.take() {
                spinner.finish_clear();
            }
            if ui::prefs().notices {
                eprintln!("notice: {domain} store: {message}");
            }
        }
        StoreEvent::Created { .. } | StoreEvent::Updated { .. } => {
            if let Some(spinner) = spinner.take() {
                spinner.finish_clear();
            }
        }
        StoreEvent::Deleted { .. } | StoreEvent::Reset { .. } => {}
    }
}
