mod input;

use std::io::BufRead;
use std::thread;

use herald_bridge::{BridgeChannels, ToastEvent};
use herald_facade::{ChannelProvider, Notifier};
use tokio::sync::mpsc::Receiver;

use crate::input::{Input, parse_line};

/// Logs events coming back from the toast stack until it shuts down.
fn spawn_event_listener(mut rx: Receiver<ToastEvent>) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("toast-events".to_string())
        .spawn(move || {
            while let Some(event) = rx.blocking_recv() {
                match event {
                    ToastEvent::ActionInvoked { id, key } => {
                        log::info!("Action `{key}` invoked from toast {id}");
                    }
                    other => log::debug!("Toast event: {other:?}"),
                }
            }
        })
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()?;

    let config = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(herald_toaster::config::load_config())
    {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using default configuration: {e}");
            Default::default()
        }
    };

    let channels = BridgeChannels::new(config.channel_capacity.max(1));
    let toaster = herald_toaster::run(channels.toaster_rx, channels.toaster_tx, config.toasts)?;
    let listener = spawn_event_listener(channels.app_rx)?;

    let control = channels.app_tx;
    let notifier = Notifier::new(ChannelProvider::new(control.clone()));
    notifier.success("herald", "Type a notification, or /quit to exit.");

    for line in std::io::stdin().lock().lines() {
        match parse_line(&line?) {
            Ok(Input::Notify(request)) => notifier.notify(request),
            Ok(Input::Control(command)) => {
                if control.blocking_send(command).is_err() {
                    log::error!("Toast provider is gone");
                    break;
                }
            }
            Ok(Input::Quit) => break,
            Ok(Input::Nothing) => {}
            Err(e) => log::warn!("{e}"),
        }
    }

    drop(notifier);
    drop(control);
    if toaster.join().is_err() {
        log::error!("Toaster thread panicked");
    }
    if listener.join().is_err() {
        log::error!("Toast event listener thread panicked");
    }

    Ok(())
}
