//! Toaster runtime setup and orchestration.
//!
//! This module wires together configuration, the toast stack, and the loop
//! that listens to application commands and expires toasts on a timer.

use std::thread::{self, JoinHandle};
use std::time::Instant;

use herald_bridge::config::ToastConfig;
use herald_bridge::{ToastCommand, ToastEvent};
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::MissedTickBehavior;

use crate::app::ToasterContext;
use crate::stack::ToastStack;

/// Process commands and timer ticks until the command channel closes.
async fn run_toaster(
    mut rx: Receiver<ToastCommand>,
    tx: Sender<ToastEvent>,
    config: ToastConfig,
    render: bool,
) {
    let mut interval = tokio::time::interval(config.tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut context = ToasterContext {
        stack: ToastStack::new(config),
        tx,
    };

    loop {
        let changed = tokio::select! {
            command = rx.recv() => match command {
                Some(command) => {
                    log::debug!("Got a toast command: {command:?}");
                    context.dispatch_command(command, Instant::now())
                }
                None => break,
            },
            _ = interval.tick() => context.tick(Instant::now()),
        };

        if changed && render {
            context.render(Instant::now());
        }
    }

    log::info!("Command channel closed, shutting down toaster");
}

/// Spawn the toaster runtime on its own thread and begin processing
/// commands. The stack is printed to stdout whenever it changes.
///
/// The thread exits once every sender of the command channel is dropped.
pub fn run(
    rx: Receiver<ToastCommand>,
    tx: Sender<ToastEvent>,
    config: ToastConfig,
) -> std::io::Result<JoinHandle<()>> {
    spawn(rx, tx, config, true)
}

/// Same as [`run`], without printing the stack.
pub fn run_headless(
    rx: Receiver<ToastCommand>,
    tx: Sender<ToastEvent>,
    config: ToastConfig,
) -> std::io::Result<JoinHandle<()>> {
    spawn(rx, tx, config, false)
}

fn spawn(
    rx: Receiver<ToastCommand>,
    tx: Sender<ToastEvent>,
    config: ToastConfig,
    render: bool,
) -> std::io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("toaster".to_string())
        .spawn(move || runtime.block_on(run_toaster(rx, tx, config, render)))
}
