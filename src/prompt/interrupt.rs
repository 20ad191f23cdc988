use tokio::sync::watch;

/// Receiving side of the shutdown signal. Cloned into every prompter.
#[derive(Clone)]
pub struct Interrupt {
    rx: watch::Receiver<bool>,
}

/// Sending side of the shutdown signal.
pub struct InterruptTrigger {
    tx: watch::Sender<bool>,
}

impl Interrupt {
    pub fn channel() -> (InterruptTrigger, Interrupt) {
        let (tx, rx) = watch::channel(false);
        (InterruptTrigger { tx }, Interrupt { rx })
    }

    /// An interrupt that never fires.
    pub fn never() -> Self {
        Self::channel().1
    }

    pub fn is_fired(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the trigger fires. If the trigger is dropped without
    /// firing this never resolves.
    pub async fn fired(&mut self) {
        if self.rx.wait_for(|fired| *fired).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl InterruptTrigger {
    pub fn fire(&self) {
        self.tx.send_replace(true);
    }
}

/// Spawn a task that fires the returned [`Interrupt`] on Ctrl-C, or SIGTERM
/// on unix. Must be called from inside a tokio runtime.
///
/// The signal handlers stay registered for the rest of the process, so a
/// second signal while the list is being saved is absorbed.
pub fn listen_for_signals() -> Interrupt {
    let (trigger, interrupt) = Interrupt::channel();
    tokio::spawn(async move {
        if wait_for_signal().await {
            tracing::info!("Received shutdown signal");
            trigger.fire();
        }
    });
    interrupt
}

#[cfg(unix)]
async fn wait_for_signal() -> bool {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to listen for SIGTERM");
            return wait_for_ctrl_c().await;
        }
    };

    tokio::select! {
        interrupted = wait_for_ctrl_c() => interrupted,
        _ = terminate.recv() => true,
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> bool {
    wait_for_ctrl_c().await
}

async fn wait_for_ctrl_c() -> bool {
    match tokio::signal::ctrl_c().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            false
        }
    }
}
