// src/ports/alert.rs
use tracing::debug;

/// Blocking, user-visible notification of a failed operation.
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr, the terminal counterpart of a browser alert box.
#[derive(Debug, Default)]
pub struct ConsoleAlert;

impl Alert for ConsoleAlert {
    fn alert(&self, message: &str) {
        debug!(%message, "Alert raised");
        eprintln!("Error: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records the level of every event it sees.
    struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for LevelRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().expect("levels lock").push(*event.metadata().level());
        }
    }

    #[test]
    fn given_console_alert_when_alerting_then_logs_below_default_level() {
        // Arrange
        let levels = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(LevelRecorder(levels.clone()));

        // Act
        tracing::subscriber::with_default(subscriber, || ConsoleAlert.alert("boom"));

        // Assert
        let levels = levels.lock().expect("levels lock");
        assert_eq!(*levels, vec![Level::DEBUG]);
    }
}
