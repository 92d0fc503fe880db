use std::sync::{Arc, Mutex};
use submitter::core::Severity;

/// Notifications received by [`Recorder::sink`].
#[derive(Clone, Default)]
pub struct Recorder {
    pub notifications: Arc<Mutex<Vec<(String, Severity)>>>,
}

impl Recorder {
    pub fn sink(&self) -> impl Fn(&str, Severity) + Send + Sync + 'static {
        let notifications = self.notifications.clone();
        move |message: &str, severity: Severity| {
            notifications
                .lock()
                .unwrap()
                .push((message.to_string(), severity));
        }
    }

    pub fn received(&self) -> Vec<(String, Severity)> {
        self.notifications.lock().unwrap().clone()
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
