#![allow(dead_code)]

use std::sync::Once;

use tcheck::Recorder;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn last_message(recorder: &Recorder) -> String {
    recorder.last_message().unwrap_or_default()
}
