//! Checks what verification writes to the log.

use std::io;
use std::sync::{Arc, Mutex};

use portcullis::{keys, sign, Metadata, SigningKey, Verifier};

const SECRET: &str = "log-test-secret";

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let buf = self.0.lock().expect("log buffer lock");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

fn metadata() -> Metadata {
    [
        (keys::user_id_key(), "u-77"),
        (keys::app_vendor_key(), "acme"),
        (keys::app_id_key(), "crm"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn rejection_is_logged_without_secrets() {
    let mut md = metadata();
    md.insert(keys::signature_key(), "0".repeat(64));

    let logs = capture_logs(|| {
        assert!(Verifier::new(SECRET).authenticate(Some(&md)).is_err());
    });

    assert!(logs.contains("rejecting call with invalid claims signature"));
    assert!(logs.contains("u-77"));
    assert!(logs.contains("acme/crm"));
    assert!(!logs.contains(SECRET));
    assert!(!logs.contains(&"0".repeat(64)));
}

#[test]
fn acceptance_is_logged_without_signature() {
    let mut md = metadata();
    let sig = sign(Some(&md), &SigningKey::new(SECRET));
    md.insert(keys::signature_key(), sig.clone());

    let logs = capture_logs(|| {
        assert!(Verifier::new(SECRET).authenticate(Some(&md)).is_ok());
    });

    assert!(logs.contains("claims signature verified"));
    assert!(!logs.contains(&sig));
    assert!(!logs.contains(SECRET));
}
