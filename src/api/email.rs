//! Welcome email delivery abstraction.
//!
//! Signup hands the welcome email to a detached task after the response is
//! committed. Delivery is best effort: a failure is logged and never
//! changes the already-sent response or the created account.

use anyhow::Result;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Email delivery abstraction used by the signup flow.
pub trait Mailer: Send + Sync {
    /// Deliver a welcome email or return an error to be logged.
    ///
    /// # Errors
    /// Returns an error when delivery fails.
    fn send_welcome(&self, email: &str, full_name: &str, client_url: &str) -> Result<()>;
}

/// Local dev mailer that logs the message instead of sending real email.
#[derive(Clone, Debug)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send_welcome(&self, email: &str, full_name: &str, client_url: &str) -> Result<()> {
        info!(
            to_email = %email,
            full_name = %full_name,
            client_url = %client_url,
            "welcome email send stub"
        );
        Ok(())
    }
}

/// Spawn the welcome email send as a detached task.
pub fn spawn_welcome_email(
    mailer: std::sync::Arc<dyn Mailer>,
    email: String,
    full_name: String,
    client_url: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = mailer.send_welcome(&email, &full_name, &client_url) {
            error!("failed to send welcome email: {err:?}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct CountingMailer {
        sent: AtomicUsize,
    }

    impl Mailer for CountingMailer {
        fn send_welcome(&self, _email: &str, _full_name: &str, _client_url: &str) -> Result<()> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingMailer;

    impl Mailer for FailingMailer {
        fn send_welcome(&self, _email: &str, _full_name: &str, _client_url: &str) -> Result<()> {
            anyhow::bail!("smtp unreachable")
        }
    }

    #[tokio::test]
    async fn welcome_email_is_delivered_in_background() {
        let mailer = Arc::new(CountingMailer {
            sent: AtomicUsize::new(0),
        });
        let handle = spawn_welcome_email(
            mailer.clone(),
            "ada@example.com".to_string(),
            "Ada Lovelace".to_string(),
            "http://localhost:5173".to_string(),
        );
        handle.await.unwrap();
        assert_eq!(mailer.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn delivery_failure_does_not_panic_the_task() {
        let handle = spawn_welcome_email(
            Arc::new(FailingMailer),
            "ada@example.com".to_string(),
            "Ada Lovelace".to_string(),
            "http://localhost:5173".to_string(),
        );
        assert!(handle.await.is_ok());
    }
}
