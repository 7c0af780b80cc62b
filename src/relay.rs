//! Delivery of contact messages to the third-party form relay.

use std::future::Future;

use gloo_net::http::Request;
use log::{info, warn};

use crate::error::PortfolioError;
use crate::state::contact::ContactForm;

pub trait FormRelay {
    /// Deliver one message. No retries.
    fn submit(&self, form: &ContactForm) -> impl Future<Output = Result<(), PortfolioError>>;
}

/// `application/x-www-form-urlencoded` body for the relay.
pub fn encode_form(form: &ContactForm) -> String {
    form.fields()
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Formspree-style endpoint: form-encoded POST, JSON reply.
#[derive(Debug, Clone)]
pub struct FormspreeRelay {
    endpoint: String,
}

impl FormspreeRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl FormRelay for FormspreeRelay {
    async fn submit(&self, form: &ContactForm) -> Result<(), PortfolioError> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(encode_form(form))
            .map_err(|e| PortfolioError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                warn!("Form relay unreachable: {}", e);
                PortfolioError::Network(e.to_string())
            })?;

        if !response.ok() {
            warn!("Form relay returned {}", response.status());
            return Err(PortfolioError::Relay {
                status: response.status(),
            });
        }

        // A 2xx without a JSON body is not a confirmed delivery
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| PortfolioError::Network(format!("Unreadable relay response: {}", e)))?;
        info!("Contact message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::state::contact::{ContactFlow, SubmitStatus};

    struct MockRelay {
        calls: Cell<usize>,
        received: RefCell<Vec<ContactForm>>,
        fail_with: Option<u16>,
    }

    impl MockRelay {
        fn succeeding() -> Self {
            Self {
                calls: Cell::new(0),
                received: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_with: Some(status),
                ..Self::succeeding()
            }
        }
    }

    impl FormRelay for MockRelay {
        async fn submit(&self, form: &ContactForm) -> Result<(), PortfolioError> {
            self.calls.set(self.calls.get() + 1);
            self.received.borrow_mut().push(form.clone());
            match self.fail_with {
                Some(status) => Err(PortfolioError::Relay { status }),
                None => Ok(()),
            }
        }
    }

    /// Same steps the contact form component runs on submit.
    fn submit<R: FormRelay>(flow: &mut ContactFlow, relay: &R) -> Option<u64> {
        let payload = flow.begin_submit()?;
        assert_eq!(flow.status, SubmitStatus::Submitting);
        let result = block_on(relay.submit(&payload));
        flow.complete(result)
    }

    fn filled_flow() -> ContactFlow {
        ContactFlow::new(7).with_draft(ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build an engine together.".to_string(),
        })
    }

    #[test]
    fn test_empty_name_issues_no_request() {
        let relay = MockRelay::succeeding();
        let mut flow = filled_flow();
        flow.form.name.clear();

        submit(&mut flow, &relay);

        assert_eq!(relay.calls.get(), 0, "Invalid form must not reach the relay");
        assert!(flow.errors.name.is_some());
        assert_eq!(flow.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_successful_submission_lifecycle() {
        let relay = MockRelay::succeeding();
        let mut flow = filled_flow();
        let sent = flow.form.clone();

        let ticket = submit(&mut flow, &relay).expect("delivered");

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.received.borrow()[0], sent);
        assert_eq!(flow.status, SubmitStatus::Submitted);
        assert_eq!(flow.form, ContactForm::default(), "Fields reset after success");

        assert_eq!(flow.reset_after_ms(), 7_000);
        assert!(flow.expire_success(ticket), "Reverts when the 7 second timer fires");
        assert_eq!(flow.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let relay = MockRelay::failing(500);
        let mut flow = filled_flow();
        let sent = flow.form.clone();

        submit(&mut flow, &relay);

        assert_eq!(relay.calls.get(), 1, "No retry after a failure");
        assert_eq!(flow.status, SubmitStatus::Idle);
        assert_eq!(flow.form, sent);
        assert!(flow.notice.as_deref().is_some_and(|n| n.contains("could not be sent")));
    }

    #[test]
    fn test_encode_form_escapes_values() {
        let form = ContactForm {
            name: "Ada & Charles".to_string(),
            email: "ada+notes@example.com".to_string(),
            message: "Hi there!\nLine two = yes".to_string(),
        };
        assert_eq!(
            encode_form(&form),
            "name=Ada%20%26%20Charles&email=ada%2Bnotes%40example.com&message=Hi%20there%21%0ALine%20two%20%3D%20yes"
        );
    }
}
