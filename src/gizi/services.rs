use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard,
};

use tracing::{debug, error, info, warn};

use super::{
    client::GiziClient,
    dto::{AnalysisResult, RawFormInputs},
    page::PageView,
    render::{error_block, render_results, CONNECTION_ERROR},
    validate::ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Inputs failed validation; nothing was sent and the page is unchanged.
    Rejected(ValidationError),
    /// Another submit is still in flight; ignored.
    Busy,
    /// The endpoint answered and its body was rendered.
    Rendered,
    /// Transport or decode failure; the connection error message was rendered.
    ConnectionFailed,
}

/// Drives one nutrition check page: validation, loading state, request, rendering.
pub struct CheckController {
    client: Arc<dyn GiziClient>,
    page: Mutex<PageView>,
    // shared by every controller of one service instance
    in_flight: Arc<AtomicBool>,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CheckController {
    #[cfg(test)]
    pub fn new(client: Arc<dyn GiziClient>, page: PageView) -> Self {
        Self::with_slot(client, Arc::new(AtomicBool::new(false)), page)
    }

    /// Controller whose single in-flight slot is shared with other controllers.
    pub fn with_slot(client: Arc<dyn GiziClient>, in_flight: Arc<AtomicBool>, page: PageView) -> Self {
        Self {
            client,
            page: Mutex::new(page),
            in_flight,
        }
    }

    pub fn page(&self) -> PageView {
        self.lock_page().clone()
    }

    pub fn into_page(self) -> PageView {
        self.page.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit(&self, raw: RawFormInputs) -> SubmitOutcome {
        let inputs = match raw.into_inputs() {
            Ok(v) => v,
            Err(e) => {
                warn!(reason = %e, "submit rejected by validation");
                return SubmitOutcome::Rejected(e);
            }
        };

        let Some(_guard) = self.try_begin() else {
            warn!("submit ignored; request already in flight");
            return SubmitOutcome::Busy;
        };

        self.lock_page().show_loading();
        info!(food = %inputs.food, drink = %inputs.drink, age = inputs.age, "checking gizi");

        match self.client.check_gizi(&inputs).await {
            Ok(result) => {
                self.display_results(&result);
                SubmitOutcome::Rendered
            }
            Err(e) => {
                error!(error = %e, "gizi request failed");
                let mut page = self.lock_page();
                page.results_content = error_block(CONNECTION_ERROR);
                page.hide_loading();
                SubmitOutcome::ConnectionFailed
            }
        }
    }

    fn display_results(&self, result: &AnalysisResult) {
        let html = render_results(result);
        let mut page = self.lock_page();
        page.results_content = html;
        page.hide_loading();
        debug!(state = ?page.state(), "results rendered");
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    fn lock_page(&self) -> MutexGuard<'_, PageView> {
        self.page.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gizi::{
        client::ClientError,
        dto::FormInputs,
        page::UiState,
        render::{NOT_AVAILABLE, NO_ASSESSMENT},
    };
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct FakeClient {
        calls: Mutex<Vec<FormInputs>>,
        response: Option<serde_json::Value>,
        gate: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl GiziClient for FakeClient {
        async fn check_gizi(&self, inputs: &FormInputs) -> Result<AnalysisResult, ClientError> {
            self.calls.lock().unwrap().push(inputs.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match &self.response {
                Some(v) => Ok(AnalysisResult::from_value(v.clone())?),
                None => Err(ClientError::Decode(
                    serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
                )),
            }
        }
    }

    fn raw(food: &str, drink: &str, age: &str) -> RawFormInputs {
        RawFormInputs {
            food: food.into(),
            drink: drink.into(),
            age: age.into(),
        }
    }

    fn controller(client: Arc<FakeClient>) -> CheckController {
        CheckController::new(client, PageView::with_fact("Tahukah Kamu? fakta"))
    }

    #[tokio::test]
    async fn rejected_inputs_never_reach_the_client() {
        let client = Arc::new(FakeClient::default());
        let ctl = controller(client.clone());
        let before = ctl.page().results_content;

        for age in ["25", "0", "abc", ""] {
            assert_eq!(
                ctl.submit(raw("", "  ", age)).await,
                SubmitOutcome::Rejected(ValidationError::MissingItem)
            );
        }
        assert_eq!(
            ctl.submit(raw("Nasi Goreng", "", "-5")).await,
            SubmitOutcome::Rejected(ValidationError::InvalidAge)
        );

        assert!(client.calls.lock().unwrap().is_empty());
        let page = ctl.page();
        assert_eq!(page.state(), UiState::Results);
        assert_eq!(page.results_content, before);
    }

    #[tokio::test]
    async fn nasi_goreng_scenario() {
        let client = Arc::new(FakeClient {
            response: Some(json!({
                "food": {"name": "Nasi Goreng", "nutrients": {"Kalori": "300"}, "assessment": "Baik"}
            })),
            ..Default::default()
        });
        let ctl = controller(client.clone());

        let outcome = ctl.submit(raw(" Nasi Goreng ", "", "25")).await;
        assert_eq!(outcome, SubmitOutcome::Rendered);

        let calls = client.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            serde_json::to_value(&calls[0]).unwrap(),
            json!({"food": "Nasi Goreng", "drink": "", "age": 25})
        );

        let page = ctl.into_page();
        assert_eq!(page.state(), UiState::Results);
        assert!(!page.submit_disabled);
        let html = page.results_content;
        assert!(html.contains("Analisis Makanan: Nasi Goreng"));
        assert!(html.contains("<strong>Kalori:</strong> 300"));
        assert_eq!(html.matches(NOT_AVAILABLE).count(), 4);
        assert!(!html.contains(NO_ASSESSMENT));
        assert!(html.contains("<strong>Penilaian Gizi:</strong> Baik"));
        assert!(!html.contains("Analisis Minuman"));
    }

    #[tokio::test]
    async fn failed_request_renders_connection_error_and_recovers() {
        let client = Arc::new(FakeClient::default());
        let ctl = controller(client);

        let outcome = ctl.submit(raw("Teh", "", "30")).await;
        assert_eq!(outcome, SubmitOutcome::ConnectionFailed);

        let page = ctl.page();
        assert_eq!(
            page.results_content,
            r#"<div class="error-message">Terjadi kesalahan koneksi. Mohon coba lagi.</div>"#
        );
        assert!(!page.loading_visible);
        assert!(page.results_visible);
        assert!(!page.submit_disabled);
        assert!(!ctl.is_busy());
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        let gate = Arc::new(Notify::new());
        let client = Arc::new(FakeClient {
            response: Some(json!({"drink": {"name": "Kopi"}})),
            gate: Some(gate.clone()),
            ..Default::default()
        });
        let ctl = Arc::new(controller(client.clone()));

        let first = {
            let ctl = ctl.clone();
            tokio::spawn(async move { ctl.submit(raw("", "Kopi", "40")).await })
        };
        while client.calls.lock().unwrap().is_empty() {
            tokio::task::yield_now().await;
        }
        assert!(ctl.is_busy());
        assert_eq!(ctl.page().state(), UiState::Loading);
        assert!(ctl.page().submit_disabled);

        assert_eq!(ctl.submit(raw("", "Susu", "40")).await, SubmitOutcome::Busy);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Rendered);
        assert_eq!(client.calls.lock().unwrap().len(), 1);
        assert!(!ctl.is_busy());
        assert!(ctl.page().results_content.contains("Analisis Minuman: Kopi"));
    }

    #[tokio::test]
    async fn controllers_sharing_a_slot_exclude_each_other() {
        let gate = Arc::new(Notify::new());
        let client = Arc::new(FakeClient {
            response: Some(json!({})),
            gate: Some(gate.clone()),
            ..Default::default()
        });
        let slot = Arc::new(AtomicBool::new(false));
        let a = Arc::new(CheckController::with_slot(
            client.clone(),
            slot.clone(),
            PageView::with_fact("a"),
        ));
        let b = CheckController::with_slot(client.clone(), slot.clone(), PageView::with_fact("b"));

        let first = {
            let a = a.clone();
            tokio::spawn(async move { a.submit(raw("Roti", "", "20")).await })
        };
        while client.calls.lock().unwrap().is_empty() {
            tokio::task::yield_now().await;
        }
        assert!(b.is_busy());
        assert_eq!(b.submit(raw("Susu", "", "20")).await, SubmitOutcome::Busy);
        assert_eq!(b.page().results_content, PageView::with_fact("b").results_content);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Rendered);
        assert!(!slot.load(Ordering::Acquire));
        assert_eq!(client.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn resubmitting_after_completion_is_allowed() {
        let client = Arc::new(FakeClient {
            response: Some(json!({})),
            ..Default::default()
        });
        let ctl = controller(client.clone());
        assert_eq!(ctl.submit(raw("Roti", "", "20")).await, SubmitOutcome::Rendered);
        assert_eq!(ctl.submit(raw("Roti", "", "20")).await, SubmitOutcome::Rendered);
        assert_eq!(client.calls.lock().unwrap().len(), 2);
    }
}
