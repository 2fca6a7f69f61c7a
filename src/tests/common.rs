//! Shared mocks and fixtures for the integration suite

use crate::application::services::controller::PaymentWidget;
use crate::application::services::gateway_service::InitiateGateway;
use crate::domain::checkout::{BookingRequest, HandoffPayload, WidgetEvent};
use crate::infrastructure::adapters::{
    ChargeRequest, ChargeResponse, CheckoutCreateRequest, CheckoutCreateResponse, ProviderApi,
    PushRequest,
};
use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::{mpsc, Semaphore};

/// Provider stub for endpoint tests: canned responses, call counting
pub struct StubProvider {
    pub charge_calls: AtomicUsize,
    pub checkout_calls: AtomicUsize,
    pub push_calls: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            charge_calls: AtomicUsize::new(0),
            checkout_calls: AtomicUsize::new(0),
            push_calls: AtomicUsize::new(0),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.charge_calls.load(Ordering::SeqCst)
            + self.checkout_calls.load(Ordering::SeqCst)
            + self.push_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderApi for StubProvider {
    async fn charge(
        &self,
        _secret_key: &str,
        request: &ChargeRequest,
    ) -> AppResult<ChargeResponse> {
        self.charge_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ChargeResponse {
            url: format!("https://sandbox.intasend.com/checkout/{}/", request.api_ref),
        })
    }

    async fn create_checkout(
        &self,
        _request: &CheckoutCreateRequest,
    ) -> AppResult<CheckoutCreateResponse> {
        self.checkout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(CheckoutCreateResponse {
            id: "abc".to_string(),
            signature: "sig".to_string(),
        })
    }

    async fn push(
        &self,
        _secret_key: &str,
        request: &PushRequest,
    ) -> AppResult<serde_json::Value> {
        self.push_calls.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::json!({
            "invoice": { "invoice_id": "INV-1", "state": "PENDING" },
            "phone_number": request.phone_number,
        }))
    }
}

/// Gateway mock for controller tests.
///
/// Responses are consumed in order; an optional semaphore gate lets a test
/// hold an initiate call in flight until it decides to release it.
pub struct MockGateway {
    responses: Mutex<VecDeque<AppResult<HandoffPayload>>>,
    pub references: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
    gate: Option<Semaphore>,
}

impl MockGateway {
    pub fn new(responses: Vec<AppResult<HandoffPayload>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            references: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Like `new`, but each initiate call blocks until `release` is called
    pub fn gated(responses: Vec<AppResult<HandoffPayload>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            references: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            gate: Some(Semaphore::new(0)),
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn seen_references(&self) -> Vec<String> {
        self.references.lock().unwrap().clone()
    }
}

#[async_trait]
impl InitiateGateway for MockGateway {
    async fn initiate(&self, request: &BookingRequest) -> AppResult<HandoffPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.references.lock().unwrap().push(request.reference.clone());
        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?;
            permit.forget();
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Internal("no more stubbed responses".into())))
    }
}

/// Widget mock: ready after a configurable number of readiness checks
pub struct MockWidget {
    ready_after_checks: u32,
    checks: AtomicU32,
    pub preloaded: AtomicBool,
    pub resumed: AtomicUsize,
    pub resume_args: Mutex<Option<(String, String, bool)>>,
    sender: Mutex<Option<mpsc::UnboundedSender<WidgetEvent>>>,
}

impl MockWidget {
    /// Ready on the first check
    pub fn ready() -> Self {
        Self::ready_after(1)
    }

    /// Ready once `checks` readiness queries have been made
    pub fn ready_after(checks: u32) -> Self {
        Self {
            ready_after_checks: checks,
            checks: AtomicU32::new(0),
            preloaded: AtomicBool::new(false),
            resumed: AtomicUsize::new(0),
            resume_args: Mutex::new(None),
            sender: Mutex::new(None),
        }
    }

    /// Never becomes ready
    pub fn never_ready() -> Self {
        Self::ready_after(u32::MAX)
    }

    /// Emit a widget event into the most recent resume channel
    pub fn emit(&self, event: WidgetEvent) {
        if let Some(sender) = self.sender.lock().unwrap().as_ref() {
            let _ = sender.send(event);
        }
    }
}

#[async_trait]
impl PaymentWidget for MockWidget {
    async fn preload(&self) {
        self.preloaded.store(true, Ordering::SeqCst);
    }

    async fn is_ready(&self) -> bool {
        let seen = self.checks.fetch_add(1, Ordering::SeqCst) + 1;
        seen >= self.ready_after_checks
    }

    fn resume(
        &self,
        checkout_id: &str,
        signature: &str,
        live: bool,
    ) -> AppResult<mpsc::UnboundedReceiver<WidgetEvent>> {
        self.resumed.fetch_add(1, Ordering::SeqCst);
        *self.resume_args.lock().unwrap() =
            Some((checkout_id.to_string(), signature.to_string(), live));
        let (sender, receiver) = mpsc::unbounded_channel();
        *self.sender.lock().unwrap() = Some(sender);
        Ok(receiver)
    }
}
