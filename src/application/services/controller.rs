//! Checkout flow controller
//!
//! Client-side half of the checkout core: a modal state machine that collects
//! payer input, calls the initiation gateway, and drives one of three
//! completion strategies. One logical session per modal instance; all session
//! state is discarded on close.
//!
//! Late arrivals are the main hazard here: the widget SDK has no cancellation
//! primitive, so a session generation counter decides whether a widget event
//! or watchdog expiry still belongs to the live session.

use crate::application::services::gateway_service::InitiateGateway;
use crate::config::AppConfig;
use crate::domain::checkout::{
    generate_reference, BookingRequest, CheckoutState, CheckoutVariant, HandoffPayload,
    WidgetEvent,
};
use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Embedded payment widget capability.
///
/// Injected at construction instead of looked up from an ambient global;
/// readiness is an explicit query rather than interval polling.
#[async_trait]
pub trait PaymentWidget: Send + Sync {
    /// Begin loading the widget; invoked speculatively when the modal opens
    async fn preload(&self);

    /// Whether the widget can accept a resume call
    async fn is_ready(&self) -> bool;

    /// Hand the checkout to the widget; COMPLETE/FAILED/IN-PROGRESS events
    /// arrive on the returned channel
    fn resume(
        &self,
        checkout_id: &str,
        signature: &str,
        live: bool,
    ) -> AppResult<mpsc::UnboundedReceiver<WidgetEvent>>;
}

/// Outcome of a submit attempt, as shown to the UI shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The attempt ran; inspect `state()` for where it landed
    Accepted,
    /// Input failed local validation; no network call was made
    Invalid(String),
    /// An initiate call is already in flight for this session
    RejectedInFlight,
    /// The session is not collecting input; open (or retry after a failure) first
    NotCollecting,
    /// The session was cancelled or closed while the call was outstanding
    Superseded,
}

/// Controller tuning, derived from the application configuration
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub variant: CheckoutVariant,
    pub watchdog: Duration,
    pub widget_ready_attempts: u32,
    pub widget_ready_delay: Duration,
    pub reference_prefix: String,
}

impl ControllerConfig {
    pub fn from_app_config(config: &AppConfig) -> AppResult<Self> {
        let variant = config
            .checkout
            .variant
            .parse::<CheckoutVariant>()
            .map_err(AppError::Config)?;
        Ok(Self {
            variant,
            watchdog: Duration::from_secs(config.checkout.watchdog_seconds),
            widget_ready_attempts: config.checkout.widget_ready_attempts,
            widget_ready_delay: Duration::from_millis(config.checkout.widget_ready_delay_ms),
            reference_prefix: config.checkout.reference_prefix.clone(),
        })
    }
}

/// Per-modal session state; recreated on every open
struct Session {
    state: CheckoutState,
    service: String,
    amount: f64,
    generation: u64,
    in_flight: bool,
    handoff: Option<HandoffPayload>,
    user_message: Option<String>,
    watchdog: Option<JoinHandle<()>>,
    listener: Option<JoinHandle<()>>,
}

impl Session {
    fn idle(generation: u64) -> Self {
        Self {
            state: CheckoutState::Idle,
            service: String::new(),
            amount: 0.0,
            generation,
            in_flight: false,
            handoff: None,
            user_message: None,
            watchdog: None,
            listener: None,
        }
    }

    fn abort_tasks(&mut self) {
        if let Some(handle) = self.watchdog.take() {
            handle.abort();
        }
        if let Some(handle) = self.listener.take() {
            handle.abort();
        }
    }
}

/// Checkout flow controller: one instance per modal
pub struct CheckoutController {
    gateway: Arc<dyn InitiateGateway>,
    widget: Arc<dyn PaymentWidget>,
    config: ControllerConfig,
    session: Mutex<Session>,
}

impl CheckoutController {
    pub fn new(
        gateway: Arc<dyn InitiateGateway>,
        widget: Arc<dyn PaymentWidget>,
        config: ControllerConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            gateway,
            widget,
            config,
            session: Mutex::new(Session::idle(0)),
        })
    }

    /// Current session state
    pub fn state(&self) -> CheckoutState {
        self.session.lock().unwrap().state
    }

    /// Last user-facing message, if any
    pub fn user_message(&self) -> Option<String> {
        self.session.lock().unwrap().user_message.clone()
    }

    /// Handoff payload from the last successful initiation, if any
    pub fn handoff(&self) -> Option<HandoffPayload> {
        self.session.lock().unwrap().handoff.clone()
    }

    /// Open the modal for a service: discards any prior session and starts
    /// collecting payer input. The widget is preloaded speculatively so a
    /// later submit does not pay the load latency.
    pub fn open(self: &Arc<Self>, service: &str, amount: f64) {
        let generation = {
            let mut session = self.session.lock().unwrap();
            session.abort_tasks();
            let generation = session.generation + 1;
            *session = Session::idle(generation);
            session.state = CheckoutState::Collecting;
            session.service = service.to_string();
            session.amount = amount;
            generation
        };
        debug!(service = %service, generation = %generation, "Checkout session opened");

        if self.config.variant == CheckoutVariant::Widget {
            let widget = self.widget.clone();
            tokio::spawn(async move { widget.preload().await });
        }
    }

    /// Submit payer input and run one initiation attempt.
    ///
    /// At most one initiate call may be in flight per session; a second
    /// submit while one is outstanding is rejected without a network call.
    /// The reference is regenerated on every accepted submit, retries
    /// included.
    pub async fn submit(self: &Arc<Self>, email: &str, phone: Option<&str>) -> SubmitOutcome {
        let (booking, generation) = {
            let mut session = self.session.lock().unwrap();
            if session.in_flight
                || matches!(
                    session.state,
                    CheckoutState::Processing | CheckoutState::AwaitingWidget
                )
            {
                return SubmitOutcome::RejectedInFlight;
            }
            if session.state != CheckoutState::Collecting {
                return SubmitOutcome::NotCollecting;
            }

            let booking = BookingRequest {
                amount: session.amount,
                email: email.trim().to_string(),
                phone: phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
                reference: generate_reference(&self.config.reference_prefix),
                comment: Some(format!("Payment for {}", session.service)),
            };
            if let Err(e) = booking.validate(self.config.variant) {
                let message = e.client_message();
                session.user_message = Some(message.clone());
                return SubmitOutcome::Invalid(message);
            }

            session.state = CheckoutState::Processing;
            session.in_flight = true;
            session.user_message = None;
            (booking, session.generation)
        };

        info!(reference = %booking.reference, "Submitting checkout attempt");
        let result = self.gateway.initiate(&booking).await;

        match result {
            Err(e) => {
                let mut session = self.session.lock().unwrap();
                session.in_flight = false;
                if session.generation != generation {
                    return SubmitOutcome::Superseded;
                }
                session.state = CheckoutState::Failed;
                session.user_message = Some(failure_message(&e));
                SubmitOutcome::Accepted
            }
            Ok(payload) => self.complete_initiation(payload, generation).await,
        }
    }

    async fn complete_initiation(
        self: &Arc<Self>,
        payload: HandoffPayload,
        generation: u64,
    ) -> SubmitOutcome {
        match payload {
            HandoffPayload::Redirect { url } => {
                let mut session = self.session.lock().unwrap();
                session.in_flight = false;
                if session.generation != generation {
                    return SubmitOutcome::Superseded;
                }
                // The browser navigates away; the session is terminal here
                session.state = CheckoutState::Succeeded;
                session.handoff = Some(HandoffPayload::Redirect { url });
                SubmitOutcome::Accepted
            }
            HandoffPayload::PushAck { raw } => {
                let mut session = self.session.lock().unwrap();
                session.in_flight = false;
                if session.generation != generation {
                    return SubmitOutcome::Superseded;
                }
                session.state = CheckoutState::AwaitingPush;
                session.user_message =
                    Some("Request sent. Check your phone to complete the payment.".to_string());
                session.handoff = Some(HandoffPayload::PushAck { raw });
                SubmitOutcome::Accepted
            }
            HandoffPayload::Widget { checkout_id, signature, live } => {
                self.hand_off_to_widget(checkout_id, signature, live, generation).await
            }
        }
    }

    /// Resume the embedded widget and arm the watchdog.
    ///
    /// Tolerates a widget that has not finished loading by re-checking
    /// readiness a bounded number of times before giving up.
    async fn hand_off_to_widget(
        self: &Arc<Self>,
        checkout_id: String,
        signature: String,
        live: bool,
        generation: u64,
    ) -> SubmitOutcome {
        let mut ready = self.widget.is_ready().await;
        let mut attempts = 1;
        while !ready && attempts < self.config.widget_ready_attempts {
            tokio::time::sleep(self.config.widget_ready_delay).await;
            ready = self.widget.is_ready().await;
            attempts += 1;
        }

        let mut session = self.session.lock().unwrap();
        session.in_flight = false;
        if session.generation != generation || session.state != CheckoutState::Processing {
            return SubmitOutcome::Superseded;
        }

        if !ready {
            warn!(attempts = %attempts, "Payment widget never became ready");
            session.state = CheckoutState::Failed;
            session.user_message =
                Some("Payment system could not load. Please try again.".to_string());
            return SubmitOutcome::Accepted;
        }

        let receiver = match self.widget.resume(&checkout_id, &signature, live) {
            Ok(receiver) => receiver,
            Err(e) => {
                session.state = CheckoutState::Failed;
                session.user_message = Some(failure_message(&e));
                return SubmitOutcome::Accepted;
            }
        };

        session.state = CheckoutState::AwaitingWidget;
        session.handoff = Some(HandoffPayload::Widget { checkout_id, signature, live });
        session.watchdog = Some(self.spawn_watchdog(generation));
        session.listener = Some(self.spawn_listener(receiver, generation));
        SubmitOutcome::Accepted
    }

    fn spawn_watchdog(self: &Arc<Self>, generation: u64) -> JoinHandle<()> {
        let controller = self.clone();
        let window = self.config.watchdog;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            controller.on_watchdog_expired(generation);
        })
    }

    fn spawn_listener(
        self: &Arc<Self>,
        mut receiver: mpsc::UnboundedReceiver<WidgetEvent>,
        generation: u64,
    ) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                if controller.on_widget_event(generation, event) {
                    break;
                }
            }
        })
    }

    /// Watchdog expiry: the widget never reported a terminal outcome in time
    fn on_watchdog_expired(&self, generation: u64) {
        let mut session = self.session.lock().unwrap();
        if session.generation != generation || session.state != CheckoutState::AwaitingWidget {
            // Session moved on; nothing to do
            return;
        }
        warn!("Watchdog expired while awaiting widget outcome");
        session.abort_tasks();
        session.state = CheckoutState::Failed;
        session.user_message = Some("Payment timed out. Please try again.".to_string());
    }

    /// Widget event delivery; returns true once a terminal event landed
    fn on_widget_event(&self, generation: u64, event: WidgetEvent) -> bool {
        let mut session = self.session.lock().unwrap();
        if session.generation != generation || session.state != CheckoutState::AwaitingWidget {
            debug!(?event, "Ignoring widget event for a stale session");
            return true;
        }
        match event {
            WidgetEvent::InProgress => {
                debug!("Payment in progress");
                false
            }
            WidgetEvent::Complete => {
                session.abort_tasks();
                session.state = CheckoutState::Succeeded;
                session.user_message =
                    Some("Payment successful! We will contact you shortly.".to_string());
                true
            }
            WidgetEvent::Failed => {
                session.abort_tasks();
                session.state = CheckoutState::Failed;
                session.user_message = Some("Payment failed. Please try again.".to_string());
                true
            }
        }
    }

    /// User-initiated cancel. Stops the watchdog and suppresses any
    /// late-arriving outcome; a request already in flight at the provider is
    /// left to run (fire-and-forget), only the UI reaction is suppressed.
    pub fn cancel(&self) {
        let mut session = self.session.lock().unwrap();
        match session.state {
            CheckoutState::Processing | CheckoutState::AwaitingWidget => {
                session.generation += 1;
                session.abort_tasks();
                session.in_flight = false;
                session.state = CheckoutState::Cancelled;
                session.user_message = None;
            }
            _ => {}
        }
    }

    /// Return to input collection after a failure; the next submit generates
    /// a fresh reference
    pub fn retry(&self) {
        let mut session = self.session.lock().unwrap();
        if session.state == CheckoutState::Failed {
            session.state = CheckoutState::Collecting;
            session.user_message = None;
            session.handoff = None;
        }
    }

    /// Close the modal and discard all session state
    pub fn close(&self) {
        let mut session = self.session.lock().unwrap();
        session.abort_tasks();
        let generation = session.generation + 1;
        *session = Session::idle(generation);
    }
}

/// User-facing failure text per the error taxonomy: timeouts and transport
/// failures are worded distinctly from provider rejections, and server
/// configuration detail stays generic.
fn failure_message(error: &AppError) -> String {
    match error {
        AppError::Timeout(_) => "Payment timed out. Please try again.".to_string(),
        AppError::Transport(_) => {
            "Could not reach the payment service. Please try again.".to_string()
        }
        AppError::WidgetUnavailable(_) => {
            "Payment system could not load. Please try again.".to_string()
        }
        other => other.client_message(),
    }
}
