use std::sync::Arc;

use iced::Task;

use solara_ui::component::form;
use solara_ui::widget::Element;

use crate::{
    app::{cache::Cache, error::Error, menu::Menu, message::Message, state::State, view},
    backend::{
        api::{Currency, Location, QuoteRequest, SimulationConfig, SimulationReport, UsageProfile},
        Backend,
    },
};

/// Where the user is in the estimation wizard.
#[derive(Debug)]
pub enum Step {
    Usage,
    Property,
    Results(SimulationReport),
}

pub struct EstimatorPanel {
    step: Step,
    bill: form::Value<String>,
    currency: Currency,
    roof_area: form::Value<String>,
    location: Location,
    profile: UsageProfile,
    /// The inputs as they were when the simulation was requested. Saving a
    /// quote reuses them so the saved request matches the displayed result.
    submitted: Option<QuoteRequest>,
    processing: bool,
    saving: bool,
    saved: bool,
    warning: Option<Error>,
}

impl EstimatorPanel {
    pub fn new() -> Self {
        Self {
            step: Step::Usage,
            bill: form::Value {
                value: "100".to_string(),
                valid: true,
            },
            currency: Currency::Usd,
            roof_area: form::Value {
                value: "50".to_string(),
                valid: true,
            },
            location: Location::Hanoi,
            profile: UsageProfile::Standard,
            submitted: None,
            processing: false,
            saving: false,
            saved: false,
            warning: None,
        }
    }

    fn monthly_bill(&self) -> Option<f64> {
        self.bill
            .value
            .parse::<f64>()
            .ok()
            .filter(|bill| *bill > 0.0)
    }

    fn roof_area_m2(&self) -> Option<f64> {
        self.roof_area
            .value
            .parse::<f64>()
            .ok()
            .filter(|area| *area >= 5.0)
    }
}

impl Default for EstimatorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl State for EstimatorPanel {
    fn view<'a>(&'a self, cache: &'a Cache) -> Element<'a, view::Message> {
        view::dashboard(
            &Menu::Estimator,
            cache,
            self.warning.as_ref(),
            match &self.step {
                Step::Usage => view::estimator::step_usage(&self.bill, self.currency),
                Step::Property => view::estimator::step_property(
                    &self.roof_area,
                    self.location,
                    self.profile,
                    self.processing,
                ),
                Step::Results(report) => view::estimator::results(
                    &report.roi_metrics,
                    cache.session.is_some(),
                    self.saving,
                    self.saved,
                ),
            },
        )
    }

    fn update(
        &mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(view::Message::Estimator(msg)) => match msg {
                view::EstimatorMessage::BillEdited(value) => {
                    self.bill.valid = value.parse::<f64>().map_or(false, |bill| bill > 0.0);
                    self.bill.value = value;
                }
                view::EstimatorMessage::CurrencySelected(currency) => {
                    self.currency = currency;
                }
                view::EstimatorMessage::RoofAreaEdited(value) => {
                    self.roof_area.valid = value.parse::<f64>().map_or(false, |area| area >= 5.0);
                    self.roof_area.value = value;
                }
                view::EstimatorMessage::LocationSelected(location) => {
                    self.location = location;
                }
                view::EstimatorMessage::ProfileSelected(profile) => {
                    self.profile = profile;
                }
                view::EstimatorMessage::Next => {
                    if self.monthly_bill().is_some() {
                        self.step = Step::Property;
                    } else {
                        self.bill.valid = false;
                    }
                }
                view::EstimatorMessage::Previous => {
                    if matches!(self.step, Step::Property) {
                        self.step = Step::Usage;
                    }
                }
                view::EstimatorMessage::Calculate => match (self.monthly_bill(), self.roof_area_m2())
                {
                    (Some(bill), Some(roof_area)) => {
                        self.processing = true;
                        self.warning = None;
                        self.submitted = Some(QuoteRequest {
                            monthly_bill: bill,
                            currency: self.currency,
                            location: self.location,
                            roof_area,
                            usage_profile_type: self.profile,
                            interaction_source: "wizard".to_string(),
                        });
                        let config = SimulationConfig::from_monthly_bill(bill);
                        return Task::perform(
                            async move {
                                backend
                                    .run_simulation(&config)
                                    .await
                                    .map_err(Error::Simulation)
                            },
                            Message::Simulated,
                        );
                    }
                    (bill, roof_area) => {
                        self.bill.valid = bill.is_some();
                        self.roof_area.valid = roof_area.is_some();
                    }
                },
                view::EstimatorMessage::SaveQuote => {
                    if let (Some(request), Some(token)) = (self.submitted.clone(), cache.token()) {
                        self.saving = true;
                        self.warning = None;
                        return Task::perform(
                            async move {
                                backend
                                    .save_quote_request(&token, &request)
                                    .await
                                    .map_err(Error::SaveQuote)
                            },
                            Message::QuoteSaved,
                        );
                    }
                }
                view::EstimatorMessage::StartOver => {
                    *self = Self::new();
                }
            },
            Message::Simulated(res) => {
                self.processing = false;
                match res {
                    Ok(report) => {
                        self.step = Step::Results(report);
                    }
                    Err(e) => {
                        self.warning = Some(e);
                    }
                }
            }
            Message::QuoteSaved(res) => {
                self.saving = false;
                match res {
                    Ok(()) => {
                        self.saved = true;
                        tracing::info!("Quote request saved");
                    }
                    Err(e) => {
                        self.warning = Some(e);
                    }
                }
            }
            _ => {}
        };
        Task::none()
    }

    // Estimates are not kept across visits, a returning user starts a new one.
    fn reload(
        &mut self,
        _backend: Arc<dyn Backend + Sync + Send>,
        _cache: &Cache,
    ) -> Task<Message> {
        *self = Self::new();
        Task::none()
    }
}

impl From<EstimatorPanel> for Box<dyn State> {
    fn from(s: EstimatorPanel) -> Box<dyn State> {
        Box::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::{api::User, BackendError},
        dir::SolaraDirectory,
        session::Session,
        utils::{mock::ScriptedBackend, sandbox::Sandbox},
    };
    use serde_json::json;

    fn guest_cache() -> Cache {
        Cache {
            datadir: SolaraDirectory::new(std::path::PathBuf::from("/tmp/solara-test")),
            session: None,
        }
    }

    fn client_cache() -> Cache {
        Cache {
            session: Some(Session {
                token: "tok-123".to_string(),
                user: User {
                    id: 1,
                    email: "ann@example.com".to_string(),
                    full_name: Some("Ann".to_string()),
                    role: crate::backend::api::Role::Client,
                    is_active: true,
                },
            }),
            ..guest_cache()
        }
    }

    #[tokio::test]
    async fn estimator_blocks_next_on_invalid_bill() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let cache = guest_cache();
        let sandbox = Sandbox::new(EstimatorPanel::new());

        let sandbox = sandbox
            .update(
                backend.clone(),
                &cache,
                Message::View(view::Message::Estimator(view::EstimatorMessage::BillEdited(
                    "0".to_string(),
                ))),
            )
            .await;
        let sandbox = sandbox
            .update(
                backend,
                &cache,
                Message::View(view::Message::Estimator(view::EstimatorMessage::Next)),
            )
            .await;

        assert!(matches!(sandbox.state().step, Step::Usage));
        assert!(!sandbox.state().bill.valid);
    }

    #[tokio::test]
    async fn estimator_runs_simulation_from_bill() {
        // A 60$ bill maps to 3 panels of 400W.
        let backend = Arc::new(ScriptedBackend::new(vec![(
            Some(json!({
                "method": "run_simulation",
                "params": {
                    "simulation_days": 365,
                    "num_stations": 1,
                    "solar_panel_power_kw": 0.4,
                    "total_panels": 3,
                    "battery_capacity_kwh": 10.0,
                    "minutes_per_step": 60,
                    "battery_max_discharge_kw": 5.0,
                    "inverter_efficiency": 0.95,
                }
            })),
            Ok(json!({
                "roi_metrics": {
                    "roi": 0.152,
                    "payback_years": 6.6,
                    "net_profit": 4200.0,
                }
            })),
        )]));
        let cache = guest_cache();

        let mut sandbox = Sandbox::new(EstimatorPanel::new());
        for msg in [
            view::EstimatorMessage::BillEdited("60".to_string()),
            view::EstimatorMessage::Next,
            view::EstimatorMessage::Calculate,
        ] {
            sandbox = sandbox
                .update(
                    backend.clone(),
                    &cache,
                    Message::View(view::Message::Estimator(msg)),
                )
                .await;
        }

        let panel = sandbox.state();
        assert!(!panel.processing);
        assert!(panel.warning.is_none());
        match &panel.step {
            Step::Results(report) => {
                assert_eq!(report.roi_metrics.payback_years, 6.6);
            }
            _ => panic!("expected the results step"),
        }
    }

    #[tokio::test]
    async fn estimator_stays_on_property_when_simulation_fails() {
        let backend = Arc::new(ScriptedBackend::new(vec![(
            None,
            Err(BackendError::Http(Some(500), "boom".to_string())),
        )]));
        let cache = guest_cache();

        let mut sandbox = Sandbox::new(EstimatorPanel::new());
        for msg in [
            view::EstimatorMessage::Next,
            view::EstimatorMessage::Calculate,
        ] {
            sandbox = sandbox
                .update(
                    backend.clone(),
                    &cache,
                    Message::View(view::Message::Estimator(msg)),
                )
                .await;
        }

        let panel = sandbox.state();
        assert!(matches!(panel.step, Step::Property));
        assert!(matches!(panel.warning, Some(Error::Simulation(_))));
        assert!(!panel.processing);
    }

    #[tokio::test]
    async fn estimator_saves_quote_with_submitted_inputs() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            (None, Ok(json!({"roi_metrics": {"roi": 0.1, "payback_years": 8.0, "net_profit": 1000.0}}))),
            (
                Some(json!({
                    "method": "save_quote_request",
                    "token": "tok-123",
                    "params": {
                        "monthly_bill": 100.0,
                        "currency": "USD",
                        "location": "Hanoi",
                        "roof_area": 50.0,
                        "usage_profile_type": "standard",
                        "interaction_source": "wizard",
                    }
                })),
                Ok(json!({"id": 17})),
            ),
        ]));
        let cache = client_cache();

        let mut sandbox = Sandbox::new(EstimatorPanel::new());
        for msg in [
            view::EstimatorMessage::Next,
            view::EstimatorMessage::Calculate,
            view::EstimatorMessage::SaveQuote,
        ] {
            sandbox = sandbox
                .update(
                    backend.clone(),
                    &cache,
                    Message::View(view::Message::Estimator(msg)),
                )
                .await;
        }

        let panel = sandbox.state();
        assert!(panel.saved);
        assert!(!panel.saving);
        assert!(panel.warning.is_none());
    }
}
