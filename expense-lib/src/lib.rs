use actix_web::web;
use expense_repo::transaction_repo::TransactionRepo;
use std::sync::Arc;

use crate::chart::PieChartRenderer;
use crate::config::ExtensionsConfig;
use crate::dashboard::Dashboard;

pub mod chart;
pub mod config;
pub mod dashboard;
mod error;
pub mod status;
pub mod tracing;
pub mod transaction;

/// Shared state for every worker. Extensions that are not set stay unrouted.
#[derive(Clone)]
pub struct AppState {
    transaction_repo: Arc<dyn TransactionRepo>,
    pie_chart: Option<web::Data<PieChartRenderer>>,
    dashboard: Option<web::Data<Dashboard>>,
}

impl AppState {
    pub fn new(transaction_repo: Arc<dyn TransactionRepo>) -> AppState {
        AppState {
            transaction_repo,
            pie_chart: None,
            dashboard: None,
        }
    }

    pub fn from_config(
        transaction_repo: Arc<dyn TransactionRepo>,
        extensions: ExtensionsConfig,
    ) -> Result<AppState, anyhow::Error> {
        let mut state = AppState::new(transaction_repo);
        if extensions.pie_chart {
            state = state.with_pie_chart(PieChartRenderer::new());
        }
        if extensions.dashboard {
            state = state.with_dashboard(Dashboard::load()?);
        }
        Ok(state)
    }

    pub fn with_pie_chart(mut self, renderer: PieChartRenderer) -> AppState {
        self.pie_chart = Some(web::Data::new(renderer));
        self
    }

    pub fn with_dashboard(mut self, dashboard: Dashboard) -> AppState {
        self.dashboard = Some(web::Data::new(dashboard));
        self
    }
}

/// Registers the routes and shared data for `state` on an actix `App`.
pub fn app_config_func(state: AppState) -> impl Fn(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(error::json_config())
            .app_data(web::Data::new(state.transaction_repo.clone()))
            .configure(status::status_service)
            .configure(transaction::transaction_service);

        if let Some(renderer) = &state.pie_chart {
            cfg.app_data(renderer.clone())
                .configure(chart::chart_service);
        }
        if let Some(dashboard_data) = &state.dashboard {
            cfg.app_data(dashboard_data.clone())
                .configure(dashboard::dashboard_service);
        }
    }
}
