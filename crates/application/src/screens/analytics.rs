use std::sync::Arc;

use asista_domain::{ApplicationFunnel, BeneficiariesByCity, DashboardFilter, FinancialLiability};

use crate::ports::{MetricsGateway, Notifier};

use super::failure_key;

/// Analytics dashboard: three charts sharing one date/program filter.
pub struct AnalyticsScreen {
    metrics: Arc<dyn MetricsGateway>,
    notifier: Arc<dyn Notifier>,
    /// Filter applied to every chart.
    pub filter: DashboardFilter,
    /// Application funnel payload, once loaded.
    pub funnel: Option<ApplicationFunnel>,
    /// Beneficiaries-by-city payload, once loaded.
    pub by_city: Option<BeneficiariesByCity>,
    /// Financial liability payload, once loaded.
    pub liability: Option<FinancialLiability>,
    /// True while a refresh is in flight.
    pub loading: bool,
}

impl AnalyticsScreen {
    /// Wires the dashboard to its gateway and notifier.
    #[must_use]
    pub fn new(metrics: Arc<dyn MetricsGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            metrics,
            notifier,
            filter: DashboardFilter::default(),
            funnel: None,
            by_city: None,
            liability: None,
            loading: false,
        }
    }

    /// Applies a new filter and refreshes every chart.
    pub async fn apply_filter(&mut self, filter: DashboardFilter) {
        self.filter = filter;
        self.load().await;
    }

    /// Refreshes the three charts under the current filter.
    ///
    /// The fetches run one after another; a failure on any chart
    /// surfaces once and leaves the already-loaded payloads in place.
    pub async fn load(&mut self) {
        self.loading = true;
        let result = async {
            let funnel = self.metrics.application_funnel(&self.filter).await?;
            let by_city = self.metrics.beneficiaries_by_city(&self.filter).await?;
            let liability = self.metrics.financial_liability(&self.filter).await?;
            Ok::<_, asista_core::ClientError>((funnel, by_city, liability))
        }
        .await;

        match result {
            Ok((funnel, by_city, liability)) => {
                self.funnel = Some(funnel);
                self.by_city = Some(by_city);
                self.liability = Some(liability);
            }
            Err(error) => self
                .notifier
                .error(failure_key(&error, "analytics.loadFailed")),
        }
        self.loading = false;
    }
}
