//! Named provider rate tables.
//!
//! Rates can be customized via environment variables or programmatically.
//! Default rates are the on-demand list prices the built-in comparison
//! ships with.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{ProviderPricing, Workload};

#[derive(Debug, Clone)]
pub struct PricingTable {
    providers: HashMap<String, ProviderPricing>,
    default: ProviderPricing,
}

impl PricingTable {
    pub fn builder() -> PricingTableBuilder {
        PricingTableBuilder::new()
    }

    /// Rates for a provider, falling back to the table default for
    /// unknown names. Lookup is case-insensitive.
    pub fn get(&self, provider: &str) -> &ProviderPricing {
        self.providers
            .get(&provider.to_lowercase())
            .unwrap_or(&self.default)
    }

    pub fn monthly_cost(&self, provider: &str, workload: &Workload) -> f64 {
        self.get(provider).monthly_cost(workload)
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        global_pricing_table().clone()
    }
}

#[derive(Debug, Default)]
pub struct PricingTableBuilder {
    providers: HashMap<String, ProviderPricing>,
    default: Option<ProviderPricing>,
}

impl PricingTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(mut self) -> Self {
        for pricing in crate::catalog::provider_pricing() {
            self.providers
                .insert(pricing.provider.to_lowercase(), pricing);
        }
        self
    }

    pub fn provider(mut self, pricing: ProviderPricing) -> Self {
        self.providers
            .insert(pricing.provider.to_lowercase(), pricing);
        self
    }

    pub fn default_pricing(mut self, pricing: ProviderPricing) -> Self {
        self.default = Some(pricing);
        self
    }

    /// Starts from the defaults and applies any
    /// `CLOUDCOST_PRICING_<PROVIDER>_{COMPUTE,STORAGE,EGRESS}` overrides.
    pub fn from_env(mut self) -> Self {
        self = self.with_defaults();

        for provider in ["AWS", "AZURE", "GCP"] {
            if let Some(pricing) = Self::parse_env_pricing(provider) {
                self.providers.insert(provider.to_lowercase(), pricing);
            }
        }

        self
    }

    fn parse_env_pricing(provider: &str) -> Option<ProviderPricing> {
        let compute = std::env::var(format!("CLOUDCOST_PRICING_{}_COMPUTE", provider))
            .ok()?
            .parse::<f64>()
            .ok()?;
        let storage = std::env::var(format!("CLOUDCOST_PRICING_{}_STORAGE", provider))
            .ok()?
            .parse::<f64>()
            .ok()?;
        let egress = std::env::var(format!("CLOUDCOST_PRICING_{}_EGRESS", provider))
            .ok()?
            .parse::<f64>()
            .ok()?;

        Some(ProviderPricing::new(provider, compute, storage, egress))
    }

    pub fn build(self) -> PricingTable {
        let default = self
            .default
            .or_else(|| self.providers.get("aws").cloned())
            .unwrap_or_else(|| ProviderPricing::new("AWS", 0.096, 0.023, 0.09));

        PricingTable {
            providers: self.providers,
            default,
        }
    }
}

static GLOBAL_PRICING: LazyLock<PricingTable> =
    LazyLock::new(|| PricingTableBuilder::new().from_env().build());

pub fn global_pricing_table() -> &'static PricingTable {
    &GLOBAL_PRICING
}
