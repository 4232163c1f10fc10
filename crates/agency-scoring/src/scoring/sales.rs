use super::calculators::lead_conversion_rate;
use super::domain::{Lead, LeadStatus};
use super::normalizer::rep_key;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Pipeline outcome for a set of leads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesConversionSummary {
    pub total_leads: usize,
    pub closed_won: usize,
    pub closed_lost: usize,
    /// Closed-won share of all leads, 0-100.
    pub conversion_rate: f64,
    /// Sum of budgets across closed-won leads.
    pub total_revenue: f64,
    pub average_deal_size: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepSalesSummary {
    pub rep_id: String,
    #[serde(flatten)]
    pub summary: SalesConversionSummary,
}

pub fn compute_sales_conversion(leads: &[Lead]) -> SalesConversionSummary {
    let conversion = lead_conversion_rate(leads);

    let won: Vec<&Lead> = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::ClosedWon)
        .collect();
    let closed_lost = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::ClosedLost)
        .count();
    let total_revenue: f64 = won.iter().map(|lead| lead.budget).sum();
    let average_deal_size = if won.is_empty() {
        0.0
    } else {
        total_revenue / won.len() as f64
    };

    debug!(
        total_leads = leads.len(),
        closed_won = won.len(),
        conversion_rate = conversion.value,
        "computed sales conversion"
    );

    SalesConversionSummary {
        total_leads: leads.len(),
        closed_won: won.len(),
        closed_lost,
        conversion_rate: conversion.value,
        total_revenue,
        average_deal_size,
        explanation: conversion.explanation,
    }
}

/// Per-rep breakdown, best converting rep first (ties by rep id). Leads with
/// no owner are grouped under `"unassigned"`.
pub fn compute_sales_by_rep(leads: &[Lead]) -> Vec<RepSalesSummary> {
    let mut by_rep: BTreeMap<&str, Vec<Lead>> = BTreeMap::new();
    for lead in leads {
        by_rep.entry(rep_key(lead)).or_default().push(lead.clone());
    }

    let mut summaries: Vec<RepSalesSummary> = by_rep
        .into_iter()
        .map(|(rep_id, rep_leads)| RepSalesSummary {
            rep_id: rep_id.to_string(),
            summary: compute_sales_conversion(&rep_leads),
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.summary
            .conversion_rate
            .total_cmp(&a.summary.conversion_rate)
            .then_with(|| a.rep_id.cmp(&b.rep_id))
    });
    summaries
}
