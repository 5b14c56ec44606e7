//! Response payloads derived from [`Investor`] snapshots.
//!
//! Everything here is a pure function over borrowed records: filtering and
//! totalling build new values and leave the source snapshot untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Commitment, Investor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommitmentRead {
    /// Commitment identifier
    pub id: i32,
    /// Asset class the commitment is made to, e.g. "Infrastructure"
    pub asset_class: String,
    /// Committed amount
    pub amount: f64,
    /// Currency code as stored, e.g. "GBP"
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvestorRead {
    /// Investor identifier
    pub id: i32,
    pub name: String,
    /// Free-form category, e.g. "fund manager"
    pub investor_type: String,
    pub country: String,
    /// Date the investor was added (YYYY-MM-DD)
    pub date_added: NaiveDate,
    /// Date of the last update (YYYY-MM-DD)
    pub last_updated: NaiveDate,
    /// Commitments of this investor, possibly filtered by asset class
    pub commitments: Vec<CommitmentRead>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvestorTotalCommitments {
    /// Investor the total was computed for
    pub investor_id: i32,
    /// Sum of all commitment amounts, in the reporting currency
    pub total_commitments_gbp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvestorWithTotal {
    pub id: i32,
    pub name: String,
    pub investor_type: String,
    pub country: String,
    pub date_added: NaiveDate,
    /// Sum of all commitment amounts, in the reporting currency
    pub total_commitments_gbp: f64,
}

impl From<&Commitment> for CommitmentRead {
    fn from(commitment: &Commitment) -> Self {
        Self {
            id: commitment.id,
            asset_class: commitment.asset_class.clone(),
            amount: commitment.amount,
            currency: commitment.currency.clone(),
        }
    }
}

fn investor_read<'a>(
    investor: &Investor,
    commitments: impl Iterator<Item = &'a Commitment>,
) -> InvestorRead {
    InvestorRead {
        id: investor.id,
        name: investor.name.clone(),
        investor_type: investor.investor_type.clone(),
        country: investor.country.clone(),
        date_added: investor.date_added,
        last_updated: investor.last_updated,
        commitments: commitments.map(CommitmentRead::from).collect(),
    }
}

/// Every investor with its full commitment list, in the order given.
pub fn list_investors(investors: &[Investor]) -> Vec<InvestorRead> {
    investors
        .iter()
        .map(|investor| investor_read(investor, investor.commitments.iter()))
        .collect()
}

/// One investor, keeping only commitments whose asset class equals
/// `asset_class` exactly. `None` or an empty string keeps them all.
pub fn investor_detail(investor: &Investor, asset_class: Option<&str>) -> InvestorRead {
    match asset_class.filter(|class| !class.is_empty()) {
        Some(class) => investor_read(
            investor,
            investor
                .commitments
                .iter()
                .filter(|commitment| commitment.asset_class == class),
        ),
        None => investor_read(investor, investor.commitments.iter()),
    }
}

/// Sum of every commitment amount. Currencies are not converted.
pub fn total_commitments(investor: &Investor) -> f64 {
    investor
        .commitments
        .iter()
        .fold(0.0, |total, commitment| total + commitment.amount)
}

pub fn investor_total_commitments(investor: &Investor) -> InvestorTotalCommitments {
    InvestorTotalCommitments {
        investor_id: investor.id,
        total_commitments_gbp: total_commitments(investor),
    }
}

/// Flat per-investor summaries for list display; commitments are omitted.
pub fn investors_with_totals(investors: &[Investor]) -> Vec<InvestorWithTotal> {
    investors
        .iter()
        .map(|investor| InvestorWithTotal {
            id: investor.id,
            name: investor.name.clone(),
            investor_type: investor.investor_type.clone(),
            country: investor.country.clone(),
            date_added: investor.date_added,
            total_commitments_gbp: total_commitments(investor),
        })
        .collect()
}
