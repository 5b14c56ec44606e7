//! In-memory snapshot of stored investors, assembled per request.

use chrono::NaiveDate;

use crate::entities::{commitment, investor};

/// An investor together with every commitment stored against it.
#[derive(Clone, Debug, PartialEq)]
pub struct Investor {
    pub id: i32,
    pub name: String,
    pub investor_type: String,
    pub country: String,
    pub date_added: NaiveDate,
    pub last_updated: NaiveDate,
    pub commitments: Vec<Commitment>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Commitment {
    pub id: i32,
    pub asset_class: String,
    pub amount: f64,
    pub currency: String,
}

impl From<commitment::Model> for Commitment {
    fn from(model: commitment::Model) -> Self {
        Self {
            id: model.id,
            asset_class: model.asset_class,
            amount: model.amount,
            currency: model.currency,
        }
    }
}

impl From<(investor::Model, Vec<commitment::Model>)> for Investor {
    fn from((model, commitments): (investor::Model, Vec<commitment::Model>)) -> Self {
        Self {
            id: model.id,
            name: model.name,
            investor_type: model.investor_type,
            country: model.country,
            date_added: model.date_added,
            last_updated: model.last_updated,
            commitments: commitments.into_iter().map(Commitment::from).collect(),
        }
    }
}
