//! Loads investor/commitment rows from the flat CSV export into storage.
//!
//! Each CSV row carries one commitment plus the full description of its
//! investor. Investors are matched by name: the first row for a name creates
//! the investor, later rows only add commitments to it.

use anyhow::Context;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::io::Read;
use tracing::{debug, info};

use crate::entities::{commitment, investor};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Investor Name")]
    investor_name: String,
    // sic: the column is misspelled in the source export
    #[serde(rename = "Investory Type")]
    investor_type: String,
    #[serde(rename = "Investor Country")]
    investor_country: String,
    #[serde(rename = "Investor Date Added")]
    date_added: NaiveDate,
    #[serde(rename = "Investor Last Updated")]
    last_updated: NaiveDate,
    #[serde(rename = "Commitment Asset Class")]
    asset_class: String,
    #[serde(rename = "Commitment Amount")]
    amount: f64,
    #[serde(rename = "Commitment Currency")]
    currency: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub investors_created: usize,
    pub commitments_inserted: usize,
}

/// Reads every row from `reader` and stores it. Rows are parsed up front, so
/// a malformed file leaves storage untouched.
pub async fn run_seed<R: Read>(db: &DatabaseConnection, reader: R) -> anyhow::Result<SeedSummary> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let rows = csv_reader
        .deserialize::<CsvRow>()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to parse seed CSV")?;

    info!("Parsed {} rows from seed CSV", rows.len());

    let mut summary = SeedSummary::default();

    for row in rows {
        let existing = investor::Entity::find()
            .filter(investor::Column::Name.eq(row.investor_name.as_str()))
            .one(db)
            .await?;

        let investor_id = match existing {
            Some(found) => found.id,
            None => {
                let created = investor::ActiveModel {
                    name: Set(row.investor_name.clone()),
                    investor_type: Set(row.investor_type),
                    country: Set(row.investor_country),
                    date_added: Set(row.date_added),
                    last_updated: Set(row.last_updated),
                    ..Default::default()
                }
                .insert(db)
                .await
                .with_context(|| format!("failed to insert investor {}", row.investor_name))?;

                debug!(investor_id = created.id, "Created investor {}", created.name);
                summary.investors_created += 1;
                created.id
            }
        };

        commitment::ActiveModel {
            investor_id: Set(investor_id),
            asset_class: Set(row.asset_class),
            amount: Set(row.amount),
            currency: Set(row.currency),
            ..Default::default()
        }
        .insert(db)
        .await
        .with_context(|| format!("failed to insert commitment for investor {}", investor_id))?;

        summary.commitments_inserted += 1;
    }

    info!(
        "Seeding finished: {} investors created, {} commitments inserted",
        summary.investors_created, summary.commitments_inserted
    );
    Ok(summary)
}
