//! Sequential seeding of delivery areas.
//!
//! Every catalog entry is posted exactly once, in catalog order. A rejected
//! entry is reported and the run moves on; a transport failure ends the run.

use std::io::Write;

use areaseed_client::{CreateOutcome, DeliveryAreaClient};
use areaseed_core::{DeliveryAreaEntry, DeliveryAreaPayload, Tenant};

/// Counts for one seed run. Rejections never affect the exit code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SeedSummary {
    pub attempted: usize,
    pub created: usize,
    pub rejected: usize,
}

/// Posts one delivery area per entry and writes one status line per entry
/// to `out`:
///
/// - `<wilaya> added successfully` on HTTP 201
/// - `Error adding <wilaya>: <status> - <body>` otherwise
///
/// # Errors
///
/// Returns the first transport error from the client, leaving the remaining
/// entries unattempted, or an I/O error from writing to `out`.
pub(crate) async fn run_seed<W: Write>(
    client: &DeliveryAreaClient,
    tenant: &Tenant,
    entries: &[DeliveryAreaEntry],
    out: &mut W,
) -> anyhow::Result<SeedSummary> {
    tracing::info!(
        endpoint = %client.endpoint(),
        delivery_company = %tenant.delivery_company,
        store = %tenant.store,
        entries = entries.len(),
        "starting seed run"
    );

    let mut summary = SeedSummary::default();

    for entry in entries {
        let payload = DeliveryAreaPayload::new(entry, tenant);
        summary.attempted += 1;

        match client.create_delivery_area(&payload).await? {
            CreateOutcome::Created => {
                summary.created += 1;
                writeln!(out, "{} added successfully", entry.wilaya)?;
            }
            CreateOutcome::Rejected { status, body } => {
                summary.rejected += 1;
                writeln!(out, "Error adding {}: {status} - {body}", entry.wilaya)?;
            }
        }
    }

    Ok(summary)
}

/// Writes the payload for every entry as one JSON object per line without
/// sending anything.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub(crate) fn write_dry_run<W: Write>(
    tenant: &Tenant,
    entries: &[DeliveryAreaEntry],
    out: &mut W,
) -> anyhow::Result<()> {
    for entry in entries {
        let payload = DeliveryAreaPayload::new(entry, tenant);
        writeln!(out, "{}", serde_json::to_string(&payload)?)?;
    }
    tracing::info!(entries = entries.len(), "dry run: no requests sent");
    Ok(())
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
