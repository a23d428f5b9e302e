use std::io::Write;
use std::path::Path;

use areaseed_core::DeliveryAreaEntry;

/// Load the catalog at `path` and write a readable listing to `out`.
///
/// Rows the API is likely to reject are logged as warnings; they do not fail
/// the command.
pub(crate) fn run_catalog<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let catalog = areaseed_core::load_catalog(path)?;
    for warning in areaseed_core::suspect_entries(&catalog.areas) {
        tracing::warn!(path = %path.display(), "{warning}");
    }
    write_catalog(&catalog.areas, out)?;
    tracing::debug!(path = %path.display(), entries = catalog.areas.len(), "catalog loaded");
    Ok(())
}

fn write_catalog<W: Write>(entries: &[DeliveryAreaEntry], out: &mut W) -> std::io::Result<()> {
    for entry in entries {
        writeln!(
            out,
            "{}: home {}, desk {}",
            entry.wilaya,
            price_label(entry.price_home),
            price_label(entry.price_desk)
        )?;
    }
    writeln!(out, "{} wilayas", entries.len())
}

fn price_label(price: u32) -> String {
    if price == 0 {
        "not offered".to_string()
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_prices_render_as_not_offered() {
        let entries = vec![
            DeliveryAreaEntry {
                wilaya: "Alger".to_string(),
                price_home: 600,
                price_desk: 450,
            },
            DeliveryAreaEntry {
                wilaya: "In Salah".to_string(),
                price_home: 1600,
                price_desk: 0,
            },
        ];
        let mut out = Vec::new();
        write_catalog(&entries, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Alger: home 600, desk 450\nIn Salah: home 1600, desk not offered\n2 wilayas\n"
        );
    }

    #[test]
    fn run_catalog_lists_blank_and_duplicate_rows() {
        let path = std::env::temp_dir().join(format!(
            "areaseed-{}-catalog-command.yaml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "areas:\n  - wilaya: Oran\n    price_home: 800\n    price_desk: 450\n  - wilaya: oran\n    price_home: 0\n    price_desk: 0\n",
        )
        .unwrap();

        let mut out = Vec::new();
        let result = run_catalog(&path, &mut out);
        std::fs::remove_file(&path).ok();

        assert!(result.is_ok(), "suspect rows only warn: {result:?}");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Oran: home 800, desk 450\noran: home not offered, desk not offered\n2 wilayas\n"
        );
    }

    #[test]
    fn run_catalog_fails_on_missing_file() {
        let result = run_catalog(Path::new("/nonexistent/areas.yaml"), &mut Vec::new());
        assert!(result.is_err());
    }
}
