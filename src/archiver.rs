use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Listing;

/// Writes the listing as pretty JSON, replacing whatever was at `path`.
pub fn save_to_file(listing: &Listing, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(listing)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NOT_AVAILABLE, ProductRecord, SellerRecord};

    fn listing() -> Listing {
        Listing {
            main_information: ProductRecord {
                name: "Lamp".into(),
                price: NOT_AVAILABLE.into(),
                shipping_price: "(Does not ship to Canada)".into(),
                photo_url: NOT_AVAILABLE.into(),
                details: vec![("Brand".into(), "Acme".into())],
                url: "https://www.ebay.com/itm/1".into(),
            },
            seller_information: SellerRecord::default(),
        }
    }

    #[test]
    fn writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("productInfo.json");

        save_to_file(&listing(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let back: Listing = serde_json::from_str(&written).unwrap();
        assert_eq!(back, listing());
        assert!(written.contains("\"shippingPrice\": \"(Does not ship to Canada)\""));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("productInfo.json");
        std::fs::write(&path, "stale content that is much longer than nothing at all").unwrap();

        save_to_file(&listing(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.starts_with('{'));
    }

    #[test]
    fn repeated_saves_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");

        save_to_file(&listing(), &first).unwrap();
        save_to_file(&listing(), &second).unwrap();

        assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.json");
        assert!(save_to_file(&listing(), &path).is_err());
    }
}
