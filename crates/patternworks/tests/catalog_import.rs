use std::io::Write;

use patternworks::workflows::discounts::{CatalogImportError, CatalogImporter};

#[test]
fn importer_seeds_products_and_discount_sets() {
    let csv = "Product,Discount\nps1,\nps4,previous\nps5,new\n";

    let catalog = CatalogImporter::from_reader(csv.as_bytes()).expect("import succeeds");

    assert_eq!(catalog.products().len(), 3);
    assert!(catalog.previously_discounted().contains("ps4"));
    assert!(catalog.newly_discounted().contains("ps5"));
    let delta = catalog.snapshot().delta();
    assert_eq!(delta.len(), 1);
    assert!(delta.contains("ps5"));
}

#[test]
fn importer_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "Product,Discount").expect("write header");
    writeln!(file, "\u{feff}switch,NEW").expect("write row");
    file.flush().expect("flush");

    let catalog = CatalogImporter::from_path(file.path()).expect("import succeeds");

    assert!(catalog.contains("switch"));
    assert!(catalog.newly_discounted().contains("switch"));
}

#[test]
fn importer_rejects_unknown_discount_states() {
    let csv = "Product,Discount\nps5,clearance\n";

    match CatalogImporter::from_reader(csv.as_bytes()) {
        Err(CatalogImportError::UnknownDiscountState { product, value }) => {
            assert_eq!(product, "ps5");
            assert_eq!(value, "clearance");
        }
        other => panic!("expected unknown discount state, got {other:?}"),
    }
}

#[test]
fn importer_rejects_blank_product_names() {
    let csv = "Product,Discount\n ,new\n";

    assert!(matches!(
        CatalogImporter::from_reader(csv.as_bytes()),
        Err(CatalogImportError::Validation(_))
    ));
}

#[test]
fn importer_surfaces_missing_files() {
    assert!(matches!(
        CatalogImporter::from_path("does-not-exist.csv"),
        Err(CatalogImportError::Io(_))
    ));
}
