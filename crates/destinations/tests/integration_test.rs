//! Integration tests for the destinations pipeline.

use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

use destinations::{
    ColumnMap, DestinationError, DuplicateIdPolicy, GunLawTable, IssueKind, Pipeline, slug,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const CURRENT_CSV: &str = "\
City,State,County,StateParty,Governor,Mayor,Population,Density,Sales Tax,Income,Marijuana,Gifford Score,Veterans Benefits,Climate,Snow,Rain,Gas,COL,Sun,LGBTQ,TechHub,VA,TCI,ALW,AHS,2016Election,2016PresidentPercent,2024 Election,2024PresidentPercent,ElectionChange
Tuscon,AZ,Pima,R,D,N,\"542,629\",\"2,294\",8.7,2.5,Recreational,F,,Hot desert,0.8,11.6,$3.19,97,286,78,N,Y,61,54,70,Clinton,53.6%,Harris,51.2%,Held
Lousville,KY,Jefferson,R,D,D,\"622,981\",\"2,361\",6,4,Medical,D,Free hunting license,Humid subtropical,12.4,44.9,$3.05,91,197,?,N,Y,55,50,68,Clinton,54.0%,Harris,52.3%,Held
,TX,,R,R,,,,,,,,,,,,,,,,,,,,,,,,,
Austin,TX,Travis,R,R,D,\"961,855\",\"3,006\",8.25,0,Illegal,F,,Humid subtropical,0.6,34.3,$2.95,101,228,80,Y,Y,70,62,75,Clinton,65.8%,Harris,69.6%,Held
Boise,ID,Ada,R,R,D,\"235,684\",\"2,640\",6,5.8,Illegal,F,,Semi-arid,18.9,11.9,$3.45,106,206,60,Y,N,58,47,66,Trump,47.3%,Trump,50.1%,Held
";

// =============================================================================
// Basic Functionality Tests
// =============================================================================

#[test]
fn test_process_current_schema() {
    let file = create_test_file(CURRENT_CSV);
    let result = Pipeline::new().process(file.path()).expect("Processing failed");

    assert_eq!(result.source.row_count, 5);
    assert_eq!(result.source.format, "csv");
    assert!(result.source.hash.starts_with("sha256:"));

    assert_eq!(result.summary.rows_read, 5);
    assert_eq!(result.summary.records_dropped, 1);
    assert_eq!(result.records.len(), 4);

    let cities: Vec<_> = result.records.iter().map(|r| r.city.as_str()).collect();
    assert_eq!(cities, vec!["Austin", "Boise", "Louisville", "Tucson"]);
}

#[test]
fn test_spelling_fixes_and_ids() {
    let file = create_test_file(CURRENT_CSV);
    let result = Pipeline::new().process(file.path()).unwrap();

    let louisville = result.records.iter().find(|r| r.city == "Louisville").unwrap();
    assert_eq!(louisville.state, "Kentucky");
    assert_eq!(louisville.state_code, "KY");
    assert_eq!(louisville.id, "louisville-kentucky");

    for record in &result.records {
        assert_eq!(record.id, slug::destination_id(&record.city, &record.state));
        assert!(slug::is_slug(&record.id));
    }
}

#[test]
fn test_json_document_shape() {
    let file = create_test_file(CURRENT_CSV);
    let result = Pipeline::new().process(file.path()).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&destinations::to_json(&result.records).unwrap()).unwrap();

    let austin = &value[0];
    assert_eq!(austin["id"], "austin-texas");
    assert_eq!(austin["population"], 961855);
    assert_eq!(austin["salesTax"], 8.25);
    assert_eq!(austin["gasPrice"], 2.95);
    assert_eq!(austin["marijuanaStatus"], "illegal");
    assert_eq!(austin["firearmLaws"], "permissive");
    assert_eq!(austin["giffordScore"], "F");
    assert_eq!(austin["costOfLivingLabel"], "Medium");
    assert_eq!(austin["mayorParty"], "democrat");
    assert_eq!(austin["techHub"], true);
    assert_eq!(austin["veteranBenefits"], "No state-specific veteran benefit noted.");
    assert_eq!(
        austin["climate"],
        "Humid subtropical with roughly 228 sunny days per year."
    );
    assert_eq!(austin["election2024Percent"], 69.6);

    let boise = &value[1];
    assert_eq!(boise["costOfLivingLabel"], "High");
}

#[test]
fn test_issues_are_collected() {
    let file = create_test_file(CURRENT_CSV);
    let result = Pipeline::new().process(file.path()).unwrap();

    let placeholder = result
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::Placeholder)
        .expect("LGBTQ '?' should be flagged");
    assert_eq!(placeholder.city, "Louisville");
    assert_eq!(placeholder.raw.as_deref(), Some("?"));

    // The city-less row is dropped but its missing population is still audited.
    assert!(result
        .issues
        .iter()
        .any(|i| i.kind == IssueKind::Missing && i.city.is_empty()));
}

// =============================================================================
// Run / Output Tests
// =============================================================================

#[test]
fn test_run_writes_document() {
    let file = create_test_file(CURRENT_CSV);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("destinations.json");

    let result = Pipeline::new().run(file.path(), &output).unwrap();
    let text = fs::read_to_string(&output).unwrap();

    assert!(text.ends_with("]\n"));
    assert!(text.contains("\n  {\n    \"id\": "));
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.len(), result.records.len());
}

#[test]
fn test_run_is_idempotent() {
    let file = create_test_file(CURRENT_CSV);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("destinations.json");

    Pipeline::new().run(file.path(), &output).unwrap();
    let first = fs::read(&output).unwrap();
    Pipeline::new().run(file.path(), &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.csv");
    let output = dir.path().join("destinations.json");

    let err = Pipeline::new().run(&input, &output).unwrap_err();
    assert!(matches!(err, DestinationError::MissingInput { .. }));
    assert!(err.to_string().contains("nope.csv"));
    assert!(!output.exists());
}

#[test]
fn test_rejected_duplicates_leave_output_untouched() {
    let csv = "City,State\nSpringfield,IL\nSpringfield,IL\n";
    let file = create_test_file(csv);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("destinations.json");
    fs::write(&output, "previous\n").unwrap();

    let err = Pipeline::new()
        .with_duplicate_ids(DuplicateIdPolicy::Reject)
        .run(file.path(), &output)
        .unwrap_err();
    assert!(matches!(err, DestinationError::DuplicateId { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn test_header_only_input_writes_empty_array() {
    let file = create_test_file("City,State\n");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("destinations.json");

    let result = Pipeline::new().run(file.path(), &output).unwrap();
    assert!(result.records.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]\n");
}

// =============================================================================
// Schema Variant Tests
// =============================================================================

#[test]
fn test_legacy_schema() {
    let csv = "\
City,State,Governor,Sales Tax,Income,Marijuana,Gifford Score,Veterans Benefits,Climate,Snowfall,Rainfall,Gas Price,COL,Sun
Nashville,Tennesee,R,7,0,,F,,Humid,4.7,47.3,$2.99,Medium,208
Santa Fe,New Mexico,D,7.9,5.9,Recreational,B+,Tax exemption,Arid,32,14.2,$3.11,,283
";
    let file = create_test_file(csv);
    let result = Pipeline::new()
        .with_columns(ColumnMap::v1())
        .process(file.path())
        .unwrap();

    assert_eq!(result.summary.schema_version, "v1");
    let nashville = &result.records[0];
    assert_eq!(nashville.state, "Tennessee");
    assert_eq!(nashville.state_code, "TN");
    assert_eq!(nashville.marijuana_status, "unknown");
    assert_eq!(nashville.cost_of_living_label().as_str(), "Medium");

    let santa_fe = &result.records[1];
    assert_eq!(santa_fe.id, "santa-fe-new-mexico");
    assert_eq!(santa_fe.state_code, "NM");
    assert_eq!(santa_fe.cost_of_living, 95);
    assert_eq!(santa_fe.firearm_laws().as_str(), "restrictive");
    assert_eq!(santa_fe.veteran_benefits, "Tax exemption");
}

#[test]
fn test_tab_delimited_input() {
    let tsv = "City\tState\tGas\nAustin\tTX\t$2.95\n";
    let file = create_test_file(tsv);
    let result = Pipeline::new().process(file.path()).unwrap();
    assert_eq!(result.source.format, "tsv");
    assert_eq!(result.records[0].gas_price, 2.95);
}

#[test]
fn test_gun_law_side_table() {
    let gun_laws = create_test_file(
        "State,Magazine,Gifford,Ghost,Assault\nCA,10 rounds,A,Y,Y\nTX,,F,N,N\nNV,,F\nOR,,Unknown,N,N\n",
    );
    let locations = create_test_file(
        "City,State,Gifford Score\nFresno,CA,\nAustin,TX,\nBoise,ID,\nReno,NV,\nBend,OR,\nSalem,OR,Unknown\n",
    );

    let table = GunLawTable::load(gun_laws.path()).unwrap();
    let result = Pipeline::new()
        .with_gun_laws(table)
        .process(locations.path())
        .unwrap();

    let by_city = |city: &str| result.records.iter().find(|r| r.city == city).unwrap();
    assert_eq!(by_city("Fresno").gifford_display(), "A");
    assert_eq!(by_city("Austin").firearm_laws().as_str(), "permissive");
    assert_eq!(by_city("Boise").gifford_display(), "Unknown");
    assert_eq!(by_city("Boise").firearm_laws().as_str(), "moderate");

    // Short side-table rows are ignored; "Unknown" means no grade anywhere.
    for city in ["Reno", "Bend", "Salem"] {
        assert_eq!(by_city(city).gifford_display(), "Unknown");
        assert_eq!(by_city(city).firearm_laws().as_str(), "moderate");
    }
}
