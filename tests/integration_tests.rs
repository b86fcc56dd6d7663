use scorecard_etl::{
    AdmissionsConfig, AdmissionsJob, CollegeFilterJob, CollegesConfig, EtlEngine, LocalStorage,
    UpdateFileConfig, UpdateFileJob,
};
use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn read_rows(path: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect()
}

#[tokio::test]
async fn extract_admissions_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "scorecard.csv",
        "UNITID,INSTNM,ADM_RATE,SATVR25,ACTCMMID\n\
         100654,Alabama A & M University,0.8986,480,18\n\
         100663,UAB,NULL,PrivacySuppressed,NA\n\
         ,Orphan Row,0.5,500,20\n\
         100690,Amridge University,0.5,,\n",
    );
    let output = temp_dir.path().join("admission_data.csv");
    let output = output.to_str().unwrap().to_string();

    let config = AdmissionsConfig::parse_from([
        "extract-admissions",
        "--input",
        &input,
        "--output",
        &output,
    ]);
    let engine = EtlEngine::new(AdmissionsJob, LocalStorage::new(), config);
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.rows_processed, 4);
    assert_eq!(summary.rows_kept, 2);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 3); // header + 2 kept rows
    assert_eq!(rows[0][0], "unitid");
    assert_eq!(rows[0].len(), 11);
    assert_eq!(rows[1][0], "100654");
    assert_eq!(rows[1][1], "0.8986");
    assert_eq!(rows[2][0], "100690");
    // Every data row matches the declared schema width
    assert!(rows.iter().all(|r| r.len() == 11));
}

#[tokio::test]
async fn filter_colleges_end_to_end_with_bom() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "institutions.csv",
        "\u{feff}UNITID,INSTNM,CONTROL,UGDS,ICLEVEL\n\
         100654,Alabama A & M University,1,5196,1\n\
         100663,For Profit U,3,9000,1\n\
         100690,Tiny College,2,50,1\n\
         100706,Suppressed College,1,PrivacySuppressed,1\n\
         100724,Certificate School,1,2000,3\n\
         100733,Community College,1,800.5,2\n",
    );
    let output = temp_dir.path().join("crown_hub_colleges.csv");
    let output = output.to_str().unwrap().to_string();

    let config =
        CollegesConfig::parse_from(["filter-colleges", "--input", &input, "--output", &output]);
    let engine = EtlEngine::new(CollegeFilterJob::default(), LocalStorage::new(), config);
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.rows_processed, 6);
    assert_eq!(summary.rows_kept, 2);

    let rows = read_rows(&output);
    assert_eq!(rows[0], vec!["UNITID", "INSTNM", "CONTROL", "UGDS", "ICLEVEL"]);
    assert_eq!(rows[1][0], "100654");
    assert_eq!(rows[2][0], "100733");

    // Output never carries a BOM
    let raw = std::fs::read(&output).unwrap();
    assert_ne!(&raw[..3], [0xef, 0xbb, 0xbf]);
}

#[tokio::test]
async fn generate_update_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "scorecard.csv",
        "UNITID,INSTNM,STABBR,ADM_RATE,ACTCMMID\n\
         215062,University of Pennsylvania,PA,0.065,34\n\
         190150,Columbia University,ny ,0.039,35\n\
         110635,UC Berkeley,CA,0.117,33\n\
         ,No Id,TX,0.5,20\n",
    );
    let output = temp_dir.path().join("schools_update.csv");
    let output = output.to_str().unwrap().to_string();

    let config = UpdateFileConfig::parse_from([
        "generate-update-file",
        "--input",
        &input,
        "--output",
        &output,
    ]);
    let engine = EtlEngine::new(UpdateFileJob::default(), LocalStorage::new(), config);
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.rows_processed, 4);
    assert_eq!(summary.rows_kept, 3);
    assert_eq!(
        summary.extra,
        vec![
            ("DRIVE schools".to_string(), 2),
            ("FLY schools".to_string(), 1),
        ]
    );

    let rows = read_rows(&output);
    assert_eq!(rows[0][0], "unitid");
    assert_eq!(rows[0].len(), 15);

    // Penn: close drive tier
    assert_eq!(rows[1][3], "DRIVE");
    assert_eq!(rows[1][4], "600");
    // Columbia: raw state survives, classification normalizes it
    assert_eq!(rows[2][2], "ny ");
    assert_eq!(rows[2][3], "DRIVE");
    assert_eq!(rows[2][4], "1000");
    // Berkeley: fly tier
    assert_eq!(rows[3][3], "FLY");
    assert_eq!(rows[3][4], "2500");
}

#[tokio::test]
async fn missing_input_file_aborts_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.csv");
    let output = output.to_str().unwrap().to_string();

    let config = AdmissionsConfig::parse_from([
        "extract-admissions",
        "--input",
        "does_not_exist.csv",
        "--output",
        &output,
    ]);
    let engine = EtlEngine::new(AdmissionsJob, LocalStorage::new(), config);

    assert!(engine.run().await.is_err());
    // No partial output is created when the input cannot be opened
    assert!(!Path::new(&output).exists());
}
