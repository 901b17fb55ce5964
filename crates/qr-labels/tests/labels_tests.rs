use qr_labels::*;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_load_number_list_first_column() {
    let file = NamedTempFile::new().unwrap();
    tokio::fs::write(file.path(), "1500,Alice\n 1200 ,Bob\n\n608\n,skipped\n")
        .await
        .unwrap();

    let numbers = load_number_list(file.path()).await.unwrap();
    assert_eq!(numbers, vec![1500, 1200, 608]);
}

#[tokio::test]
async fn test_load_number_list_rejects_header() {
    let file = NamedTempFile::new().unwrap();
    tokio::fs::write(file.path(), "matric\n1\n").await.unwrap();

    match load_number_list(file.path()).await {
        Err(LabelError::InvalidNumber(entry)) => assert_eq!(entry, "matric"),
        other => panic!("Expected InvalidNumber error, got {other:?}"),
    }
}

#[test]
fn test_range_validation() {
    assert!(LabelSource::Range { start: 0, count: 5 }.numbers().is_err());
    assert!(LabelSource::Range { start: 1, count: 0 }.numbers().is_err());
    assert!(
        LabelSource::Range {
            start: u64::MAX,
            count: 2
        }
        .numbers()
        .is_err()
    );
    assert_eq!(
        LabelSource::Range { start: 7, count: 2 }.numbers().unwrap(),
        vec![7, 8]
    );
}

#[test]
fn test_generate_from_list_keeps_order() {
    let options = LabelOptions::default();
    let source = LabelSource::new(parse_number_list("1500,1200,608").unwrap(), 1, 5);
    let texts = label_texts(&source, &options).unwrap();
    let labels = generate_labels(&texts, &builtin_font().unwrap(), &options).unwrap();

    let names = archive_names(labels.iter().map(|l| l.text.as_str()));
    assert_eq!(names, vec!["DU1500.png", "DU1200.png", "DU0608.png"]);
}

#[test]
fn test_repeated_numbers_keep_every_label() {
    let options = LabelOptions::default();
    let source = LabelSource::new(parse_number_list("1,1,2,1").unwrap(), 1, 5);
    let texts = label_texts(&source, &options).unwrap();
    let labels = generate_labels(&texts, &builtin_font().unwrap(), &options).unwrap();
    assert_eq!(labels.len(), 4);

    let names = archive_names(labels.iter().map(|l| l.text.as_str()));
    assert_eq!(
        names,
        vec!["DU0001.png", "DU0001_2.png", "DU0002.png", "DU0001_3.png"]
    );
}

#[test]
fn test_generate_nothing() {
    let font = builtin_font().unwrap();
    let labels = generate_labels(&[], &font, &LabelOptions::default()).unwrap();
    assert!(labels.is_empty());
}

#[test]
fn test_error_correction_changes_size() {
    // 40 alphanumeric characters fit version 2 at L but need version 4 at H
    let text = "DU0001DU0002DU0003DU0004DU0005DU0006DU00";
    let low = LabelOptions {
        error_correction: ErrorCorrection::Low,
        box_size: 1,
        border: 0,
        ..Default::default()
    };
    let high = LabelOptions {
        error_correction: ErrorCorrection::High,
        ..low.clone()
    };

    assert!(render_qr(text, &low).unwrap().width() < render_qr(text, &high).unwrap().width());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    let options = LabelOptions {
        prefix: "LIB".to_string(),
        digits: 6,
        box_size: 10,
        error_correction: ErrorCorrection::Quartile,
        ..Default::default()
    };

    let file = NamedTempFile::new().unwrap();
    options.save(file.path()).await.unwrap();
    let loaded = LabelOptions::load(file.path()).await.unwrap();

    assert_eq!(loaded, options);
}
