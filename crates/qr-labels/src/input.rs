use crate::options::LabelOptions;
use crate::types::{LabelError, LabelSource, Result};
use std::path::Path;

/// Parse a comma separated list such as `"1500, 1200,608"`.
///
/// Blank entries are skipped; anything else must be an unsigned integer.
pub fn parse_number_list(text: &str) -> Result<Vec<u64>> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_number)
        .collect()
}

fn parse_number(entry: &str) -> Result<u64> {
    entry
        .parse()
        .map_err(|_| LabelError::InvalidNumber(entry.to_string()))
}

/// Read numbers from the first column of a CSV or plain text file.
///
/// The file has no header row. Blank cells are skipped.
pub async fn load_number_list(path: impl AsRef<Path>) -> Result<Vec<u64>> {
    let contents = tokio::fs::read_to_string(path.as_ref()).await?;

    // CSV parsing is CPU-bound, spawn blocking
    let numbers = tokio::task::spawn_blocking(move || {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());
        let mut numbers = Vec::new();

        for result in reader.records() {
            let record = result?;
            match record.get(0) {
                Some(cell) if !cell.is_empty() => numbers.push(parse_number(cell)?),
                _ => {}
            }
        }
        Ok::<_, LabelError>(numbers)
    })
    .await??;

    Ok(numbers)
}

/// Format a number as label text: prefix plus zero-padded digits.
///
/// Numbers wider than `digits` are kept whole.
pub fn format_label(number: u64, options: &LabelOptions) -> String {
    format!(
        "{}{:0width$}",
        options.prefix,
        number,
        width = options.digits
    )
}

/// Label texts for every number of `source`, in order
pub fn label_texts(source: &LabelSource, options: &LabelOptions) -> Result<Vec<String>> {
    Ok(source
        .numbers()?
        .into_iter()
        .map(|number| format_label(number, options))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_and_skips_blanks() {
        assert_eq!(
            parse_number_list("1500, 1200 ,608,, ").unwrap(),
            vec![1500, 1200, 608]
        );
        assert!(parse_number_list("").unwrap().is_empty());
        assert!(parse_number_list(" , ,").unwrap().is_empty());
    }

    #[test]
    fn test_parse_list_rejects_text() {
        match parse_number_list("12,abc") {
            Err(LabelError::InvalidNumber(entry)) => assert_eq!(entry, "abc"),
            other => panic!("Expected InvalidNumber error, got {other:?}"),
        }
        assert!(parse_number_list("-4").is_err());
    }

    #[test]
    fn test_format_label() {
        let options = LabelOptions::default();
        assert_eq!(format_label(1, &options), "DU0001");
        assert_eq!(format_label(608, &options), "DU0608");
        assert_eq!(format_label(12345, &options), "DU12345");
        assert_eq!(format_label(0, &options), "DU0000");
    }

    #[test]
    fn test_format_label_custom_prefix() {
        let options = LabelOptions {
            prefix: "LIB-".to_string(),
            digits: 6,
            ..Default::default()
        };
        assert_eq!(format_label(42, &options), "LIB-000042");
    }

    #[test]
    fn test_label_texts_from_range() {
        let source = LabelSource::new(Vec::new(), 1, 3);
        let texts = label_texts(&source, &LabelOptions::default()).unwrap();
        assert_eq!(texts, vec!["DU0001", "DU0002", "DU0003"]);
    }

    #[test]
    fn test_list_takes_precedence_over_range() {
        let source = LabelSource::new(vec![1500, 1200, 608], 1, 5);
        let texts = label_texts(&source, &LabelOptions::default()).unwrap();
        assert_eq!(texts, vec!["DU1500", "DU1200", "DU0608"]);
    }
}
