use crate::error::WorkloadBenchError;

/// Decodes measurement CSV content into `(title, values)` columns.
///
/// The first non-blank line holds quoted column titles, every other non-blank
/// line one sample per column.
pub fn parse_columns(
    content: &str,
    file: &str,
) -> Result<Vec<(String, Vec<f64>)>, WorkloadBenchError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| WorkloadBenchError::MissingHeader(file.to_owned()))?;
    let mut columns: Vec<(String, Vec<f64>)> = header
        .split(',')
        .map(|title| (title.trim().replace('\'', ""), Vec::new()))
        .collect();

    for (line_number, line) in lines {
        let values = line.split(',').map(str::trim).collect::<Vec<_>>();
        if values.len() != columns.len() {
            return Err(WorkloadBenchError::RaggedRow {
                file: file.to_owned(),
                line: line_number,
                expected: columns.len(),
                actual: values.len(),
            });
        }

        for ((_, column), value) in columns.iter_mut().zip(values) {
            let invalid_value = || WorkloadBenchError::InvalidValue {
                file: file.to_owned(),
                line: line_number,
                value: value.to_owned(),
            };
            let sample = value.parse::<f64>().map_err(|_| invalid_value())?;
            if !sample.is_finite() {
                return Err(invalid_value());
            }
            column.push(sample);
        }
    }

    Ok(columns)
}
