use crate::core::dataset::FeatureColumns;
use crate::core::instances::DenseInstance;
use crate::error::SchemaError;
use crate::utils::file_parsing::split_csv_record;

#[derive(Debug, Clone)]
struct Record {
    line: usize,
    fields: Vec<String>,
}

/// Tabular dataset parsed from CSV text: a header plus ordered records.
///
/// Values stay as text until [`Dataset::labeled_instances`] projects them onto
/// the feature and label columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let Some((_, header_line)) = lines.next() else {
            return Err(SchemaError::Unparseable("file is empty".into()));
        };
        let columns = split_csv_record(header_line);
        if columns.iter().any(|c| c.is_empty()) {
            return Err(SchemaError::Unparseable(
                "header contains an empty column name".into(),
            ));
        }

        let mut records = Vec::new();
        for (line, raw) in lines {
            let fields = split_csv_record(raw);
            if fields.len() != columns.len() {
                return Err(SchemaError::Unparseable(format!(
                    "line {line}: expected {} fields, found {}",
                    columns.len(),
                    fields.len()
                )));
            }
            records.push(Record { line, fields });
        }

        Ok(Self { columns, records })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchemaError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| SchemaError::Unparseable(format!("content is not UTF-8: {e}")))?;
        Self::parse(text)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.records.get(row).map(|r| r.fields[col].as_str())
    }

    /// Projects every record onto `features` (in order) and the binary `label` column.
    ///
    /// Feature values must be finite numbers and labels numerically 0 or 1.
    pub fn labeled_instances(
        &self,
        features: &FeatureColumns,
        label: &str,
    ) -> Result<Vec<DenseInstance>, SchemaError> {
        let feature_idx = features
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| SchemaError::MissingColumns(vec![name.to_string()]))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let label_idx = self
            .column_index(label)
            .ok_or_else(|| SchemaError::MissingColumns(vec![label.to_string()]))?;

        let mut out = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let mut values = Vec::with_capacity(feature_idx.len());
            for &i in &feature_idx {
                values.push(parse_numeric(record, &self.columns[i], &record.fields[i])?);
            }

            let raw_label = &record.fields[label_idx];
            let y = match parse_numeric(record, label, raw_label)? {
                v if v == 0.0 => 0,
                v if v == 1.0 => 1,
                _ => {
                    return Err(SchemaError::InvalidValue {
                        line: record.line,
                        column: label.to_string(),
                        value: raw_label.clone(),
                    });
                }
            };
            out.push(DenseInstance::new(values, Some(y)));
        }
        Ok(out)
    }
}

fn parse_numeric(record: &Record, column: &str, raw: &str) -> Result<f64, SchemaError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SchemaError::InvalidValue {
            line: record.line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}
