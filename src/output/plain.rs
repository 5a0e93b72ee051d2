//! Tab-separated output for scripts

use tabled::Tabled;

/// Format rows as a header line plus one tab-separated line per row.
///
/// Tabs and newlines inside values are flattened to spaces so every record
/// stays on one line.
pub fn format_plain<T: Tabled>(data: &[T]) -> String {
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join("\t"));

    for row in data {
        let fields: Vec<String> = row
            .fields()
            .iter()
            .map(|f| f.replace(['\t', '\n'], " "))
            .collect();
        lines.push(fields.join("\t"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_header_only_when_empty() {
        let rows: Vec<Row> = vec![];
        assert_eq!(format_plain(&rows), "ID\tNAME");
    }

    #[test]
    fn test_rows_are_tab_separated() {
        let rows = vec![
            Row {
                id: "1".into(),
                name: "deploy".into(),
            },
            Row {
                id: "2".into(),
                name: "multi\tline\nvalue".into(),
            },
        ];
        assert_eq!(
            format_plain(&rows),
            "ID\tNAME\n1\tdeploy\n2\tmulti line value"
        );
    }
}
