use crate::artifacts::links::formatter::ColumnFormatter;
use crate::artifacts::query::hidden_columns::HiddenColumns;
use crate::artifacts::rows::column::Column;
use crate::artifacts::rows::group_span::GroupSpan;
use crate::artifacts::rows::row::Row;
use crate::artifacts::table::MERGED_COLUMN;
use std::io::Write;

/// How a row's cell in the merged column is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergedCell {
    Single,
    /// First row of a span; the cell covers this many rows
    Start(usize),
    /// Covered by the cell of an earlier row
    Covered,
}

pub struct ResultTable<'t> {
    rows: &'t [Row],
    formatter: ColumnFormatter<'t>,
    columns: Vec<Column>,
    merged_cells: Vec<MergedCell>,
}

impl<'t> ResultTable<'t> {
    pub fn new(
        rows: &'t [Row],
        spans: &[GroupSpan],
        hidden: HiddenColumns,
        formatter: ColumnFormatter<'t>,
    ) -> Self {
        let mut merged_cells = vec![MergedCell::Single; rows.len()];
        for span in spans.iter().filter(|span| span.last() < rows.len()) {
            merged_cells[span.start()] = MergedCell::Start(span.row_count());
            for cell in &mut merged_cells[span.start() + 1..=span.last()] {
                *cell = MergedCell::Covered;
            }
        }

        ResultTable {
            rows,
            formatter,
            columns: hidden.visible_columns(),
            merged_cells,
        }
    }

    pub fn render(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(writer, "<table class=\"commits\">")?;
        writeln!(writer, "<thead>")?;
        write!(writer, "<tr>")?;
        for column in &self.columns {
            write!(
                writer,
                "<th data-field=\"{}\">{}</th>",
                column.index(),
                column.label()
            )?;
        }
        writeln!(writer, "</tr>")?;
        writeln!(writer, "</thead>")?;

        writeln!(writer, "<tbody>")?;
        for (index, row) in self.rows.iter().enumerate() {
            self.render_row(writer, row, self.merged_cells[index])?;
        }
        writeln!(writer, "</tbody>")?;
        writeln!(writer, "</table>")?;

        Ok(())
    }

    fn render_row(&self, writer: &mut dyn Write, row: &Row, merged: MergedCell) -> anyhow::Result<()> {
        write!(writer, "<tr>")?;
        for column in &self.columns {
            let cell = self.formatter.format_cell(row, *column);
            if *column != MERGED_COLUMN {
                write!(writer, "<td>{cell}</td>")?;
                continue;
            }

            match merged {
                MergedCell::Single => write!(writer, "<td>{cell}</td>")?,
                MergedCell::Start(row_count) => {
                    write!(writer, "<td rowspan=\"{row_count}\">{cell}</td>")?
                }
                MergedCell::Covered => {}
            }
        }
        writeln!(writer, "</tr>")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::config::repository_config::RepositoryConfig;
    use crate::artifacts::query::query_parameters::QueryParameters;
    use crate::artifacts::rows::group_span::compute_group_spans;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<Row> {
        vec![
            Row::from_fields(["repoA", "2024-01-01T10:00:00", "alice", "a.c", "1.1", "main", "1/0", "fix bug"]),
            Row::from_fields(["repoA", "2024-01-01T10:00:05", "alice", "b.c", "1.1", "main", "2/2", "fix bug"]),
            Row::from_fields(["repoB", "2024-01-01T11:00:00", "bob", "c.c", "1.7", "main", "", "other"]),
        ]
    }

    fn render(rows: &[Row], hidden: HiddenColumns) -> String {
        let config = RepositoryConfig::default();
        let formatter = ColumnFormatter::try_new(&config).unwrap();
        let spans = compute_group_spans(rows);
        let table = ResultTable::new(rows, &spans, hidden, formatter);

        let mut out = Vec::new();
        table.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn merges_description_cells_of_one_commit() {
        let html = render(&rows(), HiddenColumns::empty());
        let body: Vec<&str> = html.lines().filter(|line| line.starts_with("<tr><td>")).collect();

        assert_eq!(body.len(), 3);
        assert!(body[0].ends_with("<td rowspan=\"2\">fix bug</td></tr>"), "{}", body[0]);
        assert!(body[1].ends_with("<td>2/2</td></tr>"), "{}", body[1]);
        assert!(body[2].ends_with("<td>other</td></tr>"), "{}", body[2]);
    }

    #[test]
    fn renders_every_column_of_a_row() {
        let html = render(&rows()[2..], HiddenColumns::empty());

        assert!(html.contains(
            "<tr><td>repoB</td><td>2024-01-01T11:00</td><td>bob</td><td>c.c</td>\
             <td>1.7</td><td>main</td><td>-</td><td>other</td></tr>"
        ));
    }

    #[test]
    fn hidden_columns_are_left_out() {
        let hidden = HiddenColumns::from_query(&QueryParameters::parse(
            "branch=main&branchtype=match&repository=repoA&repositorytype=match",
        ));
        let html = render(&rows(), hidden);

        assert!(!html.contains("data-field=\"0\""));
        assert!(!html.contains("data-field=\"5\""));
        assert!(html.contains("<th data-field=\"7\">Description</th>"));
        assert!(html.lines().any(|line| line.starts_with("<tr><td>2024-01-01T10:00</td>")));
    }

    #[test]
    fn empty_result_renders_empty_body() {
        let html = render(&[], HiddenColumns::empty());
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("<tbody>\n</tbody>"));
    }
}
