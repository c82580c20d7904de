//! Report rendering: fixed chart boilerplate around per-record row-entries.

use crate::diagnostics;
use crate::record::Record;
use crate::Result;

use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Chart bootstrap and column declarations, up to the opening of the data
/// array. Kept in a raw string because `format!` would conflict with the
/// JavaScript braces.
const PREAMBLE: &str = r#"
      google.charts.load("current", {packages:["corechart", "line", "table"]});
      google.charts.setOnLoadCallback(draw1sPercent);
      function draw1sPercent() {
        var cssClassNames = {headerCell: 'headerCell', tableCell: 'tableCell'};
        var options = {showRowNumber: true,'allowHtml': true, 'cssClassNames': cssClassNames, 'alternatingRowStyle': true};
        var data = new google.visualization.DataTable();
        data.addColumn('string', 'DateTimestamp');
        data.addColumn('string', 'Scenario');
        data.addColumn('number', 'Connections');
        data.addColumn('number', 'Send');
        data.addColumn('number', 'SendTPuts');
        data.addColumn('number', 'RecvTPuts');
        data.addRows([
"#;

/// Terminates the data array, switches the scenario column to rendered
/// markup and draws the table into the container the embedding page must
/// provide.
const CLOSING: &str = r#"
        ]);
        data.setColumnProperty(1, {allowHtml: true});
        var table = new google.visualization.Table(document.getElementById('1s_percent_table_div'));

        table.draw(data, options);
      }

"#;

/// Format one record as a bracketed row-entry of the data array.
///
/// String columns are single-quoted verbatim, with no escaping of embedded
/// quotes or HTML; numeric columns are inserted unquoted exactly as read.
fn row_entry(record: &Record) -> String {
    format!(
        r#"          ['{}', '<a href="{}">{}</a>', {}, {}, {}, {}],"#,
        record.date,
        record.link,
        record.scenario,
        record.connections,
        record.send,
        record.send_throughput,
        record.recv_throughput,
    )
}

/// Stream the chart snippet for the CSV at `path` into `out`.
///
/// The preamble goes out before the input is opened, so an unreadable file
/// still leaves it in the stream. A malformed row gets a diagnostic line in
/// the output followed by an abort of the whole run; rows already emitted
/// stay in the stream.
pub fn generate<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    out.write_all(PREAMBLE.as_bytes())?;

    let file = File::open(path).with_context(|| {
        diagnostics::error_message(format!("open input file {}", path.display()))
    })?;
    let reader = BufReader::new(file);

    let mut rows = 0usize;
    for (lineno, line) in reader.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.with_context(|| {
            diagnostics::error_message(format!("read {}:{}", path.display(), lno))
        })?;
        let line = line.trim_end();

        if line.trim().is_empty() {
            continue;
        }

        let record = match Record::parse(line) {
            Ok(record) => record,
            Err(err) => {
                // Diagnose into the report stream first, then fail the run.
                writeln!(
                    out,
                    "Invalid input line '{}': the columns do not match requirement",
                    line
                )?;
                return Err(err.context(diagnostics::error_message(format!(
                    "invalid row at {}:{}",
                    path.display(),
                    lno
                ))));
            }
        };

        writeln!(out, "{}", row_entry(&record))?;
        rows += 1;
    }

    if rows == 0 {
        diagnostics::warn(format!(
            "{} contained no data rows, the rendered table will be empty",
            path.display()
        ));
    }

    out.write_all(CLOSING.as_bytes())?;
    Ok(())
}
