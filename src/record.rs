//! Parsing of one benchmark result line into its seven columns.

use crate::Result;

use anyhow::bail;

/// Number of comma-separated columns every non-blank input line must have.
pub const FIELD_COUNT: usize = 7;

/// One benchmark result, borrowed from a single input line.
///
/// Column layout:
/// date,scenario,connections,send,sendTPuts,recvTPuts,link
///
/// All columns are kept verbatim. The numeric ones (connections, send and
/// the two throughputs) are substituted unquoted into numeric chart columns,
/// so they must be syntactically numeric to render downstream, but they are
/// never re-parsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub date: &'a str,
    pub scenario: &'a str,
    pub connections: &'a str,
    pub send: &'a str,
    pub send_throughput: &'a str,
    pub recv_throughput: &'a str,
    pub link: &'a str,
}

impl<'a> Record<'a> {
    /// Split `line` on `,` and map the columns positionally.
    ///
    /// Any count other than [`FIELD_COUNT`] is a hard validation error; the
    /// caller attaches the line number before propagating it.
    pub fn parse(line: &'a str) -> Result<Record<'a>> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            bail!(
                "expected {} comma-separated columns, found {}",
                FIELD_COUNT,
                fields.len()
            );
        }

        Ok(Record {
            date: fields[0],
            scenario: fields[1],
            connections: fields[2],
            send: fields[3],
            send_throughput: fields[4],
            recv_throughput: fields[5],
            link: fields[6],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_columns_positionally() {
        let record =
            Record::parse("2023-01-01,Baseline,100,500,1000,950,http://example.com/report1")
                .unwrap();
        assert_eq!(
            record,
            Record {
                date: "2023-01-01",
                scenario: "Baseline",
                connections: "100",
                send: "500",
                send_throughput: "1000",
                recv_throughput: "950",
                link: "http://example.com/report1",
            }
        );
    }

    #[test]
    fn keeps_columns_verbatim() {
        // Empty columns still count towards the total and nothing is
        // re-validated as a number or URL.
        let record = Record::parse("yesterday,,0x1f,1.5,,-2,not a url").unwrap();
        assert_eq!(record.date, "yesterday");
        assert_eq!(record.scenario, "");
        assert_eq!(record.connections, "0x1f");
        assert_eq!(record.send, "1.5");
        assert_eq!(record.send_throughput, "");
        assert_eq!(record.recv_throughput, "-2");
        assert_eq!(record.link, "not a url");
    }

    #[test]
    fn rejects_short_rows() {
        let err = Record::parse("2023-01-01,Baseline,100,500,1000").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected 7 comma-separated columns, found 5"
        );
    }

    #[test]
    fn rejects_long_rows() {
        // A trailing comma reads as an extra empty column.
        let err = Record::parse("2023-01-01,Baseline,100,500,1000,950,http://example.com/,")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected 7 comma-separated columns, found 8"
        );
    }
}
