//! Plain-text and JSON output for the `list` and `show` commands.

use std::io::{self, Write};

use pw_core::{format_points, CampaignRecord, PointSummary};
use pw_tui::Strings;
use serde::Serialize;

/// A record together with its derived figures, as written by `--json`.
#[derive(Serialize)]
struct Entry<'a> {
    #[serde(flatten)]
    record: &'a CampaignRecord,
    summary: PointSummary,
}

impl<'a> Entry<'a> {
    fn new(record: &'a CampaignRecord) -> Self {
        Self {
            record,
            summary: record.summary(),
        }
    }
}

/// Writes one summary line per record, or the empty-state message.
pub fn write_list<W: Write>(
    out: &mut W,
    records: &[&CampaignRecord],
    strings: &Strings,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "{}", strings.no_results);
    }

    for record in records {
        let summary = record.summary();
        writeln!(
            out,
            "{:<4}{:>9}  {} {:>8}  {:<8}  {}  {}",
            record.id.as_u64(),
            format_points(summary.current),
            summary.trend.arrow(),
            format_points(summary.magnitude),
            record.category.as_str(),
            strings.date(record.last_updated),
            record.name,
        )?;
    }
    Ok(())
}

/// Writes one record with its full history.
pub fn write_detail<W: Write>(
    out: &mut W,
    record: &CampaignRecord,
    strings: &Strings,
) -> io::Result<()> {
    let summary = record.summary();

    writeln!(
        out,
        "#{} {} [{}]",
        record.id,
        record.name,
        strings.category(Some(record.category))
    )?;
    writeln!(
        out,
        "{}  {} {}",
        format_points(summary.current),
        summary.trend.arrow(),
        format_points(summary.magnitude)
    )?;
    if let (Some(peak), Some(trough)) = (summary.peak, summary.trough) {
        writeln!(
            out,
            "{}: {}  {}: {}",
            strings.peak,
            format_points(peak),
            strings.trough,
            format_points(trough)
        )?;
    }
    writeln!(
        out,
        "{}: {}",
        strings.last_updated,
        strings.date(record.last_updated)
    )?;
    for point in &record.history {
        writeln!(out, "  {}  {:>9}", point.date, format_points(point.points))?;
    }
    Ok(())
}

/// Writes records with their summaries as a pretty JSON array.
pub fn write_json<W: Write>(out: &mut W, records: &[&CampaignRecord]) -> io::Result<()> {
    let entries: Vec<Entry<'_>> = records.iter().map(|r| Entry::new(r)).collect();
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)
}

/// Writes a single record with its summary as pretty JSON.
pub fn write_detail_json<W: Write>(out: &mut W, record: &CampaignRecord) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Entry::new(record))?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::validate_campaigns;
    use pw_source::builtin_campaigns;

    fn records() -> Vec<CampaignRecord> {
        validate_campaigns(builtin_campaigns()).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_lines() {
        let records = records();
        let refs: Vec<&CampaignRecord> = records.iter().collect();
        let out = render(|buf| write_list(buf, &refs, &Strings::en()));

        insta::assert_snapshot!(out.trim_end(), @r"
        1      2,000P  ↑     200P  service   2025-03-01  Amazon プライム会員登録
        2     13,000P  ↓   1,000P  credit    2025-03-01  楽天カード発行
        ");
    }

    #[test]
    fn test_list_empty() {
        let out = render(|buf| write_list(buf, &[], &Strings::ja()));
        assert_eq!(out, "案件が見つかりませんでした\n");
    }

    #[test]
    fn test_detail() {
        let records = records();
        let out = render(|buf| write_detail(buf, &records[1], &Strings::en()));

        insta::assert_snapshot!(out.trim_end(), @r"
        #2 楽天カード発行 [Credit cards]
        13,000P  ↓ 1,000P
        High: 15,000P  Low: 13,000P
        Updated: 2025-03-01
          2025-01-01    15,000P
          2025-02-01    14,000P
          2025-03-01    13,000P
        ");
    }

    #[test]
    fn test_detail_japanese_date() {
        let records = records();
        let out = render(|buf| write_detail(buf, &records[0], &Strings::ja()));
        assert!(out.contains("最終更新: 2025/3/1"));
        assert!(out.contains("[サービス登録]"));
    }

    #[test]
    fn test_json_includes_summary() {
        let records = records();
        let refs: Vec<&CampaignRecord> = records.iter().collect();
        let out = render(|buf| write_json(buf, &refs));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let first = &value[0];
        assert_eq!(first["id"], 1);
        assert_eq!(first["currentPoints"], 2000);
        assert_eq!(first["category"], "service");
        assert_eq!(first["lastUpdated"], "2025-03-01T12:00:00");
        assert_eq!(first["history"][0]["date"], "2025-01-01");
        assert_eq!(first["summary"]["trend"], "up");
        assert_eq!(first["summary"]["magnitude"], 200);
        assert_eq!(value[1]["summary"]["trend"], "down");
    }

    #[test]
    fn test_detail_json() {
        let records = records();
        let out = render(|buf| write_detail_json(buf, &records[1]));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "楽天カード発行");
        assert_eq!(value["summary"]["peak"], 15000);
    }
}
