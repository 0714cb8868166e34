use fortnite_tracker::{
    Playlist,
    StatsGroup,
    StatsResponse,
};
use std::fmt::Write;

const PLAYLISTS: [Playlist; 3] = [Playlist::Solo, Playlist::Duo, Playlist::Squad];

/// A text table with a header row.
///
/// Cells are left-aligned and padded to the widest cell in their column.
#[derive(Debug)]
pub struct Table {
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Make a new table with the given column headers
    pub fn new(headers: &[&str]) -> Self {
        let mut table = Self {
            rows: Vec::new(),
            column_widths: vec![0; headers.len()],
        };
        table.push_row(headers.iter().map(|header| header.to_string()).collect());
        table
    }

    /// Add a row.
    ///
    /// Missing cells are left empty, extra cells are dropped.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.column_widths.len(), String::new());
        for (width, cell) in self.column_widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    fn fmt_border(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('+')?;
        for width in self.column_widths.iter() {
            write!(f, "{:-<1$}+", "", width + 2)?;
        }
        writeln!(f)
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_border(f)?;
        for (i, row) in self.rows.iter().enumerate() {
            f.write_char('|')?;
            for (cell, width) in row.iter().zip(self.column_widths.iter()) {
                write!(f, " {:<1$} |", cell, width)?;
            }
            writeln!(f)?;

            // Separate the header
            if i == 0 {
                self.fmt_border(f)?;
            }
        }
        if self.rows.len() > 1 {
            self.fmt_border(f)?;
        }

        Ok(())
    }
}

fn playlist_row(name: &str, group: &StatsGroup) -> Vec<String> {
    let mut buffer = itoa::Buffer::new();
    vec![
        name.to_string(),
        buffer.format(group.matches.value_int).to_string(),
        buffer.format(group.top1.value_int).to_string(),
        buffer.format(group.kills.value_int).to_string(),
        group.kd.display_value.clone(),
        group.win_ratio.display_value.clone(),
        group.trn_rating.display_value.clone(),
    ]
}

/// A text report for a user's stats.
///
/// At most `max_matches` recent matches are shown.
#[derive(Debug)]
pub struct Report<'a> {
    pub stats: &'a StatsResponse,
    pub max_matches: usize,
}

impl<'a> Report<'a> {
    /// Make a new report
    pub fn new(stats: &'a StatsResponse, max_matches: usize) -> Self {
        Self { stats, max_matches }
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats;
        let mut buffer = itoa::Buffer::new();

        writeln!(
            f,
            "Stats for {} ({})",
            stats.epic_user_handle, stats.platform_name_long
        )?;
        for playlist in PLAYLISTS {
            writeln!(
                f,
                "{} total {} kills",
                buffer.format(stats.stats.lifetime(playlist).kills.value_int),
                playlist.name().to_lowercase()
            )?;
        }
        writeln!(f)?;

        let headers = [
            "Playlist", "Matches", "Wins", "Kills", "K/D", "Win %", "Rating",
        ];
        let mut lifetime = Table::new(&headers);
        let mut current_season = Table::new(&headers);
        for playlist in PLAYLISTS {
            lifetime.push_row(playlist_row(
                playlist.name(),
                stats.stats.lifetime(playlist),
            ));
            current_season.push_row(playlist_row(
                playlist.name(),
                stats.stats.current_season(playlist),
            ));
        }
        writeln!(f, "Lifetime\n{lifetime}")?;
        writeln!(f, "Current Season\n{current_season}")?;

        if !stats.recent_matches.is_empty() {
            let mut matches = Table::new(&[
                "Playlist", "Matches", "Wins", "Kills", "Minutes", "Score", "Collected",
            ]);
            for m in stats.recent_matches.iter().take(self.max_matches) {
                matches.push_row(vec![
                    m.playlist_name().to_string(),
                    buffer.format(m.matches).to_string(),
                    buffer.format(m.top1).to_string(),
                    buffer.format(m.kills).to_string(),
                    buffer.format(m.minutes_played).to_string(),
                    buffer.format(m.score).to_string(),
                    m.date_collected.clone(),
                ]);
            }
            writeln!(f, "Recent Matches\n{matches}")?;
        }

        if !stats.lifetime_stats.is_empty() {
            let mut lifetime_stats = Table::new(&["Stat", "Value"]);
            for stat in stats.lifetime_stats.iter() {
                lifetime_stats.push_row(vec![stat.key.clone(), stat.value.clone()]);
            }
            write!(f, "Lifetime Stats\n{lifetime_stats}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table() {
        let mut table = Table::new(&["Name", "Kills"]);
        table.push_row(vec!["ninja".into(), "100".into()]);
        table.push_row(vec!["a".into()]);

        let expected = "\
+-------+-------+
| Name  | Kills |
+-------+-------+
| ninja | 100   |
| a     |       |
+-------+-------+
";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn report_minimal() {
        let stats: StatsResponse = serde_json::from_str(
            r#"{
                "epicUserHandle": "ninja",
                "platformNameLong": "PC",
                "stats": {
                    "p2": { "kills": { "valueInt": 100 } },
                    "p9": { "kills": { "valueInt": 7 } }
                },
                "recentMatches": [
                    { "playlist": "p9", "kills": 3, "matches": 1 },
                    { "playlist": "zz", "kills": 1, "matches": 1 },
                    { "playlist": "p2", "kills": 2, "matches": 1 }
                ],
                "lifetimeStats": [
                    { "key": "Wins", "value": "3,152" }
                ]
            }"#,
        )
        .unwrap();

        let report = Report::new(&stats, 2).to_string();
        assert!(report.starts_with("Stats for ninja (PC)\n"));
        assert!(report.contains("100 total solo kills\n"));
        assert!(report.contains("0 total duo kills\n"));
        assert!(report.contains("7 total squad kills\n"));
        assert!(report.contains("| Squad "));
        assert!(report.contains("| Unknown "));
        assert!(report.contains("| 3,152 |"));

        // Only the first 2 matches are shown
        let recent = report.split("Recent Matches").nth(1).unwrap();
        let recent = recent.split("Lifetime Stats").next().unwrap();
        assert!(!recent.contains("| Solo "));
    }

    #[test]
    fn report_empty() {
        let report = Report::new(&StatsResponse::default(), 10).to_string();
        assert!(!report.contains("Recent Matches"));
        assert!(!report.contains("Lifetime Stats"));
    }
}
