//! Report rendering

use crate::collector::UserStat;

pub const TABLE_HEADER: &str = "Username\tUPN\tRSS Total\tPMEM Total\tPCPU Total";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render(stats: &[UserStat], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(stats)),
        OutputFormat::Json => render_json(stats),
    }
}

pub fn table_row(stat: &UserStat) -> String {
    format!(
        "{}\t{}\t{}\t{:.2}\t{:.2}",
        stat.username,
        stat.directory_identity.as_deref().unwrap_or("none"),
        stat.resident_memory_total,
        stat.memory_percent_total,
        stat.cpu_percent_total,
    )
}

pub fn render_table(stats: &[UserStat]) -> String {
    let mut out = String::new();
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for stat in stats {
        out.push_str(&table_row(stat));
        out.push('\n');
    }
    out
}

pub fn render_json(stats: &[UserStat]) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string(stats)?;
    json.push('\n');
    Ok(json)
}
