//! CLI presentation: text and json formatters for resolved configs and raw resources.

use crate::cluster::ClusterConfig;
use crate::error::AppError;
use crate::store::ResourceData;

pub fn format_config_text(config: &ClusterConfig) -> String {
    let rows = [
        ("name", config.name.clone()),
        ("masterCount", config.master_count.to_string()),
        ("workerCount", config.worker_count.to_string()),
        ("sparkMasterConfig", config.spark_master_config.clone()),
        ("sparkWorkerConfig", config.spark_worker_config.clone()),
        ("metrics.enable", config.metrics.enable.clone()),
        ("metrics.carbon", config.metrics.carbon.clone()),
        ("metrics.graphite", config.metrics.graphite.clone()),
        ("scorpionStare.enable", config.scorpion_stare.enable.clone()),
        ("scorpionStare.image", config.scorpion_stare.image.clone()),
    ];
    format_rows(rows.iter().map(|(k, v)| (*k, v.as_str())))
}

pub fn format_config_json(config: &ClusterConfig) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(config)?)
}

pub fn format_resource_text(name: &str, data: &ResourceData) -> String {
    if data.is_empty() {
        return format!("Resource '{}' is empty", name);
    }
    format!(
        "Resource '{}':\n{}",
        name,
        format_rows(data.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    )
}

pub fn format_resource_json(name: &str, data: &ResourceData) -> Result<String, AppError> {
    let out = serde_json::json!({ "name": name, "data": data });
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Aligned `key: value` rows. Multi-line values continue on indented lines.
fn format_rows<'a>(rows: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let rows: Vec<(&str, &str)> = rows.collect();
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len());
    for (key, value) in rows {
        let mut value_lines = value.lines();
        let first = value_lines.next().unwrap_or("");
        let line = format!("{:<width$}  {}", format!("{}:", key), first, width = width + 1);
        lines.push(line.trim_end().to_string());
        for rest in value_lines {
            lines.push(format!("{:<width$}  {}", "", rest, width = width + 1));
        }
    }
    lines.join("\n")
}
