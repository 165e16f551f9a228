use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use imagegate_core::proxy::handlers::endpoint_catalog;
use imagegate_core::proxy::upstream::endpoint::redact_credential;
use imagegate_types::TranslatorConfig;

pub fn list_routes(json: bool) -> Result<()> {
    let catalog = endpoint_catalog();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Method", "Path", "Format", "Description"]);

    for endpoint in &catalog.endpoints {
        table.add_row(vec![
            Cell::new(&endpoint.method).fg(Color::Cyan),
            Cell::new(&endpoint.path),
            Cell::new(&endpoint.format),
            Cell::new(&endpoint.description),
        ]);
    }

    println!("{table}");
    println!("\n{} {}", "imagegate".bold(), catalog.version);
    Ok(())
}

pub fn show_config(config: &TranslatorConfig, json: bool) -> Result<()> {
    if json {
        // `api_key` is skipped during serialization.
        let mut value = serde_json::to_value(config)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("api_key_set".to_string(), serde_json::json!(config.api_key.is_some()));
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Translator".bold().underline());
    println!("  Listen:      {}:{}", config.host, config.port);
    println!("  Timeout:     {}", describe_timeout(config.request_timeout));
    println!("  Static dir:  {}", config.static_dir);

    println!("\n{}", "Upstream defaults".bold().underline());
    println!("  Target URL:  {}", describe_target(config.target_url.as_deref()));
    println!("  API key:     {}", mask_key(config.api_key.as_deref()));

    Ok(())
}

fn describe_timeout(secs: u64) -> String {
    if secs == 0 {
        "unbounded".yellow().to_string()
    } else {
        format!("{}s", secs)
    }
}

fn describe_target(target_url: Option<&str>) -> String {
    match target_url {
        Some(raw) => match url::Url::parse(raw) {
            Ok(url) => redact_credential(&url),
            Err(_) => raw.to_string(),
        },
        None => "not set".red().to_string(),
    }
}

fn mask_key(key: Option<&str>) -> String {
    match key {
        Some(k) if k.chars().count() > 8 => {
            let head: String = k.chars().take(4).collect();
            format!("{}…", head).green().to_string()
        }
        Some(_) => "***".green().to_string(),
        None => "not set".red().to_string(),
    }
}
