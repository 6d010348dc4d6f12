use std::path::Path;

use fbf_core::Journal;

use super::StoreOptions;

pub fn run(opts: &StoreOptions, format: &str, output: Option<&Path>) -> Result<(), String> {
    let store = super::load_journal(opts)?;

    let content = match format {
        "json" => export_json(store.all())?,
        "markdown" | "md" => store.all().export_markdown(),
        "text" | "txt" => store.all().export_text(),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: markdown, text, json"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported {} entries to {}", store.all().len(), path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(journal: &Journal) -> Result<String, String> {
    serde_json::to_string_pretty(journal)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("JSON serialization error: {e}"))
}
