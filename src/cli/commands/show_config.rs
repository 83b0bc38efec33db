use crate::cli::RunOptions;
use anyhow::Result;
use std::path::PathBuf;

/// 有効な設定をJSONで表示
pub fn execute_show_config(config: Option<PathBuf>) -> Result<String> {
    let options = RunOptions {
        config,
        ..RunOptions::default()
    };
    let json = crate::cli::build_config(&options)?.to_json()?;
    println!("{json}");
    Ok(json)
}
