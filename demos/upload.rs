//! Upload one file to Catbox and then to Litterbox.
//!
//! Usage: cargo run --example upload -- [path]
//!
//! Settings come from `<config dir>/catbox-uploader/config.json` when present.
//! `CATBOX_USER_HASH` overrides the account token.

use catbox_uploader::config::{default_config_path, load_config_file, UploaderConfig};
use std::env;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn load_config() -> UploaderConfig {
    let loaded = default_config_path().and_then(|path| load_config_file(&path));
    let mut config = match loaded {
        Ok(Some(config)) => config,
        Ok(None) => UploaderConfig::default(),
        Err(e) => {
            tracing::warn!("Ignoring config file: {}", e);
            UploaderConfig::default()
        }
    };

    if let Ok(user_hash) = env::var("CATBOX_USER_HASH") {
        config.user_hash = Some(user_hash);
    }
    config
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let file_path = env::args().nth(1).unwrap_or_else(|| "img.png".to_string());
    let content = match fs::read(&file_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file {}: {}", file_path, e);
            return;
        }
    };

    let file_name = Path::new(&file_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin")
        .to_string();

    let config = load_config();
    let uploader = config.uploader();
    tracing::info!(file = %file_name, bytes = content.len(), "Uploading");

    match uploader
        .upload_file(&content, &file_name, config.timeout(), config.account_token())
        .await
    {
        Ok(url) => println!("Upload to Catbox successful! Response: {}", url),
        Err(e) => {
            eprintln!("Upload to Catbox failed: {}", e);
            return;
        }
    }

    match uploader
        .upload_to_litterbox(&content, &file_name, &config.retention, config.timeout())
        .await
    {
        Ok(url) => println!("Upload to Litterbox successful! Response: {}", url),
        Err(e) => eprintln!("Upload to Litterbox failed: {}", e),
    }
}
