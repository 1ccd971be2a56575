use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // optional: path to a TOML config file
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    clipo_lib::run_host(config_path).await
}
