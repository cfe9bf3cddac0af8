mod bootstrap;

use anyhow::Result;
use rainfall_core::error::RainfallError;
use rainfall_core::settings::Settings;
use rainfall_data::reader::{load_datasets, DataSources};
use rainfall_runtime::controller::AppContext;
use rainfall_ui::app::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Rainfall Explorer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data dir: {}, Theme: {}",
        settings.data_dir.display(),
        settings.theme
    );

    // Every year must load before anything is shown.
    let sources = DataSources::in_dir(&settings.data_dir);
    let datasets = match load_datasets(&sources) {
        Ok(datasets) => datasets,
        Err(e) => {
            if e.is_load_error() {
                tracing::error!(error = %e, "startup load failed");
            }
            return Err(anyhow::Error::new(e).context(format!(
                "failed to load rainfall data from {}",
                settings.data_dir.display()
            )));
        }
    };

    let mut context = AppContext::new(datasets);

    if let Some(label) = settings.report.as_deref() {
        tracing::info!("Running one-shot report: {}", label);
        context.handle_label(label);
        println!("{}", context.output().to_plain_text());
        return Ok(());
    }

    let app = App::new(
        &settings.theme,
        context,
        settings.data_dir.display().to_string(),
    );

    // The loop exits on 'q' / Ctrl+C inside the TUI and also watches for
    // SIGINT delivered while the terminal is in raw mode.
    app.run()
        .await
        .map_err(|e| RainfallError::Terminal(e.to_string()))?;

    Ok(())
}
