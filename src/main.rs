use anyhow::Result;
use log::info;

use fmoota_query::config::OtaConfig;
use fmoota_query::logging;
use fmoota_query::ota::{self, HttpTransport};
use fmoota_query::version;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init_logger()?;
    info!("{}", version::version_info());

    let config = OtaConfig::default();
    let transport = HttpTransport::new(&config)?;
    let request = config.build_request();

    ota::check_for_builds(&transport, &request, &mut std::io::stdout()).await?;

    Ok(())
}
