use crate::prelude::Result;

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

// no datastore behind this service, healthy is the same as live
pub async fn healthz() -> Result<()> {
    tracing::debug!("service is healthy");
    Ok(())
}
