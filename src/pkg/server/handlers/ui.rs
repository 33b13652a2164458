use axum::response::Html;

use crate::prelude::Result;

pub async fn home() -> Result<Html<String>> {
    let template = tokio::fs::read_to_string("templates/index.html").await?;
    Ok(Html(template))
}
