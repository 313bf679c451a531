use anyhow::{Result, bail};
use langtool::LangApi;

use crate::ConnectionArgs;

pub async fn run(apps: &[String], connection: &ConnectionArgs) -> Result<()> {
    if apps.is_empty() {
        bail!("must specify at least one application code");
    }

    let api = LangApi::new(&connection.base_url, &connection.token)?;
    let sections = api.sections(apps).await?;
    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}
