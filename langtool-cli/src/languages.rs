use anyhow::Result;
use langtool::LangApi;

use crate::ConnectionArgs;

pub async fn run(connection: &ConnectionArgs) -> Result<()> {
    let api = LangApi::new(&connection.base_url, &connection.token)?;
    let languages = api.languages().await?;
    println!("{}", serde_json::to_string_pretty(&languages)?);
    Ok(())
}
