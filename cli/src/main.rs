use dotenv::dotenv;
use salary_stats::{
    render_table, survey, Error, HhClient, HhSearchConfig, Result, SjClient, SjSearchConfig,
    LANGUAGES,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // Checked before any request goes out.
    let app_id =
        std::env::var("SJ_SECRET_KEY").map_err(|_| Error::MissingCredential("SJ_SECRET_KEY"))?;

    log::info!("surveying superjob");
    let superjob = SjClient::new(app_id, SjSearchConfig::default());
    let rows = survey(&superjob, &LANGUAGES).await?;
    println!("{}", render_table(&rows, "SuperJob Moscow"));
    println!();

    log::info!("surveying headhunter");
    let headhunter = HhClient::new(HhSearchConfig::default());
    let rows = survey(&headhunter, &LANGUAGES).await?;
    println!("{}", render_table(&rows, "HeadHunter Moscow"));
    println!();

    Ok(())
}
