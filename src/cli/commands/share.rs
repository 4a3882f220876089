//! Share command - issue an employer access code

use carerpassport::config::Config;
use carerpassport::core::models::AccessCode;
use carerpassport::output::{OutputMode, ShareOutput};

/// Generate an access code for `employer`
pub fn share(
    employer: &str,
    days: Option<i64>,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let validity = days.unwrap_or(config.sharing.code_validity_days);
    let today = chrono::Local::now().date_naive();
    let access_code = AccessCode::generate(employer, today, validity)?;
    log::info!("Generated access code for {}", access_code.employer_name);

    let share_text = access_code.share_text(&config.sharing.base_url);
    ShareOutput {
        access_code,
        share_text,
    }
    .render(mode)?;

    Ok(())
}
