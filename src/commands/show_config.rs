use super::read_job;
use crate::options::ShowConfigOptions;

pub fn show_config(options: ShowConfigOptions) -> anyhow::Result<()> {
    let config = read_job(&options.job)?;

    print!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
