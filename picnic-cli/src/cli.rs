use chrono::Local;
use clap::Parser;
use picnic_core::{Config, PicnicError, plan_weekend, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "picnic",
    version,
    about = "Tells you whether the coming weekend is good for a picnic"
)]
pub struct Cli {
    /// City to check, e.g. "nairobi" or "New York". Only the first value is used.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Drop configured excluded flags, keeping the program name in front.
pub fn filter_args<I>(args: I, config: &Config) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    args.next()
        .into_iter()
        .chain(args.filter(|arg| !config.is_excluded_flag(arg)))
        .collect()
}

impl Cli {
    pub fn city(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub async fn run(self, config: &Config) -> anyhow::Result<()> {
        let city = self.city().ok_or_else(|| {
            PicnicError::InvalidArgument(
                "Failed to get an argument from the command line".to_string(),
            )
        })?;

        let provider = provider_from_config(config)?;
        let plan = plan_weekend(provider.as_ref(), city, config.unit_group, &Local::now())
            .await
            .map_err(|err| match err {
                PicnicError::TransportFailure(_) | PicnicError::MalformedResponse(_) => {
                    anyhow::Error::new(err).context("Unable to get weather data")
                }
                other => other.into(),
            })?;

        tracing::debug!(?plan, "weekend planned");
        println!("{}", plan.recommendation);

        Ok(())
    }
}
