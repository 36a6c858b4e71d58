use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-api",
  version,
  about = "Query the Hacker News API and print the results as JSON"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "HN_API_URL",
    default_value = Config::DEFAULT_BASE_URL,
    help = "Base URL of the API"
  )]
  base_url: String,
  #[command(subcommand)]
  subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let client = Client::new(Config::new(self.base_url));

    self.subcommand.run(&client, &mut io::stdout().lock())
  }
}
