use super::*;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  #[command(about = "Fetch an item and require it to be a comment")]
  Comment { id: u64 },
  #[command(about = "Fetch an item as whichever variant its type names")]
  Item { id: u64 },
  #[command(about = "Print the current largest item id")]
  MaxItem,
  #[command(about = "Fetch an item and require it to be a poll")]
  Poll { id: u64 },
  #[command(about = "Fetch an item and require it to be a poll option")]
  PollOpt { id: u64 },
  #[command(about = "Fetch an item and require it to be a story, job or ask")]
  Story { id: u64 },
  #[command(about = "List ranked story ids")]
  Top {
    #[arg(value_enum, default_value_t = Category::Top)]
    category: Category,
  },
  #[command(about = "Print recently changed items and profiles")]
  Updates,
  #[command(about = "Fetch a user profile by handle")]
  User { id: String },
}

impl Subcommand {
  pub(crate) fn run<T: Transport>(
    self,
    client: &Client<T>,
    out: &mut impl Write,
  ) -> Result {
    match self {
      Self::Comment { id } => write_json(out, &client.comment_by_id(id)?),
      Self::Item { id } => {
        let item = client.generic_item_by_id(id)?;

        match item.to_item() {
          Ok(resolved) => write_json(out, &resolved),
          Err(Error::UnknownItemType(kind)) => {
            warn!(id, %kind, "unrecognized item type, printing raw record");
            write_json(out, &item)
          }
          Err(error) => Err(error.into()),
        }
      }
      Self::MaxItem => write_json(out, &client.max_id()?),
      Self::Poll { id } => write_json(out, &client.poll_by_id(id)?),
      Self::PollOpt { id } => write_json(out, &client.poll_opt_by_id(id)?),
      Self::Story { id } => write_json(out, &client.story_by_id(id)?),
      Self::Top { category } => write_json(out, &client.top_ids(category)?),
      Self::Updates => write_json(out, &client.updates()?),
      Self::User { id } => write_json(out, &client.user_by_id(&id)?),
    }
  }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result {
  serde_json::to_writer_pretty(&mut *out, value)
    .context("could not serialize output")?;

  writeln!(out).context("could not write output")?;

  Ok(())
}
