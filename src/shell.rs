//! Line-oriented front end: one command per line, re-render after each.

use std::future::Future;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, warn, Instrument};

use crate::clients::ProductManagerClient;
use crate::domain::ProductId;
use crate::manager_actor::ManagerResult;

pub const HELP: &str = "\
Commands:
  name <text>       set the product name
  price <number>    set the price (IDR)
  stock <integer>   set the stock quantity
  submit            add the product, or save the edit
  edit <id>         load a product into the form
  cancel            leave edit mode
  delete <id>       delete a product
  refresh           reload the list from the server
  show              render again
  help              this text
  quit              exit
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetName(String),
    SetPrice(String),
    SetStock(String),
    Submit,
    Edit(ProductId),
    Cancel,
    Delete(ProductId),
    Refresh,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let required = |name: &'static str| {
            if rest.is_empty() {
                Err(ParseError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            // An empty name is allowed; it clears the field.
            "name" => Ok(Command::SetName(rest.to_string())),
            "price" => required("price").map(Command::SetPrice),
            "stock" => required("stock").map(Command::SetStock),
            "submit" => Ok(Command::Submit),
            "edit" => required("edit").map(|id| Command::Edit(ProductId::parse(&id))),
            "cancel" => Ok(Command::Cancel),
            "delete" => required("delete").map(|id| Command::Delete(ProductId::parse(&id))),
            "refresh" => Ok(Command::Refresh),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

async fn dispatch(client: &ProductManagerClient, command: Command) -> ManagerResult<()> {
    match command {
        Command::SetName(name) => client.set_name(name).await,
        Command::SetPrice(price) => client.set_price(price).await,
        Command::SetStock(stock) => client.set_stock(stock).await,
        Command::Edit(id) => client.edit(id).await,
        Command::Cancel => client.cancel().await,
        Command::Submit => in_background(client, "submit", |c| async move { c.submit().await }),
        Command::Delete(id) => in_background(client, "delete", |c| async move { c.delete(id).await }),
        Command::Refresh => in_background(client, "refresh", |c| async move { c.refresh().await }),
        Command::Show | Command::Help | Command::Quit => Ok(()),
    }
}

/// Runs a network intent without holding up the next command. Its outcome
/// shows up in the log and in the next render.
fn in_background<F, Fut>(client: &ProductManagerClient, intent: &'static str, request: F) -> ManagerResult<()>
where
    F: FnOnce(ProductManagerClient) -> Fut,
    Fut: Future<Output = ManagerResult<()>> + Send + 'static,
{
    let pending = request(client.clone());
    tokio::spawn(
        async move {
            if let Err(e) = pending.await {
                warn!(intent, error = %e, "Request failed");
            }
        }
        .in_current_span(),
    );
    Ok(())
}

async fn render_to<W>(client: &ProductManagerClient, output: &mut W) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match client.view().await {
        Ok(view) => {
            output.write_all(format!("\n{}", view).as_bytes()).await?;
            output.flush().await
        }
        Err(e) => {
            error!(error = %e, "Cannot render view");
            Ok(())
        }
    }
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Intent failures are logged and the loop carries on; only I/O errors on
/// `input`/`output` end it early.
pub async fn run<R, W>(client: &ProductManagerClient, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    render_to(client, &mut output).await?;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                output.write_all(format!("{} (type `help`)\n", e).as_bytes()).await?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                output.write_all(HELP.as_bytes()).await?;
                continue;
            }
            command => {
                if let Err(e) = dispatch(client, command).await {
                    warn!(error = %e, "Command failed");
                }
            }
        }
        render_to(client, &mut output).await?;
    }
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager_actor::ProductManagerActor;
    use crate::mock_framework::{create_mock_api, expect_create};

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!("name Fountain pen".parse::<Command>(), Ok(Command::SetName("Fountain pen".into())));
        assert_eq!("name".parse::<Command>(), Ok(Command::SetName(String::new())));
        assert_eq!("  PRICE 1500.5 ".parse::<Command>(), Ok(Command::SetPrice("1500.5".into())));
        assert_eq!("stock 3".parse::<Command>(), Ok(Command::SetStock("3".into())));
        assert_eq!("edit 2".parse::<Command>(), Ok(Command::Edit(ProductId::Number(2))));
        assert_eq!("delete sku-9".parse::<Command>(), Ok(Command::Delete(ProductId::from("sku-9"))));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!("price".parse::<Command>(), Err(ParseError::MissingArgument("price")));
        assert_eq!("delete   ".parse::<Command>(), Err(ParseError::MissingArgument("delete")));
        assert_eq!("buy 3".parse::<Command>(), Err(ParseError::Unknown("buy".into())));
    }

    #[tokio::test]
    async fn form_commands_update_rendered_view() {
        let (api, _calls) = create_mock_api(8);
        let (actor, client) = ProductManagerActor::new(8, api);
        let handle = tokio::spawn(actor.run());

        let input = b"name Pen\nprice 500\nstock ten\nstock 10\nbogus\nhelp\nquit\nname ignored\n";
        let mut output = Vec::new();
        run(&client, tokio::io::BufReader::new(&input[..]), &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("unknown command: bogus"));
        assert!(text.contains("Commands:"));
        assert!(text.contains("[Add Product]"));

        let draft = client.snapshot().await.unwrap().draft().clone();
        assert_eq!(draft, crate::domain::Draft::new("Pen", 500.0, 10));

        client.shutdown().await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn pending_request_does_not_block_later_commands() {
        let (api, mut calls) = create_mock_api(8);
        let (actor, client) = ProductManagerActor::new(8, api);
        let handle = tokio::spawn(actor.run());

        // Nobody answers the create, so the submit stays in flight.
        let input = b"name Pen\nsubmit\nshow\nprice 700\nquit\n";
        let mut output = Vec::new();
        tokio::time::timeout(
            std::time::Duration::from_secs(1),
            run(&client, tokio::io::BufReader::new(&input[..]), &mut output),
        )
        .await
        .expect("Shell blocked on a pending request")
        .unwrap();

        let (draft, _pending) = expect_create(&mut calls).await.expect("Expected Create call");
        assert_eq!(draft.name, "Pen");
        assert_eq!(client.snapshot().await.unwrap().draft().price, 700.0);

        client.shutdown().await.unwrap();
        handle.await.unwrap();
    }
}
