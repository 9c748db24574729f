use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use catalog_client::{ApiClient, FormController, ListPresenter, ProductCache};
use catalog_core::ProductId;

type InputLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let client = ApiClient::from_env();
    let mut cache = ProductCache::new(client);
    let mut form = FormController::new();
    let mut list = ListPresenter::new();

    cache.reload().await;

    println!("Product catalog");
    println!("Commands: list, add, edit <id>, delete <id>, reload, quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt("> ");
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("list"), _) => {
                print!("{}", list.render(cache.products()));
            }
            (Some("reload"), _) => {
                cache.reload().await;
                print!("{}", list.render(cache.products()));
            }
            (Some("add"), _) => {
                fill_draft(&mut lines, &mut form).await?;
                form.submit(&mut cache).await;
                print_notice(form.notice());
            }
            (Some("edit"), Some(id)) => match parse_id(id) {
                Some(id) => match list.edit_target(cache.products(), id) {
                    Some(product) => {
                        let product = product.clone();
                        form.begin_edit(&product);
                        fill_draft(&mut lines, &mut form).await?;
                        form.submit(&mut cache).await;
                        print_notice(form.notice());
                    }
                    None => println!("No product with id {}", id),
                },
                None => println!("Usage: edit <id>"),
            },
            (Some("delete"), Some(id)) => match parse_id(id) {
                Some(id) => {
                    list.delete(&mut cache, id).await;
                    print_notice(list.notice());
                }
                None => println!("Usage: delete <id>"),
            },
            (Some("quit"), _) | (Some("exit"), _) => break,
            (None, _) => {}
            _ => println!("Commands: list, add, edit <id>, delete <id>, reload, quit"),
        }
        prompt("> ");
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}

fn parse_id(raw: &str) -> Option<ProductId> {
    raw.parse::<i64>().ok().map(ProductId)
}

fn print_notice(notice: Option<catalog_client::Notice>) {
    if let Some(notice) = notice {
        println!("{}", notice.text);
    }
}

/// Prompt for each field in turn; blank input leaves the field as it is
/// (absent on create, the current value on edit)
async fn fill_draft(lines: &mut InputLines, form: &mut FormController) -> Result<()> {
    if let Some(name) = read_field(lines, "name").await? {
        form.draft_mut().name = Some(name);
    }
    if let Some(description) = read_field(lines, "description").await? {
        form.draft_mut().description = Some(description);
    }
    if let Some(price) = read_field(lines, "price").await? {
        match price.parse::<f64>() {
            Ok(price) => form.draft_mut().price = Some(price),
            Err(_) => println!("Not a number, keeping previous value"),
        }
    }
    if let Some(quantity) = read_field(lines, "quantity").await? {
        match quantity.parse::<i64>() {
            Ok(quantity) => form.draft_mut().quantity = Some(quantity),
            Err(_) => println!("Not a number, keeping previous value"),
        }
    }
    Ok(())
}

async fn read_field(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    prompt(&format!("{}: ", label));
    let line = lines.next_line().await?.unwrap_or_default();
    let line = line.trim();
    if line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(line.to_string()))
    }
}
