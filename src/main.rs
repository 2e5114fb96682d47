use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use config::Config;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;

use customers_console::console::{Command, HELP, describe_form, spawn_action};
use customers_console::forms::search::QueryEncoding;
use customers_console::models::config::ClientConfig;
use customers_console::page::Page;
use customers_console::transport::HttpTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default").required(false))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let client_config = match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let transport = match HttpTransport::new(&client_config.base_url) {
        Ok(transport) => transport,
        Err(err) => {
            log::error!("Failed to build transport: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Customers console bound to {}", transport.base_url());
    println!("{HELP}");

    let transport = Rc::new(transport);
    let page = Rc::new(RefCell::new(Page::new()));

    LocalSet::new()
        .run_until(run_console(transport, page, client_config.query_encoding))
        .await
}

async fn run_console(
    transport: Rc<HttpTransport>,
    page: Rc<RefCell<Page>>,
    encoding: QueryEncoding,
) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Set(field, value) => page.borrow_mut().form.set(field, value),
            Command::Run(action) => {
                // Detached: the outcome is printed whenever the server answers.
                let _ = spawn_action(
                    Rc::clone(&transport),
                    Rc::clone(&page),
                    action,
                    encoding,
                    move |page| println!("[{action}] {}", page.message.to_html()),
                );
            }
            Command::Show => {
                let page = page.borrow();
                println!("{}", describe_form(&page.form));
                println!("message: {}", page.message.to_html());
            }
            Command::Results => match page.borrow().results.to_html() {
                Ok(html) => println!("{html}"),
                Err(err) => log::error!("Failed to render results: {err}"),
            },
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}
