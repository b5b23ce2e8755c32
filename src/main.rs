use std::error::Error;
use std::sync::Arc;

use teloxide::{prelude::*, utils::command::BotCommands};
use zabota_bot::{
    commands::Command,
    config::Config,
    connection,
    dispatcher::Dispatcher,
    middleware::Instrumented,
    sender::TelegramSender,
    storage::SeaOrmFormStorage,
    telegram,
    texts::Texts,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    log::info!("Starting...");
    let config = Config::init()?;
    log::info!("Initialized config...");

    let _sentry = config.sentry_url.as_deref().map(|url| {
        sentry::init((
            url,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let bot = Bot::new(&config.token);
    let me = bot.get_me().await?;
    bot.set_my_commands(Command::bot_commands()).await?;
    log::info!("Logged in as @{}...", me.username());

    let mut dispatcher = Dispatcher::new(Arc::new(TelegramSender::new(bot.clone())), Texts::new()?);
    match &config.db_url {
        Some(db_url) => {
            let connection = connection::init(db_url).await?;
            dispatcher = dispatcher.with_storage(Arc::new(SeaOrmFormStorage::new(connection)));
        }
        None => log::warn!("DB_URL is not set, forms will not be stored"),
    }

    telegram::listen(bot, Arc::new(Instrumented::new(dispatcher))).await;
    log::info!("Finished!");

    Ok(())
}
