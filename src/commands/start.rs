use teloxide::types::ChatId;

use crate::{
    error::BotError, keyboards::main_menu, sender::MessageSender, texts::Texts,
};

pub async fn show_start_info(
    sender: &dyn MessageSender,
    texts: &Texts,
    chat_id: ChatId,
    addressee: &str,
) -> Result<(), BotError> {
    let answer = texts.start(addressee)?;
    sender.show_menu(&answer, &main_menu(), chat_id).await?;

    Ok(())
}
