use dotenv::dotenv;
use parley::{
    api::ChatClient, config::initialize_config, input::InputField, logging::init_logging,
    message_list::MessageList, ui::run_ui, widget::ChatWidget,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = initialize_config()?;
    init_logging(&config)?;
    log::info!("Starting chat session against {}", config.chat_endpoint());

    let widget = ChatWidget::new(
        MessageList::new(),
        InputField::new(),
        ChatClient::from_config(&config),
    );

    run_ui(widget).await?;

    log::info!("Chat session closed");
    Ok(())
}
