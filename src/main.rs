fn main() -> anyhow::Result<()> {
    chat_message_search::cli::run()
}
