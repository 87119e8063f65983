#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PostScrape {
        api_key: String,
        url: String,
        max_pages: String,
    },
    PostChat {
        message_id: crate::MessageId,
        query: String,
    },
}
