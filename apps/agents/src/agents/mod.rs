// The four career agents. Each builds its prompt, makes a single call through
// `llm_client::ChatModel` and decodes the reply; none of them touches HTTP directly.

pub mod gap_analyst;
pub mod handlers;
pub mod interview;
pub mod loose;
pub mod outreach;
pub mod prompts;
pub mod tailor;
