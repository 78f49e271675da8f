use crate::config::LlmConfig;
use crate::consts;
use crate::models::chat::{ChatCompletionCreate, Message};
use crate::models::panchang::PanchangFacts;

pub fn build_prompt(date: &str, event: &str, facts: &PanchangFacts) -> String {
    format!(
        "
Today is {date}, which has the following Panchang details:
- Tithi number: {tithi}
- Nakshatra: {nakshatra}
- Yoga: {yoga}
- Weekday: {weekday}

Based on these Hindu astrology factors, is this a good day for the event: \"{event}\"?
Provide a culturally relevant but concise answer.
",
        tithi = facts.tithi_number,
        nakshatra = facts.nakshatra_name,
        yoga = facts.yoga_name,
        weekday = facts.weekday_name,
    )
}

pub fn build_chat_request(prompt: String, llm_config: &LlmConfig) -> ChatCompletionCreate {
    ChatCompletionCreate {
        model: llm_config.model_name.clone(),
        messages: vec![Message::system(consts::SYSTEM_PROMPT), Message::user(prompt)],
        temperature: Some(llm_config.temperature),
    }
}
