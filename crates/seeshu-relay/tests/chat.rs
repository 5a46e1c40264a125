use seeshu_relay::chat::{ChatRelay, RelayConfig, SYSTEM_PROMPT};
use seeshu_relay::error::RelayError;

#[tokio::test]
async fn missing_api_key_is_a_config_error() {
    let relay = ChatRelay::new(RelayConfig {
        api_key: String::new(),
        base_url: "https://api.openai.com".to_string(),
        model: "gpt-3.5-turbo".to_string(),
    });

    let result = relay.relay("is my baby okay?", None).await;
    assert!(matches!(result, Err(RelayError::Config(_))));
}

#[test]
fn system_prompt_names_the_domain() {
    assert!(SYSTEM_PROMPT.contains("pneumonia care in newborns"));
}
