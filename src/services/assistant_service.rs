use crate::error::ApiError;
use crate::models::{AppState, Conversation, CreateConversationRequest, NewConversation};

/// One intent: if the message contains any of the keywords, answer with the
/// canned response. Rules are evaluated in order; first match wins.
struct Rule {
    keywords: &'static [&'static str],
    response: &'static str,
}

const RULES: &[Rule] = &[
    // balance inquiry
    Rule {
        keywords: &["잔액", "돈"],
        response: "현재 잔액은 2,847,500원입니다. 다른 도움이 필요하시면 말씀해 주세요!",
    },
    // send-money intent
    Rule {
        keywords: &["송금", "보내"],
        response: "송금을 도와드릴게요! 누구에게 얼마를 보내실 건가요?",
    },
    // transaction history
    Rule {
        keywords: &["거래내역"],
        response: "최근 거래내역을 확인해 드릴게요. 거래내역 화면으로 이동할까요?",
    },
];

const FALLBACK: &str = "죄송합니다. 잘 이해하지 못했어요. 다시 말씀해 주시겠어요?";

pub struct AssistantService;

impl AssistantService {
    /// Pure function of the message text; the assistant carries no memory of
    /// prior turns.
    pub fn reply(message: &str) -> &'static str {
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| message.contains(keyword)))
            .map(|rule| rule.response)
            .unwrap_or(FALLBACK)
    }

    /// Generate the reply and persist message and response as one record.
    pub fn record(
        state: &AppState,
        req: CreateConversationRequest,
    ) -> Result<Conversation, ApiError> {
        if state.store.user(req.user_id)?.is_none() {
            return Err(ApiError::NotFound(format!("User {} not found", req.user_id)));
        }

        let response = Self::reply(&req.message).to_string();
        state.store.create_conversation(NewConversation {
            user_id: req.user_id,
            message: req.message,
            response,
            kind: req.kind,
        })
    }
}
