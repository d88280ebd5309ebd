//! Catalogue of gateway operations.
//!
//! Every failure raised by the gateway names the [`Operation`] that
//! produced it, and every request is logged under the same name.

use std::fmt;

/// One backend call exposed by the gateway client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Identity
    Login,
    EnsureUser,
    GetUser,
    // Dua
    ListCategories,
    GenerateDua,
    GetDua,
    GetDuaHistory,
    SubmitFeedback,
    GetHelpfulStats,
    // Imam directory
    ListImams,
    GetImam,
    RegisterImam,
    SetAvailability,
    GetAvailability,
    // Chat
    CreateConversation,
    ListConversations,
    ListImamConversations,
    GetConversation,
    SendMessage,
    ListMessages,
    MarkRead,
    // Knowledge lookup
    AnalyzeQuestion,
    ListAyahs,
    ListHadiths,
    SearchQuran,
    SearchHadith,
    // Video catalog
    ListVideos,
    GetVideo,
    SearchVideos,
    SearchVideosByPrompt,
    AddVideo,
    // Activity log
    GetHistory,
    LogAction,
    // Service
    Health,
}

impl Operation {
    /// Every operation, in catalogue order.
    pub const ALL: [Operation; 34] = [
        Operation::Login,
        Operation::EnsureUser,
        Operation::GetUser,
        Operation::ListCategories,
        Operation::GenerateDua,
        Operation::GetDua,
        Operation::GetDuaHistory,
        Operation::SubmitFeedback,
        Operation::GetHelpfulStats,
        Operation::ListImams,
        Operation::GetImam,
        Operation::RegisterImam,
        Operation::SetAvailability,
        Operation::GetAvailability,
        Operation::CreateConversation,
        Operation::ListConversations,
        Operation::ListImamConversations,
        Operation::GetConversation,
        Operation::SendMessage,
        Operation::ListMessages,
        Operation::MarkRead,
        Operation::AnalyzeQuestion,
        Operation::ListAyahs,
        Operation::ListHadiths,
        Operation::SearchQuran,
        Operation::SearchHadith,
        Operation::ListVideos,
        Operation::GetVideo,
        Operation::SearchVideos,
        Operation::SearchVideosByPrompt,
        Operation::AddVideo,
        Operation::GetHistory,
        Operation::LogAction,
        Operation::Health,
    ];

    /// Stable snake_case name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::EnsureUser => "ensure_user",
            Operation::GetUser => "get_user",
            Operation::ListCategories => "list_categories",
            Operation::GenerateDua => "generate_dua",
            Operation::GetDua => "get_dua",
            Operation::GetDuaHistory => "get_dua_history",
            Operation::SubmitFeedback => "submit_feedback",
            Operation::GetHelpfulStats => "get_helpful_stats",
            Operation::ListImams => "list_imams",
            Operation::GetImam => "get_imam",
            Operation::RegisterImam => "register_imam",
            Operation::SetAvailability => "set_availability",
            Operation::GetAvailability => "get_availability",
            Operation::CreateConversation => "create_conversation",
            Operation::ListConversations => "list_conversations",
            Operation::ListImamConversations => "list_imam_conversations",
            Operation::GetConversation => "get_conversation",
            Operation::SendMessage => "send_message",
            Operation::ListMessages => "list_messages",
            Operation::MarkRead => "mark_read",
            Operation::AnalyzeQuestion => "analyze_question",
            Operation::ListAyahs => "list_ayahs",
            Operation::ListHadiths => "list_hadiths",
            Operation::SearchQuran => "search_quran",
            Operation::SearchHadith => "search_hadith",
            Operation::ListVideos => "list_videos",
            Operation::GetVideo => "get_video",
            Operation::SearchVideos => "search_videos",
            Operation::SearchVideosByPrompt => "search_videos_by_prompt",
            Operation::AddVideo => "add_video",
            Operation::GetHistory => "get_history",
            Operation::LogAction => "log_action",
            Operation::Health => "health",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
