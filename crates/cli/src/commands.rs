//! Subcommand definitions and dispatch.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use ramadan_core::models::{Language, SenderType, UserType};
use ramadan_core::types::DbId;
use ramadan_gateway::GatewayClient;

#[derive(Debug, Parser)]
#[command(name = "ramadan-cli", version, about = "Ramadan Helper backend client")]
pub struct Cli {
    /// Backend base URL; overrides RAMADAN_API_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in (registers the user on first use).
    Login {
        #[arg(long, env = "RAMADAN_USER_EMAIL")]
        email: String,
        #[arg(long)]
        name: Option<String>,
        /// Log in as an imam instead of a regular user.
        #[arg(long)]
        imam: bool,
    },
    /// List dua categories.
    Categories,
    /// Generate a personalised dua.
    Dua {
        #[arg(long, env = "RAMADAN_USER_EMAIL")]
        email: String,
        #[arg(long)]
        category: String,
        /// Describe your situation.
        #[arg(long)]
        context: String,
    },
    /// Show previously generated duas.
    DuaHistory {
        #[arg(long, env = "RAMADAN_USER_EMAIL")]
        email: String,
    },
    /// Rate a generated dua.
    Feedback {
        #[arg(long)]
        dua_id: DbId,
        /// Mark the dua as helpful (omit to mark it unhelpful).
        #[arg(long)]
        helpful: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List registered imams.
    Imams,
    /// Show or change an imam's availability.
    Availability {
        #[arg(long)]
        imam_id: DbId,
        #[arg(long)]
        set: Option<bool>,
    },
    /// Start a conversation with an imam.
    ChatStart {
        #[arg(long, env = "RAMADAN_USER_EMAIL")]
        email: String,
        #[arg(long)]
        imam_id: DbId,
        #[arg(long)]
        topic: String,
    },
    /// Send a message in a conversation.
    ChatSend {
        #[arg(long)]
        conversation_id: DbId,
        #[arg(long, env = "RAMADAN_USER_EMAIL")]
        email: String,
        #[arg(long, default_value = "user")]
        sender: SenderType,
        #[arg(long)]
        text: String,
    },
    /// Show the messages of a conversation.
    ChatMessages {
        #[arg(long)]
        conversation_id: DbId,
    },
    /// Ask a question and get a verse, a saying and an explanation.
    Ask {
        #[arg(long, env = "RAMADAN_USER_EMAIL")]
        email: String,
        #[arg(long)]
        question: String,
    },
    /// Search the Quran.
    Quran {
        #[arg(long)]
        query: String,
        #[arg(long, default_value = "en")]
        lang: Language,
    },
    /// Search the Hadith collection.
    Hadith {
        #[arg(long)]
        query: String,
        #[arg(long, default_value = "en")]
        lang: Language,
    },
    /// List the video catalog.
    Videos,
    /// Search the video catalog.
    VideoSearch {
        #[arg(long)]
        query: String,
    },
    /// Show your activity log.
    History {
        #[arg(long, env = "RAMADAN_USER_EMAIL")]
        email: String,
    },
    /// Record an activity.
    Log {
        #[arg(long, env = "RAMADAN_USER_EMAIL")]
        email: String,
        #[arg(long)]
        action_type: String,
        /// Action payload as JSON.
        #[arg(long, default_value = "{}")]
        data: String,
    },
    /// Check the backend is up.
    Health,
}

/// Run one subcommand against the backend and print its result.
pub async fn execute(client: &GatewayClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, name, imam } => {
            let user_type = if imam { UserType::Imam } else { UserType::User };
            print_json(&client.login(&email, name.as_deref(), Some(user_type)).await?)
        }
        Command::Categories => print_json(&client.list_categories().await?),
        Command::Dua {
            email,
            category,
            context,
        } => {
            let dua = client.generate_dua(&email, &category, &context).await?;
            record_activity(
                client,
                &email,
                "dua_generated",
                json!({ "category": category, "dua_id": dua.id }),
            )
            .await;
            print_json(&dua)
        }
        Command::DuaHistory { email } => print_json(&client.get_dua_history(&email).await?),
        Command::Feedback {
            dua_id,
            helpful,
            notes,
        } => print_json(
            &client
                .submit_feedback(dua_id, helpful, notes.as_deref())
                .await?,
        ),
        Command::Imams => print_json(&client.list_imams().await?),
        Command::Availability { imam_id, set } => match set {
            Some(is_available) => {
                print_json(&client.set_availability(imam_id, is_available).await?)
            }
            None => print_json(&json!({
                "imam_id": imam_id,
                "is_available": client.get_availability(imam_id).await?,
            })),
        },
        Command::ChatStart {
            email,
            imam_id,
            topic,
        } => {
            let conversation = client.create_conversation(&email, imam_id, &topic).await?;
            record_activity(
                client,
                &email,
                "chat_created",
                json!({ "conversation_id": conversation.id, "imam_id": imam_id }),
            )
            .await;
            print_json(&conversation)
        }
        Command::ChatSend {
            conversation_id,
            email,
            sender,
            text,
        } => print_json(
            &client
                .send_message(conversation_id, &email, sender, &text)
                .await?,
        ),
        Command::ChatMessages { conversation_id } => {
            print_json(&client.list_messages(conversation_id).await?)
        }
        Command::Ask { email, question } => {
            print_json(&client.analyze_question(&email, &question).await?)
        }
        Command::Quran { query, lang } => print_json(&client.search_quran(&query, lang).await?),
        Command::Hadith { query, lang } => print_json(&client.search_hadith(&query, lang).await?),
        Command::Videos => print_json(&client.list_videos().await?),
        Command::VideoSearch { query } => print_json(&client.search_videos(&query).await?),
        Command::History { email } => print_json(&client.get_history(&email).await?),
        Command::Log {
            email,
            action_type,
            data,
        } => {
            let data: serde_json::Value =
                serde_json::from_str(&data).context("--data must be valid JSON")?;
            print_json(&client.log_action(&email, &action_type, &data).await?)
        }
        Command::Health => print_json(&client.health().await?),
    }
}

/// Append to the activity log. A logging failure never fails the
/// command that triggered it.
async fn record_activity(
    client: &GatewayClient,
    email: &str,
    action_type: &str,
    data: serde_json::Value,
) {
    if let Err(e) = client.log_action(email, action_type, &data).await {
        tracing::warn!(error = %e, action_type, "Failed to record activity");
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_chat_send_with_sender_type() {
        let cli = Cli::parse_from([
            "ramadan-cli",
            "chat-send",
            "--conversation-id",
            "42",
            "--email",
            "a@b.com",
            "--sender",
            "imam",
            "--text",
            "hello",
        ]);
        match cli.command {
            Command::ChatSend {
                conversation_id,
                sender,
                ..
            } => {
                assert_eq!(conversation_id, 42);
                assert_eq!(sender, SenderType::Imam);
            }
            other => panic!("Expected ChatSend, got {other:?}"),
        }
    }

    #[test]
    fn quran_language_defaults_to_english() {
        let cli = Cli::parse_from(["ramadan-cli", "quran", "--query", "mercy"]);
        match cli.command {
            Command::Quran { lang, .. } => assert_eq!(lang, Language::En),
            other => panic!("Expected Quran, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_language() {
        let result = Cli::try_parse_from(["ramadan-cli", "hadith", "--query", "x", "--lang", "fr"]);
        assert!(result.is_err());
    }
}
