//! Chat poster that writes to the terminal
//!
//! Stands in for the chat platform when a debate runs from the CLI. Each
//! post gets a synthetic message id so sessions record it like a real one.

use agora_application::ports::chat_poster::{ChatPostError, ChatPoster};
use agora_domain::BotGroup;
use async_trait::async_trait;
use colored::Colorize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct ConsoleChatPoster {
    echo: bool,
    posted: AtomicU64,
}

impl ConsoleChatPoster {
    /// `echo = false` keeps the terminal quiet while still issuing ids.
    pub fn new(echo: bool) -> Self {
        Self {
            echo,
            posted: AtomicU64::new(0),
        }
    }

    pub fn posted_count(&self) -> u64 {
        self.posted.load(Ordering::SeqCst)
    }

    /// Render one post as it appears in the terminal
    pub fn render(group: BotGroup, channel: &str, text: &str) -> String {
        let heading = format!("── #{} · {} ──", channel, group);
        let heading = match group {
            BotGroup::Orchestrator => heading.cyan().bold(),
            BotGroup::DebaterA => heading.green().bold(),
            BotGroup::DebaterB => heading.magenta().bold(),
        };
        format!("\n{}\n{}\n", heading, text)
    }
}

#[async_trait]
impl ChatPoster for ConsoleChatPoster {
    async fn post_message(
        &self,
        group: BotGroup,
        channel: &str,
        _thread_ts: &str,
        text: &str,
    ) -> Result<Option<String>, ChatPostError> {
        let n = self.posted.fetch_add(1, Ordering::SeqCst) + 1;
        if self.echo {
            println!("{}", Self::render(group, channel, text));
        }
        Ok(Some(format!("console.{:06}", n)))
    }
}
