use super::view_models::{
    ChatViewModel, ConfigInitViewModel, ConfigViewModel, CostViewModel, LanguageListViewModel,
    ModelListViewModel,
};
use parley_types::TokenRate;
use std::fmt;

fn format_rate(rate: &TokenRate) -> String {
    let unit = match rate.unit {
        1_000 => "1K".to_string(),
        1_000_000 => "1M".to_string(),
        other => other.to_string(),
    };
    format!("${}/{}", rate.price, unit)
}

impl fmt::Display for ModelListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<40} {:>10} {:>14} {:>14}",
            "MODEL", "MAX_TOKENS", "PROMPT", "COMPLETION"
        )?;
        writeln!(f, "{}", "-".repeat(81))?;

        for model in &self.models {
            let mut id = model.id.clone();
            if model.is_default {
                id.push_str(" *");
            }
            if !model.listed {
                id.push_str(" (snapshot)");
            }
            writeln!(
                f,
                "{:<40} {:>10} {:>14} {:>14}",
                id,
                model.max_tokens,
                format_rate(&model.prompt),
                format_rate(&model.completion)
            )?;
        }

        writeln!(f, "\n* default model")
    }
}

impl fmt::Display for CostViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimate = &self.estimate;
        writeln!(f, "Model:      {}", self.model)?;
        writeln!(
            f,
            "Prompt:     {} tokens @ {} = ${:.6}",
            estimate.prompt_tokens,
            format_rate(&self.rates.prompt),
            estimate.prompt
        )?;
        writeln!(
            f,
            "Completion: {} tokens @ {} = ${:.6}",
            estimate.completion_tokens,
            format_rate(&self.rates.completion),
            estimate.completion
        )?;
        writeln!(f, "Total:      ${:.6}", estimate.total)
    }
}

impl fmt::Display for ChatViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chat = &self.chat;
        writeln!(f, "Id:      {}", chat.id)?;
        writeln!(f, "Title:   {}", chat.title)?;
        if let Some(folder) = &chat.folder {
            writeln!(f, "Folder:  {}", folder)?;
        }
        writeln!(f, "Model:   {}", chat.config.model)?;
        writeln!(
            f,
            "Params:  max_tokens={} temperature={} top_p={} presence_penalty={} frequency_penalty={}",
            chat.config.max_tokens,
            chat.config.temperature,
            chat.config.top_p,
            chat.config.presence_penalty,
            chat.config.frequency_penalty
        )?;

        if chat.messages.is_empty() {
            writeln!(f, "Messages: (none)")?;
        } else {
            writeln!(f, "Messages:")?;
            for message in &chat.messages {
                writeln!(f, "  [{}] {}", message.role, message.content.replace('\n', "\n    "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.defaults.chat_config;
        writeln!(
            f,
            "Config file:       {}{}",
            self.path.display(),
            if self.file_exists { "" } else { " (not found)" }
        )?;
        writeln!(f, "Model:             {}", config.model)?;
        writeln!(f, "Max tokens:        {}", config.max_tokens)?;
        writeln!(f, "Temperature:       {}", config.temperature)?;
        writeln!(f, "Top p:             {}", config.top_p)?;
        writeln!(f, "Presence penalty:  {}", config.presence_penalty)?;
        writeln!(f, "Frequency penalty: {}", config.frequency_penalty)?;

        if self.defaults.system_message.is_empty() {
            writeln!(f, "System message:    (none)")
        } else {
            writeln!(f, "System message:")?;
            for line in self.defaults.system_message.lines() {
                writeln!(f, "  {}", line)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote {}", self.path.display())
    }
}

impl fmt::Display for LanguageListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for language in &self.languages {
            writeln!(f, "{}", language)?;
        }
        Ok(())
    }
}
