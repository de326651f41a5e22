//! Example prompts written to an empty collection, one per default category.

use crate::prompt::{Prompt, PromptInput};
use chrono::{DateTime, Utc};

struct Example {
    title: &'static str,
    description: &'static str,
    content: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    tone: &'static str,
}

const EXAMPLES: [Example; 5] = [
    Example {
        title: "Academic Article Summary",
        description: "Writes concise summaries of scientific articles while keeping the key points",
        content: "Summarize the following academic article in 3 main points, keeping a scientific tone and highlighting:\n\n1. Main goal of the study\n2. Methodology used\n3. Conclusions and implications\n\nArticle: [PASTE ARTICLE TEXT HERE]\n\nFormat: use a bullet for each point and be concise but informative.",
        category: "Studies",
        tags: &["summary", "academic", "research", "scientific"],
        tone: "Formal",
    },
    Example {
        title: "Creative Instagram Post",
        description: "Generates engaging Instagram posts with hooks, emojis and hashtags",
        content: "Write an Instagram post about [TOPIC/PRODUCT] with this structure:\n\n📱 Opening HOOK (a first line that grabs attention)\n💡 Body (2-3 explanatory sentences)\n🎯 Call to action at the end\n\nUse:\n- Relevant emojis\n- A [casual/professional] tone\n- 5-7 popular hashtags\n- At most 150 words\n\nGoal: [engage/sell/inform/educate]",
        category: "Marketing",
        tags: &["instagram", "social media", "post", "engagement"],
        tone: "Creative",
    },
    Example {
        title: "Code Debugging and Review",
        description: "Reviews code for bugs, performance improvements and good practices",
        content: "Review the following [LANGUAGE] code and provide:\n\n🔍 **BUG ANALYSIS:**\n- Possible logic errors\n- Syntax problems\n- Unhandled edge cases\n\n⚡ **OPTIMIZATION:**\n- Performance improvements\n- Suggested refactoring\n- More efficient patterns\n\n✅ **GOOD PRACTICES:**\n- Naming conventions\n- Code structure\n- Missing documentation\n\nCode:\n[PASTE CODE HERE]",
        category: "Programming",
        tags: &["debug", "code", "programming", "optimization"],
        tone: "Technical",
    },
    Example {
        title: "Personalized Professional Email",
        description: "Drafts professional emails for different contexts and recipients",
        content: "Draft a professional email with the following parameters:\n\n📧 **CONTEXT:**\nRecipient: [NAME/ROLE]\nSubject: [MAIN TOPIC]\nGoal: [inform/request/thank/resolve]\nTone: [formal/cordial/urgent]\n\n📝 **STRUCTURE:**\n- Greeting suited to the context\n- Clear statement of the reason\n- Organized body\n- Specific call to action\n- Professional closing\n\n⏰ Urgency: [low/medium/high]\n🎯 Expected outcome: [DESCRIBE]",
        category: "Customer Service",
        tags: &["email", "communication", "professional", "business"],
        tone: "Formal",
    },
    Example {
        title: "Creative Idea Brainstorm",
        description: "Generates several creative ideas for projects, campaigns or solutions",
        content: "Brainstorm creatively about [TOPIC/CHALLENGE] and produce:\n\n💡 **10 MAIN IDEAS:**\n(Number them 1-10, be specific and creative)\n\n🎨 **3 INNOVATIVE CONCEPTS:**\n- Disruptive idea 1: [explanation]\n- Unusual approach 2: [explanation]\n- Creative solution 3: [explanation]\n\n🎯 **CRITERIA:**\n- Audience: [DEFINE]\n- Budget: [low/medium/high]\n- Deadline: [DEFINE]\n- Goal: [DEFINE]\n\nThink outside the box and explore different angles!",
        category: "Creativity",
        tags: &["brainstorm", "ideas", "creativity", "innovation"],
        tone: "Creative",
    },
];

/// Builds the example prompts, drawing an id for each from `next_id`.
pub fn example_prompts(next_id: &dyn Fn() -> String, now: DateTime<Utc>) -> Vec<Prompt> {
    EXAMPLES
        .iter()
        .map(|example| {
            let input = PromptInput {
                title: Some(example.title.to_string()),
                description: Some(example.description.to_string()),
                content: Some(example.content.to_string()),
                category: Some(example.category.to_string()),
                tags: Some(example.tags.iter().map(|t| t.to_string()).collect()),
                tone: Some(example.tone.to_string()),
                is_example: Some(true),
            };
            Prompt::from_input(next_id(), input, now)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::cell::Cell;

    #[test]
    fn test_examples_cover_default_categories() {
        let counter = Cell::new(0);
        let next_id = || {
            counter.set(counter.get() + 1);
            format!("id-{}", counter.get())
        };

        let prompts = example_prompts(&next_id, Utc::now());
        let catalog = Catalog::default();

        assert_eq!(prompts.len(), catalog.categories.len());
        for (prompt, category) in prompts.iter().zip(&catalog.categories) {
            assert_eq!(prompt.category, category.name);
            assert!(prompt.is_example);
            assert!(catalog.has_tone(&prompt.tone));
            assert!(!prompt.title.is_empty());
            assert!(!prompt.description.is_empty());
            assert!(!prompt.content.is_empty());
            assert_eq!(prompt.tags.len(), 4);
        }
        assert_eq!(prompts[0].id, "id-1");
        assert_eq!(prompts[4].id, "id-5");
    }
}
