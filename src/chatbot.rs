pub mod conversation;

use crate::i18n::{translate, Language};

pub use conversation::{typing_delay, Conversation, Message};

/// Every canned answer the assistant can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyKey {
    Education,
    Skills,
    Projects,
    StudentProject,
    TodoProject,
    MessagingProject,
    Contact,
    Experience,
    Greeting,
    Thanks,
    Fallback,
}

impl ReplyKey {
    pub fn all() -> [ReplyKey; 11] {
        [
            Self::Education,
            Self::Skills,
            Self::Projects,
            Self::StudentProject,
            Self::TodoProject,
            Self::MessagingProject,
            Self::Contact,
            Self::Experience,
            Self::Greeting,
            Self::Thanks,
            Self::Fallback,
        ]
    }

    /// Catalog key the reply text is stored under.
    pub fn catalog_key(&self) -> &'static str {
        match self {
            Self::Education => "chatbot.education",
            Self::Skills => "chatbot.skills",
            Self::Projects => "chatbot.projects",
            Self::StudentProject => "chatbot.student",
            Self::TodoProject => "chatbot.todo",
            Self::MessagingProject => "chatbot.messaging",
            Self::Contact => "chatbot.contact",
            Self::Experience => "chatbot.experience",
            Self::Greeting => "chatbot.greeting",
            Self::Thanks => "chatbot.thanks",
            Self::Fallback => "chatbot.fallback",
        }
    }
}

#[derive(Debug)]
pub struct SubRule {
    pub keywords: &'static [&'static str],
    pub reply: ReplyKey,
}

#[derive(Debug)]
pub enum RuleOutcome {
    Reply(ReplyKey),
    /// Second tier checked in order, `generic` when none of them hit.
    Nested {
        rules: &'static [SubRule],
        generic: ReplyKey,
    },
}

#[derive(Debug)]
pub struct RuleGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub outcome: RuleOutcome,
}

const EDUCATION_KW: &[&str] = &[
    "éducation",
    "formation",
    "diplôme",
    "education",
    "degree",
    "training",
];
const SKILLS_KW: &[&str] = &[
    "compétence",
    "skill",
    "langage",
    "competence",
    "language",
    "abilities",
];
const PROJECTS_KW: &[&str] = &["projet", "application", "project", "app"];
const STUDENT_KW: &[&str] = &["étudiant", "gestion des étudiants", "student", "management"];
const TODO_KW: &[&str] = &["tâche", "todo", "task"];
const MESSAGING_KW: &[&str] = &["messagerie", "interface", "messaging", "chat"];
const CONTACT_KW: &[&str] = &["contact", "téléphone", "email", "phone", "mail"];
const EXPERIENCE_KW: &[&str] = &["expérience", "travail", "experience", "work"];
const GREETING_KW: &[&str] = &["salut", "bonjour", "hello", "hi", "hey"];
const THANKS_KW: &[&str] = &["merci", "thank", "thanks", "gracias"];

const PROJECT_RULES: &[SubRule] = &[
    SubRule {
        keywords: STUDENT_KW,
        reply: ReplyKey::StudentProject,
    },
    SubRule {
        keywords: TODO_KW,
        reply: ReplyKey::TodoProject,
    },
    SubRule {
        keywords: MESSAGING_KW,
        reply: ReplyKey::MessagingProject,
    },
];

/// Rule groups in priority order. The first group with a hit wins, so
/// reordering this table changes which reply ambiguous messages get.
pub const RULES: &[RuleGroup] = &[
    RuleGroup {
        name: "education",
        keywords: EDUCATION_KW,
        outcome: RuleOutcome::Reply(ReplyKey::Education),
    },
    RuleGroup {
        name: "skills",
        keywords: SKILLS_KW,
        outcome: RuleOutcome::Reply(ReplyKey::Skills),
    },
    RuleGroup {
        name: "projects",
        keywords: PROJECTS_KW,
        outcome: RuleOutcome::Nested {
            rules: PROJECT_RULES,
            generic: ReplyKey::Projects,
        },
    },
    RuleGroup {
        name: "contact",
        keywords: CONTACT_KW,
        outcome: RuleOutcome::Reply(ReplyKey::Contact),
    },
    RuleGroup {
        name: "experience",
        keywords: EXPERIENCE_KW,
        outcome: RuleOutcome::Reply(ReplyKey::Experience),
    },
    RuleGroup {
        name: "greeting",
        keywords: GREETING_KW,
        outcome: RuleOutcome::Reply(ReplyKey::Greeting),
    },
    RuleGroup {
        name: "thanks",
        keywords: THANKS_KW,
        outcome: RuleOutcome::Reply(ReplyKey::Thanks),
    },
];

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| message.contains(kw))
}

impl RuleGroup {
    /// Returns the reply for this group if any of its keywords is present.
    pub fn evaluate(&self, message: &str) -> Option<ReplyKey> {
        if !contains_any(message, self.keywords) {
            return None;
        }
        let reply = match &self.outcome {
            RuleOutcome::Reply(key) => *key,
            RuleOutcome::Nested { rules, generic } => rules
                .iter()
                .find(|rule| contains_any(message, rule.keywords))
                .map(|rule| rule.reply)
                .unwrap_or(*generic),
        };
        Some(reply)
    }
}

/// Picks the canned reply for a raw user message.
///
/// Matching is plain substring containment on the lower-cased text, so
/// short keywords also hit inside longer words ("hi" in "this").
pub fn match_reply(utterance: &str) -> ReplyKey {
    let message = utterance.to_lowercase();
    RULES
        .iter()
        .find_map(|group| group.evaluate(&message))
        .unwrap_or(ReplyKey::Fallback)
}

/// Matches the message and resolves the reply text for `language`.
pub fn reply(utterance: &str, language: Language) -> String {
    translate(language, match_reply(utterance).catalog_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_any_case() {
        assert_eq!(match_reply("formation"), ReplyKey::Education);
        assert_eq!(match_reply("FORMATION"), ReplyKey::Education);
        assert_eq!(match_reply("What degree do you have?"), ReplyKey::Education);
        assert_eq!(match_reply("Quel DIPLÔME ?"), ReplyKey::Education);
    }

    #[test]
    fn test_skills() {
        assert_eq!(match_reply("Quelles compétences ?"), ReplyKey::Skills);
        assert_eq!(match_reply("which programming language"), ReplyKey::Skills);
    }

    #[test]
    fn test_project_sub_rules() {
        assert_eq!(match_reply("projet étudiant"), ReplyKey::StudentProject);
        assert_eq!(
            match_reply("Tell me about the student project"),
            ReplyKey::StudentProject
        );
        assert_eq!(match_reply("the todo app"), ReplyKey::TodoProject);
        assert_eq!(match_reply("projet de tâche"), ReplyKey::TodoProject);
        assert_eq!(
            match_reply("application de messagerie"),
            ReplyKey::MessagingProject
        );
        assert_eq!(match_reply("your projects"), ReplyKey::Projects);
        assert_eq!(match_reply("Vos projets ?"), ReplyKey::Projects);
    }

    #[test]
    fn test_project_sub_rule_order() {
        // student is checked before messaging
        assert_eq!(
            match_reply("project chat for student management"),
            ReplyKey::StudentProject
        );
        // sub keywords alone never reach the projects group
        assert_eq!(match_reply("task"), ReplyKey::Fallback);
    }

    #[test]
    fn test_group_priority() {
        assert_eq!(match_reply("bonjour, comment vous contacter ?"), ReplyKey::Contact);
        assert_eq!(match_reply("hello, what's your work experience"), ReplyKey::Experience);
        assert_eq!(match_reply("training project"), ReplyKey::Education);
        assert_eq!(match_reply("merci pour le contact"), ReplyKey::Contact);
        assert_eq!(match_reply("thanks, hey"), ReplyKey::Greeting);
    }

    #[test]
    fn test_substring_semantics() {
        // "hi" inside "this", "app" inside "happy"
        assert_eq!(match_reply("this"), ReplyKey::Greeting);
        assert_eq!(match_reply("happy"), ReplyKey::Projects);
        assert_eq!(match_reply("gmail"), ReplyKey::Contact);
    }

    #[test]
    fn test_thanks() {
        assert_eq!(match_reply("Merci !"), ReplyKey::Thanks);
        assert_eq!(match_reply("gracias"), ReplyKey::Thanks);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(match_reply("xyz123"), ReplyKey::Fallback);
        assert_eq!(match_reply(""), ReplyKey::Fallback);
        assert_eq!(match_reply("   "), ReplyKey::Fallback);
    }

    #[test]
    fn test_idempotent() {
        for input in ["projet étudiant", "xyz123", "BONJOUR", ""] {
            assert_eq!(match_reply(input), match_reply(input));
            assert_eq!(reply(input, Language::English), reply(input, Language::English));
        }
    }

    #[test]
    fn test_reply_resolves_text() {
        let fr = reply("formation", Language::French);
        let en = reply("formation", Language::English);
        assert!(fr.contains("ISEP"));
        assert!(en.contains("Sonatel Academy"));
        assert_ne!(fr, en);
        assert_ne!(fr, ReplyKey::Education.catalog_key());
    }

    #[test]
    fn test_rule_table_shape() {
        let names = RULES.iter().map(|g| g.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "education",
                "skills",
                "projects",
                "contact",
                "experience",
                "greeting",
                "thanks"
            ]
        );
        assert!(RULES.iter().all(|g| !g.keywords.is_empty()));
    }
}
