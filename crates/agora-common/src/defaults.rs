//! The default community table.
//!
//! A fixed, immutable set of communities that the seeder inserts on first
//! run. Kept as an explicit table passed into the seeder rather than state
//! the seeder reaches for itself, so callers (and tests) can see exactly
//! what a fresh deployment contains.

/// One default community definition. Static mirror of the fields in
/// [`crate::models::Community`] minus the bookkeeping columns.
#[derive(Debug, Clone, Copy)]
pub struct CommunityDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub category: &'static str,
    pub rules: &'static [&'static str],
    pub moderators: &'static [&'static str],
}

/// Communities present in every fresh deployment.
pub const DEFAULT_COMMUNITIES: &[CommunityDef] = &[
    CommunityDef {
        id: "global-chat",
        name: "Global Chat",
        description: "General discussion room for all topics and community introductions. This is the main hub where verified humans can connect, share ideas, and engage in meaningful conversations about any subject.",
        color: "bg-primary",
        category: "General",
        rules: &[
            "Be respectful and kind to all community members",
            "No spam, self-promotion, or off-topic content",
            "Keep discussions constructive and meaningful",
            "Report inappropriate behavior to moderators",
        ],
        moderators: &["@CommunityMod", "@GlobalAdmin"],
    },
    CommunityDef {
        id: "developer",
        name: "Developer",
        description: "Technical discussions, code reviews, and development help. Share your projects, ask for advice, and collaborate with fellow developers on various programming languages and technologies.",
        color: "bg-emerald-500",
        category: "Technology",
        rules: &[
            "Share code snippets and technical resources",
            "Help others with programming questions",
            "No job postings without prior approval",
            "Keep discussions technical and relevant",
        ],
        moderators: &["@DevLead", "@TechModerator"],
    },
    CommunityDef {
        id: "world-news",
        name: "World News",
        description: "Global news, current events, and world affairs discussion. Stay informed about what's happening around the world and engage in thoughtful discussions about current events.",
        color: "bg-blue-500",
        category: "News",
        rules: &[
            "Share credible news sources only",
            "Maintain civil discourse on sensitive topics",
            "No misinformation or conspiracy theories",
            "Fact-check before sharing information",
        ],
        moderators: &["@NewsEditor", "@FactChecker"],
    },
    CommunityDef {
        id: "ai-tech",
        name: "AI & Tech",
        description: "Artificial intelligence, technology innovations, and future trends. Explore the latest developments in AI, discuss emerging technologies, and share insights about the future of tech.",
        color: "bg-purple-500",
        category: "Technology",
        rules: &[
            "Share AI research and tech innovations",
            "Discuss ethical implications of technology",
            "No fear-mongering about AI",
            "Support claims with credible sources",
        ],
        moderators: &["@AIResearcher", "@TechExpert"],
    },
    CommunityDef {
        id: "qa",
        name: "Q&A",
        description: "Questions, answers, and knowledge sharing from the community. Ask anything you're curious about and help others by sharing your knowledge and expertise.",
        color: "bg-amber-500",
        category: "Help & Support",
        rules: &[
            "Ask clear and specific questions",
            "Provide helpful and accurate answers",
            "Search before asking duplicate questions",
            "Thank contributors for their help",
        ],
        moderators: &["@KnowledgeKeeper", "@HelpModerator"],
    },
    CommunityDef {
        id: "announcements",
        name: "Announcements",
        description: "Official updates, news, and important platform announcements. Stay up to date with the latest Agora features, policy changes, and community updates.",
        color: "bg-orange-500",
        category: "Official",
        rules: &[
            "Official announcements only",
            "Read announcements before asking questions",
            "Provide feedback constructively",
            "Follow new guidelines promptly",
        ],
        moderators: &["@AgoraTeam", "@CommunityManager"],
    },
];

/// Ids of all default communities, in table order.
pub fn default_ids() -> impl Iterator<Item = &'static str> {
    DEFAULT_COMMUNITIES.iter().map(|def| def.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_contains_the_six_expected_communities() {
        let ids: Vec<_> = default_ids().collect();
        assert_eq!(
            ids,
            vec!["global-chat", "developer", "world-news", "ai-tech", "qa", "announcements"]
        );
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = default_ids().collect();
        assert_eq!(ids.len(), DEFAULT_COMMUNITIES.len());
    }

    #[test]
    fn every_community_has_rules_and_moderators() {
        for def in DEFAULT_COMMUNITIES {
            assert!(!def.rules.is_empty(), "{} has no rules", def.id);
            assert!(!def.moderators.is_empty(), "{} has no moderators", def.id);
            assert!(!def.description.is_empty(), "{} has no description", def.id);
        }
    }
}
